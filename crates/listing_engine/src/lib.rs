//! Listing engine: Listing API client, debounce timer and effect execution.
mod debounce;
mod engine;
mod fetch;
mod types;

pub use debounce::Debouncer;
pub use engine::{EngineError, EngineEvents, EngineHandle};
pub use fetch::{FetchSettings, ListingFetcher, ReqwestFetcher, DEFAULT_BASE_URL};
pub use types::{EngineEvent, FailureKind, FetchError};
