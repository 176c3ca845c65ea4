//! Listing core: pure controller state machine, data model and view-model helpers.
mod date;
mod effect;
mod job;
mod msg;
mod request;
mod state;
mod update;
mod view_model;

pub use date::{format_posted_date, INVALID_DATE};
pub use effect::Effect;
pub use job::{Job, JobId, ListingPage};
pub use msg::{FetchFailure, Msg};
pub use request::{ListingRequest, JOBS_PATH, PAGE_SIZE};
pub use state::{ListingState, QueryState, RequestId, ResultState, DEBOUNCE_DELAY};
pub use update::update;
pub use view_model::{JobDetailView, JobRowView, ListingViewModel};
