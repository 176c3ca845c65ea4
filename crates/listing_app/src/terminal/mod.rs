//! Line-oriented terminal front end for the job listing browser.
mod app;
mod effects;
mod input;
mod logging;
mod render;

pub use app::run_app;
