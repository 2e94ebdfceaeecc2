//! Core non-UI logic: query assembly and the query controller.

pub mod controller;
pub mod query;

// Re-export public APIs so callers can use `crate::logic::...`
pub use controller::{ApplyOutcome, QueryController};
pub use query::{QueryFormat, build_filter_query, build_load_more_query};
