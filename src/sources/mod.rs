//! Remote character API access.
//!
//! The [`CharacterSource`] trait is the seam between the runtime and the HTTP
//! client so the controller can be driven by in-memory sources in tests.

use std::future::Future;

use crate::state::Page;

mod characters;
mod options;

pub use characters::{CharacterApi, DEFAULT_BASE_URL, parse_page};
pub use options::{GENDER_OPTIONS, SPECIES_OPTIONS, STATUS_OPTIONS, categorical_options};

/// Failure of a single page fetch.
///
/// The controller treats every variant the same way; the split only matters
/// for logging.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout, invalid URL).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("character api returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
    /// The body was not the expected JSON shape.
    #[error("failed to decode character page: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can turn a query string into a page of characters.
pub trait CharacterSource: Send + Sync + 'static {
    /// What: Fetch one page for a pre-built query string.
    ///
    /// Inputs:
    /// - `query`: Query string appended after `?`; may be empty
    ///
    /// Output:
    /// - `Ok(Page)` with records and has-next flag; `Err(FetchError)` otherwise.
    fn fetch_page(&self, query: &str) -> impl Future<Output = Result<Page, FetchError>> + Send;
}
