//! mortydex application module: terminal lifecycle, background fetch worker
//! and the event loop.

/// Runtime event loop, terminal lifecycle and background workers.
mod runtime;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::handlers::{dispatch, handle_page_response};
pub use runtime::run;
pub use runtime::workers::{FetchSlots, fetch_request, spawn_fetch_worker};
