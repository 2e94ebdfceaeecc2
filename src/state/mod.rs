//! Application state: value types, overlays and the central `AppState`.

pub mod app_state;
pub mod modal;
pub mod types;

// Public re-exports to keep paths short (`crate::state::*`)
pub use app_state::AppState;
pub use modal::Modal;
pub use types::{
    Character, FetchSlot, FilterField, FilterState, Focus, InvalidFilterValue, LocationRef, Page,
    PageRequest, PageResponse,
};
