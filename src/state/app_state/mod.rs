//! Central `AppState` container.

use ratatui::widgets::ListState;

use crate::logic::{QueryController, QueryFormat};
use crate::state::modal::Modal;
use crate::state::types::{FilterField, Focus};

/// Global application state shared by the event, networking, and UI layers.
///
/// The query controller owns everything the network touches; the remaining
/// fields are view state (focus, cursors, list scroll, overlays).
#[derive(Debug)]
pub struct AppState {
    /// Filters, pagination and accumulated results.
    pub query: QueryController,
    /// Which pane is currently focused.
    pub focus: Focus,
    /// Index into [`FilterField::ALL`] of the focused filter input.
    pub filter_cursor: usize,
    /// Index into the result list that is currently highlighted.
    pub selected: usize,
    /// List selection state for the result list widget.
    pub list_state: ListState,
    /// Active overlay, if any (the detail popup is driven by the controller).
    pub modal: Modal,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(QueryFormat::default())
    }
}

impl AppState {
    /// Fresh state with an empty controller using `format` for load-more queries.
    #[must_use]
    pub fn new(format: QueryFormat) -> Self {
        Self {
            query: QueryController::new(format),
            focus: Focus::default(),
            filter_cursor: 0,
            selected: 0,
            list_state: ListState::default(),
            modal: Modal::None,
        }
    }

    /// Filter field under the filter-bar cursor.
    #[must_use]
    pub fn focused_filter(&self) -> FilterField {
        FilterField::ALL[self.filter_cursor % FilterField::ALL.len()]
    }

    /// What: Keep the highlighted row valid after the result list changed.
    ///
    /// Details:
    /// - Clamps `selected` into range and mirrors it into `list_state`;
    ///   clears the list selection when there are no results.
    pub fn sync_selection(&mut self) {
        let len = self.query.results().len();
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    /// Move the highlight by `delta` rows, clamped to the list bounds.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.query.results().len();
        if len == 0 {
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
        self.list_state.select(Some(self.selected));
    }
}
