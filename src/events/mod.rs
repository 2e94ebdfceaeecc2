//! Event handling layer for the mortydex TUI.
//!
//! This module exposes `handle_event` and delegates pane-specific keys to the
//! filter-bar and result-list submodules.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, Focus, Modal, PageRequest};

mod filters;
mod results;

pub use filters::cycle_value;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Overlays (help, character detail) swallow keys until closed. Tab switches
/// focus between the filter bar and the result list.
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    request_tx: &mpsc::UnboundedSender<PageRequest>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if app.modal == Modal::Help {
        if matches!(
            ke.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) | KeyCode::Char('?' | 'q')
        ) {
            app.modal = Modal::None;
        }
        return false;
    }
    if app.query.detail().is_some() {
        if matches!(ke.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.query.close_detail();
        }
        return false;
    }

    match ke.code {
        KeyCode::F(1) => {
            app.modal = Modal::Help;
            return false;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::Filters => Focus::Results,
                Focus::Results => Focus::Filters,
            };
            return false;
        }
        _ => {}
    }

    match app.focus {
        Focus::Filters => {
            filters::handle_filter_key(*ke, app, request_tx);
            false
        }
        Focus::Results => results::handle_results_key(*ke, app, request_tx),
    }
}
