use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::app::dispatch;
use crate::state::{AppState, Focus, Modal, PageRequest};

/// Rows moved by PageUp/PageDown.
const PAGE_STEP: isize = 10;

/// Handle key events while the result list is focused.
///
/// Returns `true` to exit the app, `false` to continue.
pub fn handle_results_key(
    ke: KeyEvent,
    app: &mut AppState,
    request_tx: &mpsc::UnboundedSender<PageRequest>,
) -> bool {
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-PAGE_STEP),
        KeyCode::PageDown => app.move_selection(PAGE_STEP),
        KeyCode::Home | KeyCode::Char('g') => {
            app.selected = 0;
            app.sync_selection();
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.selected = app.query.results().len().saturating_sub(1);
            app.sync_selection();
        }
        KeyCode::Enter => {
            app.query.open_detail(app.selected);
        }
        KeyCode::Char('m') => {
            dispatch(request_tx, app.query.load_more());
        }
        KeyCode::Char('/') | KeyCode::Esc => {
            app.focus = Focus::Filters;
            app.filter_cursor = 0;
        }
        KeyCode::Char('?') => app.modal = Modal::Help,
        _ => {}
    }
    false
}
