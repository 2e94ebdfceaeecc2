use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::app::dispatch;
use crate::sources::categorical_options;
use crate::state::{AppState, FilterField, Focus, PageRequest};

/// What: Next value when cycling a categorical selector.
///
/// Inputs:
/// - `field`: Categorical field
/// - `current`: Current value (empty = no constraint)
/// - `forward`: Direction of travel
///
/// Output:
/// - Neighbouring value in `["", options...]`, wrapping at both ends.
#[must_use]
pub fn cycle_value(field: FilterField, current: &str, forward: bool) -> &'static str {
    let opts = categorical_options(field);
    // position 0 is the "any" entry
    let len = opts.len() + 1;
    let pos = opts
        .iter()
        .position(|o| *o == current)
        .map_or(0, |i| i + 1);
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    if next == 0 { "" } else { opts[next - 1] }
}

/// What: Replace the focused field's value, logging rejected input.
fn set_focused(app: &mut AppState, value: &str) {
    let field = app.focused_filter();
    if let Err(e) = app.query.set_filter(field, value) {
        tracing::debug!(error = %e, "filter value rejected");
    }
}

/// Handle key events while the filter bar is focused.
///
/// Text keys edit the name field, arrows move between fields or cycle
/// categorical values, Enter commits.
pub fn handle_filter_key(
    ke: KeyEvent,
    app: &mut AppState,
    request_tx: &mpsc::UnboundedSender<PageRequest>,
) {
    let field = app.focused_filter();
    let current = app.query.filters().get(field).to_string();
    match ke.code {
        KeyCode::Enter => {
            dispatch(request_tx, Some(app.query.apply_filters()));
            app.focus = Focus::Results;
        }
        KeyCode::Esc => app.focus = Focus::Results,
        KeyCode::Left => {
            app.filter_cursor = (app.filter_cursor + FilterField::ALL.len() - 1) % FilterField::ALL.len();
        }
        KeyCode::Right => {
            app.filter_cursor = (app.filter_cursor + 1) % FilterField::ALL.len();
        }
        KeyCode::Up if field.is_categorical() => {
            set_focused(app, cycle_value(field, &current, false));
        }
        KeyCode::Down | KeyCode::Char(' ') if field.is_categorical() => {
            set_focused(app, cycle_value(field, &current, true));
        }
        KeyCode::Backspace if field.is_categorical() => set_focused(app, ""),
        KeyCode::Delete => set_focused(app, ""),
        KeyCode::Backspace => {
            let mut v = current;
            v.pop();
            set_focused(app, &v);
        }
        KeyCode::Char(c)
            if !field.is_categorical()
                && !ke.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut v = current;
            v.push(c);
            set_focused(app, &v);
        }
        _ => {}
    }
}
