//! TUI rendering for mortydex.
//!
//! The screen is a filter bar on top, the result list in the middle and a
//! key-hint footer. The character detail popup and the help overlay are drawn
//! last so they sit above everything else.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::{AppState, Focus, Modal};
use crate::theme::theme;

mod filters;
mod modals;
mod results;

/// Height of the filter bar including borders.
const FILTER_BAR_H: u16 = 3;

/// What: Render one full frame of the application.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state; the list widget state is updated in place
///
/// Output:
/// - Draws filter bar, result list, footer and any open overlay.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FILTER_BAR_H),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    filters::render_filter_bar(f, app, chunks[0]);
    results::render_results(f, app, chunks[1]);
    render_footer(f, app, chunks[2]);

    if let Some(c) = app.query.detail() {
        modals::render_detail(f, c, area);
    }
    if app.modal == Modal::Help {
        modals::render_help(f, area);
    }
}

/// Key hints for the focused pane.
fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let hints: &[(&str, &str)] = match app.focus {
        Focus::Filters => &[
            ("←/→", "field"),
            ("↑/↓", "cycle"),
            ("Enter", "search"),
            ("Tab", "results"),
            ("F1", "help"),
        ],
        Focus::Results => &[
            ("↑/↓", "move"),
            ("Enter", "details"),
            ("m", "more"),
            ("/", "filters"),
            ("?", "help"),
            ("q", "quit"),
        ],
    };
    let mut spans: Vec<Span> = Vec::with_capacity(hints.len() * 3);
    for (key, label) in hints {
        spans.push(Span::styled(format!(" {key} "), Style::default().fg(th.sapphire)));
        spans.push(Span::styled((*label).to_string(), Style::default().fg(th.overlay1)));
        spans.push(Span::raw("  "));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.base)),
        area,
    );
}

/// What: Compute a rectangle centered in `area`, clamped to its size.
///
/// Inputs:
/// - `area`: Enclosing rectangle
/// - `max_w`, `max_h`: Desired size
///
/// Output:
/// - Centered rect no larger than `area` minus a small margin.
pub(crate) fn centered_rect(area: Rect, max_w: u16, max_h: u16) -> Rect {
    let w = area.width.saturating_sub(4).min(max_w);
    let h = area.height.saturating_sub(2).min(max_h);
    Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside_small_areas() {
        let area = Rect::new(0, 0, 20, 6);
        let r = centered_rect(area, 80, 20);
        assert!(r.width <= area.width && r.height <= area.height);
        assert_eq!(r.x, 2);
        assert_eq!(r.y, 1);
    }
}
