use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::state::{AppState, Character, Focus};
use crate::theme::{status_color, theme};
use crate::util::truncate_to_width;

/// Message shown when the list is empty and nothing is in flight.
pub const NOTHING_FOUND: &str = "Nothing was found";
/// Label of the load-more affordance.
pub const MORE_LABEL: &str = "More (m)";

/// Columns reserved for the name column before the attribute columns start.
const NAME_COLS: usize = 28;

/// What: Build the title for the results pane.
///
/// Output:
/// - `Results (count)`, followed by the page number when the list holds
///   records and a loading marker while a request is in flight.
fn results_title(app: &AppState) -> String {
    let mut title = format!("Results ({})", app.query.results().len());
    if !app.query.results().is_empty() {
        title.push_str(&format!("  page {}", app.query.current_page()));
    }
    if app.query.is_loading() {
        title.push_str("  loading…");
    }
    title
}

/// One list row: name, status (colored), species and gender.
fn result_row(c: &Character) -> ListItem<'static> {
    let th = theme();
    let name = truncate_to_width(&c.name, NAME_COLS);
    let pad = NAME_COLS.saturating_sub(unicode_width::UnicodeWidthStr::width(name.as_str()));
    ListItem::new(Line::from(vec![
        Span::styled(
            name,
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(pad + 2)),
        Span::styled(format!("{:<8}", c.status), Style::default().fg(status_color(&c.status))),
        Span::raw("  "),
        Span::styled(c.species.clone(), Style::default().fg(th.subtext0)),
        Span::styled(format!("  {}", c.gender), Style::default().fg(th.overlay1)),
    ]))
}

/// Draw the result list, the empty-state message and the "More" affordance.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Results;
    let block = Block::default()
        .title(Span::styled(
            results_title(app),
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface2 }));

    if app.query.results().is_empty() {
        let msg = if app.query.is_loading() {
            Span::styled("Loading…", Style::default().fg(th.overlay1))
        } else {
            Span::styled(NOTHING_FOUND, Style::default().fg(th.yellow))
        };
        f.render_widget(
            Paragraph::new(Line::from(msg))
                .alignment(Alignment::Center)
                .style(Style::default().bg(th.base))
                .block(block),
            area,
        );
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let show_more = app.query.can_load_more();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(u16::from(show_more)),
        ])
        .split(inner);

    let items: Vec<ListItem> = app.query.results().iter().map(result_row).collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, rows[0], &mut app.list_state);

    if show_more {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                MORE_LABEL,
                Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            rows[1],
        );
    }
}
