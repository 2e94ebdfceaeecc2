use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, FilterField, Focus};
use crate::theme::theme;
use crate::util::truncate_to_width;

/// What: Text shown inside a filter input.
///
/// Output:
/// - The value, or `Select {key}` for an empty categorical field, or an
///   empty string for an empty name field.
#[must_use]
pub fn filter_display(field: FilterField, value: &str) -> String {
    if value.is_empty() && field.is_categorical() {
        format!("Select {}", field.key())
    } else {
        value.to_string()
    }
}

/// Draw the four filter inputs side by side; the focused one is highlighted.
pub fn render_filter_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ])
        .split(area);

    let bar_focused = app.focus == Focus::Filters;
    for (i, field) in FilterField::ALL.into_iter().enumerate() {
        let rect = cols[i];
        let focused = bar_focused && app.focused_filter() == field;
        let value = app.query.filters().get(field);
        let placeholder = value.is_empty();
        let inner_w = usize::from(rect.width.saturating_sub(2));
        let shown = truncate_to_width(&filter_display(field, value), inner_w);

        let text_style = if placeholder {
            Style::default().fg(th.overlay1)
        } else if focused {
            Style::default().fg(th.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext0)
        };
        let border_color = if focused { th.mauve } else { th.surface1 };
        let title_color = if focused { th.mauve } else { th.overlay1 };

        let mut title = field.key().to_string();
        if focused && field.is_categorical() {
            title.push_str(" ↑↓");
        }
        let para = Paragraph::new(Line::from(Span::styled(shown, text_style)))
            .style(Style::default().bg(th.base))
            .block(
                Block::default()
                    .title(Span::styled(title, Style::default().fg(title_color)))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border_color)),
            );
        f.render_widget(para, rect);

        if focused && field == FilterField::Name {
            let right = rect.x + rect.width.saturating_sub(2);
            let typed = u16::try_from(UnicodeWidthStr::width(value)).unwrap_or(u16::MAX);
            let x = (rect.x + 1).saturating_add(typed).min(right);
            f.set_cursor_position(Position::new(x, rect.y + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_only_for_empty_categorical() {
        assert_eq!(filter_display(FilterField::Status, ""), "Select status");
        assert_eq!(filter_display(FilterField::Species, "Robot"), "Robot");
        assert_eq!(filter_display(FilterField::Name, ""), "");
    }
}
