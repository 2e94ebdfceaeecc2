use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::Character;
use crate::theme::{status_color, theme};

use super::centered_rect;

/// What: Build the labelled lines of the character detail popup.
///
/// Inputs:
/// - `c`: Record to describe
///
/// Output:
/// - Name heading followed by one `label value` line per attribute; the
///   `Type` line is omitted when the API leaves it empty.
pub fn detail_lines(c: &Character) -> Vec<Line<'static>> {
    let th = theme();
    let row = |label: &str, value: String, color| -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{label:10}"),
                Style::default().fg(th.overlay1).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(value, Style::default().fg(color)),
        ])
    };
    let mut lines = vec![
        Line::from(Span::styled(
            c.name.clone(),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        row("Status", c.status.clone(), status_color(&c.status)),
        row("Species", c.species.clone(), th.text),
    ];
    if !c.kind.is_empty() {
        lines.push(row("Type", c.kind.clone(), th.text));
    }
    lines.push(row("Gender", c.gender.clone(), th.text));
    lines.push(row("Origin", c.origin.name.clone(), th.text));
    lines.push(row("Location", c.location.name.clone(), th.text));
    lines.push(row("Episodes", c.episode.len().to_string(), th.text));
    lines.push(row("Image", c.image.clone(), th.sapphire));
    lines
}

/// Draw the detail popup for `c` centered over `area`.
pub fn render_detail(f: &mut Frame, c: &Character, area: Rect) {
    let th = theme();
    let rect = centered_rect(area, 72, 14);
    f.render_widget(Clear, rect);
    let para = Paragraph::new(detail_lines(c))
        .style(Style::default().fg(th.text).bg(th.base))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    " Character ",
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ))
                .title_bottom(Span::styled(
                    " Esc to close ",
                    Style::default().fg(th.overlay1),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.mauve))
                .style(Style::default().bg(th.base)),
        );
    f.render_widget(para, rect);
}

/// Draw the key binding overview.
pub fn render_help(f: &mut Frame, area: Rect) {
    let th = theme();
    let rect = centered_rect(area, 64, 22);
    f.render_widget(Clear, rect);

    let mut lines: Vec<Line<'static>> = vec![
        Line::from(Span::styled(
            "mortydex Help",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        ))
    };
    let fmt = |keys: &'static str, label: &'static str| -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{keys:16}"),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(label, Style::default().fg(th.overlay1)),
        ])
    };

    lines.push(section("Global"));
    lines.push(fmt("[Tab]", "Switch between filters and results"));
    lines.push(fmt("[F1]", "Toggle this help"));
    lines.push(fmt("[Ctrl+C]", "Exit"));
    lines.push(Line::from(""));
    lines.push(section("Filters"));
    lines.push(fmt("[←] [→]", "Previous / next field"));
    lines.push(fmt("[↑] [↓] [Space]", "Cycle status, species, gender"));
    lines.push(fmt("[Backspace]", "Edit name / clear selection"));
    lines.push(fmt("[Enter]", "Search with current filters"));
    lines.push(Line::from(""));
    lines.push(section("Results"));
    lines.push(fmt("[↑] [↓] [j] [k]", "Move selection"));
    lines.push(fmt("[Enter]", "Show character details"));
    lines.push(fmt("[m]", "Load more"));
    lines.push(fmt("[/]", "Edit filters"));
    lines.push(fmt("[q]", "Exit"));

    let para = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.base))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    " Help ",
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.mauve))
                .style(Style::default().bg(th.base)),
        );
    f.render_widget(para, rect);
}
