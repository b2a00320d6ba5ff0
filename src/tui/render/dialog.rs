use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect;

/// Centered add/edit form. One row per field; the focused field gets a
/// highlighted label and a block cursor.
pub(super) fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(dialog) = &app.dialog else {
        return;
    };
    let theme = &app.theme;

    let height = dialog.fields.len() as u16 + 4;
    let rect = centered_rect(area.width.saturating_sub(8).min(64), height, area);
    frame.render_widget(Clear, rect);

    let mut lines = Vec::new();
    for (index, field) in dialog.fields.iter().enumerate() {
        let focused = index == dialog.focus;
        let label_style = if focused {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim)
        };
        let mut spans = vec![
            Span::styled(format!("{:>13}: ", field.label), label_style),
            Span::styled(field.value.clone(), Style::default().fg(theme.text_bright)),
        ];
        if focused {
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(theme.highlight),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Enter save \u{B7} Tab next field \u{B7} Esc cancel",
        Style::default().fg(theme.dim),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight))
        .title(dialog.title_text())
        .style(Style::default().bg(theme.background));
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
