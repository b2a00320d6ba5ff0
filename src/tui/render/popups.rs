use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect;

pub(super) fn render_confirm(frame: &mut Frame, app: &App, area: Rect) {
    let Some(id) = &app.confirm_delete else {
        return;
    };
    let title = app.list.view.face_title(id).unwrap_or(id).to_string();
    let theme = &app.theme;

    let text = format!("Delete '{title}'?");
    let rect = centered_rect((text.len() as u16 + 6).max(20), 5, area);
    frame.render_widget(Clear, rect);

    let lines = vec![
        Line::from(Span::styled(text, Style::default().fg(theme.text_bright))),
        Line::raw(""),
        Line::from(Span::styled("y delete \u{B7} n keep", Style::default().fg(theme.dim))),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.vote_down))
        .style(Style::default().bg(theme.background));
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

pub(super) fn render_error(frame: &mut Frame, app: &App, area: Rect) {
    let Some(text) = &app.error_text else {
        return;
    };
    let theme = &app.theme;

    let rect = centered_rect(area.width.saturating_sub(8).min(60), 6, area);
    frame.render_widget(Clear, rect);

    let lines = vec![
        Line::from(Span::styled(
            text.clone(),
            Style::default().fg(theme.text_bright),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(theme.dim),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.error))
        .title("Error")
        .style(Style::default().bg(theme.background));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(ratatui::widgets::Wrap { trim: true }),
        rect,
    );
}
