use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect;

const KEYS: &[(&str, &str)] = &[
    ("j/k \u{2191}/\u{2193}", "move cursor"),
    ("g / G", "first / last card"),
    ("u / d", "upvote / downvote"),
    ("a", "add an idea"),
    ("e / Enter", "edit the selected idea"),
    ("x", "delete the selected idea"),
    ("J / K", "move the selected card down / up"),
    ("drag", "reorder with the mouse"),
    ("s", "toggle sort (manual / votes)"),
    ("R", "reset to the original deck"),
    ("q", "quit"),
];

pub(super) fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let rect = centered_rect(44, KEYS.len() as u16 + 2, area);
    frame.render_widget(Clear, rect);

    let lines: Vec<Line> = KEYS
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!(" {key:>12}  "), Style::default().fg(theme.highlight)),
                Span::styled(*what, Style::default().fg(theme.text)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight))
        .title("Keys")
        .style(Style::default().bg(theme.background));
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
