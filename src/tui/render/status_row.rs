use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::list::SortMode;
use crate::tui::app::App;

/// One-line status bar: message or key hints on the left, sort mode and card
/// count on the right.
pub(super) fn render(frame: &mut Frame, app: &App, area: Rect) {
    let left = if app.drag.is_active() {
        "drop on a card to reorder \u{B7} Esc cancel".to_string()
    } else if let Some(message) = &app.status_message {
        message.clone()
    } else {
        "u/d vote \u{B7} a add \u{B7} e edit \u{B7} x delete \u{B7} s sort \u{B7} drag to reorder \u{B7} ? help".to_string()
    };

    let sort = match app.list.sort_mode() {
        SortMode::Default => "manual",
        SortMode::Votes => "votes",
    };
    let right = format!("sort: {sort} \u{B7} {} ideas", app.list.len());

    let pad = (area.width as usize)
        .saturating_sub(left.width())
        .saturating_sub(right.width());

    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(app.theme.text)),
        Span::raw(" ".repeat(pad)),
        Span::styled(right, Style::default().fg(app.theme.dim)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
