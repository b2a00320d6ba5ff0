pub mod board_view;
pub mod card_face;
mod dialog;
mod help_overlay;
mod popups;
mod status_row;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::tui::app::{App, Mode};

/// Draw the whole UI for one frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    app.cursor = app.cursor.min(app.list.view.len().saturating_sub(1));

    // Copy out everything the board draw needs before borrowing the view.
    let cursor = app.cursor;
    let theme = app.theme.clone();
    let dragging = app.drag.dragging().map(str::to_string);
    let candidate = app.drag.drop_candidate().map(str::to_string);
    app.list.view.draw(
        frame,
        chunks[0],
        cursor,
        dragging.as_deref(),
        candidate.as_deref(),
        &theme,
    );

    status_row::render(frame, app, chunks[1]);

    if app.mode == Mode::Dialog {
        dialog::render(frame, app, area);
    }
    if app.mode == Mode::Confirm {
        popups::render_confirm(frame, app, area);
    }
    if app.show_help {
        help_overlay::render(frame, app, area);
    }
    if app.error_text.is_some() {
        popups::render_error(frame, app, area);
    }
}

/// A rect of the given size centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
