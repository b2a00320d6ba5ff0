pub mod confirm;
pub mod dialog;
pub mod navigate;

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::tui::app::{App, Mode};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Popups swallow the next keypress.
    if app.error_text.is_some() {
        app.error_text = None;
        return;
    }
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_key(app, key),
        Mode::Dialog => dialog::handle_key(app, key),
        Mode::Confirm => confirm::handle_key(app, key),
    }
}

/// Mouse drives the drag gesture: press picks up a card, motion tracks the
/// drop candidate, release requests the reorder. The request is applied after
/// the next draw, not here.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.mode != Mode::Navigate || app.error_text.is_some() || app.show_help {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let hit = app.list.view.card_at(mouse.row).map(str::to_string);
            if let Some(id) = hit {
                if let Some(index) = app.list.view.index_of(&id) {
                    app.cursor = index;
                }
                app.drag.start(&id);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let over = app.list.view.card_at(mouse.row).map(str::to_string);
            app.drag.over(over.as_deref());
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let target = app.list.view.card_at(mouse.row).map(str::to_string);
            if let Some(request) = app.drag.drop(target.as_deref()) {
                app.pending_reorder = Some(request);
            }
        }
        _ => {}
    }
}
