use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    let Some(id) = app.confirm_delete.clone() else {
        app.mode = Mode::Navigate;
        return;
    };

    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            if let Err(err) = app.list.remove(&id) {
                log::error!("remove re-render failed: {err}");
            }
            app.persist();
            app.status_message = Some("Idea deleted".into());
            app.confirm_delete = None;
            app.mode = Mode::Navigate;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.confirm_delete = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
