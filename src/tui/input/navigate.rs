use crossterm::event::{KeyCode, KeyEvent};

use crate::model::card::VoteDirection;
use crate::tui::app::{App, Mode};
use crate::tui::input::dialog::CardDialog;

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc => {
            if app.drag.is_active() {
                app.drag.cancel();
            } else {
                app.status_message = None;
            }
        }
        KeyCode::Char('?') => app.show_help = true,

        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.list.view.len().saturating_sub(1);
        }

        KeyCode::Char('u') => app.vote_cursor(VoteDirection::Up),
        KeyCode::Char('d') => app.vote_cursor(VoteDirection::Down),

        KeyCode::Char('a') => {
            app.dialog = Some(CardDialog::add());
            app.mode = Mode::Dialog;
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(card) = app
                .cursor_card_id()
                .and_then(|id| app.list.card(&id).cloned())
            {
                app.dialog = Some(CardDialog::edit(&card));
                app.mode = Mode::Dialog;
            }
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            if let Some(id) = app.cursor_card_id() {
                app.confirm_delete = Some(id);
                app.mode = Mode::Confirm;
            }
        }

        KeyCode::Char('J') => app.move_cursor_card(1),
        KeyCode::Char('K') => app.move_cursor_card(-1),

        KeyCode::Char('s') => app.toggle_sort_action(),
        KeyCode::Char('R') => app.reset_action(),
        _ => {}
    }
}
