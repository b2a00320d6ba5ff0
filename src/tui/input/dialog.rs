use crossterm::event::{KeyCode, KeyEvent};
use unicode_segmentation::UnicodeSegmentation;

use crate::model::card::{Card, CardButton, CardData, CardPatch};
use crate::tui::app::{App, Mode};

/// A single-line text field with a grapheme-aware cursor.
#[derive(Debug, Clone)]
pub struct EditField {
    pub label: &'static str,
    pub value: String,
    /// Byte offset into `value`.
    pub cursor: usize,
}

impl EditField {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        EditField {
            label,
            value,
            cursor,
        }
    }

    fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.value.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    fn move_right(&mut self) {
        if let Some((offset, g)) = self.value[self.cursor..].grapheme_indices(true).next() {
            self.cursor += offset + g.len();
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .grapheme_indices(true)
            .last()
            .map(|(i, _)| i)
    }
}

const TITLE: usize = 0;
const DESCRIPTION: usize = 1;
const IMAGE: usize = 2;
const BUTTON_LABEL: usize = 3;
const BUTTON_URL: usize = 4;

/// The add/edit form. Produces a card-data payload on save; it never carries
/// vote state, so edits can't clobber a card's tally.
#[derive(Debug, Clone)]
pub struct CardDialog {
    /// Card being edited, or `None` when adding.
    pub editing: Option<String>,
    pub fields: Vec<EditField>,
    pub focus: usize,
}

impl CardDialog {
    pub fn add() -> Self {
        CardDialog {
            editing: None,
            fields: vec![
                EditField::new("Title", ""),
                EditField::new("Description", ""),
                EditField::new("Image URL", ""),
                EditField::new("Button label", ""),
                EditField::new("Button URL", ""),
            ],
            focus: TITLE,
        }
    }

    pub fn edit(card: &Card) -> Self {
        CardDialog {
            editing: Some(card.id.clone()),
            fields: vec![
                EditField::new("Title", card.title.clone()),
                EditField::new("Description", card.description.clone()),
                EditField::new("Image URL", card.image.clone()),
                EditField::new("Button label", card.button.label.clone()),
                EditField::new("Button URL", card.button.url.clone()),
            ],
            focus: TITLE,
        }
    }

    pub fn title_text(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit idea"
        } else {
            "New idea"
        }
    }

    fn value(&self, index: usize) -> String {
        self.fields[index].value.trim().to_string()
    }

    fn button(&self) -> Option<CardButton> {
        let label = self.value(BUTTON_LABEL);
        let url = self.value(BUTTON_URL);
        if label.is_empty() && url.is_empty() {
            return None;
        }
        let mut button = CardButton::default();
        if !label.is_empty() {
            button.label = label;
        }
        if !url.is_empty() {
            button.url = url;
        }
        Some(button)
    }

    /// Payload for `add`.
    pub fn to_card_data(&self) -> CardData {
        CardData {
            title: self.value(TITLE),
            description: self.value(DESCRIPTION),
            image: Some(self.value(IMAGE)).filter(|s| !s.is_empty()),
            button: self.button(),
            ..Default::default()
        }
    }

    /// Payload for `update`. Blank fields are left out of the patch so they
    /// don't wipe existing values.
    pub fn to_patch(&self) -> CardPatch {
        CardPatch {
            title: Some(self.value(TITLE)).filter(|s| !s.is_empty()),
            description: Some(self.value(DESCRIPTION)).filter(|s| !s.is_empty()),
            image: Some(self.value(IMAGE)).filter(|s| !s.is_empty()),
            button: self.button(),
            ..Default::default()
        }
    }
}

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    let Some(dialog) = &mut app.dialog else {
        app.mode = Mode::Navigate;
        return;
    };

    match key.code {
        KeyCode::Esc => {
            app.dialog = None;
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => save(app),
        KeyCode::Tab | KeyCode::Down => {
            dialog.focus = (dialog.focus + 1) % dialog.fields.len();
        }
        KeyCode::BackTab | KeyCode::Up => {
            dialog.focus = (dialog.focus + dialog.fields.len() - 1) % dialog.fields.len();
        }
        KeyCode::Left => dialog.fields[dialog.focus].move_left(),
        KeyCode::Right => dialog.fields[dialog.focus].move_right(),
        KeyCode::Backspace => dialog.fields[dialog.focus].backspace(),
        KeyCode::Char(c) => dialog.fields[dialog.focus].insert(c),
        _ => {}
    }
}

fn save(app: &mut App) {
    let Some(dialog) = app.dialog.take() else {
        return;
    };
    app.mode = Mode::Navigate;

    match &dialog.editing {
        None => {
            if dialog.value(TITLE).is_empty() {
                app.status_message = Some("Title is required".into());
                app.dialog = Some(dialog);
                app.mode = Mode::Dialog;
                return;
            }
            match app.list.add(dialog.to_card_data()) {
                Ok(_) => app.status_message = Some("Idea added".into()),
                Err(err) => log::error!("add re-render failed: {err}"),
            }
        }
        Some(id) => {
            if let Err(err) = app.list.update(id, dialog.to_patch()) {
                log::error!("update re-render failed: {err}");
            }
            app.status_message = Some("Idea updated".into());
        }
    }
    app.persist();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_field_handles_multibyte_graphemes() {
        let mut field = EditField::new("t", "");
        field.insert('é');
        field.insert('x');
        field.backspace();
        assert_eq!(field.value, "é");
        field.move_left();
        assert_eq!(field.cursor, 0);
        field.move_right();
        assert_eq!(field.cursor, "é".len());
    }

    #[test]
    fn blank_optional_fields_stay_out_of_payloads() {
        let mut dialog = CardDialog::add();
        dialog.fields[TITLE].value = "Idea".into();

        let data = dialog.to_card_data();
        assert_eq!(data.title, "Idea");
        assert!(data.image.is_none());
        assert!(data.button.is_none());

        let patch = dialog.to_patch();
        assert!(patch.description.is_none());
        assert!(patch.votes.is_none());
        assert!(patch.user_vote.is_none());
    }

    #[test]
    fn button_fields_fall_back_per_half() {
        let mut dialog = CardDialog::add();
        dialog.fields[BUTTON_URL].value = "https://example.com".into();
        let button = dialog.button().unwrap();
        assert_eq!(button.label, "View Details");
        assert_eq!(button.url, "https://example.com");
    }
}
