use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::list::view::{ListView, ViewError};
use crate::model::card::{Card, CardPatch};
use crate::tui::theme::Theme;

use super::card_face::CardFace;

/// The board's retained view: card faces in display order, rebuilt on full
/// refreshes and patched in place on incremental ones. Also owns scrolling
/// and the row map used to hit-test mouse events.
#[derive(Debug, Default)]
pub struct BoardView {
    faces: Vec<CardFace>,
    first_visible: usize,
    /// `(card id, top row, bottom row)` in absolute terminal coordinates,
    /// recorded at the last draw.
    hit_rows: Vec<(String, u16, u16)>,
}

impl ListView for BoardView {
    fn render_all(&mut self, cards: &[&Card]) -> Result<(), ViewError> {
        self.faces = cards.iter().map(|card| CardFace::build(card)).collect();
        Ok(())
    }

    fn patch_card(&mut self, card: &Card, patch: &CardPatch) -> Result<(), ViewError> {
        if let Some(face) = self.faces.iter_mut().find(|f| f.id == card.id) {
            face.patch(card, patch);
        }
        Ok(())
    }
}

impl BoardView {
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Card id at a display-order index.
    pub fn card_id_at(&self, index: usize) -> Option<&str> {
        self.faces.get(index).map(|f| f.id.as_str())
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.faces.iter().position(|f| f.id == id)
    }

    pub fn face_title(&self, id: &str) -> Option<&str> {
        self.faces.iter().find(|f| f.id == id).map(|f| f.title())
    }

    /// Card under an absolute terminal row, per the last draw.
    pub fn card_at(&self, row: u16) -> Option<&str> {
        self.hit_rows
            .iter()
            .find(|(_, top, bottom)| row >= *top && row < *bottom)
            .map(|(id, _, _)| id.as_str())
    }

    /// Draw the board. Border color shows, in priority order: the drop
    /// candidate, the card being dragged, then the cursor.
    pub fn draw(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        cursor: usize,
        dragging: Option<&str>,
        drop_candidate: Option<&str>,
        theme: &Theme,
    ) {
        self.hit_rows.clear();

        if self.faces.is_empty() {
            let hint = Paragraph::new(Line::from(
                "No ideas yet \u{2014} press a to add one, or R to load the seed deck",
            ))
            .style(Style::default().fg(theme.dim));
            frame.render_widget(hint, area);
            return;
        }

        let inner_width = area.width.saturating_sub(2);
        let heights: Vec<u16> = self
            .faces
            .iter_mut()
            .map(|face| face.height(inner_width) + 2)
            .collect();

        // Keep the cursor inside the visible window.
        let cursor = cursor.min(self.faces.len() - 1);
        if self.first_visible > cursor {
            self.first_visible = cursor;
        }
        while cursor >= self.first_visible + visible_count(&heights, self.first_visible, area.height)
            && self.first_visible < cursor
        {
            self.first_visible += 1;
        }

        let mut y = area.y;
        for index in self.first_visible..self.faces.len() {
            let remaining = (area.y + area.height).saturating_sub(y);
            if remaining == 0 {
                break;
            }
            let height = heights[index].min(remaining);
            let rect = Rect::new(area.x, y, area.width, height);

            let face_id = self.faces[index].id.clone();
            let border_style = if drop_candidate == Some(face_id.as_str()) {
                Style::default().fg(theme.drop_border)
            } else if dragging == Some(face_id.as_str()) {
                Style::default().fg(theme.drag_border)
            } else if index == cursor {
                Style::default().fg(theme.selection_border)
            } else {
                Style::default().fg(theme.dim)
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style);
            let lines = self.faces[index].lines(inner_width, theme);
            frame.render_widget(Paragraph::new(lines).block(block), rect);

            self.hit_rows.push((face_id, y, y + height));
            y += height;
        }
    }
}

/// How many cards, starting at `first`, fit entirely into `avail` rows.
/// Always at least one so an oversized card still shows.
fn visible_count(heights: &[u16], first: usize, avail: u16) -> usize {
    let mut used = 0u16;
    let mut count = 0usize;
    for &h in &heights[first..] {
        if used + h > avail {
            break;
        }
        used += h;
        count += 1;
    }
    count.max(1)
}
