use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::model::card::{Card, CardPatch, VoteDirection, Votes};
use crate::tui::theme::Theme;
use crate::tui::wrap::wrap_text;

/// The render model for one card: a pure mapping of card data to the lines
/// the board draws. `patch` updates only the sub-parts a [`CardPatch`] names,
/// so incremental tally updates don't re-wrap the description.
#[derive(Debug, Clone)]
pub struct CardFace {
    pub id: String,
    title: String,
    description: String,
    image: String,
    button_label: String,
    button_url: String,
    votes: Votes,
    user_vote: Option<VoteDirection>,
    wrapped: Vec<String>,
    wrap_width: u16,
}

impl CardFace {
    pub fn build(card: &Card) -> Self {
        CardFace {
            id: card.id.clone(),
            title: card.title.clone(),
            description: card.description.clone(),
            image: card.image.clone(),
            button_label: card.button.label.clone(),
            button_url: card.button.url.clone(),
            votes: card.votes,
            user_vote: card.user_vote,
            wrapped: Vec::new(),
            wrap_width: 0,
        }
    }

    /// Update only the sub-parts named by `patch`. `card` is the post-merge
    /// record, consulted for the tally when vote state changed.
    pub fn patch(&mut self, card: &Card, patch: &CardPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
            self.wrap_width = 0; // invalidate the wrap cache
        }
        if let Some(image) = &patch.image {
            self.image = image.clone();
        }
        if let Some(button) = &patch.button {
            self.button_label = button.label.clone();
            self.button_url = button.url.clone();
        }
        if patch.votes.is_some() || patch.user_vote.is_some() {
            self.votes = card.votes;
            self.user_vote = card.user_vote;
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn ensure_wrapped(&mut self, width: u16) {
        if self.wrap_width != width {
            self.wrapped = wrap_text(&self.description, width as usize);
            self.wrap_width = width;
        }
    }

    /// Rows this face occupies inside its border at the given inner width.
    pub fn height(&mut self, inner_width: u16) -> u16 {
        self.ensure_wrapped(inner_width);
        // header + title + description + image + button
        self.wrapped.len() as u16 + 4
    }

    /// Build the face's text lines at the given inner width.
    pub fn lines(&mut self, inner_width: u16, theme: &Theme) -> Vec<Line<'static>> {
        self.ensure_wrapped(inner_width);

        let up_style = match self.user_vote {
            Some(VoteDirection::Up) => Style::default()
                .fg(theme.vote_up)
                .add_modifier(Modifier::BOLD),
            _ => Style::default().fg(theme.dim),
        };
        let down_style = match self.user_vote {
            Some(VoteDirection::Down) => Style::default()
                .fg(theme.vote_down)
                .add_modifier(Modifier::BOLD),
            _ => Style::default().fg(theme.dim),
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(format!("\u{25B2} {}", self.votes.up), up_style),
            Span::raw("   "),
            Span::styled(format!("\u{25BC} {}", self.votes.down), down_style),
            Span::styled(
                format!("   {:+}", self.votes.score()),
                Style::default().fg(theme.text_bright),
            ),
        ])];

        lines.push(Line::from(Span::styled(
            self.title.clone(),
            Style::default()
                .fg(theme.text_bright)
                .add_modifier(Modifier::BOLD),
        )));

        for row in &self.wrapped {
            lines.push(Line::from(Span::styled(
                row.clone(),
                Style::default().fg(theme.text),
            )));
        }

        lines.push(Line::from(Span::styled(
            format!("\u{29C9} {}", self.image),
            Style::default().fg(theme.dim),
        )));
        lines.push(Line::from(Span::styled(
            format!("\u{21AA} {} \u{2192} {}", self.button_label, self.button_url),
            Style::default().fg(theme.link),
        )));

        lines
    }
}
