use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Image shown when a card record carries no image URL.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=No+Image";

/// Default action-button label.
pub const DEFAULT_BUTTON_LABEL: &str = "View Details";

/// A vote direction — also the viewer's own recorded vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl FromStr for VoteDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(VoteDirection::Up),
            "down" => Ok(VoteDirection::Down),
            other => Err(format!("invalid vote direction: {other} (expected up or down)")),
        }
    }
}

/// Vote tallies. Unsigned fields keep the non-negativity invariant by
/// construction; retractions saturate rather than wrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Votes {
    #[serde(default)]
    pub up: u32,
    #[serde(default)]
    pub down: u32,
}

impl Votes {
    /// Net score used for the votes sort and the rendered tally.
    pub fn score(&self) -> i64 {
        i64::from(self.up) - i64::from(self.down)
    }

    fn bump(&mut self, direction: VoteDirection) {
        match direction {
            VoteDirection::Up => self.up += 1,
            VoteDirection::Down => self.down += 1,
        }
    }

    fn retract(&mut self, direction: VoteDirection) {
        match direction {
            VoteDirection::Up => self.up = self.up.saturating_sub(1),
            VoteDirection::Down => self.down = self.down.saturating_sub(1),
        }
    }
}

/// The card's call-to-action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardButton {
    #[serde(default = "default_button_label")]
    pub label: String,
    #[serde(default = "default_button_url")]
    pub url: String,
}

impl Default for CardButton {
    fn default() -> Self {
        CardButton {
            label: DEFAULT_BUTTON_LABEL.to_string(),
            url: "#".to_string(),
        }
    }
}

fn default_button_label() -> String {
    DEFAULT_BUTTON_LABEL.to_string()
}

fn default_button_url() -> String {
    "#".to_string()
}

/// A normalized idea card. Produced from [`CardData`] by the list manager;
/// every field is concrete after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image: String,
    pub button: CardButton,
    pub votes: Votes,
    /// The current viewer's own vote. At most one of up/down.
    #[serde(rename = "userVote")]
    pub user_vote: Option<VoteDirection>,
}

impl Card {
    /// Tri-state vote toggle: same direction retracts, opposite direction
    /// switches, no prior vote casts. Keeps the tally consistent with at
    /// most one increment attributable to the viewer.
    pub fn apply_vote(&mut self, direction: VoteDirection) {
        match self.user_vote {
            Some(current) if current == direction => {
                self.votes.retract(direction);
                self.user_vote = None;
            }
            Some(previous) => {
                self.votes.retract(previous);
                self.votes.bump(direction);
                self.user_vote = Some(direction);
            }
            None => {
                self.votes.bump(direction);
                self.user_vote = Some(direction);
            }
        }
    }

    /// Shallow merge: only the fields present in `patch` are replaced.
    pub fn apply_patch(&mut self, patch: &CardPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(image) = &patch.image {
            self.image = image.clone();
        }
        if let Some(button) = &patch.button {
            self.button = button.clone();
        }
        if let Some(votes) = patch.votes {
            self.votes = votes;
        }
        if let Some(user_vote) = patch.user_vote {
            self.user_vote = user_vote;
        }
    }
}

/// A raw, JSON-compatible card record as it arrives from a seed deck, the
/// cache, or an add form. Everything is optional; [`CardData::normalize`]
/// fills the gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub button: Option<CardButton>,
    #[serde(default)]
    pub votes: Option<Votes>,
    #[serde(default, rename = "userVote")]
    pub user_vote: Option<VoteDirection>,
}

impl CardData {
    /// Normalize into a [`Card`], synthesizing a positional id when none is
    /// supplied. `index` is the record's position in the loaded sequence.
    pub fn normalize(self, index: usize) -> Card {
        Card {
            id: self.id.unwrap_or_else(|| format!("card_{index}")),
            title: self.title,
            description: self.description,
            image: self.image.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            button: self.button.unwrap_or_default(),
            votes: self.votes.unwrap_or_default(),
            user_vote: self.user_vote,
        }
    }
}

/// Top-level shallow-merge payload for `update` and incremental re-renders.
/// `user_vote` is doubly optional: `Some(None)` clears the viewer's vote,
/// `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub button: Option<CardButton>,
    pub votes: Option<Votes>,
    pub user_vote: Option<Option<VoteDirection>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card() -> Card {
        CardData {
            id: Some("c1".into()),
            title: "Idea".into(),
            ..Default::default()
        }
        .normalize(0)
    }

    #[test]
    fn vote_cycle_cast_retract_cast() {
        let mut c = card();
        c.apply_vote(VoteDirection::Up);
        assert_eq!(c.votes, Votes { up: 1, down: 0 });
        assert_eq!(c.user_vote, Some(VoteDirection::Up));

        c.apply_vote(VoteDirection::Up);
        assert_eq!(c.votes, Votes { up: 0, down: 0 });
        assert_eq!(c.user_vote, None);

        c.apply_vote(VoteDirection::Up);
        assert_eq!(c.votes, Votes { up: 1, down: 0 });
        assert_eq!(c.user_vote, Some(VoteDirection::Up));
    }

    #[test]
    fn vote_switch_moves_one_increment() {
        let mut c = card();
        c.votes = Votes { up: 4, down: 2 };
        c.apply_vote(VoteDirection::Up);
        c.apply_vote(VoteDirection::Down);
        assert_eq!(c.votes, Votes { up: 4, down: 3 });
        assert_eq!(c.user_vote, Some(VoteDirection::Down));
    }

    #[test]
    fn retract_saturates_at_zero() {
        let mut c = card();
        // Inconsistent input: a recorded vote with a zero tally.
        c.user_vote = Some(VoteDirection::Down);
        c.apply_vote(VoteDirection::Down);
        assert_eq!(c.votes, Votes { up: 0, down: 0 });
        assert_eq!(c.user_vote, None);
    }

    #[test]
    fn normalize_fills_defaults() {
        let raw: CardData = serde_json::from_str(r#"{"title":"X"}"#).unwrap();
        let c = raw.normalize(3);
        assert_eq!(c.id, "card_3");
        assert_eq!(c.title, "X");
        assert_eq!(c.description, "");
        assert_eq!(c.image, PLACEHOLDER_IMAGE);
        assert_eq!(c.button.label, DEFAULT_BUTTON_LABEL);
        assert_eq!(c.button.url, "#");
        assert_eq!(c.votes, Votes::default());
        assert_eq!(c.user_vote, None);
    }

    #[test]
    fn card_json_round_trip_keeps_user_vote_key() {
        let mut c = card();
        c.apply_vote(VoteDirection::Up);
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains(r#""userVote":"up""#));
        let back: CardData = serde_json::from_str(&json).unwrap();
        assert_eq!(back.user_vote, Some(VoteDirection::Up));
        assert_eq!(back.votes, Some(Votes { up: 1, down: 0 }));
    }

    #[test]
    fn patch_merges_shallowly() {
        let mut c = card();
        c.votes = Votes { up: 2, down: 1 };
        c.apply_patch(&CardPatch {
            title: Some("New title".into()),
            ..Default::default()
        });
        assert_eq!(c.title, "New title");
        // Unspecified fields are preserved, including vote state.
        assert_eq!(c.votes, Votes { up: 2, down: 1 });
    }
}
