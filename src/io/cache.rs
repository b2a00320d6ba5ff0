use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::list::SortMode;
use crate::model::card::{Card, CardData};

/// Persisted board state (cards in canonical order plus the sort mode).
/// Cards are read back as raw records and re-normalized by the manager, so a
/// hand-edited or partial file still loads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardState {
    #[serde(default)]
    pub cards: Vec<CardData>,
    #[serde(default)]
    pub sort_mode: SortMode,
}

#[derive(Serialize)]
struct BoardStateOut<'a> {
    cards: &'a [Card],
    sort_mode: SortMode,
}

/// Read the board file. Missing or malformed files read as `None` — the
/// caller falls back to the seed source.
pub fn read_board(path: &Path) -> Option<BoardState> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write the board file (pretty JSON, canonical card order).
pub fn write_board(path: &Path, cards: &[Card], sort_mode: SortMode) -> std::io::Result<()> {
    let out = BoardStateOut { cards, sort_mode };
    let content = serde_json::to_string_pretty(&out)?;
    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::card::Votes;
    use tempfile::TempDir;

    fn card(id: &str) -> Card {
        CardData {
            id: Some(id.into()),
            title: format!("Card {id}"),
            votes: Some(Votes { up: 2, down: 1 }),
            ..Default::default()
        }
        .normalize(0)
    }

    #[test]
    fn write_and_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("board.json");
        let cards = vec![card("a"), card("b")];

        write_board(&path, &cards, SortMode::Votes).unwrap();
        let state = read_board(&path).unwrap();

        assert_eq!(state.sort_mode, SortMode::Votes);
        assert_eq!(state.cards.len(), 2);
        assert_eq!(state.cards[0].id.as_deref(), Some("a"));
        assert_eq!(state.cards[1].votes, Some(Votes { up: 2, down: 1 }));
    }

    #[test]
    fn read_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(read_board(&dir.path().join("board.json")).is_none());
    }

    #[test]
    fn read_malformed_json_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("board.json");
        fs::write(&path, "not json {{{").unwrap();
        assert!(read_board(&path).is_none());
    }

    #[test]
    fn minimal_object_gets_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("board.json");
        fs::write(&path, "{}").unwrap();
        let state = read_board(&path).unwrap();
        assert!(state.cards.is_empty());
        assert_eq!(state.sort_mode, SortMode::Default);
    }
}
