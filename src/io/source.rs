use std::fs;
use std::path::{Path, PathBuf};

use crate::model::card::CardData;

/// Demo deck served when no seed file is configured.
const DEMO_DECK: &str = include_str!("demo_cards.json");

/// Error type for seed loading
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read seed deck {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed seed deck {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// An injected load capability: anything that can produce a sequence of raw
/// card records. The manager treats every source uniformly through
/// `load(cards, mark_as_origin)`.
pub trait CardSource {
    fn fetch(&self) -> Result<Vec<CardData>, SourceError>;

    /// Human-readable origin, for status messages and logs.
    fn describe(&self) -> String;
}

/// Seed deck read from a JSON file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

impl CardSource for FileSource {
    fn fetch(&self) -> Result<Vec<CardData>, SourceError> {
        let content = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SourceError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// The embedded demo deck.
pub struct BuiltinSource;

impl CardSource for BuiltinSource {
    fn fetch(&self) -> Result<Vec<CardData>, SourceError> {
        // The deck is compiled in; a parse failure here is a build defect.
        Ok(serde_json::from_str(DEMO_DECK).unwrap_or_default())
    }

    fn describe(&self) -> String {
        "built-in demo deck".to_string()
    }
}

/// Pick the seed source for an optional configured path.
pub fn seed_source(path: Option<&Path>) -> Box<dyn CardSource> {
    match path {
        Some(p) => Box::new(FileSource::new(p)),
        None => Box::new(BuiltinSource),
    }
}
