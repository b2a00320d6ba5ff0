use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from ideaboard.toml (all optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub board: BoardSettings,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardSettings {
    /// Board state file (default: board.json in the working directory)
    #[serde(default)]
    pub file: Option<String>,
    /// Seed deck loaded when no board state exists
    #[serde(default)]
    pub seed: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides, keyed by theme slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
