use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::BoardConfig;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "ideaboard.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load the config. An explicitly given path must exist and parse; the
/// default path is optional and silently falls back to defaults when absent.
pub fn load_config(explicit: Option<&Path>) -> Result<BoardConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from(CONFIG_FILE);
            if !default.exists() {
                return Ok(BoardConfig::default());
            }
            default
        }
    };

    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_parses() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ideaboard.toml");
        fs::write(&path, "[board]\nseed = \"deck.json\"\n").unwrap();
        let cfg = load_config(Some(&path)).unwrap();
        assert_eq!(cfg.board.seed.as_deref(), Some("deck.json"));
    }

    #[test]
    fn explicit_missing_path_errors() {
        let dir = TempDir::new().unwrap();
        let err = load_config(Some(&dir.path().join("absent.toml")));
        assert!(matches!(err, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn explicit_invalid_toml_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[board\n").unwrap();
        let err = load_config(Some(&path));
        assert!(matches!(err, Err(ConfigError::Parse { .. })));
    }
}
