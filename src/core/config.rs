//! User configuration stored as JSON in the config directory.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::{Algorithm, DiffOptions, TieBreak, DEFAULT_LOOKAHEAD_WINDOW};

/// Cached config directory path.
static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the confdiff config directory (cached).
pub fn config_dir() -> &'static Path {
    CONFIG_DIR.get_or_init(|| {
        directories::ProjectDirs::from("", "", "confdiff")
            .map(|d| d.config_dir().to_path_buf())
            .unwrap_or_else(dirs_fallback)
    })
}

/// Errors from loading or saving the config file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// I/O error on the config file.
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    /// Config file is not valid JSON for [`Config`].
    #[error("invalid config file {path}: {source}")]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
    /// Config could not be encoded as JSON.
    #[error("failed to encode config: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Persisted settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Lines searched ahead on a mismatch.
    pub lookahead_window: usize,
    /// Which side wins when both could resynchronize.
    pub tie_break: TieBreak,
    /// Alignment algorithm.
    pub algorithm: Algorithm,
    /// Color theme name.
    pub theme: String,
    /// Colorize print mode output.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lookahead_window: DEFAULT_LOOKAHEAD_WINDOW,
            tie_break: TieBreak::default(),
            algorithm: Algorithm::default(),
            theme: "default".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Default config file location.
    pub fn default_path() -> PathBuf {
        config_dir().join("config.json")
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path())
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Save to `path` (atomic write).
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let temp_path = path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(&temp_path, content)?;
        std::fs::rename(&temp_path, path)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Diff options described by this config.
    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            lookahead_window: self.lookahead_window,
            tie_break: self.tie_break,
            algorithm: self.algorithm,
        }
    }
}

/// Fallback config directory if `directories` fails.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(|h| Path::new(&h).join(".config").join("confdiff"))
        .unwrap_or_else(|_| PathBuf::from(".confdiff"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_diff_defaults() {
        assert_eq!(Config::default().diff_options(), DiffOptions::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "algorithm": "myers", "tie_break": "deletion" }"#).unwrap();
        assert_eq!(config.algorithm, Algorithm::Myers);
        assert_eq!(config.tie_break, TieBreak::PreferDeletion);
        assert_eq!(config.lookahead_window, DEFAULT_LOOKAHEAD_WINDOW);
        assert_eq!(config.theme, "default");
        assert!(config.color);
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        assert!(serde_json::from_str::<Config>(r#"{ "algorithm": "patience" }"#).is_err());
    }
}
