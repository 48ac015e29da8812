// Configuration loading and parsing (config/settings.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub team: TeamConfig,
    #[serde(default)]
    pub data_paths: DataPaths,
}

/// The `[team]` table: display labels only, nothing behavioral.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamConfig {
    pub name: String,
    pub season: String,
}

impl Default for TeamConfig {
    fn default() -> Self {
        TeamConfig {
            name: "Ridgewood Ravens".into(),
            season: "2026".into(),
        }
    }
}

/// The `[data_paths]` table: where the CSV sample-data files live.
#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub roster: String,
    pub batting: String,
    pub pitching: String,
    pub fielding: String,
}

impl Default for DataPaths {
    fn default() -> Self {
        DataPaths {
            roster: "data/roster.csv".into(),
            batting: "data/batting.csv".into(),
            pitching: "data/pitching.csv".into(),
            fielding: "data/fielding.csv".into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            team: TeamConfig::default(),
            data_paths: DataPaths::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load configuration from `config/settings.toml` under the current
/// directory. A missing file falls back to defaults; a malformed file is an
/// error (silently ignoring a typo'd config is worse than failing).
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new("."))
}

/// Load configuration relative to the given base directory. Exposed for
/// testing.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("settings.toml");
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
        path: path.clone(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::Parse { path, source: e })
}
