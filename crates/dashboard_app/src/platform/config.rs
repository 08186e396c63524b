use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use campaign_core::{budget, Settings, Timings};
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

const CONFIG_FILENAME: &str = "dashboard.ron";
const CONFIG_ENV: &str = "DASHBOARD_CONFIG";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LogDestination {
    /// Write to ./dashboard.log in the current directory.
    File,
    /// Write to the terminal.
    #[default]
    Terminal,
    /// Write to both file and terminal.
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub narrative_step_ms: u64,
    pub activation_delay_ms: u64,
    pub log_destination: LogDestination,
    pub log_level: String,
    pub initial_budget: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        let timings = Timings::default();
        Self {
            narrative_step_ms: timings.narrative_step.as_millis() as u64,
            activation_delay_ms: timings.activation.as_millis() as u64,
            log_destination: LogDestination::default(),
            log_level: "info".to_string(),
            initial_budget: budget::DEFAULT_BUDGET,
        }
    }
}

impl AppConfig {
    /// Unknown level names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or(LevelFilter::Info)
    }

    pub fn settings(&self) -> Settings {
        Settings {
            timings: Timings {
                narrative_step: Duration::from_millis(self.narrative_step_ms),
                activation: Duration::from_millis(self.activation_delay_ms),
            },
            initial_budget: budget::clamp_budget(self.initial_budget),
            ..Settings::default()
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// `$DASHBOARD_CONFIG` if set, otherwise `./dashboard.ron`.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
}

/// Reads the config file. A missing file is `Ok(None)`.
pub fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    ron::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Loads the config, falling back to defaults. The error, if any, is handed
/// back so it can be logged once the logger exists.
pub fn load(path: &Path) -> (AppConfig, Option<ConfigError>) {
    match read_config(path) {
        Ok(Some(config)) => (config, None),
        Ok(None) => (AppConfig::default(), None),
        Err(err) => (AppConfig::default(), Some(err)),
    }
}
