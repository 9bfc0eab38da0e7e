//! Configuration loading and management.

use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::commands::util::parse_clock;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Clock time of the first schedule entry, as `HH:MM`.
    pub start_time: String,

    /// Whether the table includes the motivation column.
    pub motivation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_time: "00:00".to_string(),
            motivation: true,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (SP_*)
        figment = figment.merge(Env::prefixed("SP_"));

        figment.extract()
    }

    /// Parsed `start_time`.
    pub fn start_clock(&self) -> anyhow::Result<NaiveTime> {
        parse_clock(&self.start_time)
    }
}

/// Returns the platform-specific config directory for sp.
///
/// On Linux: `~/.config/sp`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sp"))
}
