//! User configuration
//!
//! Settings live in `~/.config/sitestatus/config.toml`. Every key is
//! optional; `SITESTATUS_PERIOD` overrides the configured period and
//! command-line flags override both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::header::Period;

/// Environment variable that overrides the configured period
pub const PERIOD_ENV: &str = "SITESTATUS_PERIOD";

/// How inferred header maps are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reporting period used when no flag is given
    pub period: Period,
    /// Output format used when no flag is given
    pub format: OutputFormat,
}

impl Config {
    /// Default config file location (~/.config/sitestatus/config.toml)
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sitestatus")
            .join("config.toml")
    }

    /// Load the config file (if any) and apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_path);

        let mut config = Self::load_from(&path)?;
        if let Ok(value) = std::env::var(PERIOD_ENV) {
            config.apply_period_override(&value)?;
        }
        Ok(config)
    }

    /// Load a config file, falling back to defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn apply_period_override(&mut self, value: &str) -> Result<()> {
        self.period = value
            .parse()
            .map_err(|e| anyhow::anyhow!("{}: {}", PERIOD_ENV, e))?;
        log::debug!("Period overridden by {}: {}", PERIOD_ENV, self.period);
        Ok(())
    }
}
