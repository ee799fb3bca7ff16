use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub chart: ChartSettings,
}

/// Bar chart settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Chart title
    pub title: String,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            title: "Keyword Match Counts per Subdirectory".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(Error::config_validation(
                "chart dimensions must be at least 1 pixel",
            ));
        }

        if self.chart.width > 10_000 || self.chart.height > 10_000 {
            return Err(Error::config_validation(
                "chart dimensions cannot exceed 10000 pixels",
            ));
        }

        Ok(())
    }
}
