//! Configuration management
//!
//! Handles loading, validation, and merging of configuration from:
//! - TOML files
//! - CLI arguments

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod types;

pub use types::{DisplayConfig, LoggingConfig, SerialConfig, TrailConfig};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Serial link configuration
    #[serde(default)]
    pub serial: SerialConfig,
    /// Window and scene configuration
    #[serde(default)]
    pub display: DisplayConfig,
    /// Cursor trail configuration
    #[serde(default)]
    pub trail: TrailConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Default config file location (`~/.config/airmouse-viz/config.toml` on Linux)
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("airmouse-viz")
            .join("config.toml")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.serial.baud_rate == 0 {
            anyhow::bail!("Baud rate must be nonzero");
        }

        if self.serial.channel_capacity == 0 {
            anyhow::bail!("Channel capacity must be nonzero");
        }

        if !(1..=240).contains(&self.display.target_fps) {
            anyhow::bail!(
                "Target FPS must be between 1 and 240, got {}",
                self.display.target_fps
            );
        }

        if self.display.width < 320 || self.display.height < 240 {
            anyhow::bail!(
                "Window must be at least 320x240, got {}x{}",
                self.display.width,
                self.display.height
            );
        }

        if self.display.grid_size < 8 {
            anyhow::bail!("Grid size must be at least 8 px");
        }

        let min_dim = self.display.width.min(self.display.height) as f32;
        if self.display.margin < 0.0 || self.display.margin * 2.0 >= min_dim {
            anyhow::bail!(
                "Margin {} leaves no usable area in a {}x{} window",
                self.display.margin,
                self.display.width,
                self.display.height
            );
        }

        if self.trail.capacity == 0 {
            anyhow::bail!("Trail capacity must be nonzero");
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Invalid log level: {}", self.logging.level),
        }

        Ok(())
    }

    /// Override config with CLI arguments
    pub fn with_overrides(mut self, port: Option<String>, baud: Option<u32>) -> Self {
        if port.is_some() {
            self.serial.port = port;
        }
        if let Some(baud) = baud {
            self.serial.baud_rate = baud;
        }
        self
    }
}
