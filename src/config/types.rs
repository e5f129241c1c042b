//! Configuration type definitions
//!
//! Section structs mirroring the TOML layout. Every field carries a serde
//! default so partial config files load cleanly.

use serde::{Deserialize, Serialize};

/// Serial link configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerialConfig {
    /// Port to connect to (e.g. `/dev/ttyUSB0`, `COM3`); when absent the
    /// interactive menu is shown
    #[serde(default)]
    pub port: Option<String>,

    /// Baud rate
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,

    /// Read timeout for the reader thread (ms)
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,

    /// How long to wait for data when probing a candidate port (ms)
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,

    /// Delay after opening the port, giving the device time to reset (ms)
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Reader → UI channel depth; oldest lines are dropped on overflow
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

fn default_baud_rate() -> u32 {
    115_200
}
fn default_read_timeout_ms() -> u64 {
    100
}
fn default_probe_timeout_ms() -> u64 {
    3000
}
fn default_settle_delay_ms() -> u64 {
    2000
}
fn default_channel_capacity() -> usize {
    1024
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: None,
            baud_rate: default_baud_rate(),
            read_timeout_ms: default_read_timeout_ms(),
            probe_timeout_ms: default_probe_timeout_ms(),
            settle_delay_ms: default_settle_delay_ms(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

/// Window and scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Window width (px)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Window height (px)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Redraw rate (frames per second)
    #[serde(default = "default_target_fps")]
    pub target_fps: u32,

    /// Background grid spacing (px)
    #[serde(default = "default_grid_size")]
    pub grid_size: u32,

    /// Clamp margin keeping the cursor away from the window edge (px)
    #[serde(default = "default_margin")]
    pub margin: f32,
}

fn default_width() -> u32 {
    1200
}
fn default_height() -> u32 {
    800
}
fn default_target_fps() -> u32 {
    60
}
fn default_grid_size() -> u32 {
    50
}
fn default_margin() -> f32 {
    10.0
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            target_fps: default_target_fps(),
            grid_size: default_grid_size(),
            margin: default_margin(),
        }
    }
}

/// Cursor trail configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailConfig {
    /// Maximum number of trail points kept
    #[serde(default = "default_trail_capacity")]
    pub capacity: usize,
}

fn default_trail_capacity() -> usize {
    100
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            capacity: default_trail_capacity(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level when RUST_LOG is not set (trace|debug|info|warn|error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
