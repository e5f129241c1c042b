//! Serial link to the motion-sensor device
//!
//! Port discovery, interactive selection, probing, and the background
//! reader thread that feeds decoded lines to the UI.
//!
//! # Connection flow
//!
//! ```text
//! config/CLI port? ──yes──> open_port ──fail──> menu (unless --no-menu)
//!        │no                                      │
//!        └────────────> menu ──probe ok──> open_port ──> SerialReader
//! ```

pub mod error;
pub mod menu;
pub mod ports;
pub mod probe;
pub mod reader;

pub use error::{Result, SerialError};
pub use menu::{select_port, MenuChoice};
pub use ports::{discover, PortInfo};
pub use probe::probe_port;
pub use reader::{ReaderEvent, SerialReader};

use std::time::Duration;

use serialport::SerialPort;
use tracing::info;

use crate::config::SerialConfig;

/// Open `port` for streaming and give the device time to reset.
///
/// Many hobbyist boards reboot when the host asserts DTR on open; the
/// settle delay waits out the bootloader before the first read.
pub fn open_port(port: &str, config: &SerialConfig) -> Result<Box<dyn SerialPort>> {
    let conn = serialport::new(port, config.baud_rate)
        .timeout(Duration::from_millis(config.read_timeout_ms))
        .open()
        .map_err(|source| SerialError::Open {
            port: port.to_string(),
            source,
        })?;

    info!("✓ Connected to {} at {} baud", port, config.baud_rate);

    if config.settle_delay_ms > 0 {
        std::thread::sleep(Duration::from_millis(config.settle_delay_ms));
    }

    Ok(conn)
}
