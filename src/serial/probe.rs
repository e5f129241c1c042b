//! Port probing
//!
//! Before committing to a port from the menu we open it briefly and wait
//! for the device to say anything at all. A silent port is usually the
//! wrong one (or the firmware is not running).

use std::io::{BufRead, BufReader, ErrorKind};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::serial::error::{Result, SerialError};

/// Per-read timeout while probing; short so the stop deadline is honored.
const PROBE_READ_TIMEOUT: Duration = Duration::from_millis(100);

/// Open `port` at `baud` and wait up to `timeout` for a nonempty line.
pub fn probe_port(port: &str, baud: u32, timeout: Duration) -> Result<()> {
    let conn = serialport::new(port, baud)
        .timeout(PROBE_READ_TIMEOUT)
        .open()
        .map_err(|source| SerialError::Open {
            port: port.to_string(),
            source,
        })?;

    let mut reader = BufReader::new(conn);
    let mut buf: Vec<u8> = Vec::with_capacity(256);
    let deadline = Instant::now() + timeout;

    while Instant::now() < deadline {
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                if !line.trim().is_empty() {
                    debug!("Probe of {} received: {}", port, line.trim());
                    return Ok(());
                }
                buf.clear();
            }
            // Partial data stays buffered across timeouts
            Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => continue,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Err(SerialError::ProbeSilent(port.to_string()))
}
