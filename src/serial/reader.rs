//! Serial reader thread
//!
//! A dedicated thread blocking on line reads, pushing decoded lines into
//! a bounded channel the UI drains once per frame. Read timeouts are the
//! normal idle state; anything else ends the stream.

use std::io::{BufRead, BufReader, ErrorKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, Sender, TrySendError};
use serialport::SerialPort;
use tracing::{debug, info, warn};

/// Events delivered from the reader thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReaderEvent {
    /// One trimmed, nonempty line of device output
    Line(String),
    /// The link is gone; no further events follow
    Disconnected {
        /// Human-readable reason
        reason: String,
    },
}

/// Handle to the background reader thread
///
/// Dropping the handle stops the thread; the port read timeout bounds how
/// long the stop takes to be observed.
pub struct SerialReader {
    port_name: String,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SerialReader {
    /// Spawn the reader on an already-open port.
    ///
    /// `rx` must be a receiver of the same channel as `tx`; when the
    /// channel fills up the reader pops the oldest queued line so the
    /// display lags behind the device instead of stalling it.
    pub fn spawn(
        port: Box<dyn SerialPort>,
        tx: Sender<ReaderEvent>,
        rx: Receiver<ReaderEvent>,
    ) -> Self {
        let port_name = port.name().unwrap_or_else(|| "<unnamed>".to_string());
        let stop = Arc::new(AtomicBool::new(false));

        let thread_stop = Arc::clone(&stop);
        let thread_name = port_name.clone();
        let handle = std::thread::Builder::new()
            .name("serial-reader".to_string())
            .spawn(move || read_loop(port, &thread_name, &thread_stop, &tx, &rx))
            .expect("failed to spawn serial reader thread");

        Self {
            port_name,
            stop,
            handle: Some(handle),
        }
    }

    /// Port the reader is attached to
    pub fn port_name(&self) -> &str {
        &self.port_name
    }

    /// Stop the thread and wait for it to finish.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SerialReader {
    fn drop(&mut self) {
        self.stop();
    }
}

fn read_loop(
    port: Box<dyn SerialPort>,
    port_name: &str,
    stop: &AtomicBool,
    tx: &Sender<ReaderEvent>,
    rx: &Receiver<ReaderEvent>,
) {
    info!("Serial reader started on {}", port_name);

    let mut reader = BufReader::new(port);
    let mut buf: Vec<u8> = Vec::with_capacity(256);

    loop {
        if stop.load(Ordering::Relaxed) {
            debug!("Serial reader on {} stopping", port_name);
            return;
        }

        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                warn!("Serial port {} reached end of stream", port_name);
                push(tx, rx, disconnected("device closed the connection"));
                return;
            }
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim();
                if !line.is_empty() {
                    push(tx, rx, ReaderEvent::Line(line.to_string()));
                }
                buf.clear();
            }
            // Timeout with no complete line yet; partial data stays buffered
            Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => continue,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                warn!("Serial read error on {}: {}", port_name, e);
                push(tx, rx, disconnected(&e.to_string()));
                return;
            }
        }
    }
}

fn disconnected(reason: &str) -> ReaderEvent {
    ReaderEvent::Disconnected {
        reason: reason.to_string(),
    }
}

/// Send without blocking; on a full channel, drop the oldest queued event
/// to keep the stream fresh.
fn push(tx: &Sender<ReaderEvent>, rx: &Receiver<ReaderEvent>, event: ReaderEvent) {
    match tx.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(event)) => {
            let _ = rx.try_recv();
            if tx.try_send(event).is_err() {
                debug!("Telemetry channel full, line dropped");
            }
        }
        Err(TrySendError::Disconnected(_)) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn test_push_drops_oldest_when_full() {
        let (tx, rx) = bounded(2);
        push(&tx, &rx, ReaderEvent::Line("a".to_string()));
        push(&tx, &rx, ReaderEvent::Line("b".to_string()));
        push(&tx, &rx, ReaderEvent::Line("c".to_string()));

        // "a" was sacrificed; the freshest lines survive
        assert_eq!(rx.try_recv().unwrap(), ReaderEvent::Line("b".to_string()));
        assert_eq!(rx.try_recv().unwrap(), ReaderEvent::Line("c".to_string()));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_push_into_closed_channel_is_silent() {
        let (tx, rx) = bounded(1);
        let rx_clone = rx.clone();
        drop(rx);
        drop(rx_clone);

        // Must not panic
        push(&tx, &bounded(1).1, ReaderEvent::Line("a".to_string()));
    }
}
