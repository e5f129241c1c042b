//! Session statistics
//!
//! Counters for everything that crossed the serial link this session,
//! shared between the drain loop and the HUD. Cheap to clone; all clones
//! observe the same counters.

use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use serde::Serialize;

#[derive(Debug, Default)]
struct Counters {
    lines_received: u64,
    frames_parsed: u64,
    parse_errors: u64,
    read_errors: u64,
    movements: u64,
    button_presses: u64,
}

/// Shared session counters
#[derive(Clone)]
pub struct SessionStats {
    counters: Arc<RwLock<Counters>>,
    start: Instant,
}

/// Point-in-time view of the session counters
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    /// Lines received over the serial link
    pub lines_received: u64,
    /// Lines decoded into a telemetry frame
    pub frames_parsed: u64,
    /// Lines that looked like JSON but failed to parse
    pub parse_errors: u64,
    /// Fatal read errors (disconnects)
    pub read_errors: u64,
    /// Cursor movements applied
    pub movements: u64,
    /// Button-press events observed
    pub button_presses: u64,
    /// Seconds since the session started
    pub uptime_seconds: f64,
}

impl SessionStats {
    /// Create a fresh set of counters; the session clock starts now.
    pub fn new() -> Self {
        Self {
            counters: Arc::new(RwLock::new(Counters::default())),
            start: Instant::now(),
        }
    }

    /// A line arrived over the link.
    pub fn record_line(&self) {
        self.counters.write().lines_received += 1;
    }

    /// A line decoded into a telemetry frame.
    pub fn record_frame(&self) {
        self.counters.write().frames_parsed += 1;
    }

    /// A JSON-looking line failed to parse.
    pub fn record_parse_error(&self) {
        self.counters.write().parse_errors += 1;
    }

    /// The link reported a fatal read error.
    pub fn record_read_error(&self) {
        self.counters.write().read_errors += 1;
    }

    /// A motion sample moved the cursor.
    pub fn record_movement(&self) {
        self.counters.write().movements += 1;
    }

    /// The device reported a fresh button press.
    pub fn record_button_press(&self) {
        self.counters.write().button_presses += 1;
    }

    /// Get all counters as a snapshot.
    pub fn snapshot(&self) -> StatsSnapshot {
        let counters = self.counters.read();
        StatsSnapshot {
            lines_received: counters.lines_received,
            frames_parsed: counters.frames_parsed,
            parse_errors: counters.parse_errors,
            read_errors: counters.read_errors,
            movements: counters.movements,
            button_presses: counters.button_presses,
            uptime_seconds: self.start.elapsed().as_secs_f64(),
        }
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
