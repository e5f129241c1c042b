//! Telemetry wire format
//!
//! The device streams newline-terminated JSON objects with optional
//! top-level keys. This is a fixed convention, not a negotiated protocol.
//!
//! | Key | Payload | Meaning |
//! |-----|---------|---------|
//! | `mouse` | `{dx, dy, button}` | Relative motion sample |
//! | `event` | string | Discrete device event (e.g. `button_press`) |
//! | `status` | string | Human-readable device status |
//!
//! Lines that do not look like JSON are passed through as raw device
//! output; the firmware prints plain-text boot messages on the same link.

mod wire;

pub use wire::{parse_line, MouseSample, TelemetryFrame, WireError};

/// Event name the device sends on a fresh button press
pub const EVENT_BUTTON_PRESS: &str = "button_press";
