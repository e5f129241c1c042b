//! # airmouse-viz
//!
//! Desktop visualizer for handheld motion-sensor cursor telemetry.
//!
//! A microcontroller with an IMU streams newline-delimited JSON over a
//! serial link; this crate accumulates the relative motion into a 2D
//! cursor and renders it with a fading trail in a window.
//!
//! # Architecture
//!
//! ```text
//! airmouse-viz
//!   ├─> Port Menu (interactive discovery + probing before connect)
//!   ├─> Serial Reader (dedicated thread, line reads → channel)
//!   ├─> Telemetry Parser (JSON frames: mouse / event / status)
//!   ├─> Cursor Tracker (delta accumulation, clamping, trail)
//!   └─> Visualizer (iced window, canvas scene + HUD)
//! ```
//!
//! # Data Flow
//!
//! **Telemetry Path:** Device → Serial Reader → Channel → Parser → Cursor Tracker → Scene
//!
//! **Control Path:** Keyboard (R/C/Q) → Visualizer → Cursor Tracker

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Application configuration
pub mod config;

/// Cursor accumulation, clamping, and trail state
pub mod cursor;

/// Serial port discovery, probing, menu, and the reader thread
pub mod serial;

/// Session statistics shared with the HUD
pub mod stats;

/// Telemetry wire format and line parsing
pub mod telemetry;

/// Utility functions
pub mod utils;

/// Windowed visualization (iced)
pub mod viz;
