//! Windowed visualization built on iced's Elm Architecture.
//!
//! A frame-rate subscription drives everything: each tick drains the
//! telemetry channel, updates the cursor state, and invalidates the
//! canvas. The scene itself is immediate-mode drawing (grid, fading
//! trail, cursor); the HUD is plain widgets above and below it.

pub mod app;
pub mod scene;
pub mod theme;

pub use app::{Message, VisualizerApp};
