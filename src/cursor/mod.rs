//! Cursor state tracking
//!
//! Accumulates relative motion samples into an absolute cursor position,
//! keeps it inside the window, and records a bounded trail of recent
//! points for rendering.
//!
//! # Movement model
//!
//! The device reports deltas continuously, but the cursor only moves
//! while the button is held. Holding the button and rotating the device
//! draws a stroke; releasing freezes the cursor in place. A fresh
//! `button_press` event starts a new stroke by clearing the trail.

use std::collections::VecDeque;

use tracing::trace;

use crate::telemetry::MouseSample;

/// One recorded cursor position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    /// X coordinate (px)
    pub x: f32,
    /// Y coordinate (px)
    pub y: f32,
}

/// Cursor position, button state, and trail
#[derive(Debug, Clone)]
pub struct CursorTracker {
    /// Window width (px)
    width: f32,
    /// Window height (px)
    height: f32,
    /// Clamp margin (px)
    margin: f32,

    x: f32,
    y: f32,
    button_pressed: bool,

    trail: VecDeque<TrailPoint>,
    trail_capacity: usize,
}

impl CursorTracker {
    /// Create a tracker with the cursor centered in the window.
    pub fn new(width: f32, height: f32, margin: f32, trail_capacity: usize) -> Self {
        Self {
            width,
            height,
            margin,
            x: width / 2.0,
            y: height / 2.0,
            button_pressed: false,
            trail: VecDeque::with_capacity(trail_capacity),
            trail_capacity,
        }
    }

    /// Current cursor position
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Latest button state from the device
    pub fn button_pressed(&self) -> bool {
        self.button_pressed
    }

    /// Recorded trail, oldest point first
    pub fn trail(&self) -> &VecDeque<TrailPoint> {
        &self.trail
    }

    /// Apply one motion sample; returns whether the cursor moved.
    ///
    /// Deltas move the cursor only while the button is held; the button
    /// flag itself is always recorded.
    pub fn apply(&mut self, sample: MouseSample) -> bool {
        let moved = sample.button && sample.has_motion();

        if moved {
            self.x += sample.dx as f32;
            self.y += sample.dy as f32;
            self.clamp();

            self.trail.push_back(TrailPoint {
                x: self.x,
                y: self.y,
            });
            while self.trail.len() > self.trail_capacity {
                self.trail.pop_front();
            }

            trace!(
                "Cursor moved to ({:.0}, {:.0}) by ({}, {})",
                self.x,
                self.y,
                sample.dx,
                sample.dy
            );
        }

        self.button_pressed = sample.button;
        moved
    }

    /// Move the cursor back to the window center and clear the trail.
    pub fn reset(&mut self) {
        self.x = self.width / 2.0;
        self.y = self.height / 2.0;
        self.trail.clear();
    }

    /// Forget the trail without moving the cursor.
    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }

    /// Adopt a new window size, re-clamping the cursor.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.clamp();
    }

    fn clamp(&mut self) {
        self.x = self.x.clamp(self.margin, self.width - self.margin);
        self.y = self.y.clamp(self.margin, self.height - self.margin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample(dx: i32, dy: i32, button: bool) -> MouseSample {
        MouseSample { dx, dy, button }
    }

    #[test]
    fn test_starts_centered() {
        let tracker = CursorTracker::new(1200.0, 800.0, 10.0, 100);
        assert_eq!(tracker.position(), (600.0, 400.0));
        assert!(!tracker.button_pressed());
        assert!(tracker.trail().is_empty());
    }

    #[test]
    fn test_moves_only_while_button_held() {
        let mut tracker = CursorTracker::new(1200.0, 800.0, 10.0, 100);

        assert!(!tracker.apply(sample(30, -20, false)));
        assert_eq!(tracker.position(), (600.0, 400.0));

        assert!(tracker.apply(sample(30, -20, true)));
        assert_eq!(tracker.position(), (630.0, 380.0));
    }

    #[test]
    fn test_zero_delta_is_not_a_movement() {
        let mut tracker = CursorTracker::new(1200.0, 800.0, 10.0, 100);
        assert!(!tracker.apply(sample(0, 0, true)));
        assert!(tracker.trail().is_empty());
        // The button state is still recorded
        assert!(tracker.button_pressed());
    }

    #[test]
    fn test_clamps_to_window_edges() {
        let mut tracker = CursorTracker::new(1200.0, 800.0, 10.0, 100);

        tracker.apply(sample(10_000, 10_000, true));
        assert_eq!(tracker.position(), (1190.0, 790.0));

        tracker.apply(sample(-20_000, -20_000, true));
        assert_eq!(tracker.position(), (10.0, 10.0));
    }

    #[test]
    fn test_trail_is_bounded() {
        let mut tracker = CursorTracker::new(1200.0, 800.0, 10.0, 5);
        for _ in 0..20 {
            tracker.apply(sample(1, 0, true));
        }
        assert_eq!(tracker.trail().len(), 5);

        // Oldest points were discarded: the front is from the 16th move
        assert_eq!(tracker.trail().front().unwrap().x, 616.0);
    }

    #[test]
    fn test_clear_trail_keeps_position() {
        let mut tracker = CursorTracker::new(1200.0, 800.0, 10.0, 100);
        tracker.apply(sample(5, 5, true));
        assert_eq!(tracker.trail().len(), 1);

        tracker.clear_trail();
        assert!(tracker.trail().is_empty());
        assert_eq!(tracker.position(), (605.0, 405.0));
    }

    #[test]
    fn test_reset_recenters_and_clears() {
        let mut tracker = CursorTracker::new(1200.0, 800.0, 10.0, 100);
        tracker.apply(sample(100, 50, true));
        tracker.reset();
        assert_eq!(tracker.position(), (600.0, 400.0));
        assert!(tracker.trail().is_empty());
    }

    #[test]
    fn test_resize_reclamps() {
        let mut tracker = CursorTracker::new(1200.0, 800.0, 10.0, 100);
        tracker.apply(sample(10_000, 10_000, true));
        assert_eq!(tracker.position(), (1190.0, 790.0));

        tracker.resize(640.0, 480.0);
        assert_eq!(tracker.position(), (630.0, 470.0));
    }

    proptest! {
        /// Clamping holds for any delta sequence.
        #[test]
        fn prop_cursor_stays_in_bounds(
            deltas in prop::collection::vec(
                (-2000i32..2000, -2000i32..2000, any::<bool>()),
                0..300,
            )
        ) {
            let mut tracker = CursorTracker::new(1200.0, 800.0, 10.0, 100);
            for (dx, dy, button) in deltas {
                tracker.apply(sample(dx, dy, button));
                let (x, y) = tracker.position();
                prop_assert!((10.0..=1190.0).contains(&x));
                prop_assert!((10.0..=790.0).contains(&y));
                prop_assert!(tracker.trail().len() <= 100);
            }
        }
    }
}
