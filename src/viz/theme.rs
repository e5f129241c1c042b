//! Scene and HUD palette.

use iced::Color;

/// Colors follow the original device tool: dark scene, blue cursor that
/// flips red under the button, cyan-fading trail.
pub mod colors {
    use iced::Color;

    pub const BACKGROUND: Color = Color::BLACK;
    pub const GRID: Color = Color::from_rgb(0.16, 0.16, 0.19);

    pub const CURSOR_IDLE: Color = Color::from_rgb(0.0, 0.0, 1.0);
    pub const CURSOR_PRESSED: Color = Color::from_rgb(1.0, 0.0, 0.0);
    pub const CROSSHAIR: Color = Color::WHITE;

    pub const HUD_TEXT: Color = Color::from_rgb(0.9, 0.9, 0.9);
    pub const HUD_MUTED: Color = Color::from_rgb(0.55, 0.55, 0.6);

    pub const CONNECTED: Color = Color::from_rgb(0.2, 0.7, 0.3);
    pub const DISCONNECTED: Color = Color::from_rgb(0.9, 0.2, 0.2);

    pub const BUTTON_PRESSED: Color = CURSOR_PRESSED;
    pub const BUTTON_RELEASED: Color = Color::from_rgb(0.5, 0.5, 0.5);

    pub const HUD_BAR: Color = Color::from_rgb(0.09, 0.09, 0.11);
}

/// Trail color at `progress` ∈ [0, 1], 1 being the newest segment.
///
/// Green ramps with recency over a constant blue, so the stroke fades
/// from deep blue at the tail to cyan at the cursor; alpha fades the
/// oldest segments out entirely.
pub fn trail_color(progress: f32) -> Color {
    let progress = progress.clamp(0.0, 1.0);
    Color::from_rgba(0.0, progress, 1.0, progress)
}

/// Trail stroke width at `progress` ∈ [0, 1]: 1 px at the tail, 3 px at
/// the newest segment.
pub fn trail_width(progress: f32) -> f32 {
    (3.0 * progress.clamp(0.0, 1.0)).max(1.0)
}

/// HUD color for the link state.
pub fn connection_color(connected: bool) -> Color {
    if connected {
        colors::CONNECTED
    } else {
        colors::DISCONNECTED
    }
}

/// HUD color for the button state.
pub fn button_state_color(pressed: bool) -> Color {
    if pressed {
        colors::BUTTON_PRESSED
    } else {
        colors::BUTTON_RELEASED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_fade_is_linear_in_green_and_alpha() {
        let mid = trail_color(0.5);
        assert_eq!(mid.g, 0.5);
        assert_eq!(mid.b, 1.0);
        assert_eq!(mid.a, 0.5);

        let newest = trail_color(1.0);
        assert_eq!(newest.g, 1.0);
        assert_eq!(newest.a, 1.0);
    }

    #[test]
    fn test_trail_color_clamps_progress() {
        assert_eq!(trail_color(2.0).g, 1.0);
        assert_eq!(trail_color(-1.0).g, 0.0);
    }

    #[test]
    fn test_trail_width_range() {
        assert_eq!(trail_width(0.0), 1.0);
        assert_eq!(trail_width(1.0), 3.0);
        // Thin segments never vanish
        assert_eq!(trail_width(0.1), 1.0);
        assert_eq!(trail_width(0.5), 1.5);
    }
}
