//! Frame parsing for the line-delimited JSON telemetry stream.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Telemetry parsing error types
#[derive(Error, Debug)]
pub enum WireError {
    /// Line looked like JSON but did not parse
    #[error("malformed JSON frame: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

/// Relative motion sample from the device
///
/// All fields are optional on the wire; a missing delta means no movement
/// on that axis and a missing button means released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MouseSample {
    /// Horizontal delta (px, positive = right)
    #[serde(default)]
    pub dx: i32,

    /// Vertical delta (px, positive = down)
    #[serde(default)]
    pub dy: i32,

    /// Button held during this sample
    #[serde(default)]
    pub button: bool,
}

impl MouseSample {
    /// True when either axis reports motion
    pub fn has_motion(&self) -> bool {
        self.dx != 0 || self.dy != 0
    }
}

/// One decoded line from the telemetry stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelemetryFrame {
    /// Relative motion sample
    Mouse(MouseSample),
    /// Discrete device event
    Event(String),
    /// Device status message
    Status(String),
    /// Plain-text device output (line did not start with `{`)
    Raw(String),
    /// Valid JSON object without any recognized key
    Unrecognized(String),
}

/// Wire-level view of a frame; keys are checked in priority order below.
#[derive(Deserialize)]
struct RawFrame {
    mouse: Option<MouseSample>,
    event: Option<String>,
    status: Option<String>,
}

/// Decode one line of telemetry.
///
/// The line is trimmed first (serial links deliver CRLF). Non-JSON lines
/// are not an error: firmware boot chatter shares the link with telemetry.
/// When several known keys appear in one object, `mouse` wins over
/// `event`, which wins over `status`.
pub fn parse_line(line: &str) -> Result<TelemetryFrame, WireError> {
    let line = line.trim();

    if !line.starts_with('{') {
        return Ok(TelemetryFrame::Raw(line.to_string()));
    }

    let frame: RawFrame = serde_json::from_str(line)?;

    if let Some(mouse) = frame.mouse {
        Ok(TelemetryFrame::Mouse(mouse))
    } else if let Some(event) = frame.event {
        Ok(TelemetryFrame::Event(event))
    } else if let Some(status) = frame.status {
        Ok(TelemetryFrame::Status(status))
    } else {
        Ok(TelemetryFrame::Unrecognized(line.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mouse_sample() {
        let frame = parse_line(r#"{"mouse": {"dx": 3, "dy": -2, "button": true}}"#).unwrap();
        assert_eq!(
            frame,
            TelemetryFrame::Mouse(MouseSample {
                dx: 3,
                dy: -2,
                button: true,
            })
        );
    }

    #[test]
    fn test_parse_mouse_defaults() {
        let frame = parse_line(r#"{"mouse": {}}"#).unwrap();
        assert_eq!(frame, TelemetryFrame::Mouse(MouseSample::default()));

        let frame = parse_line(r#"{"mouse": {"dx": 5}}"#).unwrap();
        assert_eq!(
            frame,
            TelemetryFrame::Mouse(MouseSample {
                dx: 5,
                dy: 0,
                button: false,
            })
        );
    }

    #[test]
    fn test_parse_event_and_status() {
        let frame = parse_line(r#"{"event": "button_press"}"#).unwrap();
        assert_eq!(frame, TelemetryFrame::Event("button_press".to_string()));

        let frame = parse_line(r#"{"status": "calibrating"}"#).unwrap();
        assert_eq!(frame, TelemetryFrame::Status("calibrating".to_string()));
    }

    #[test]
    fn test_key_priority_mouse_wins() {
        let frame =
            parse_line(r#"{"event": "x", "mouse": {"dx": 1, "dy": 1, "button": false}}"#).unwrap();
        assert!(matches!(frame, TelemetryFrame::Mouse(_)));

        let frame = parse_line(r#"{"status": "ok", "event": "button_press"}"#).unwrap();
        assert_eq!(frame, TelemetryFrame::Event("button_press".to_string()));
    }

    #[test]
    fn test_non_json_is_raw_output() {
        let frame = parse_line("BNO055 ready, calibration: 3/3").unwrap();
        assert_eq!(
            frame,
            TelemetryFrame::Raw("BNO055 ready, calibration: 3/3".to_string())
        );
    }

    #[test]
    fn test_crlf_and_whitespace_trimmed() {
        let frame = parse_line("  {\"event\": \"wake\"}\r\n").unwrap();
        assert_eq!(frame, TelemetryFrame::Event("wake".to_string()));
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(parse_line(r#"{"mouse": {"dx": }"#).is_err());
        assert!(parse_line("{not json").is_err());
    }

    #[test]
    fn test_unknown_keys_ignored_and_unrecognized_object() {
        let frame = parse_line(r#"{"mouse": {"dx": 1, "accel": 9.8}}"#).unwrap();
        assert!(matches!(frame, TelemetryFrame::Mouse(_)));

        let frame = parse_line(r#"{"battery": 87}"#).unwrap();
        assert!(matches!(frame, TelemetryFrame::Unrecognized(_)));
    }
}
