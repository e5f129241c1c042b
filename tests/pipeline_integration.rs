//! Telemetry pipeline integration tests
//!
//! Drives the wire → cursor and channel → app paths with scripted line
//! sequences. No hardware and no window required.

use airmouse_viz::config::Config;
use airmouse_viz::cursor::CursorTracker;
use airmouse_viz::serial::ReaderEvent;
use airmouse_viz::stats::SessionStats;
use airmouse_viz::telemetry::{self, TelemetryFrame};
use airmouse_viz::viz::{Message, VisualizerApp};

use crossbeam_channel::{bounded, Sender};

/// Parse a scripted stream and apply every motion sample to the tracker.
fn replay_into(tracker: &mut CursorTracker, lines: &[&str]) {
    for line in lines {
        if let Ok(TelemetryFrame::Mouse(sample)) = telemetry::parse_line(line) {
            tracker.apply(sample);
        }
    }
}

#[test]
fn test_wire_to_cursor_stroke() {
    let mut tracker = CursorTracker::new(1200.0, 800.0, 10.0, 100);

    replay_into(
        &mut tracker,
        &[
            r#"{"mouse": {"dx": 20, "dy": 0, "button": true}}"#,
            r#"{"mouse": {"dx": 20, "dy": 10, "button": true}}"#,
            // Released: this delta must not move the cursor
            r#"{"mouse": {"dx": 500, "dy": 500, "button": false}}"#,
            r#"{"mouse": {"dx": -10, "dy": 0, "button": true}}"#,
        ],
    );

    assert_eq!(tracker.position(), (630.0, 410.0));
    assert_eq!(tracker.trail().len(), 3);
    assert!(tracker.button_pressed());
}

#[test]
fn test_wire_to_cursor_stays_clamped() {
    let mut tracker = CursorTracker::new(640.0, 480.0, 10.0, 100);

    let sweep = r#"{"mouse": {"dx": 300, "dy": 300, "button": true}}"#;
    replay_into(&mut tracker, &[sweep; 10]);

    assert_eq!(tracker.position(), (630.0, 470.0));
}

fn boot_app() -> (VisualizerApp, Sender<ReaderEvent>, SessionStats) {
    let (tx, rx) = bounded(64);
    let stats = SessionStats::new();
    let (app, _task) = VisualizerApp::new(
        Config::default(),
        "/dev/ttyTEST".to_string(),
        rx,
        stats.clone(),
    );
    (app, tx, stats)
}

#[test]
fn test_scripted_session_statistics() {
    let (mut app, tx, stats) = boot_app();

    let lines = [
        "BNO055 ready, calibration 3/3",
        r#"{"status": "streaming"}"#,
        r#"{"event": "button_press"}"#,
        r#"{"mouse": {"dx": 5, "dy": 5, "button": true}}"#,
        r#"{"mouse": {"dx": 0, "dy": 0, "button": true}}"#,
        r#"{"mouse": {"dx": 3, "dy": -2, "button": true}}"#,
        "{malformed",
        r#"{"event": "button_release"}"#,
    ];
    for line in lines {
        tx.send(ReaderEvent::Line(line.to_string())).unwrap();
    }

    let _ = app.update(Message::Tick);

    let snapshot = stats.snapshot();
    assert_eq!(snapshot.lines_received, 8);
    // Raw device chatter and the malformed line are not frames
    assert_eq!(snapshot.frames_parsed, 6);
    assert_eq!(snapshot.parse_errors, 1);
    // The zero-delta sample is not a movement
    assert_eq!(snapshot.movements, 2);
    assert_eq!(snapshot.button_presses, 1);
    assert_eq!(snapshot.read_errors, 0);
}

#[test]
fn test_disconnect_is_counted_once() {
    let (mut app, tx, stats) = boot_app();

    tx.send(ReaderEvent::Line(
        r#"{"mouse": {"dx": 1, "dy": 1, "button": true}}"#.to_string(),
    ))
    .unwrap();
    tx.send(ReaderEvent::Disconnected {
        reason: "device unplugged".to_string(),
    })
    .unwrap();

    let _ = app.update(Message::Tick);
    // Later ticks with an empty channel change nothing
    let _ = app.update(Message::Tick);

    let snapshot = stats.snapshot();
    assert_eq!(snapshot.read_errors, 1);
    assert_eq!(snapshot.movements, 1);
}
