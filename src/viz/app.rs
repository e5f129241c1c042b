//! Main iced application for the visualizer window
//!
//! Implements the Elm Architecture pattern: State -> View -> Message -> Update -> State.
//! A frame-rate tick drains the telemetry channel and invalidates the
//! scene; keyboard messages mirror the original tool's bindings.

use std::time::Duration;

use crossbeam_channel::Receiver;
use iced::widget::canvas::{Cache, Canvas};
use iced::widget::{column, container, row, space, text};
use iced::{keyboard, Alignment, Background, Element, Length, Subscription, Task};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::cursor::CursorTracker;
use crate::serial::ReaderEvent;
use crate::stats::SessionStats;
use crate::telemetry::{self, TelemetryFrame};
use crate::viz::scene::Scene;
use crate::viz::theme;

/// Messages driving the visualizer
#[derive(Debug, Clone)]
pub enum Message {
    /// Frame tick: drain telemetry and redraw
    Tick,
    /// `R`: move the cursor back to center and clear the trail
    ResetCursor,
    /// `C`: clear the trail
    ClearTrail,
    /// `Q`/`Esc`: close the window
    Quit,
}

/// Visualizer window state
pub struct VisualizerApp {
    config: Config,
    tracker: CursorTracker,
    stats: SessionStats,
    rx: Receiver<ReaderEvent>,
    port_name: String,
    connected: bool,
    scene_cache: Cache,
}

impl VisualizerApp {
    /// Build the app around an already-connected reader channel.
    pub fn new(
        config: Config,
        port_name: String,
        rx: Receiver<ReaderEvent>,
        stats: SessionStats,
    ) -> (Self, Task<Message>) {
        let tracker = CursorTracker::new(
            config.display.width as f32,
            config.display.height as f32,
            config.display.margin,
            config.trail.capacity,
        );

        let app = Self {
            config,
            tracker,
            stats,
            rx,
            port_name,
            connected: true,
            scene_cache: Cache::new(),
        };

        (app, Task::none())
    }

    /// Handle one message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                while let Ok(event) = self.rx.try_recv() {
                    match event {
                        ReaderEvent::Line(line) => {
                            self.stats.record_line();
                            self.process_line(&line);
                        }
                        ReaderEvent::Disconnected { reason } => {
                            self.stats.record_read_error();
                            self.connected = false;
                            warn!("Serial link lost on {}: {}", self.port_name, reason);
                        }
                    }
                }

                self.scene_cache.clear();
                Task::none()
            }

            Message::ResetCursor => {
                self.tracker.reset();
                self.scene_cache.clear();
                info!("Cursor position reset");
                Task::none()
            }

            Message::ClearTrail => {
                self.tracker.clear_trail();
                self.scene_cache.clear();
                info!("Trail cleared");
                Task::none()
            }

            Message::Quit => iced::exit(),
        }
    }

    fn process_line(&mut self, line: &str) {
        match telemetry::parse_line(line) {
            Ok(TelemetryFrame::Mouse(sample)) => {
                self.stats.record_frame();
                if self.tracker.apply(sample) {
                    self.stats.record_movement();
                }
            }
            Ok(TelemetryFrame::Event(event)) => {
                self.stats.record_frame();
                info!("Device event: {}", event);
                if event == telemetry::EVENT_BUTTON_PRESS {
                    self.stats.record_button_press();
                    // A new press starts a fresh stroke
                    self.tracker.clear_trail();
                }
            }
            Ok(TelemetryFrame::Status(status)) => {
                self.stats.record_frame();
                info!("Device status: {}", status);
            }
            Ok(TelemetryFrame::Raw(output)) => {
                info!("Device: {}", output);
            }
            Ok(TelemetryFrame::Unrecognized(frame)) => {
                debug!("Unrecognized telemetry frame: {}", frame);
            }
            Err(e) => {
                self.stats.record_parse_error();
                warn!("Dropped malformed line: {}", e);
            }
        }
    }

    /// Render the window.
    pub fn view(&self) -> Element<'_, Message> {
        let scene = Canvas::new(Scene {
            tracker: &self.tracker,
            cache: &self.scene_cache,
            grid_size: self.config.display.grid_size as f32,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        column![self.view_hud(), scene, self.view_footer()]
            .spacing(0)
            .into()
    }

    /// Status bar: link state, button state, position, counters.
    fn view_hud(&self) -> Element<'_, Message> {
        let connection_color = theme::connection_color(self.connected);
        let connection = text(format!(
            "Serial: {} ({})",
            if self.connected {
                "Connected"
            } else {
                "Disconnected"
            },
            self.port_name,
        ))
        .size(14)
        .style(move |_theme| text::Style {
            color: Some(connection_color),
        });

        let button_color = theme::button_state_color(self.tracker.button_pressed());
        let button = text(format!(
            "Button: {}",
            if self.tracker.button_pressed() {
                "PRESSED"
            } else {
                "Released"
            }
        ))
        .size(14)
        .style(move |_theme| text::Style {
            color: Some(button_color),
        });

        let (x, y) = self.tracker.position();
        let position = text(format!("Position: ({}, {})", x.round() as i32, y.round() as i32))
            .size(14)
            .style(|_theme| text::Style {
                color: Some(theme::colors::HUD_TEXT),
            });

        let snapshot = self.stats.snapshot();
        let counters = text(format!(
            "Movements: {}   Presses: {}   Lines: {} ({} errors)",
            snapshot.movements,
            snapshot.button_presses,
            snapshot.lines_received,
            snapshot.parse_errors + snapshot.read_errors,
        ))
        .size(12)
        .style(|_theme| text::Style {
            color: Some(theme::colors::HUD_MUTED),
        });

        container(
            row![
                connection,
                button,
                position,
                space().width(Length::Fill),
                counters,
            ]
            .spacing(24)
            .align_y(Alignment::Center)
            .padding([8, 16]),
        )
        .style(|_theme| container::Style {
            background: Some(Background::Color(theme::colors::HUD_BAR)),
            ..Default::default()
        })
        .width(Length::Fill)
        .into()
    }

    /// Key-binding hints.
    fn view_footer(&self) -> Element<'_, Message> {
        let hints = text(
            "Hold the device button and rotate to draw  -  R: reset cursor   C: clear trail   Q/Esc: quit",
        )
        .size(12)
        .style(|_theme| text::Style {
            color: Some(theme::colors::HUD_MUTED),
        });

        container(row![hints].padding([6, 16]))
            .style(|_theme| container::Style {
                background: Some(Background::Color(theme::colors::HUD_BAR)),
                ..Default::default()
            })
            .width(Length::Fill)
            .into()
    }

    /// Subscriptions: frame tick plus keyboard bindings.
    pub fn subscription(&self) -> Subscription<Message> {
        let fps = self.config.display.target_fps.max(1);
        let frame_interval = Duration::from_micros(1_000_000 / u64::from(fps));

        Subscription::batch([
            iced::time::every(frame_interval).map(|_| Message::Tick),
            keyboard::listen().filter_map(|event| match event {
                keyboard::Event::KeyPressed {
                    key, modifiers, ..
                } => Self::handle_key(key, modifiers),
                _ => None,
            }),
        ])
    }

    fn handle_key(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
        match key.as_ref() {
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::Quit),
            keyboard::Key::Character(c) => match c {
                "q" | "Q" => Some(Message::Quit),
                "r" | "R" => Some(Message::ResetCursor),
                "c" | "C" => Some(Message::ClearTrail),
                _ => None,
            },
            _ => None,
        }
    }
}
