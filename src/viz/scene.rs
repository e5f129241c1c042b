//! Canvas scene
//!
//! Immediate-mode drawing of the grid, the fading trail, and the cursor.
//! The scene redraws from scratch every frame; the cache only exists so
//! iced can skip work when nothing ticked between two presents.

use std::collections::VecDeque;

use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke};
use iced::{Point, Rectangle, Renderer, Theme};

use crate::cursor::{CursorTracker, TrailPoint};
use crate::viz::theme::{self, colors};

/// Cursor radius while the button is released (px)
const CURSOR_RADIUS: f32 = 10.0;
/// Cursor radius while the button is held (px)
const CURSOR_RADIUS_PRESSED: f32 = 15.0;
/// Crosshair stroke width (px)
const CROSSHAIR_WIDTH: f32 = 2.0;

/// Borrowed view of the state the canvas needs for one frame
pub struct Scene<'a> {
    /// Cursor state to render
    pub tracker: &'a CursorTracker,
    /// Geometry cache, cleared by the app on every tick
    pub cache: &'a Cache,
    /// Background grid spacing (px)
    pub grid_size: f32,
}

impl<Message> canvas::Program<Message> for Scene<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            frame.fill_rectangle(Point::ORIGIN, frame.size(), colors::BACKGROUND);
            draw_grid(frame, self.grid_size);
            draw_trail(frame, self.tracker.trail());
            draw_cursor(frame, self.tracker);
        });

        vec![geometry]
    }
}

fn draw_grid(frame: &mut Frame, grid_size: f32) {
    let size = frame.size();
    let stroke = Stroke::default().with_color(colors::GRID).with_width(1.0);

    let mut x = 0.0;
    while x < size.width {
        frame.stroke(
            &Path::line(Point::new(x, 0.0), Point::new(x, size.height)),
            stroke,
        );
        x += grid_size;
    }

    let mut y = 0.0;
    while y < size.height {
        frame.stroke(
            &Path::line(Point::new(0.0, y), Point::new(size.width, y)),
            stroke,
        );
        y += grid_size;
    }
}

fn draw_trail(frame: &mut Frame, trail: &VecDeque<TrailPoint>) {
    if trail.len() < 2 {
        return;
    }

    let len = trail.len() as f32;
    for i in 1..trail.len() {
        let progress = i as f32 / len;
        let from = trail[i - 1];
        let to = trail[i];

        frame.stroke(
            &Path::line(Point::new(from.x, from.y), Point::new(to.x, to.y)),
            Stroke::default()
                .with_color(theme::trail_color(progress))
                .with_width(theme::trail_width(progress)),
        );
    }
}

fn draw_cursor(frame: &mut Frame, tracker: &CursorTracker) {
    let (x, y) = tracker.position();
    let center = Point::new(x, y);

    let (radius, color) = if tracker.button_pressed() {
        (CURSOR_RADIUS_PRESSED, colors::CURSOR_PRESSED)
    } else {
        (CURSOR_RADIUS, colors::CURSOR_IDLE)
    };

    frame.fill(&Path::circle(center, radius), color);

    let crosshair = Stroke::default()
        .with_color(colors::CROSSHAIR)
        .with_width(CROSSHAIR_WIDTH);
    frame.stroke(
        &Path::line(Point::new(x - radius, y), Point::new(x + radius, y)),
        crosshair,
    );
    frame.stroke(
        &Path::line(Point::new(x, y - radius), Point::new(x, y + radius)),
        crosshair,
    );
}
