//! Drifting polygon entities.

use std::f64::consts::TAU;

use myeongham_core::Rand;
use ratatui::widgets::canvas::{Line, Painter, Shape};

use crate::color::{self, PALETTE};

/// Vertex count range, inclusive.
const SIDES_MIN: i32 = 3;
const SIDES_MAX: i32 = 8;

/// Radius range in pixels, inclusive.
const SIZE_MIN: i32 = 100;
const SIZE_MAX: i32 = 250;

/// Per-axis drift speed spread in pixels per frame.
const DRIFT_SPREAD: f64 = 0.3;

/// Rotation advance per frame, radians.
const SPIN_RATE: f64 = 0.001;

/// Opacity gained per in-view frame.
pub const FADE_IN_RATE: f64 = 0.005;

/// Opacity lost per out-of-view frame.
pub const FADE_OUT_RATE: f64 = 0.002;

/// Opacity a settled in-view entity fades up to.
pub const OPACITY_CEILING: f64 = 0.2;

/// One animated background shape.
///
/// Entities are never destroyed: once faded out beyond the viewport they
/// re-roll their attributes and re-enter from a random edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Center position in viewport pixels.
    pub x: f64,
    pub y: f64,
    /// Vertex count.
    pub sides: u32,
    /// Radius in pixels.
    pub size: f64,
    /// Drift velocity in pixels per frame.
    pub speed_x: f64,
    pub speed_y: f64,
    /// Rotation in radians, monotonically increasing.
    pub rotation: f64,
    /// Index into the fill palette.
    pub palette_index: usize,
    /// Fade state, 0 to the display ceiling.
    pub opacity: f64,
}

impl Polygon {
    /// Spawn a fresh entity at a random in-viewport position with zero
    /// opacity.
    pub(crate) fn spawn(width: f64, height: f64, rng: &mut dyn Rand) -> Self {
        let mut polygon = Self {
            x: f64::from(rng.int_in(0, width as i32)),
            y: f64::from(rng.int_in(0, height as i32)),
            sides: 0,
            size: 0.0,
            speed_x: 0.0,
            speed_y: 0.0,
            rotation: 0.0,
            palette_index: 0,
            opacity: 0.0,
        };
        polygon.roll_shape(rng);
        polygon
    }

    /// Re-roll geometry, color and velocity.
    fn roll_shape(&mut self, rng: &mut dyn Rand) {
        self.sides = rng.int_in(SIDES_MIN, SIDES_MAX) as u32;
        self.size = f64::from(rng.int_in(SIZE_MIN, SIZE_MAX));
        self.speed_x = rng.centered(DRIFT_SPREAD);
        self.speed_y = rng.centered(DRIFT_SPREAD);
        self.rotation = rng.next_f64() * TAU;
        self.palette_index = rng.int_in(0, PALETTE.len() as i32 - 1) as usize;
    }

    /// Advance the entity by one frame.
    ///
    /// Out past the size-padded viewport on any side the entity fades out;
    /// at opacity <= 0 it re-enters from a random edge. In view it fades
    /// toward the display ceiling.
    pub(crate) fn advance(&mut self, width: f64, height: f64, rng: &mut dyn Rand) {
        self.x += self.speed_x;
        self.y += self.speed_y;
        self.rotation += SPIN_RATE;

        let out_of_view = self.x < -self.size
            || self.x > width + self.size
            || self.y < -self.size
            || self.y > height + self.size;

        if out_of_view {
            self.opacity -= FADE_OUT_RATE;
            if self.opacity <= 0.0 {
                self.reenter(width, height, rng);
            }
        } else if self.opacity < OPACITY_CEILING {
            self.opacity += FADE_IN_RATE;
        }
    }

    /// Reset the entity onto a random spawn band just outside the viewport.
    fn reenter(&mut self, width: f64, height: f64, rng: &mut dyn Rand) {
        self.roll_shape(rng);
        self.opacity = 0.0;
        match rng.int_in(0, 3) {
            0 => {
                self.x = f64::from(rng.int_in(0, width as i32));
                self.y = -self.size;
            }
            1 => {
                self.x = width + self.size;
                self.y = f64::from(rng.int_in(0, height as i32));
            }
            2 => {
                self.x = f64::from(rng.int_in(0, width as i32));
                self.y = height + self.size;
            }
            _ => {
                self.x = -self.size;
                self.y = f64::from(rng.int_in(0, height as i32));
            }
        }
    }

    /// Vertices of the outline, closed (last point repeats the first).
    pub fn vertices(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let step = TAU / f64::from(self.sides.max(1));
        (0..=self.sides).map(move |i| {
            let angle = self.rotation + f64::from(i) * step;
            (
                self.x + self.size * angle.cos(),
                self.y + self.size * angle.sin(),
            )
        })
    }

    fn stroke_color(&self) -> ratatui::style::Color {
        color::faded(PALETTE[self.palette_index], self.opacity)
    }
}

impl Shape for Polygon {
    fn draw(&self, painter: &mut Painter) {
        let stroke = self.stroke_color();
        let mut points = self.vertices();
        let Some(mut prev) = points.next() else {
            return;
        };
        for next in points {
            Line {
                x1: prev.0,
                y1: prev.1,
                x2: next.0,
                y2: next.1,
                color: stroke,
            }
            .draw(painter);
            prev = next;
        }
    }
}
