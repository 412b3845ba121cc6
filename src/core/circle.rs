//! Circle shape with a radius and a color.
//!
//! Radius validation is deliberately lenient: a non-positive radius is
//! corrected silently rather than reported. Construction substitutes
//! [`FALLBACK_RADIUS`], and [`Circle::set_radius`] ignores the value.

use std::f64::consts::PI;

use super::color::Color;
use super::surface::{DrawSurface, Rect, StateGuard};

/// Radius used by the default circle and in place of invalid input.
pub const FALLBACK_RADIUS: f64 = 50.0;

/// Outline width, in pixels, used when drawing.
pub const OUTLINE_WIDTH: u32 = 1;

/// A circle with a positive radius in pixels and a fill/outline color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
    color: Color,
}

impl Circle {
    /// Create a circle. `radius <= 0` (or NaN) yields [`FALLBACK_RADIUS`].
    pub fn new(radius: f64, color: Color) -> Self {
        let radius = if radius > 0.0 { radius } else { FALLBACK_RADIUS };
        Self { radius, color }
    }

    /// Replace the radius if `radius > 0`; otherwise do nothing.
    pub fn set_radius(&mut self, radius: f64) {
        if radius > 0.0 {
            self.radius = radius;
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Pixel box of the circle centered at `(x, y)`.
    ///
    /// Offset and diameter are truncated toward zero separately, so a
    /// radius of 10.7 gives an offset of 10 and a diameter of 21. Huge radii
    /// saturate at the `i32` limits.
    pub fn bounding_box(&self, x: i32, y: i32) -> Rect {
        let offset = self.radius as i32;
        let diameter = (self.radius * 2.0) as i32;
        Rect::new(x.saturating_sub(offset), y.saturating_sub(offset), diameter, diameter)
    }

    /// Draw the circle filled and outlined with its color, centered at `(x, y)`.
    ///
    /// The surface's paint state is the same after the call as before it.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, x: i32, y: i32) {
        let mut surface = StateGuard::new(surface);
        surface.set_fill_color(self.color);
        surface.set_stroke_color(self.color, OUTLINE_WIDTH);
        surface.draw_ellipse(self.bounding_box(x, y));
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(FALLBACK_RADIUS, Color::BLACK)
    }
}
