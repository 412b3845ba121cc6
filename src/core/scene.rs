//! Ordered collection of circles placed on a canvas.

use super::circle::Circle;
use super::color::Color;
use super::report::Measurement;
use super::surface::DrawSurface;

/// A circle together with where it is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCircle {
    pub label: String,
    pub circle: Circle,
    /// Center x in pixels.
    pub x: i32,
    /// Center y in pixels.
    pub y: i32,
}

/// Canvas description plus the circles drawn on it, in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background: Color,
    circles: Vec<PlacedCircle>,
}

impl Scene {
    pub fn new(title: impl Into<String>, width: u32, height: u32, background: Color) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            background,
            circles: Vec::new(),
        }
    }

    /// The circle-drawing demo canvas: nine circles on a green 800x600 canvas.
    pub fn demo() -> Self {
        let mut scene = Self::new("Circle Drawing Demo", 800, 600, Color::DARK_GREEN);

        scene.push("Red", Circle::new(80.0, Color::RED), 200, 150);
        scene.push("Blue", Circle::new(60.0, Color::BLUE), 400, 150);
        scene.push("Green", Circle::new(100.0, Color::GREEN), 300, 300);
        scene.push("Yellow", Circle::new(40.0, Color::YELLOW), 150, 400);
        scene.push("Purple", Circle::new(70.0, Color::PURPLE), 500, 400);

        scene.push("Orange", Circle::new(50.0, Color::ORANGE), 600, 200);
        scene.push("Pink", Circle::new(45.0, Color::PINK), 100, 250);
        scene.push("Cyan", Circle::new(35.0, Color::CYAN), 450, 500);

        scene.push("Background", Circle::new(120.0, Color::LIGHT_GRAY), 650, 100);
        scene
    }

    pub fn push(&mut self, label: impl Into<String>, circle: Circle, x: i32, y: i32) {
        self.circles.push(PlacedCircle {
            label: label.into(),
            circle,
            x,
            y,
        });
    }

    pub fn circles(&self) -> &[PlacedCircle] {
        &self.circles
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Draw every circle in insertion order.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for placed in &self.circles {
            placed.circle.draw(surface, placed.x, placed.y);
        }
    }

    pub fn measurements(&self) -> Vec<Measurement> {
        self.circles
            .iter()
            .map(|placed| Measurement::new(&placed.label, &placed.circle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::{Rect, RecordingSurface, SurfaceCommand};

    #[test]
    fn test_demo_scene() {
        let scene = Scene::demo();
        assert_eq!(scene.len(), 9);
        assert_eq!((scene.width, scene.height), (800, 600));
        assert_eq!(scene.background, Color::DARK_GREEN);

        let green = &scene.circles()[2];
        assert_eq!(green.label, "Green");
        assert_eq!(green.circle.radius(), 100.0);
        assert_eq!((green.x, green.y), (300, 300));
    }

    #[test]
    fn test_draws_in_insertion_order() {
        let mut scene = Scene::new("t", 100, 100, Color::WHITE);
        scene.push("a", Circle::new(5.0, Color::RED), 10, 10);
        scene.push("b", Circle::new(2.5, Color::BLUE), 50, 60);

        let mut surface = RecordingSurface::new();
        scene.draw(&mut surface);

        let ellipses: Vec<_> = surface.ellipses().collect();
        assert_eq!(ellipses.len(), 2);
        assert_eq!(ellipses[0].0, Rect::new(5, 5, 10, 10));
        assert_eq!(ellipses[0].1.brush, Some(Color::RED));
        assert_eq!(ellipses[1].0, Rect::new(48, 58, 5, 5));
        assert_eq!(ellipses[1].1.brush, Some(Color::BLUE));
    }

    #[test]
    fn test_sequential_draws_do_not_leak_state() {
        let scene = Scene::demo();
        let mut surface = RecordingSurface::new();
        let before = *surface.state();

        scene.draw(&mut surface);

        assert_eq!(*surface.state(), before);
        assert_eq!(surface.depth(), 0);
        let saves = surface
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, SurfaceCommand::Save))
            .count();
        assert_eq!(saves, scene.len());
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new("empty", 10, 10, Color::BLACK);
        assert!(scene.is_empty());
        assert!(scene.measurements().is_empty());

        let mut surface = RecordingSurface::new();
        scene.draw(&mut surface);
        assert!(surface.commands().is_empty());
    }
}
