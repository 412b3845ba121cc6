//! egui painter surface.
//!
//! Collects `egui::Shape`s so a host UI can hand them to its `Painter`.

use egui::epaint::EllipseShape;
use egui::{Color32, Pos2, Shape, Stroke, Vec2};

use crate::core::color::Color;
use crate::core::surface::{DrawSurface, Pen, Rect, StateStack};

impl From<Color> for Color32 {
    fn from(color: Color) -> Self {
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

/// Surface producing egui ellipse shapes, offset by `origin`.
#[derive(Debug, Clone)]
pub struct EguiSurface {
    origin: Pos2,
    shapes: Vec<Shape>,
    stack: StateStack,
}

impl EguiSurface {
    /// `origin` is the screen position of the canvas' top-left corner.
    pub fn new(origin: Pos2) -> Self {
        Self {
            origin,
            shapes: Vec::new(),
            stack: StateStack::new(),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }

    /// Add the collected shapes to `painter`.
    pub fn paint(self, painter: &egui::Painter) {
        painter.extend(self.shapes);
    }
}

impl DrawSurface for EguiSurface {
    fn save_state(&mut self) {
        self.stack.save();
    }

    fn restore_state(&mut self) {
        self.stack.restore();
    }

    fn set_fill_color(&mut self, color: Color) {
        self.stack.current_mut().brush = Some(color);
    }

    fn set_stroke_color(&mut self, color: Color, width: u32) {
        self.stack.current_mut().pen = Some(Pen { color, width });
    }

    fn draw_ellipse(&mut self, bounds: Rect) {
        let (cx, cy) = bounds.center();
        let (rx, ry) = bounds.half_size();
        let state = *self.stack.current();

        let fill = state.brush.map(Color32::from).unwrap_or(Color32::TRANSPARENT);
        let stroke = state
            .pen
            .map(|pen| Stroke::new(pen.width as f32, pen.color))
            .unwrap_or(Stroke::NONE);

        self.shapes.push(Shape::Ellipse(EllipseShape {
            center: self.origin + Vec2::new(cx, cy),
            radius: Vec2::new(rx, ry),
            fill,
            stroke,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::circle::Circle;
    use crate::core::scene::Scene;

    fn ellipse(shape: &Shape) -> &EllipseShape {
        match shape {
            Shape::Ellipse(e) => e,
            other => panic!("expected ellipse, got {:?}", other),
        }
    }

    #[test]
    fn test_color_conversion() {
        assert_eq!(Color32::from(Color::RED), Color32::from_rgb(255, 0, 0));
        assert_eq!(Color32::from(Color::BLACK), Color32::BLACK);
    }

    #[test]
    fn test_circle_becomes_offset_ellipse() {
        let mut surface = EguiSurface::new(Pos2::new(10.0, 20.0));
        Circle::new(10.7, Color::BLUE).draw(&mut surface, 100, 50);

        let shapes = surface.into_shapes();
        assert_eq!(shapes.len(), 1);
        let e = ellipse(&shapes[0]);
        assert_eq!(e.center, Pos2::new(110.5, 70.5));
        assert_eq!(e.radius, Vec2::new(10.5, 10.5));
        assert_eq!(e.fill, Color32::from_rgb(0, 0, 255));
        assert_eq!(e.stroke.width, 1.0);
    }

    #[test]
    fn test_default_state_is_unfilled() {
        let mut surface = EguiSurface::new(Pos2::ZERO);
        surface.draw_ellipse(Rect::new(0, 0, 2, 2));
        assert_eq!(ellipse(&surface.shapes()[0]).fill, Color32::TRANSPARENT);
    }

    #[test]
    fn test_paint_adds_shapes_to_painter() {
        let scene = Scene::demo();
        let mut surface = EguiSurface::new(Pos2::ZERO);
        scene.draw(&mut surface);

        let ctx = egui::Context::default();
        let mut pending = Some(surface);
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            if let Some(surface) = pending.take() {
                surface.paint(&ctx.layer_painter(egui::LayerId::background()));
            }
        });

        let ellipses = output
            .shapes
            .iter()
            .filter(|clipped| matches!(clipped.shape, Shape::Ellipse(_)))
            .count();
        assert_eq!(ellipses, scene.len());
    }

    #[test]
    fn test_paint_outside_frame() {
        let mut surface = EguiSurface::new(Pos2::ZERO);
        Circle::new(5.0, Color::RED).draw(&mut surface, 5, 5);
        let painter = egui::Painter::new(
            egui::Context::default(),
            egui::LayerId::background(),
            egui::Rect::EVERYTHING,
        );
        surface.paint(&painter);
    }

    #[test]
    fn test_scene_shapes() {
        let scene = Scene::demo();
        let mut surface = EguiSurface::new(Pos2::ZERO);
        scene.draw(&mut surface);
        assert_eq!(surface.shapes().len(), scene.len());
    }
}
