//! SVG document surface.
//!
//! Each ellipse becomes one `<ellipse>` element styled from the paint state
//! active when it was drawn.

use crate::core::color::Color;
use crate::core::surface::{DrawSurface, Pen, Rect, StateStack};

/// Builds an SVG document in memory.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    background: Option<Color>,
    body: String,
    stack: StateStack,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: None,
            body: String::new(),
            stack: StateStack::new(),
        }
    }

    /// Fill the whole canvas with `color` before any shapes.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Close the document and return its text.
    pub fn finish(self) -> String {
        let mut doc = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        );

        if let Some(bg) = self.background {
            doc.push_str(&format!(
                "  <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"",
                self.width,
                self.height,
                bg.to_hex()
            ));
            if !bg.is_opaque() {
                doc.push_str(&format!(" fill-opacity=\"{}\"", fmt_num(bg.opacity())));
            }
            doc.push_str("/>\n");
        }

        doc.push_str(&self.body);
        doc.push_str("</svg>\n");
        doc
    }
}

impl DrawSurface for SvgSurface {
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

        self.body.push_str(&format!(
            "  <ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\"",
            fmt_num(cx),
            fmt_num(cy),
            fmt_num(rx),
            fmt_num(ry)
        ));

        match state.brush {
            Some(fill) => {
                self.body.push_str(&format!(" fill=\"{}\"", fill.to_hex()));
                if !fill.is_opaque() {
                    self.body
                        .push_str(&format!(" fill-opacity=\"{}\"", fmt_num(fill.opacity())));
                }
            }
            None => self.body.push_str(" fill=\"none\""),
        }

        match state.pen {
            Some(pen) => {
                self.body.push_str(&format!(
                    " stroke=\"{}\" stroke-width=\"{}\"",
                    pen.color.to_hex(),
                    pen.width
                ));
                if !pen.color.is_opaque() {
                    self.body
                        .push_str(&format!(" stroke-opacity=\"{}\"", fmt_num(pen.color.opacity())));
                }
            }
            None => self.body.push_str(" stroke=\"none\""),
        }

        self.body.push_str("/>\n");
    }
}

/// Shortest decimal form: `10`, `10.5`, `0.502`.
fn fmt_num(value: f32) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
