//! Measurement report for a set of circles.

use super::circle::Circle;
use super::color::Color;

/// Derived measurements of one labelled circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub label: String,
    pub radius: f64,
    pub area: f64,
    pub circumference: f64,
    pub color: Color,
}

impl Measurement {
    pub fn new(label: &str, circle: &Circle) -> Self {
        Self {
            label: label.to_string(),
            radius: circle.radius(),
            area: circle.area(),
            circumference: circle.circumference(),
            color: circle.color(),
        }
    }
}

/// Render measurements as text, two decimals per value.
pub fn format_report(title: &str, measurements: &[Measurement]) -> String {
    let mut out = format!("=== {} ===\n", title);

    if measurements.is_empty() {
        out.push_str("(no circles)\n");
        return out;
    }

    for m in measurements {
        out.push_str(&format!(
            "{} - Radius: {:.2}, Area: {:.2}, Circumference: {:.2}, Color: {}\n",
            m.label,
            m.radius,
            m.area,
            m.circumference,
            m.color.to_hex()
        ));
    }

    out
}
