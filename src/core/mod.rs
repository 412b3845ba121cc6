//! Core shape model: colors, the drawing surface capability, circles and scenes.

pub mod circle;
pub mod color;
pub mod report;
pub mod scene;
pub mod surface;

pub use circle::{Circle, FALLBACK_RADIUS};
pub use color::Color;
pub use scene::{PlacedCircle, Scene};
pub use surface::{DrawSurface, PaintState, Pen, Rect};
