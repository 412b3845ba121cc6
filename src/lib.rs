//! Circle Painter - circle shapes drawn onto pluggable surfaces.
//!
//! - [`core`]: the color value, the [`DrawSurface`](core::DrawSurface)
//!   capability, the [`Circle`](core::Circle) shape and scenes of circles
//! - [`render`]: SVG and egui surfaces
//! - [`config`]: JSON scene files

pub mod app;
pub mod config;
pub mod core;
pub mod render;
pub mod utils;
