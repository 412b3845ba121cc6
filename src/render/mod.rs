//! Concrete drawing surfaces.

pub mod egui_surface;
pub mod svg;

pub use egui_surface::EguiSurface;
pub use svg::SvgSurface;
