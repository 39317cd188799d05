//! Deterministic plot image synthesis
//!
//! A plot id seeds a 10×10 symmetric color grid over a fixed 3-color
//! palette, rendered as a self-contained SVG data URI or a PNG raster.
//! Synthesis is pure and stateless; equal ids yield byte-identical output.

/// Seeded symmetric color matrix generation
pub mod matrix;
/// PNG raster export of plot imagery
pub mod raster;
/// SVG rendering and data-URI encoding
pub mod svg;

pub use matrix::{ColorMatrix, PaletteColor};
pub use svg::synthesize;
