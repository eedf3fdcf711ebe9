//! Retro display filters for upscaled canvases.
//!
//! Both filters take the grid by reference and return a new one.

mod antialias;
mod scanlines;

pub use antialias::{apply_pixel_antialias, EDGE_THRESHOLD};
pub use scanlines::{apply_scanlines, SCANLINE_INTENSITY};
