//! Canvas types and sizing.
//!
//! [`Canvas`] holds RGBA pixels in row-major order; [`compute_side`] derives
//! the square side length a byte buffer needs.

mod dimensions;
mod grid;

pub use dimensions::{compute_side, BYTES_PER_PIXEL};
pub use grid::{Canvas, Rgba};
