//! CRT scanline overlay.

use crate::canvas::{Canvas, Rgba};

/// Fraction of brightness removed on a scanline row.
pub const SCANLINE_INTENSITY: f64 = 0.4;

/// Scanline period when the source side is unknown.
const FALLBACK_PIXEL_HEIGHT: usize = 2;

/// Rows per source pixel after upscaling, used as the scanline period.
fn pixel_height(height: usize, original_side: usize) -> usize {
    match height.checked_div(original_side) {
        Some(period) if period > 0 => period,
        _ => FALLBACK_PIXEL_HEIGHT,
    }
}

#[inline]
fn darken(channel: u8) -> u8 {
    (channel as f64 * (1.0 - SCANLINE_INTENSITY)) as u8
}

/// Darken the last row of every upscaled source pixel.
///
/// `original_side` is the canvas side before upscaling. Row `y` is darkened
/// when `y % period == period - 1`, where `period = height / original_side`.
/// A period of 1 darkens every row. When `original_side` is 0, or larger
/// than the height, the period falls back to 2. Alpha is left alone.
///
/// # Example
///
/// ```
/// use byte_canvas::{apply_scanlines, Canvas, Rgba};
///
/// let grid = Canvas::filled(1, 4, Rgba::opaque(100, 100, 100));
/// let lined = apply_scanlines(&grid, 2);
///
/// assert_eq!(lined.get(0, 0), Rgba::opaque(100, 100, 100));
/// assert_eq!(lined.get(0, 1), Rgba::opaque(60, 60, 60));
/// ```
pub fn apply_scanlines(canvas: &Canvas, original_side: usize) -> Canvas {
    let period = pixel_height(canvas.height(), original_side);
    let mut output = canvas.clone();
    let width = output.width();
    if width == 0 {
        return output;
    }

    for (y, row) in output.pixels_mut().chunks_mut(width).enumerate() {
        if y % period != period - 1 {
            continue;
        }
        for pixel in row {
            *pixel = Rgba::new(darken(pixel.r), darken(pixel.g), darken(pixel.b), pixel.a);
        }
    }
    output
}
