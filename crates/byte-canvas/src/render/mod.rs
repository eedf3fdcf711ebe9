//! Canvas assembly: raw bytes to a square RGBA grid.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::canvas::{Canvas, Rgba};
use crate::color::ColorMode;
use crate::layout::EffectStyle;

/// Render `buffer` onto a `side × side` canvas.
///
/// Each pixel reads three consecutive bytes starting at the offset chosen by
/// `effect` (see [`EffectStyle::source_offset`]); channel bytes past the end
/// of the buffer read as 0, so raster styles leave the canvas tail black. The triple
/// goes through `color_mode` and the pixel is written fully opaque. An empty
/// buffer produces an all-black canvas.
///
/// With the `parallel` feature rows are filled concurrently. Each row is
/// written by exactly one worker and the buffer is only read.
///
/// # Example
///
/// ```
/// use byte_canvas::{render_canvas, ColorMode, EffectStyle, Rgba};
///
/// let canvas = render_canvas(&[100, 150, 200], 1, EffectStyle::None, ColorMode::Complement);
/// assert_eq!(canvas.get(0, 0), Rgba::opaque(155, 105, 55));
/// ```
pub fn render_canvas(
    buffer: &[u8],
    side: usize,
    effect: EffectStyle,
    color_mode: ColorMode,
) -> Canvas {
    let mut canvas = Canvas::square(side);
    if side == 0 {
        return canvas;
    }

    #[cfg(feature = "parallel")]
    canvas
        .pixels_mut()
        .par_chunks_mut(side)
        .enumerate()
        .for_each(|(y, row)| fill_row(row, y, buffer, side, effect, color_mode));

    #[cfg(not(feature = "parallel"))]
    canvas
        .pixels_mut()
        .chunks_mut(side)
        .enumerate()
        .for_each(|(y, row)| fill_row(row, y, buffer, side, effect, color_mode));

    canvas
}

fn fill_row(
    row: &mut [Rgba],
    y: usize,
    buffer: &[u8],
    side: usize,
    effect: EffectStyle,
    color_mode: ColorMode,
) {
    for (x, pixel) in row.iter_mut().enumerate() {
        *pixel = render_pixel(buffer, x, y, side, effect, color_mode);
    }
}

#[inline]
fn render_pixel(
    buffer: &[u8],
    x: usize,
    y: usize,
    side: usize,
    effect: EffectStyle,
    color_mode: ColorMode,
) -> Rgba {
    if buffer.is_empty() {
        return Rgba::opaque(0, 0, 0);
    }
    let offset = effect.source_offset(x, y, side, buffer.len());
    let channel = |i: usize| buffer.get(offset + i).copied().unwrap_or(0);
    let [r, g, b] = color_mode.transform(channel(0), channel(1), channel(2));
    Rgba::opaque(r, g, b)
}
