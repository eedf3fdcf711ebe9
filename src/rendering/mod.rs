pub mod encode;
pub mod enhance;
pub mod quantize;

pub use encode::{encode_image, encode_png};
pub use enhance::{apply_enhancements, EnhanceOptions};
pub use quantize::{median_cut_palette, posterize};

use byte_canvas::{Canvas, Rgba};
use image::RgbaImage;

/// Copy a canvas into an `image` buffer.
pub(crate) fn to_image(canvas: &Canvas) -> RgbaImage {
    RgbaImage::from_fn(canvas.width() as u32, canvas.height() as u32, |x, y| {
        image::Rgba(canvas.get(x as usize, y as usize).to_bytes())
    })
}

/// Copy an `image` buffer back into a canvas.
pub(crate) fn from_image(image: &RgbaImage) -> Canvas {
    let pixels = image.pixels().map(|p| Rgba::from_bytes(p.0)).collect();
    Canvas::from_pixels(image.width() as usize, image.height() as usize, pixels)
}
