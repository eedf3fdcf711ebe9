//! Canvas to file bytes.

use byte_canvas::Canvas;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

use crate::error::ArtError;
use crate::models::OutputFormat;

/// Encode `canvas` in `format`.
///
/// `optimize` only affects PNG output.
pub fn encode_image(
    canvas: &Canvas,
    format: OutputFormat,
    optimize: bool,
) -> Result<Vec<u8>, ArtError> {
    match format {
        OutputFormat::Png => encode_png(canvas, optimize),
        OutputFormat::Jpeg => {
            // JPEG has no alpha channel
            let rgb = DynamicImage::ImageRgba8(super::to_image(canvas)).to_rgb8();
            let mut buf = Cursor::new(Vec::new());
            rgb.write_to(&mut buf, ImageFormat::Jpeg)?;
            Ok(buf.into_inner())
        }
        OutputFormat::Bmp => {
            let mut buf = Cursor::new(Vec::new());
            super::to_image(canvas).write_to(&mut buf, ImageFormat::Bmp)?;
            Ok(buf.into_inner())
        }
    }
}

/// Encode `canvas` as an 8-bit RGBA PNG, optionally recompressed by oxipng.
pub fn encode_png(canvas: &Canvas, optimize: bool) -> Result<Vec<u8>, ArtError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder =
            png::Encoder::new(&mut buf, canvas.width() as u32, canvas.height() as u32);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(if optimize {
            png::Compression::Fast
        } else {
            png::Compression::Default
        });
        let mut writer = encoder
            .write_header()
            .map_err(|e| ArtError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&canvas.to_rgba_bytes())
            .map_err(|e| ArtError::PngEncode(e.to_string()))?;
    }
    let png_bytes = buf.into_inner();
    if !optimize {
        return Ok(png_bytes);
    }

    let before = png_bytes.len();
    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => {
            tracing::debug!(before, after = optimized.len(), "Optimized PNG");
            Ok(optimized)
        }
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping unoptimized output");
            Ok(png_bytes)
        }
    }
}
