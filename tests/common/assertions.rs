//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::io::Cursor;
use std::path::Path;

/// Decoded RGBA8 image
pub struct DecodedPng {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedPng {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]]
    }
}

/// Assert `bytes` is a valid PNG and decode it to RGBA8
pub fn assert_png(bytes: &[u8]) -> DecodedPng {
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );

    // Optimized files may use palette, RGB or gray encodings; normalize to RGBA8
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info().expect("Failed to read PNG header");
    let mut data = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut data).expect("Failed to decode PNG");
    data.truncate(info.buffer_size());

    let rgba = match info.color_type {
        png::ColorType::Rgba => data,
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|c| [c[0], c[1], c[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|c| [c[0], c[0], c[0], c[1]])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        other => panic!("Unexpected PNG output color type {other:?}"),
    };
    assert_eq!(
        rgba.len(),
        (info.width * info.height * 4) as usize,
        "Decoded buffer has wrong size"
    );

    DecodedPng {
        width: info.width,
        height: info.height,
        rgba,
    }
}

/// Assert a PNG file exists at `path` and decode it
pub fn assert_png_file(path: &Path) -> DecodedPng {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected output at {}: {e}", path.display()));
    assert_png(&bytes)
}

/// Assert a decoded image is square with the given side
pub fn assert_square(image: &DecodedPng, side: u32) {
    assert_eq!(
        (image.width, image.height),
        (side, side),
        "Expected {side}x{side} image"
    );
}
