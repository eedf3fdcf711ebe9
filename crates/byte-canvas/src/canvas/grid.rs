//! Owned RGBA pixel grid.
//!
//! [`Canvas`] is the single image type passed between the assembler and the
//! retro filters. Pixels are stored row-major, so pixel `(x, y)` lives at
//! `y * width + x`.

/// One RGBA pixel with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Fully opaque alpha value written by the assembler.
    pub const OPAQUE: u8 = 255;

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque pixel from an RGB triple.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, Self::OPAQUE)
    }

    /// Convert to a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Manhattan distance over the color channels (alpha ignored).
    #[inline]
    pub fn manhattan_rgb(self, other: Self) -> u32 {
        self.r.abs_diff(other.r) as u32
            + self.g.abs_diff(other.g) as u32
            + self.b.abs_diff(other.b) as u32
    }
}

/// A grid of RGBA pixels.
///
/// Rendered canvases are square (`side × side`); upscaled or filtered grids
/// keep the same type with whatever dimensions they were given.
///
/// # Example
///
/// ```
/// use byte_canvas::{Canvas, Rgba};
///
/// let mut canvas = Canvas::square(2);
/// canvas.set(1, 0, Rgba::opaque(255, 0, 0));
///
/// assert_eq!(canvas.get(1, 0), Rgba::opaque(255, 0, 0));
/// assert_eq!(canvas.get(0, 1), Rgba::opaque(0, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// Create an opaque black canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Rgba::opaque(0, 0, 0))
    }

    /// Create an opaque black `side × side` canvas.
    #[inline]
    pub fn square(side: usize) -> Self {
        Self::new(side, side)
    }

    /// Create a canvas with every pixel set to `pixel`.
    pub fn filled(width: usize, height: usize, pixel: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width * height],
        }
    }

    /// Wrap existing row-major pixels.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgba>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width * height,
            "pixel count ({}) must match width * height ({}x{})",
            pixels.len(),
            width,
            height,
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the canvas holds no pixels (a zero-side render).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the canvas.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Overwrite the pixel at column `x`, row `y`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, pixel: Rgba) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y * self.width + x] = pixel;
    }

    /// Row-major pixel slice.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// One row of pixels.
    #[inline]
    pub fn row(&self, y: usize) -> &[Rgba] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Flatten into `[R, G, B, A, ...]` bytes, suitable for encoders.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&pixel.to_bytes());
        }
        bytes
    }

    /// Nearest-neighbour upscale by an integer factor in both directions.
    ///
    /// A factor of 0 is treated as 1.
    pub fn upscale(&self, factor: usize) -> Canvas {
        let factor = factor.max(1);
        self.resize_nearest(self.width * factor, self.height * factor)
    }

    /// Nearest-neighbour resize to arbitrary dimensions.
    ///
    /// Output pixel `(x, y)` copies source pixel
    /// `(x * width / new_width, y * height / new_height)`, so integer ratios
    /// give exact square blocks. Resizing an empty canvas yields an opaque
    /// black one.
    pub fn resize_nearest(&self, new_width: usize, new_height: usize) -> Canvas {
        if self.is_empty() {
            return Canvas::new(new_width, new_height);
        }
        let mut pixels = Vec::with_capacity(new_width * new_height);
        for y in 0..new_height {
            let src_row = self.row(y * self.height / new_height);
            for x in 0..new_width {
                pixels.push(src_row[x * self.width / new_width]);
            }
        }
        Canvas::from_pixels(new_width, new_height, pixels)
    }
}
