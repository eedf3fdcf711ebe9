//! Geometric layouts mapping canvas coordinates to byte offsets.
//!
//! Every [`EffectStyle`] answers one question: which byte of the source
//! buffer feeds the pixel at column `x`, row `y`? All styles share the
//! same contract:
//!
//! - [`EffectStyle::index_for`] is always `< data_len` when `data_len > 0`
//!   (raw formulas are reduced modulo the buffer length);
//! - the result depends on `(x, y, side, data_len)` only.
//!
//! Raster-family styles (none, mirror, mosaic, blocks) are not meant to
//! wrap: [`EffectStyle::source_offset`] gives their unreduced offset, which
//! runs past the end of the buffer on the canvas tail. The assembler treats
//! channel bytes past the end of the buffer as zero, so that tail is black.

mod hilbert;
mod radial;

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::canvas::BYTES_PER_PIXEL;
use crate::error::{ParseStyleError, StyleKind};

/// Tile edge for [`EffectStyle::Mosaic`].
pub const MOSAIC_TILE: usize = 20;

/// Minimum tile edge for [`EffectStyle::Blocks`].
pub const BLOCKS_MIN_TILE: usize = 8;

/// [`EffectStyle::Blocks`] aims for this many tiles per side.
pub const BLOCKS_PER_SIDE: usize = 16;

/// Geometric strategy mapping canvas coordinates to buffer offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EffectStyle {
    /// Plain column-major raster: bytes fill each column top to bottom.
    #[default]
    None,
    /// Four-fold symmetry around the canvas center.
    Mirror,
    /// Polar angle times distance from the center.
    Rotate,
    /// Like [`Rotate`](Self::Rotate) with the angle folded into π/4 wedges.
    Kaleidoscope,
    /// Angle plus scaled distance, winding outward.
    Spiral,
    /// Diagonal raster perturbed by sine/cosine ripples.
    Waves,
    /// Flat 20-pixel tiles.
    Mosaic,
    /// Magnitude of the product of centered, scaled coordinates.
    Fractal,
    /// Hilbert space-filling curve; keeps neighbouring bytes neighbouring.
    Hilbert,
    /// Concentric equal-area rings swept by angle.
    Radial,
    /// Row-major raster: bytes fill each row left to right.
    Horizontal,
    /// Anti-diagonal bands indexed by `x + y`, then `|x - y|`.
    Diagonal,
    /// Chunky tiles sized to the canvas (`max(8, side / 16)`).
    Blocks,
}

impl EffectStyle {
    /// Every style, in CLI listing order.
    pub const ALL: [EffectStyle; 13] = [
        EffectStyle::None,
        EffectStyle::Mirror,
        EffectStyle::Rotate,
        EffectStyle::Kaleidoscope,
        EffectStyle::Spiral,
        EffectStyle::Waves,
        EffectStyle::Mosaic,
        EffectStyle::Fractal,
        EffectStyle::Hilbert,
        EffectStyle::Radial,
        EffectStyle::Horizontal,
        EffectStyle::Diagonal,
        EffectStyle::Blocks,
    ];

    const NAMES: [&'static str; 13] = [
        "none",
        "mirror",
        "rotate",
        "kaleidoscope",
        "spiral",
        "waves",
        "mosaic",
        "fractal",
        "hilbert",
        "radial",
        "horizontal",
        "diagonal",
        "blocks",
    ];

    /// Lowercase name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// All accepted names.
    pub fn names() -> &'static [&'static str] {
        &Self::NAMES
    }

    /// Byte offset feeding pixel `(x, y)` of a `side × side` canvas.
    ///
    /// Returns a value in `0..data_len`, or `0` when `data_len == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use byte_canvas::EffectStyle;
    ///
    /// // Column-major raster: (x=1, y=0) on a 2x2 canvas is the third pixel
    /// assert_eq!(EffectStyle::None.index_for(1, 0, 2, 12), 6);
    /// assert_eq!(EffectStyle::Horizontal.index_for(1, 0, 2, 12), 3);
    /// ```
    pub fn index_for(self, x: usize, y: usize, side: usize, data_len: usize) -> usize {
        if data_len == 0 {
            return 0;
        }
        let len = data_len as u64;
        (self.raw_offset(x, y, side, len) % len) as usize
    }

    /// Offset the assembler reads pixel `(x, y)` from.
    ///
    /// Same as [`index_for`](Self::index_for), except that raster-family
    /// styles keep their unreduced offset, which may be `>= data_len`.
    ///
    /// ```
    /// use byte_canvas::EffectStyle;
    ///
    /// // 9 bytes on a 2x2 canvas: the last pixel starts past the end
    /// assert_eq!(EffectStyle::None.source_offset(1, 1, 2, 9), 9);
    /// assert_eq!(EffectStyle::None.index_for(1, 1, 2, 9), 0);
    /// ```
    pub fn source_offset(self, x: usize, y: usize, side: usize, data_len: usize) -> usize {
        if data_len == 0 {
            return 0;
        }
        if self.is_raster() {
            self.raw_offset(x, y, side, data_len as u64) as usize
        } else {
            self.index_for(x, y, side, data_len)
        }
    }

    /// Styles whose offset is a plain raster position on the canvas.
    pub fn is_raster(self) -> bool {
        matches!(
            self,
            EffectStyle::None | EffectStyle::Mirror | EffectStyle::Mosaic | EffectStyle::Blocks
        )
    }

    fn raw_offset(self, x: usize, y: usize, side: usize, len: u64) -> u64 {
        match self {
            EffectStyle::None => raster(x, y, side),
            EffectStyle::Horizontal => raster(y, x, side),
            EffectStyle::Mirror => {
                let mx = x.min(side - 1 - x);
                let my = y.min(side - 1 - y);
                raster(mx, my, side)
            }
            EffectStyle::Mosaic => tiled(x, y, side, MOSAIC_TILE),
            EffectStyle::Blocks => {
                tiled(x, y, side, (side / BLOCKS_PER_SIDE).max(BLOCKS_MIN_TILE))
            }
            EffectStyle::Rotate => {
                let p = Polar::of(x, y, side);
                aligned_angle_offset(p.angle * p.distance, len)
            }
            EffectStyle::Kaleidoscope => {
                let p = Polar::of(x, y, side);
                let sector = p.angle.rem_euclid(PI / 4.0);
                aligned_angle_offset(sector * p.distance, len)
            }
            EffectStyle::Spiral => {
                let p = Polar::of(x, y, side);
                scaled_offset(p.angle + p.distance / 10.0, len)
            }
            EffectStyle::Waves => {
                let (fx, fy) = (x as f64, y as f64);
                let wave = (fx / 20.0).sin() * 10.0 + (fy / 20.0).cos() * 10.0;
                scaled_offset(fx + fy + wave, len)
            }
            EffectStyle::Fractal => {
                let center = side as f64 / 2.0;
                let scale = 4.0 * PI / side as f64;
                let cx = (x as f64 - center) * scale;
                let cy = (y as f64 - center) * scale;
                scaled_offset((cx * cy).abs(), len)
            }
            EffectStyle::Hilbert => {
                hilbert::hilbert_position(x, y, side) * BYTES_PER_PIXEL as u64
            }
            EffectStyle::Radial => radial::radial_position(x, y, side) * BYTES_PER_PIXEL as u64,
            EffectStyle::Diagonal => {
                let primary = (x + y) as u64;
                let secondary = x.abs_diff(y) as u64;
                (primary * side as u64 + secondary) * BYTES_PER_PIXEL as u64
            }
        }
    }
}

/// `(major * side + minor) * 3`.
#[inline]
fn raster(major: usize, minor: usize, side: usize) -> u64 {
    (major as u64 * side as u64 + minor as u64) * BYTES_PER_PIXEL as u64
}

/// Raster offset of the top-left corner of the tile containing `(x, y)`.
#[inline]
fn tiled(x: usize, y: usize, side: usize, tile: usize) -> u64 {
    raster(x / tile * tile, y / tile * tile, side)
}

/// Angle and distance of a pixel relative to the canvas center.
struct Polar {
    angle: f64,
    distance: f64,
}

impl Polar {
    #[inline]
    fn of(x: usize, y: usize, side: usize) -> Self {
        let center = side as f64 / 2.0;
        let dx = x as f64 - center;
        let dy = y as f64 - center;
        Self {
            angle: dy.atan2(dx),
            distance: dx.hypot(dy),
        }
    }
}

/// `floor(value mod len)`, aligned down to a whole pixel.
#[inline]
fn aligned_angle_offset(value: f64, len: u64) -> u64 {
    let offset = value.rem_euclid(len as f64) as u64;
    offset - offset % BYTES_PER_PIXEL as u64
}

/// `trunc(value * 3)` reduced into `0..len`, negative values wrapping.
#[inline]
fn scaled_offset(value: f64, len: u64) -> u64 {
    ((value * BYTES_PER_PIXEL as f64) as i64).rem_euclid(len as i64) as u64
}

impl fmt::Display for EffectStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EffectStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseStyleError::new(StyleKind::Effect, s, &Self::NAMES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for style in EffectStyle::ALL {
            assert_eq!(style.name().parse::<EffectStyle>().unwrap(), style);
        }
        assert_eq!("MiRRoR".parse::<EffectStyle>().unwrap(), EffectStyle::Mirror);
        assert!("sparkle".parse::<EffectStyle>().is_err());
    }

    #[test]
    fn test_all_matches_names() {
        for (i, style) in EffectStyle::ALL.iter().enumerate() {
            assert_eq!(*style as usize, i);
        }
    }

    #[test]
    fn test_offsets_always_in_bounds() {
        for style in EffectStyle::ALL {
            for data_len in [1usize, 2, 3, 7, 9, 100, 256, 1000, 4097] {
                let side = crate::compute_side(data_len);
                for y in 0..side {
                    for x in 0..side {
                        let idx = style.index_for(x, y, side, data_len);
                        assert!(
                            idx < data_len,
                            "{style} ({x}, {y}) side {side}: {idx} >= {data_len}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_length_buffer() {
        for style in EffectStyle::ALL {
            assert_eq!(style.index_for(0, 0, 1, 0), 0);
        }
    }

    #[test]
    fn test_none_is_column_major() {
        let side = 4;
        let len = side * side * 3;
        assert_eq!(EffectStyle::None.index_for(0, 0, side, len), 0);
        assert_eq!(EffectStyle::None.index_for(0, 1, side, len), 3);
        assert_eq!(EffectStyle::None.index_for(1, 0, side, len), 12);
        assert_eq!(EffectStyle::None.index_for(3, 3, side, len), 45);
    }

    #[test]
    fn test_raster_source_offset_is_unreduced() {
        // side 2 holds 12 bytes; offset 9 is past the end of a 9 byte buffer
        assert_eq!(EffectStyle::None.source_offset(1, 1, 2, 9), 9);
        assert_eq!(EffectStyle::None.source_offset(1, 0, 2, 9), 6);
        assert_eq!(EffectStyle::None.index_for(1, 1, 2, 9), 0);
        // Mosaic tile at (20, 20) on a 21-pixel canvas starts at 1320
        assert_eq!(EffectStyle::Mosaic.source_offset(20, 20, 21, 1300), 1320);
    }

    #[test]
    fn test_non_raster_source_offset_is_bounded() {
        for style in EffectStyle::ALL.into_iter().filter(|s| !s.is_raster()) {
            for (x, y) in [(0, 0), (4, 2), (6, 6)] {
                let offset = style.source_offset(x, y, 7, 10);
                assert!(offset < 10, "{style} at ({x}, {y}) gave {offset}");
            }
        }
    }

    #[test]
    fn test_horizontal_is_transposed_none() {
        let side = 5;
        let len = side * side * 3;
        for y in 0..side {
            for x in 0..side {
                assert_eq!(
                    EffectStyle::Horizontal.index_for(x, y, side, len),
                    EffectStyle::None.index_for(y, x, side, len)
                );
            }
        }
    }

    #[test]
    fn test_mirror_is_symmetric() {
        for side in [1usize, 2, 5, 8, 17] {
            let len = side * side * 3;
            for y in 0..side {
                for x in 0..side {
                    let (fx, fy) = (side - 1 - x, side - 1 - y);
                    let a = EffectStyle::Mirror.index_for(x, y, side, len);
                    assert_eq!(a, EffectStyle::Mirror.index_for(fx, fy, side, len));
                    assert_eq!(a, EffectStyle::Mirror.index_for(fx, y, side, len));
                    assert_eq!(a, EffectStyle::Mirror.index_for(x, fy, side, len));
                }
            }
        }
    }

    #[test]
    fn test_mosaic_tiles_are_flat() {
        let side = 50;
        let len = side * side * 3;
        let corner = EffectStyle::Mosaic.index_for(20, 20, side, len);
        for y in 20..40 {
            for x in 20..40 {
                assert_eq!(EffectStyle::Mosaic.index_for(x, y, side, len), corner);
            }
        }
        assert_ne!(EffectStyle::Mosaic.index_for(40, 20, side, len), corner);
    }

    #[test]
    fn test_blocks_tile_size_adapts() {
        // side 320 -> tile 20; side 40 -> minimum tile 8
        let len = 320 * 320 * 3;
        assert_eq!(
            EffectStyle::Blocks.index_for(19, 19, 320, len),
            EffectStyle::Blocks.index_for(0, 0, 320, len)
        );
        assert_ne!(
            EffectStyle::Blocks.index_for(20, 0, 320, len),
            EffectStyle::Blocks.index_for(0, 0, 320, len)
        );

        let len = 40 * 40 * 3;
        assert_eq!(
            EffectStyle::Blocks.index_for(7, 7, 40, len),
            EffectStyle::Blocks.index_for(0, 0, 40, len)
        );
        assert_ne!(
            EffectStyle::Blocks.index_for(8, 0, 40, len),
            EffectStyle::Blocks.index_for(0, 0, 40, len)
        );
    }

    #[test]
    fn test_rotate_offsets_are_pixel_aligned() {
        let side = 30;
        let len = side * side * 3 - 1;
        for y in 0..side {
            for x in 0..side {
                assert_eq!(EffectStyle::Rotate.index_for(x, y, side, len) % 3, 0);
                assert_eq!(EffectStyle::Kaleidoscope.index_for(x, y, side, len) % 3, 0);
            }
        }
    }

    #[test]
    fn test_spiral_negative_angles_wrap() {
        // Above the center atan2 is negative; offset must still be in range
        let side = 10;
        let len = 300;
        let idx = EffectStyle::Spiral.index_for(5, 0, side, len);
        let angle = (0.0f64 - 5.0).atan2(0.0);
        let expected = (((angle + 0.5) * 3.0) as i64).rem_euclid(len as i64) as usize;
        assert_eq!(idx, expected);
    }

    #[test]
    fn test_fractal_axes_map_to_zero() {
        let side = 16;
        let len = side * side * 3;
        for i in 0..side {
            assert_eq!(EffectStyle::Fractal.index_for(8, i, side, len), 0);
            assert_eq!(EffectStyle::Fractal.index_for(i, 8, side, len), 0);
        }
    }

    #[test]
    fn test_diagonal_formula() {
        let side = 4;
        let len = 1000;
        assert_eq!(EffectStyle::Diagonal.index_for(1, 3, side, len), (4 * 4 + 2) * 3);
        assert_eq!(
            EffectStyle::Diagonal.index_for(1, 3, side, len),
            EffectStyle::Diagonal.index_for(3, 1, side, len)
        );
    }

    #[test]
    fn test_hilbert_preserves_locality() {
        // Every pixel shares a 3-byte run with one of its neighbours
        let side = 16;
        let len = side * side * 3;
        for y in 0..side {
            for x in 0..side {
                let here = EffectStyle::Hilbert.index_for(x, y, side, len) as i64;
                let neighbours = [
                    (x.wrapping_sub(1), y),
                    (x + 1, y),
                    (x, y.wrapping_sub(1)),
                    (x, y + 1),
                ];
                let close = neighbours.iter().any(|&(nx, ny)| {
                    if nx >= side || ny >= side {
                        return false;
                    }
                    let there = EffectStyle::Hilbert.index_for(nx, ny, side, len) as i64;
                    (there - here).abs() == 3
                });
                assert!(close, "({x}, {y}) has no curve neighbour");
            }
        }
    }

    #[test]
    fn test_hilbert_covers_every_pixel_once() {
        let side = 8;
        let len = side * side * 3;
        let mut offsets: Vec<usize> = (0..side * side)
            .map(|i| EffectStyle::Hilbert.index_for(i % side, i / side, side, len))
            .collect();
        offsets.sort_unstable();
        let expected: Vec<usize> = (0..side * side).map(|i| i * 3).collect();
        assert_eq!(offsets, expected);
    }

    #[test]
    fn test_deterministic() {
        for style in EffectStyle::ALL {
            let a = style.index_for(7, 3, 20, 1200);
            let b = style.index_for(7, 3, 20, 1200);
            assert_eq!(a, b, "{style} is not deterministic");
        }
    }
}
