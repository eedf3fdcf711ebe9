//! Color transforms from raw byte triples to displayed RGB.
//!
//! A [`ColorMode`] is a pure function over `0..=255` channel values. Float
//! formulas truncate toward zero and clamp to 255, so every mode is total
//! over its input domain.

pub mod palettes;

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseStyleError, StyleKind};

/// Color transform applied to each byte triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    /// Bytes shown as-is.
    #[default]
    Normal,
    /// `255 - c` per channel.
    Complement,
    /// Squared response curve around 128: dark bytes darken, bright ones saturate.
    Amplified,
    /// Rec. 601 luma replicated to all channels.
    Grayscale,
    /// Classic sepia toning matrix.
    Sepia,
    /// Channels boosted by 1.5.
    Neon,
    /// Channels averaged with white.
    Pastel,
    /// Game Boy four-shade green.
    Gameboy,
    /// Amstrad CPC, three levels per channel.
    Cpc,
    /// IBM CGA 16 colors.
    Cga,
    /// Commodore 64 16 colors.
    C64,
    /// ZX Spectrum 16 colors.
    Zx,
}

impl ColorMode {
    /// Every mode, in CLI listing order.
    pub const ALL: [ColorMode; 12] = [
        ColorMode::Normal,
        ColorMode::Complement,
        ColorMode::Amplified,
        ColorMode::Grayscale,
        ColorMode::Sepia,
        ColorMode::Neon,
        ColorMode::Pastel,
        ColorMode::Gameboy,
        ColorMode::Cpc,
        ColorMode::Cga,
        ColorMode::C64,
        ColorMode::Zx,
    ];

    const NAMES: [&'static str; 12] = [
        "normal",
        "complement",
        "amplified",
        "grayscale",
        "sepia",
        "neon",
        "pastel",
        "gameboy",
        "cpc",
        "cga",
        "c64",
        "zx",
    ];

    /// Lowercase name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// All accepted names.
    pub fn names() -> &'static [&'static str] {
        &Self::NAMES
    }

    /// True for the fixed hardware palette modes.
    pub fn is_hardware_palette(self) -> bool {
        matches!(
            self,
            ColorMode::Gameboy | ColorMode::Cpc | ColorMode::Cga | ColorMode::C64 | ColorMode::Zx
        )
    }

    /// Transform one raw byte triple.
    ///
    /// # Example
    ///
    /// ```
    /// use byte_canvas::ColorMode;
    ///
    /// assert_eq!(ColorMode::Normal.transform(100, 150, 200), [100, 150, 200]);
    /// assert_eq!(ColorMode::Complement.transform(100, 150, 200), [155, 105, 55]);
    /// ```
    pub fn transform(self, r: u8, g: u8, b: u8) -> [u8; 3] {
        match self {
            ColorMode::Normal => [r, g, b],
            ColorMode::Complement => [255 - r, 255 - g, 255 - b],
            ColorMode::Amplified => [amplify(r), amplify(g), amplify(b)],
            ColorMode::Grayscale => {
                let gray = clamp_u8(0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64);
                [gray, gray, gray]
            }
            ColorMode::Sepia => {
                let (r, g, b) = (r as f64, g as f64, b as f64);
                [
                    clamp_u8(0.393 * r + 0.769 * g + 0.189 * b),
                    clamp_u8(0.349 * r + 0.686 * g + 0.168 * b),
                    clamp_u8(0.272 * r + 0.534 * g + 0.131 * b),
                ]
            }
            ColorMode::Neon => [neon(r), neon(g), neon(b)],
            ColorMode::Pastel => [pastel(r), pastel(g), pastel(b)],
            ColorMode::Gameboy => palettes::gameboy(r, g, b),
            ColorMode::Cpc => palettes::cpc(r, g, b),
            ColorMode::Cga => palettes::cga(r, g, b),
            ColorMode::C64 => palettes::c64(r, g, b),
            ColorMode::Zx => palettes::zx_spectrum(r, g, b),
        }
    }
}

/// Truncate toward zero and clamp into `0..=255`.
#[inline]
fn clamp_u8(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

#[inline]
fn amplify(c: u8) -> u8 {
    let t = c as f64 / 128.0;
    clamp_u8(t * t * 255.0)
}

#[inline]
fn neon(c: u8) -> u8 {
    clamp_u8(c as f64 * 1.5)
}

#[inline]
fn pastel(c: u8) -> u8 {
    ((c as u16 + 255) / 2) as u8
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMode {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseStyleError::new(StyleKind::ColorMode, s, &Self::NAMES))
    }
}
