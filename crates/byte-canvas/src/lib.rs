//! byte-canvas: render raw bytes as square RGBA art
//!
//! Any byte sequence can be read as a stream of RGB triples. This crate lays
//! those triples out on a square canvas through a geometric [`EffectStyle`],
//! recolors them through a [`ColorMode`], and offers two retro display
//! filters for the upscaled result.
//!
//! # Quick Start
//!
//! ```
//! use byte_canvas::{compute_side, render_canvas, ColorMode, EffectStyle};
//!
//! let data = b"any bytes at all";
//! let side = compute_side(data.len());
//! let canvas = render_canvas(data, side, EffectStyle::Hilbert, ColorMode::Gameboy);
//!
//! assert_eq!(canvas.width(), side);
//! assert_eq!(canvas.height(), side);
//! ```
//!
//! # Pipeline
//!
//! 1. [`compute_side`] picks the smallest side whose `side² × 3` bytes hold
//!    the whole buffer.
//! 2. [`render_canvas`] asks the effect style for a byte offset per pixel,
//!    reads three channels (missing bytes read as zero), and applies the
//!    color mode. Every pixel is opaque.
//! 3. The caller upscales as it sees fit ([`Canvas::upscale`] is provided),
//!    then optionally runs [`apply_pixel_antialias`] and [`apply_scanlines`].
//!
//! Curve and polar styles reduce offsets modulo the buffer length; raster
//! styles leave the canvas tail past the end of the buffer black. Any style
//! works with any buffer. All operations are total; the only error type,
//! [`ParseStyleError`], comes from parsing style names.
//!
//! # Features
//!
//! - `parallel` (default): fill canvas rows and run the antialias pass on
//!   the rayon thread pool.

pub mod canvas;
pub mod color;
pub mod error;
pub mod layout;
pub mod render;
pub mod retro;


pub use canvas::{compute_side, Canvas, Rgba, BYTES_PER_PIXEL};
pub use color::{palettes, ColorMode};
pub use error::{ParseStyleError, StyleKind};
pub use layout::EffectStyle;
pub use render::render_canvas;
pub use retro::{apply_pixel_antialias, apply_scanlines};
