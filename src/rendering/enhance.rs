//! Image enhancements applied to the raw canvas before upscaling.
//!
//! Order is fixed: blur, color, contrast, posterize. Each step is skipped
//! unless enabled in [`EnhanceOptions`].

use byte_canvas::{Canvas, Rgba};

use super::quantize::posterize;

/// Which enhancements to apply, and how strongly.
///
/// # Example
///
/// ```
/// use bin2art::rendering::EnhanceOptions;
///
/// let options = EnhanceOptions::new().blur(2.0).posterize(8);
/// assert!(!options.is_noop());
/// assert!(EnhanceOptions::new().is_noop());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnhanceOptions {
    /// Gaussian blur sigma.
    pub blur: Option<f32>,

    /// Saturation factor.
    ///
    /// - 1.0 = no change
    /// - 0.0 = grayscale
    /// - 1.5 = 50% boost
    pub color: Option<f32>,

    /// Contrast factor around the mean luma.
    ///
    /// - 1.0 = no change
    /// - 0.0 = flat gray
    pub contrast: Option<f32>,

    /// Number of colors kept by the posterize step.
    pub posterize: Option<usize>,
}

impl EnhanceOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn blur(mut self, sigma: f32) -> Self {
        self.blur = Some(sigma);
        self
    }

    #[inline]
    pub fn color(mut self, factor: f32) -> Self {
        self.color = Some(factor);
        self
    }

    #[inline]
    pub fn contrast(mut self, factor: f32) -> Self {
        self.contrast = Some(factor);
        self
    }

    #[inline]
    pub fn posterize(mut self, colors: usize) -> Self {
        self.posterize = Some(colors);
        self
    }

    /// True when no step is enabled.
    pub fn is_noop(&self) -> bool {
        self.blur.is_none()
            && self.color.is_none()
            && self.contrast.is_none()
            && self.posterize.is_none()
    }
}

/// Apply the enabled enhancements to `canvas`.
pub fn apply_enhancements(canvas: &Canvas, options: &EnhanceOptions) -> Canvas {
    let mut current = canvas.clone();
    if current.is_empty() {
        return current;
    }

    if let Some(sigma) = options.blur {
        tracing::debug!(sigma, "Applying blur");
        current = gaussian_blur(&current, sigma);
    }
    if let Some(factor) = options.color {
        tracing::debug!(factor, "Enhancing color");
        current = enhance_color(&current, factor);
    }
    if let Some(factor) = options.contrast {
        tracing::debug!(factor, "Enhancing contrast");
        current = enhance_contrast(&current, factor);
    }
    if let Some(colors) = options.posterize {
        tracing::debug!(colors, "Posterizing");
        current = posterize(&current, colors);
    }
    current
}

/// Integer Rec. 601 luma, as used for grayscale conversion.
#[inline]
fn luma(p: Rgba) -> u8 {
    ((p.r as u32 * 299 + p.g as u32 * 587 + p.b as u32 * 114) / 1000) as u8
}

/// `base + factor * (value - base)`, rounded and clamped.
#[inline]
fn blend(base: u8, value: u8, factor: f32) -> u8 {
    let base = base as f32;
    (base + factor * (value as f32 - base)).round().clamp(0.0, 255.0) as u8
}

fn gaussian_blur(canvas: &Canvas, sigma: f32) -> Canvas {
    if sigma <= 0.0 {
        return canvas.clone();
    }
    let blurred = image::imageops::blur(&super::to_image(canvas), sigma);
    super::from_image(&blurred)
}

/// Push each pixel away from (or toward) its own gray value.
fn enhance_color(canvas: &Canvas, factor: f32) -> Canvas {
    map_pixels(canvas, |p| {
        let gray = luma(p);
        Rgba::new(
            blend(gray, p.r, factor),
            blend(gray, p.g, factor),
            blend(gray, p.b, factor),
            p.a,
        )
    })
}

/// Push each pixel away from (or toward) the canvas' mean gray.
fn enhance_contrast(canvas: &Canvas, factor: f32) -> Canvas {
    let total: u64 = canvas.pixels().iter().map(|&p| luma(p) as u64).sum();
    let count = canvas.pixels().len() as u64;
    let mean = ((total + count / 2) / count) as u8;

    map_pixels(canvas, |p| {
        Rgba::new(
            blend(mean, p.r, factor),
            blend(mean, p.g, factor),
            blend(mean, p.b, factor),
            p.a,
        )
    })
}

fn map_pixels(canvas: &Canvas, f: impl Fn(Rgba) -> Rgba) -> Canvas {
    let pixels = canvas.pixels().iter().map(|&p| f(p)).collect();
    Canvas::from_pixels(canvas.width(), canvas.height(), pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn checker(side: usize) -> Canvas {
        let pixels = (0..side * side)
            .map(|i| {
                if (i % side + i / side) % 2 == 0 {
                    Rgba::opaque(220, 40, 40)
                } else {
                    Rgba::opaque(30, 30, 200)
                }
            })
            .collect();
        Canvas::from_pixels(side, side, pixels)
    }

    #[test]
    fn test_options_defaults() {
        let options = EnhanceOptions::new();
        assert_eq!(options.blur, None);
        assert_eq!(options.color, None);
        assert_eq!(options.contrast, None);
        assert_eq!(options.posterize, None);
        assert!(options.is_noop());
    }

    #[test]
    fn test_options_builder() {
        let options = EnhanceOptions::new().blur(2.0).color(1.5).contrast(1.3).posterize(8);
        assert_eq!(options.blur, Some(2.0));
        assert_eq!(options.color, Some(1.5));
        assert_eq!(options.contrast, Some(1.3));
        assert_eq!(options.posterize, Some(8));
    }

    #[test]
    fn test_noop_returns_same_canvas() {
        let canvas = checker(4);
        assert_eq!(apply_enhancements(&canvas, &EnhanceOptions::new()), canvas);
    }

    #[test]
    fn test_color_factor_zero_is_grayscale() {
        let out = enhance_color(&checker(2), 0.0);
        for p in out.pixels() {
            assert_eq!(p.r, p.g);
            assert_eq!(p.g, p.b);
        }
    }

    #[test]
    fn test_color_factor_one_is_identity() {
        let canvas = checker(3);
        assert_eq!(enhance_color(&canvas, 1.0), canvas);
    }

    #[test]
    fn test_contrast_zero_is_flat_mean() {
        let canvas = Canvas::from_pixels(
            2,
            1,
            vec![Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)],
        );
        let out = enhance_contrast(&canvas, 0.0);
        // Mean luma of 0 and 255 rounds to 128
        assert!(out.pixels().iter().all(|&p| p == Rgba::opaque(128, 128, 128)));
    }

    #[test]
    fn test_contrast_boost_spreads_values() {
        let canvas = Canvas::from_pixels(
            2,
            1,
            vec![Rgba::opaque(100, 100, 100), Rgba::opaque(150, 150, 150)],
        );
        let out = enhance_contrast(&canvas, 2.0);
        assert_eq!(out.get(0, 0), Rgba::opaque(75, 75, 75));
        assert_eq!(out.get(1, 0), Rgba::opaque(175, 175, 175));
    }

    #[test]
    fn test_blur_softens_checkerboard() {
        let canvas = checker(8);
        let out = gaussian_blur(&canvas, 2.0);
        assert_eq!(out.width(), 8);
        assert_eq!(out.height(), 8);
        let before = canvas.get(4, 4).manhattan_rgb(canvas.get(5, 4));
        let after = out.get(4, 4).manhattan_rgb(out.get(5, 4));
        assert!(after < before, "blur did not soften: {after} >= {before}");
    }

    #[test]
    fn test_posterize_step_limits_colors() {
        let out = apply_enhancements(&checker(6), &EnhanceOptions::new().blur(1.0).posterize(2));
        let colors: std::collections::HashSet<_> =
            out.pixels().iter().map(|p| [p.r, p.g, p.b]).collect();
        assert!(colors.len() <= 2);
    }
}
