//! Median-cut color reduction for the posterize effect.

use byte_canvas::{Canvas, Rgba};
use std::collections::HashMap;

type Color = [u8; 3];

/// Build a palette of at most `colors` entries for `pixels` by median cut.
///
/// The color box with the widest channel range is split at its median until
/// there are `colors` boxes or no box can be split further. Each palette
/// entry is the rounded mean of one box. Alpha is ignored.
pub fn median_cut_palette(pixels: &[Rgba], colors: usize) -> Vec<Color> {
    if pixels.is_empty() {
        return Vec::new();
    }

    let mut boxes: Vec<Vec<Color>> = vec![pixels.iter().map(|p| [p.r, p.g, p.b]).collect()];
    while boxes.len() < colors.max(1) {
        let widest = boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| b.len() > 1)
            .map(|(i, b)| (i, widest_channel(b)))
            .filter(|&(_, (_, range))| range > 0)
            .max_by_key(|&(_, (_, range))| range);

        let Some((index, (channel, _))) = widest else {
            break;
        };

        let mut split = boxes.swap_remove(index);
        split.sort_unstable_by_key(|c| c[channel]);
        let upper = split.split_off(split.len() / 2);
        boxes.push(split);
        boxes.push(upper);
    }

    boxes.iter().map(|b| mean_color(b)).collect()
}

/// Channel with the largest value range in `colors`, and that range.
fn widest_channel(colors: &[Color]) -> (usize, u8) {
    (0..3)
        .map(|channel| {
            let (min, max) = colors.iter().fold((u8::MAX, u8::MIN), |(lo, hi), c| {
                (lo.min(c[channel]), hi.max(c[channel]))
            });
            (channel, max - min)
        })
        .max_by_key(|&(_, range)| range)
        .unwrap_or((0, 0))
}

fn mean_color(colors: &[Color]) -> Color {
    let n = colors.len().max(1) as u64;
    let mut sum = [0u64; 3];
    for c in colors {
        for (total, &v) in sum.iter_mut().zip(c) {
            *total += v as u64;
        }
    }
    sum.map(|total| ((total + n / 2) / n) as u8)
}

fn nearest(palette: &[Color], color: Color) -> Color {
    palette
        .iter()
        .copied()
        .min_by_key(|p| {
            p.iter()
                .zip(&color)
                .map(|(&a, &b)| {
                    let d = a as i32 - b as i32;
                    (d * d) as u32
                })
                .sum::<u32>()
        })
        .unwrap_or(color)
}

/// Reduce `canvas` to at most `colors` distinct RGB values.
///
/// Every pixel is replaced by its nearest palette entry (squared RGB
/// distance); alpha is kept.
pub fn posterize(canvas: &Canvas, colors: usize) -> Canvas {
    let palette = median_cut_palette(canvas.pixels(), colors);
    let mut cache: HashMap<Color, Color> = HashMap::new();

    let pixels = canvas
        .pixels()
        .iter()
        .map(|p| {
            let [r, g, b] = *cache
                .entry([p.r, p.g, p.b])
                .or_insert_with_key(|&c| nearest(&palette, c));
            Rgba::new(r, g, b, p.a)
        })
        .collect();

    tracing::trace!(requested = colors, palette = palette.len(), "Posterized");
    Canvas::from_pixels(canvas.width(), canvas.height(), pixels)
}
