//! Concentric ring layout.
//!
//! Each integer distance band around the canvas center is a ring. Ring `r`
//! starts at position `round(π r²)`, the area of the disc inside it, so outer
//! rings hold proportionally more positions and sampling stays roughly
//! equal-area.

use std::f64::consts::{PI, TAU};

/// First position of ring `ring`.
#[inline]
fn ring_start(ring: u64) -> u64 {
    let r = ring as f64;
    (PI * r * r).round() as u64
}

/// Number of positions in ring `ring` (at least one).
#[inline]
pub(crate) fn ring_capacity(ring: u64) -> u64 {
    (ring_start(ring + 1) - ring_start(ring)).max(1)
}

/// Sequential position of `(x, y)` when the canvas is read ring by ring,
/// each ring swept by angle.
pub(crate) fn radial_position(x: usize, y: usize, side: usize) -> u64 {
    let center = side as f64 / 2.0;
    let dx = x as f64 - center;
    let dy = y as f64 - center;

    let ring = dx.hypot(dy).floor() as u64;
    let capacity = ring_capacity(ring);

    // atan2 in [-π, π] normalized to [0, 1]
    let turn = (dy.atan2(dx) + PI) / TAU;
    let slot = ((turn * capacity as f64) as u64).min(capacity - 1);

    ring_start(ring) + slot
}
