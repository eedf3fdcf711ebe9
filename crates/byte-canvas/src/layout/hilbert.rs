//! Hilbert curve indexing.
//!
//! The Hilbert curve visits every cell of a `2^k × 2^k` grid so that cells
//! adjacent along the curve are adjacent on the grid. Mapping canvas
//! coordinates through it keeps bytes that are close in the file close on
//! the canvas.

/// Distance along the Hilbert curve of order `n` (a power of two) for cell
/// `(x, y)`. Result lies in `0..n*n`.
pub(crate) fn xy_to_d(n: u64, x: u64, y: u64) -> u64 {
    debug_assert!(n.is_power_of_two(), "curve order {n} must be a power of two");
    debug_assert!(x < n && y < n, "({x}, {y}) outside {n}x{n} curve");

    let (mut x, mut y) = (x, y);
    let mut d = 0;
    let mut s = n / 2;
    while s > 0 {
        let rx = u64::from(x & s > 0);
        let ry = u64::from(y & s > 0);
        d += s * s * ((3 * rx) ^ ry);
        rotate(n, &mut x, &mut y, rx, ry);
        s /= 2;
    }
    d
}

/// Rotate/flip a quadrant so the sub-curve has the canonical orientation.
#[inline]
fn rotate(n: u64, x: &mut u64, y: &mut u64, rx: u64, ry: u64) {
    if ry == 0 {
        if rx == 1 {
            *x = n - 1 - *x;
            *y = n - 1 - *y;
        }
        std::mem::swap(x, y);
    }
}

/// Hilbert position of `(x, y)` on a `side × side` canvas.
///
/// Uses the smallest power-of-two curve covering `side`, then scales the
/// curve distance down to the `side * side` cell range.
pub(crate) fn hilbert_position(x: usize, y: usize, side: usize) -> u64 {
    let n = side.max(1).next_power_of_two() as u64;
    let d = xy_to_d(n, x as u64, y as u64) as u128;
    let cells = (side as u128) * (side as u128);
    (d * cells / (n as u128 * n as u128)) as u64
}
