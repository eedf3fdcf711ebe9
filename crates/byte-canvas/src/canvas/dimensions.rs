//! Square canvas sizing.

/// Bytes consumed per rendered pixel (one per color channel).
pub const BYTES_PER_PIXEL: usize = 3;

/// Side length of the smallest square canvas that holds `data_len` bytes.
///
/// Returns the minimal `side` with `side * side * 3 >= data_len`, which equals
/// `ceil(sqrt(data_len / 3))`. An empty buffer yields `0`.
///
/// Computed in integers so large inputs never suffer from float rounding.
///
/// # Example
///
/// ```
/// use byte_canvas::compute_side;
///
/// assert_eq!(compute_side(0), 0);
/// assert_eq!(compute_side(9), 2);
/// assert_eq!(compute_side(27), 3);
/// ```
pub fn compute_side(data_len: usize) -> usize {
    if data_len == 0 {
        return 0;
    }
    let pixels = data_len.div_ceil(BYTES_PER_PIXEL) as u128;

    // Float estimate, then correct to the exact integer ceil-sqrt.
    let mut side = (pixels as f64).sqrt() as u128;
    while side * side < pixels {
        side += 1;
    }
    while side > 0 && (side - 1) * (side - 1) >= pixels {
        side -= 1;
    }
    side as usize
}
