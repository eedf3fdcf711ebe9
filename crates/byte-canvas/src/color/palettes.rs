//! Fixed historical hardware palettes.
//!
//! Each palette is a constant table plus the index rule that picks an entry
//! for a raw byte triple. The index rules are deliberately crude bucketings
//! (bit shifts and integer thresholds), not colorimetric nearest-color
//! searches, and are part of each mode's definition.

/// Original Game Boy (DMG) four shades of green, darkest first.
pub const GAMEBOY: [[u8; 3]; 4] = [
    [0x0F, 0x38, 0x0F],
    [0x30, 0x62, 0x30],
    [0x8B, 0xAC, 0x0F],
    [0x9B, 0xBC, 0x0F],
];

/// Amstrad CPC gate-array levels, three per channel (27 colors).
pub const CPC_LEVELS: [u8; 3] = [0x00, 0x80, 0xFF];

/// IBM CGA 16-color palette, indexed `intensity | red | green | blue`.
pub const CGA: [[u8; 3]; 16] = [
    [0x00, 0x00, 0x00],
    [0x00, 0x00, 0xAA],
    [0x00, 0xAA, 0x00],
    [0x00, 0xAA, 0xAA],
    [0xAA, 0x00, 0x00],
    [0xAA, 0x00, 0xAA],
    [0xAA, 0x55, 0x00],
    [0xAA, 0xAA, 0xAA],
    [0x55, 0x55, 0x55],
    [0x55, 0x55, 0xFF],
    [0x55, 0xFF, 0x55],
    [0x55, 0xFF, 0xFF],
    [0xFF, 0x55, 0x55],
    [0xFF, 0x55, 0xFF],
    [0xFF, 0xFF, 0x55],
    [0xFF, 0xFF, 0xFF],
];

/// Commodore 64 palette ("Pepto" measurements), in VIC-II color order.
pub const C64: [[u8; 3]; 16] = [
    [0x00, 0x00, 0x00],
    [0xFF, 0xFF, 0xFF],
    [0x68, 0x37, 0x2B],
    [0x70, 0xA4, 0xB2],
    [0x6F, 0x3D, 0x86],
    [0x58, 0x8D, 0x43],
    [0x35, 0x28, 0x79],
    [0xB8, 0xC7, 0x6F],
    [0x6F, 0x4F, 0x25],
    [0x43, 0x39, 0x00],
    [0x9A, 0x67, 0x59],
    [0x44, 0x44, 0x44],
    [0x6C, 0x6C, 0x6C],
    [0x9A, 0xD2, 0x84],
    [0x6C, 0x5E, 0xB5],
    [0x95, 0x95, 0x95],
];

/// ZX Spectrum palette: eight normal colors, then their BRIGHT variants.
/// Indexed `bright | green | red | blue`.
pub const ZX_SPECTRUM: [[u8; 3]; 16] = [
    [0x00, 0x00, 0x00],
    [0x00, 0x00, 0xD7],
    [0xD7, 0x00, 0x00],
    [0xD7, 0x00, 0xD7],
    [0x00, 0xD7, 0x00],
    [0x00, 0xD7, 0xD7],
    [0xD7, 0xD7, 0x00],
    [0xD7, 0xD7, 0xD7],
    [0x00, 0x00, 0x00],
    [0x00, 0x00, 0xFF],
    [0xFF, 0x00, 0x00],
    [0xFF, 0x00, 0xFF],
    [0x00, 0xFF, 0x00],
    [0x00, 0xFF, 0xFF],
    [0xFF, 0xFF, 0x00],
    [0xFF, 0xFF, 0xFF],
];

/// Channel value at which a ZX Spectrum pixel switches to BRIGHT.
const ZX_BRIGHT_THRESHOLD: u8 = 0xD8;

#[inline]
fn lookup<const N: usize>(table: &[[u8; 3]; N], index: usize) -> [u8; 3] {
    table[index % N]
}

/// High bit of each argument packed into three bits, first argument highest.
#[inline]
fn high_bits(a: u8, b: u8, c: u8) -> usize {
    ((a >> 7) as usize) << 2 | ((b >> 7) as usize) << 1 | (c >> 7) as usize
}

/// Integer luma (Rec. 601 weights), bucketed into four shades.
pub fn gameboy(r: u8, g: u8, b: u8) -> [u8; 3] {
    let luma = (299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000;
    lookup(&GAMEBOY, (luma >> 6) as usize)
}

/// Each channel independently snapped to one of three levels.
pub fn cpc(r: u8, g: u8, b: u8) -> [u8; 3] {
    let level = |c: u8| CPC_LEVELS[(c / 86) as usize % CPC_LEVELS.len()];
    [level(r), level(g), level(b)]
}

/// High bit of each channel selects the color, average brightness the intensity.
pub fn cga(r: u8, g: u8, b: u8) -> [u8; 3] {
    let average = (r as u16 + g as u16 + b as u16) / 3;
    let intensity = usize::from(average > 127);
    let index = intensity << 3 | high_bits(r, g, b);
    lookup(&CGA, index)
}

/// Top two bits of red and green form a nibble, offset by the top two bits of blue.
pub fn c64(r: u8, g: u8, b: u8) -> [u8; 3] {
    let index = (((r >> 6) as usize) << 2 | (g >> 6) as usize) + (b >> 6) as usize;
    lookup(&C64, index)
}

/// High bit of each channel selects the color; a near-full channel sets BRIGHT.
pub fn zx_spectrum(r: u8, g: u8, b: u8) -> [u8; 3] {
    let bright = usize::from(r.max(g).max(b) >= ZX_BRIGHT_THRESHOLD);
    let index = bright << 3 | high_bits(g, r, b);
    lookup(&ZX_SPECTRUM, index)
}
