//! Tonal palette generation
//!
//! A palette keeps the hue and saturation of a source color and walks
//! lightness from 11% to 88% in steps of 11, darkest first.

use crate::constants::tonal::{LIGHTNESS_START, LIGHTNESS_STEP, PALETTE_SIZE};
use crate::{hex_to_hsl, hsl_to_hex, Palette, Result};

/// Lightness of each palette entry, in percent
pub fn lightness_steps() -> [i32; PALETTE_SIZE] {
    std::array::from_fn(|i| LIGHTNESS_START + LIGHTNESS_STEP * i as i32)
}

/// Generate the eight-step lightness ramp for a hex color
///
/// The source color's own lightness is ignored.
///
/// # Errors
///
/// Returns `InvalidColorFormat` for malformed input
pub fn generate_palette(hex: &str) -> Result<Palette> {
    let base = hex_to_hsl(hex)?.components;
    let steps = lightness_steps();

    let mut entries: [String; PALETTE_SIZE] = Default::default();
    for (entry, l) in entries.iter_mut().zip(steps) {
        *entry = hsl_to_hex(base.h, base.s, l)?;
    }
    Ok(Palette::new(entries))
}
