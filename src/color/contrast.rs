//! Light/dark classification for choosing overlay text color
//!
//! Uses the plain average of the three channels, not perceptual luminance.

use crate::constants::contrast::INTENSITY_THRESHOLD;
use crate::{hex_to_rgb, Result, Rgb};

/// Unweighted channel average, rounded to the nearest integer
pub fn intensity(rgb: Rgb) -> u32 {
    let sum = u32::from(rgb.r) + u32::from(rgb.g) + u32::from(rgb.b);
    // round-half-up of sum / 3
    (2 * sum + 3) / 6
}

/// Returns `true` when the color's intensity is above 140
///
/// # Errors
///
/// Returns `InvalidColorFormat` for malformed input
pub fn check_text_color(hex: &str) -> Result<bool> {
    Ok(intensity(hex_to_rgb(hex)?) > INTENSITY_THRESHOLD)
}
