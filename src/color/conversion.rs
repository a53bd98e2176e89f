//! Color space conversion utilities
//!
//! Provides conversions between the three representations the picker shows:
//! - Hex string to RGB
//! - Hex string to HSL (display string plus rounded components)
//! - HSL back to a lowercase hex string
//!
//! Formulas follow the common RGB/HSL definitions
//! (<https://www.rapidtables.com/convert/color/>).

use crate::constants::hsl::{HUE_MAX, HUE_MIN, PERCENT_MAX, PERCENT_MIN};
use crate::{Hsl, HslConversion, PickerError, Result, Rgb};

/// Strip the optional `#` and check for exactly six hex digits
fn hex_digits(hex: &str) -> Result<&str> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(digits)
    } else {
        Err(PickerError::invalid_format(hex))
    }
}

/// Parse a hex color string to RGB
///
/// # Arguments
///
/// * `hex` - Hex color string, e.g. `"#3366cc"` or `"3366CC"`
///
/// # Errors
///
/// Returns `InvalidColorFormat` unless the input is six hex digits with an
/// optional leading `#`
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex_digits(hex)?;
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| PickerError::invalid_format(hex))
    };
    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Format RGB as a lowercase `#rrggbb` string
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Validate a hex color and return it in canonical `#rrggbb` form
pub fn normalize_hex(hex: &str) -> Result<String> {
    hex_to_rgb(hex).map(rgb_to_hex)
}

/// Convert a hex color to HSL
///
/// Hue is rounded to whole degrees, saturation and lightness to whole
/// percent. A hue that rounds up to 360 is reported as 0.
///
/// # Returns
///
/// The `hsl(H ,S% ,L%)` display string together with the rounded components
///
/// # Errors
///
/// Returns `InvalidColorFormat` for malformed input
pub fn hex_to_hsl(hex: &str) -> Result<HslConversion> {
    Ok(rgb_to_hsl(hex_to_rgb(hex)?).into())
}

/// Convert RGB to rounded HSL components, see [`hex_to_hsl`]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [r, g, b] = rgb.to_unit();

    let c_max = r.max(g).max(b);
    let c_min = r.min(g).min(b);
    let delta = c_max - c_min;
    let l = (c_max + c_min) / 2.0;

    let mut h = if delta == 0.0 {
        0.0
    } else if c_max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if c_max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    if h < 0.0 {
        h += 360.0;
    }

    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    Hsl::new(
        (h.round() as i32) % 360,
        (s * 100.0).round() as i32,
        (l * 100.0).round() as i32,
    )
}

fn check_range(component: &'static str, value: i32, min: i32, max: i32) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(PickerError::out_of_range(component, value, min, max))
    }
}

/// Convert HSL components to a lowercase `#rrggbb` string
///
/// # Arguments
///
/// * `h` - Hue in degrees, `[0, 360)`; not wrapped
/// * `s` - Saturation in percent, `[0, 100]`
/// * `l` - Lightness in percent, `[0, 100]`
///
/// # Errors
///
/// Returns `OutOfRange` if any component is outside its domain
pub fn hsl_to_hex(h: i32, s: i32, l: i32) -> Result<String> {
    check_range("hue", h, HUE_MIN, HUE_MAX)?;
    check_range("saturation", s, PERCENT_MIN, PERCENT_MAX)?;
    check_range("lightness", l, PERCENT_MIN, PERCENT_MAX)?;

    let s = f64::from(s) / 100.0;
    let l = f64::from(l) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((f64::from(h) / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        0..=59 => (c, x, 0.0),
        60..=119 => (x, c, 0.0),
        120..=179 => (0.0, c, x),
        180..=239 => (0.0, x, c),
        240..=299 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_byte = |channel: f64| ((channel + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Ok(rgb_to_hex(Rgb::new(to_byte(r), to_byte(g), to_byte(b))))
}

/// Convert an [`Hsl`] value to hex, see [`hsl_to_hex`]
pub fn hsl_components_to_hex(hsl: Hsl) -> Result<String> {
    hsl_to_hex(hsl.h, hsl.s, hsl.l)
}
