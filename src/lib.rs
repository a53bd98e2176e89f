//! # Pick Colors
//!
//! Color-space conversion and palette generation for a desktop color picker.
//!
//! This library provides:
//! - Conversion between hex, RGB and HSL representations
//! - A light/dark classification for choosing overlay text color
//! - An eight-step tonal palette derived from a color's hue and saturation
//! - The picked-color history with a current selection
//!
//! Screen sampling, clipboard access and storage belong to the host
//! application; this crate consumes hex strings and produces values.
//!
//! ## Example
//!
//! ```rust
//! use pick_colors::{generate_palette, hex_to_hsl, ColorDetails};
//!
//! let details = ColorDetails::from_hex("#3366cc")?;
//! assert_eq!(details.rgb, "rgb(51 ,102 ,204)");
//!
//! let hsl = hex_to_hsl("#3366cc")?;
//! assert_eq!(hsl.display, "hsl(220 ,60% ,50%)");
//!
//! let palette = generate_palette("#3366cc")?;
//! assert_eq!(palette.len(), 8);
//! # Ok::<(), pick_colors::PickerError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod error;
pub mod constants;
pub mod color;
pub mod config;
pub mod history;

pub use error::{PickerError, Result};
pub use color::{
    check_text_color, generate_palette, hex_to_hsl, hex_to_rgb, hsl_to_hex, Hsl, HslConversion,
    Palette, Rgb,
};
pub use config::PickerConfig;
pub use history::{ColorHistory, HistoryEntry};

/// Everything the picker shows for one color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorDetails {
    /// `#rrggbb` hex code
    pub hex: String,
    /// `rgb(R ,G ,B)` display string
    pub rgb: String,
    /// `hsl(H ,S% ,L%)` display string
    pub hsl: String,
    /// Result of [`check_text_color`] for this color
    pub is_light: bool,
}

impl ColorDetails {
    /// Build display details for a hex color
    ///
    /// # Errors
    ///
    /// Returns `InvalidColorFormat` for malformed input
    pub fn from_hex(hex: &str) -> Result<Self> {
        Ok(Self::from_rgb(hex_to_rgb(hex)?, false))
    }

    pub(crate) fn from_rgb(rgb: Rgb, uppercase_hex: bool) -> Self {
        let hex = color::rgb_to_hex(rgb);
        Self {
            hex: if uppercase_hex { hex.to_uppercase() } else { hex },
            rgb: rgb.to_string(),
            hsl: color::rgb_to_hsl(rgb).to_string(),
            is_light: color::intensity(rgb) > constants::contrast::INTENSITY_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_details_from_hex() {
        let details = ColorDetails::from_hex("9A9F4E").unwrap();
        assert_eq!(details.hex, "#9a9f4e");
        assert_eq!(details.rgb, "rgb(154 ,159 ,78)");
        assert_eq!(details.hsl, "hsl(64 ,34% ,46%)");
        assert!(!details.is_light);
    }

    #[test]
    fn test_color_details_uppercase() {
        let details = ColorDetails::from_rgb(Rgb::new(255, 255, 255), true);
        assert_eq!(details.hex, "#FFFFFF");
        assert!(details.is_light);
    }

    #[test]
    fn test_color_details_serialization() {
        let details = ColorDetails::from_hex("#3366cc").unwrap();
        let json = serde_json::to_string(&details).unwrap();
        let deserialized: ColorDetails = serde_json::from_str(&json).unwrap();
        assert_eq!(details, deserialized);
    }
}
