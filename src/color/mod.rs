//! Color model, conversion and palette module
//!
//! This module holds the color value types, conversions between hex, RGB
//! and HSL, the light/dark text heuristic, and tonal palette generation.

pub mod model;
pub mod conversion;
pub mod contrast;
pub mod tonal;

pub use model::{Hsl, HslConversion, Palette, Rgb};
pub use conversion::{
    hex_to_hsl, hex_to_rgb, hsl_components_to_hex, hsl_to_hex, normalize_hex, rgb_to_hex,
    rgb_to_hsl,
};
pub use contrast::{check_text_color, intensity};
pub use tonal::{generate_palette, lightness_steps};
