//! Color value objects
//!
//! All types here are immutable values: two colors are equal when their
//! encoded components are equal.

use std::fmt;
use std::ops::Index;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::constants::tonal::PALETTE_SIZE;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels normalized to `[0, 1]`
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

/// Renders as `rgb(R ,G ,B)`, the layout shown in the picker's color panel
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({} ,{} ,{})", self.r, self.g, self.b)
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(rgb: Rgb) -> Self {
        Srgb::new(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(srgb: Srgb<u8>) -> Self {
        Rgb::new(srgb.red, srgb.green, srgb.blue)
    }
}

/// HSL color with integer degrees and percentages
///
/// Values produced by [`hex_to_hsl`](crate::hex_to_hsl) always have
/// `h` in `[0, 360)` and `s`, `l` in `[0, 100]`, so they can be passed
/// straight back to [`hsl_to_hex`](crate::hsl_to_hex).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub h: i32,
    pub s: i32,
    pub l: i32,
}

impl Hsl {
    pub const fn new(h: i32, s: i32, l: i32) -> Self {
        Self { h, s, l }
    }
}

/// Renders as `hsl(H ,S% ,L%)`
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({} ,{}% ,{}%)", self.h, self.s, self.l)
    }
}

/// Result of a hex to HSL conversion: display string plus raw components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HslConversion {
    /// Formatted form, e.g. `hsl(220 ,60% ,50%)`
    pub display: String,
    /// Rounded components, needed for palette generation
    pub components: Hsl,
}

impl From<Hsl> for HslConversion {
    fn from(components: Hsl) -> Self {
        Self {
            display: components.to_string(),
            components,
        }
    }
}

/// Eight hex colors sharing a hue and saturation, ordered darkest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette([String; PALETTE_SIZE]);

impl Palette {
    pub(crate) fn new(entries: [String; PALETTE_SIZE]) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn into_inner(self) -> [String; PALETTE_SIZE] {
        self.0
    }
}

impl Index<usize> for Palette {
    type Output = String;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
