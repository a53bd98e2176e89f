//! Fixed constants for color conversion and palette generation
//!
//! These values define observable output and must not be tuned.

/// HSL component domains
pub mod hsl {
    /// Smallest accepted hue in degrees
    pub const HUE_MIN: i32 = 0;

    /// Largest accepted hue in degrees (hue is in `[0, 360)`)
    pub const HUE_MAX: i32 = 359;

    /// Smallest accepted saturation/lightness percentage
    pub const PERCENT_MIN: i32 = 0;

    /// Largest accepted saturation/lightness percentage
    pub const PERCENT_MAX: i32 = 100;
}

/// Text contrast classification
pub mod contrast {
    /// Average channel intensity above which a color counts as light
    /// (dark text reads better on it)
    pub const INTENSITY_THRESHOLD: u32 = 140;
}

/// Tonal palette layout
pub mod tonal {
    /// Number of entries in a generated palette
    pub const PALETTE_SIZE: usize = 8;

    /// Lightness of the first (darkest) entry, in percent
    pub const LIGHTNESS_START: i32 = 11;

    /// Lightness increment between consecutive entries, in percent
    pub const LIGHTNESS_STEP: i32 = 11;
}

/// Default key for the host application's stored color list
///
/// Nothing in this crate reads it; it is carried in [`PickerConfig`](crate::PickerConfig)
/// so the host can look up the JSON produced by
/// [`ColorHistory::to_json`](crate::ColorHistory::to_json).
pub const DEFAULT_STORAGE_KEY: &str = "colors";
