//! Integration tests for the public conversion and palette API
//!
//! These tests exercise the crate the way the picker UI does:
//! - Converting a sampled hex color to every display representation
//! - Generating the tonal palette of the selected color
//! - Round-tripping through HSL
//! - Rejecting malformed input with typed errors

use pick_colors::{
    check_text_color, generate_palette, hex_to_hsl, hex_to_rgb, hsl_to_hex, ColorDetails,
    ColorHistory, Hsl, PickerConfig, PickerError, Rgb,
};

fn channel_drift(a: Rgb, b: Rgb) -> u8 {
    [a.r.abs_diff(b.r), a.g.abs_diff(b.g), a.b.abs_diff(b.b)]
        .into_iter()
        .max()
        .unwrap_or(0)
}

fn hue_distance(a: i32, b: i32) -> i32 {
    let d = (a - b).abs();
    d.min(360 - d)
}

// ============================================================================
// Known Values
// ============================================================================

#[test]
fn test_hex_to_rgb_known_values() {
    assert_eq!(hex_to_rgb("#000000").unwrap(), Rgb::new(0, 0, 0));
    assert_eq!(hex_to_rgb("ffffff").unwrap(), Rgb::new(255, 255, 255));
}

#[test]
fn test_hex_to_hsl_red() {
    assert_eq!(hex_to_hsl("#ff0000").unwrap().components, Hsl::new(0, 100, 50));
}

#[test]
fn test_hsl_to_hex_primaries() {
    assert_eq!(hsl_to_hex(0, 100, 50).unwrap(), "#ff0000");
    assert_eq!(hsl_to_hex(120, 100, 50).unwrap(), "#00ff00");
    assert_eq!(hsl_to_hex(240, 100, 50).unwrap(), "#0000ff");
}

#[test]
fn test_check_text_color_extremes() {
    assert!(check_text_color("#ffffff").unwrap());
    assert!(!check_text_color("#000000").unwrap());
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_hsl_round_trip_stays_within_rounding() {
    for value in (0u32..1 << 24).step_by(65_521) {
        let hex = format!("#{:06x}", value);
        let original = hex_to_rgb(&hex).unwrap();
        let hsl = hex_to_hsl(&hex).unwrap().components;

        let rounded_hex = hsl_to_hex(hsl.h, hsl.s, hsl.l).unwrap();
        let rounded = hex_to_rgb(&rounded_hex).unwrap();
        let again = hex_to_hsl(&rounded_hex).unwrap().components;

        assert!(channel_drift(original, rounded) <= 4, "{} -> {}", hex, rounded_hex);
        assert_eq!(again.l, hsl.l, "lightness drifted for {}", hex);
        assert!((again.s - hsl.s).abs() <= 1, "saturation drifted for {}", hex);
    }
}

#[test]
fn test_hsl_round_trip_exact_for_representable_colors() {
    for hex in ["#ff0000", "#00ff00", "#0000ff", "#ffffff", "#000000", "#3366cc", "#ff8800"] {
        let hsl = hex_to_hsl(hex).unwrap().components;
        assert_eq!(hsl_to_hex(hsl.h, hsl.s, hsl.l).unwrap(), hex);
    }
}

#[test]
fn test_second_round_trip_is_stable_after_rounding() {
    for hex in ["#9a9f4e", "#123456", "#abcdef"] {
        let hsl = hex_to_hsl(hex).unwrap().components;
        let once = hsl_to_hex(hsl.h, hsl.s, hsl.l).unwrap();
        let hsl_once = hex_to_hsl(&once).unwrap().components;
        let twice = hsl_to_hex(hsl_once.h, hsl_once.s, hsl_once.l).unwrap();
        assert_eq!(once, twice, "{} not stable after one rounding step", hex);
    }
}

// ============================================================================
// Palette
// ============================================================================

#[test]
fn test_palette_keeps_hue_and_saturation() {
    let source = hex_to_hsl("#3366cc").unwrap().components;
    let palette = generate_palette("#3366cc").unwrap();
    assert_eq!(palette.len(), 8);

    let mut seen = std::collections::HashSet::new();
    let mut previous_lightness = -1;
    for entry in &palette {
        assert!(seen.insert(entry.clone()), "duplicate entry {}", entry);

        let hsl = hex_to_hsl(entry).unwrap().components;
        assert!(hue_distance(hsl.h, source.h) <= 1, "{}: hue {}", entry, hsl.h);
        assert!((hsl.s - source.s).abs() <= 1, "{}: saturation {}", entry, hsl.s);
        assert!(hsl.l > previous_lightness);
        previous_lightness = hsl.l;
    }

    assert_eq!(hex_to_hsl(&palette[0]).unwrap().components.l, 11);
    assert_eq!(hex_to_hsl(&palette[7]).unwrap().components.l, 88);
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn test_invalid_hex_is_typed_error() {
    let is_invalid =
        |r: Result<(), PickerError>| matches!(r, Err(PickerError::InvalidColorFormat { .. }));

    assert!(is_invalid(hex_to_rgb("xyz123").map(|_| ())));
    assert!(is_invalid(hex_to_hsl("xyz123").map(|_| ())));
    assert!(is_invalid(check_text_color("xyz123").map(|_| ())));
    assert!(is_invalid(generate_palette("xyz123").map(|_| ())));
    assert!(is_invalid(ColorDetails::from_hex("xyz123").map(|_| ())));
}

#[test]
fn test_hue_boundaries() {
    assert!(matches!(hsl_to_hex(360, 100, 50), Err(PickerError::OutOfRange { .. })));
    assert!(matches!(hsl_to_hex(-1, 100, 50), Err(PickerError::OutOfRange { .. })));
    assert!(hsl_to_hex(359, 100, 50).is_ok());
    assert!(hsl_to_hex(0, 0, 0).is_ok());
    assert!(hsl_to_hex(0, 100, 100).is_ok());
}

// ============================================================================
// Picker Workflow
// ============================================================================

#[test]
fn test_pick_select_delete_workflow() {
    let mut history = ColorHistory::new(PickerConfig::default());
    history.push("#3366cc").unwrap();
    history.push("#ff0000").unwrap();

    let selected = history.selected().unwrap();
    assert_eq!(selected.hex, "#ff0000");
    assert_eq!(selected.hsl, "hsl(0 ,100% ,50%)");

    history.select(1).unwrap();
    let palette = generate_palette(&history.selected().unwrap().hex).unwrap();
    assert_eq!(palette[0], "#0b162d");

    history.remove(1).unwrap();
    assert_eq!(history.selected().unwrap().hex, "#ff0000");

    let stored = history.to_json().unwrap();
    let restored = ColorHistory::from_json(&stored, PickerConfig::default()).unwrap();
    assert_eq!(restored.len(), 1);
}
