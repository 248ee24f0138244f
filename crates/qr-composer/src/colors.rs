//! Background color allow-list.
//!
//! Only colors light or saturated enough to keep the symbol scannable
//! are accepted; anything else coerces to white.

use image::Rgba;

/// Allowed background colors as (form value, display label) pairs.
pub const BACKGROUND_COLORS: &[(&str, &str)] = &[
    ("white", "White"),
    ("#f5f5f5", "White Smoke"),
    ("#fff0f5", "Lavender Blush"),
    ("#ff69b4", "Hot Pink"),
    ("#ff1493", "Deep Pink"),
    ("#ff4500", "Orange Red"),
    ("#fff8dc", "Cornsilk"),
    ("#fdf5e6", "Old Lace"),
    ("#ffd700", "Gold"),
    ("#ffff00", "Yellow"),
    ("#7fff00", "Chartreuse"),
    ("#00ff00", "Lime"),
    ("#f0fff0", "Honeydew"),
    ("#00ffff", "Cyan"),
    ("#f0f8ff", "Alice Blue"),
    ("#9400d3", "Dark Violet"),
    ("#e6e6fa", "Lavender"),
];

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Whether `value` is on the allow-list.
pub fn is_allowed_color(value: &str) -> bool {
    BACKGROUND_COLORS.iter().any(|(v, _)| *v == value)
}

/// Resolve a form value to an RGBA pixel.
///
/// Values outside the allow-list coerce silently to white.
pub fn background_rgba(value: &str) -> Rgba<u8> {
    if !is_allowed_color(value) {
        return WHITE;
    }
    match value.strip_prefix('#') {
        Some(hex) => parse_hex(hex).unwrap_or(WHITE),
        None => WHITE,
    }
}

fn parse_hex(hex: &str) -> Option<Rgba<u8>> {
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgba([r, g, b, 255]))
}
