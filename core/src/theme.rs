//! Accent theme derivation — decode the accent color, pick a contrast.
//!
//! Derived values are recomputed from the stored hex string on demand and
//! are never persisted. Malformed input falls back to the fixed default
//! red so the front end always has a usable triplet.

use serde::Serialize;


/// RGB fallback when the stored accent color fails to parse.
pub const FALLBACK_RGB: (u8, u8, u8) = (255, 0, 51);


/// Derived accent values: decoded channels plus a contrast color chosen
/// by YIQ luminance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccentTheme {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub contrast: &'static str,
}


/// Parse `#RRGGBB`. The leading `#` is optional and hex digits are
/// case-insensitive; anything else is rejected.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}


/// Derive the accent theme for a stored color string.
pub fn derive(accent: &str) -> AccentTheme {
    let (r, g, b) = parse_hex(accent).unwrap_or(FALLBACK_RGB);
    AccentTheme {
        r,
        g,
        b,
        contrast: contrast_for(r, g, b),
    }
}


/// Contrast color by YIQ luminance: light accents get black-ish text,
/// dark accents get white.
fn contrast_for(r: u8, g: u8, b: u8) -> &'static str {
    let yiq = (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000;
    if yiq >= 128 {
        "#000000"
    } else {
        "#ffffff"
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
