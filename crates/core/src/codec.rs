//! Hex codec between packed color strings and 8-bit channels.
//!
//! Decoding is strict: the string must be `rrggbb`, alpha-prefixed
//! `aarrggbb`, or `#aarrggbb`. Encoding never fails: every channel is floored
//! and clamped to [0, 255] before it is written.

use crate::color::Color;
use crate::error::SwatchError;

/// Parses a hex color string into a [`Color`].
///
/// Accepts `"rrggbb"`, `"aarrggbb"` and `"#aarrggbb"` (case insensitive),
/// that is 6, 8 or 9 characters. The `#` marker is only recognized on the
/// 9-character form, so `"#rrggbb"` is rejected. A leading alpha byte is
/// skipped.
///
/// Returns `SwatchError::Format` for any other length or a non-hex character.
pub fn decode(hex: &str) -> Result<Color, SwatchError> {
    let digits = match hex.len() {
        9 => hex.strip_prefix('#').unwrap_or(hex),
        _ => hex,
    };
    // Checked before slicing: `from_str_radix` tolerates a leading '+', and
    // byte offsets are only valid on ASCII.
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(SwatchError::Format(format!(
            "non-hex character {bad:?} in {hex:?}"
        )));
    }
    let rgb = match digits.len() {
        6 => digits,
        8 => &digits[2..],
        n => {
            return Err(SwatchError::Format(format!(
                "expected 6 or 8 hex digits in {hex:?}, got {n}"
            )))
        }
    };
    Ok(Color {
        r: byte_at(rgb, 0)?,
        g: byte_at(rgb, 2)?,
        b: byte_at(rgb, 4)?,
    })
}

fn byte_at(digits: &str, offset: usize) -> Result<u8, SwatchError> {
    u8::from_str_radix(&digits[offset..offset + 2], 16)
        .map_err(|e| SwatchError::Format(format!("invalid channel in {digits:?}: {e}")))
}

/// Floors a channel value and clamps it to [0, 255].
///
/// NaN and negative values map to 0; values above 255 (including infinity)
/// map to 255.
pub fn channel_byte(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.floor().clamp(0.0, 255.0) as u8
}

/// Encodes three channel values as a lowercase `"rrggbb"` string.
///
/// Each value goes through [`channel_byte`] first, so the output is always six
/// valid hex digits.
pub fn encode(r: f64, g: f64, b: f64) -> String {
    let (r, g, b) = (channel_byte(r), channel_byte(g), channel_byte(b));
    format!("{r:02x}{g:02x}{b:02x}")
}
