//! Color types and conversion functions for swatch.
//!
//! [`Color`] is the 8-bit value that flows through the hex codec and the
//! transform pipeline. The floating-point types (`Srgb`, `LinearRgb`, `Hsl`,
//! `Hsv`) back the gradient generators; every conversion between them is a
//! pure function. Uses `f64` throughout.

use crate::codec;
use crate::error::SwatchError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Rec. 709 luminance weights for red, green and blue.
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// An 8-bit RGB color.
///
/// Serializes as its bare hex string `"rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// sRGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Linear RGB color (gamma-decoded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Hue in degrees [0, 360), saturation and lightness in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Hue in degrees [0, 360), saturation and value in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `"rrggbb"`, `"aarrggbb"` or `"#aarrggbb"`.
    ///
    /// Returns `SwatchError::Format` on malformed input.
    pub fn from_hex(hex: &str) -> Result<Color, SwatchError> {
        codec::decode(hex)
    }

    /// Converts the color to a lowercase hex string like `"ff8040"`.
    pub fn to_hex(self) -> String {
        codec::encode(self.r as f64, self.g as f64, self.b as f64)
    }

    /// Channels as reals in [0, 255], the domain of a channel transform.
    pub fn channels(self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }

    pub fn to_srgb(self) -> Srgb {
        Srgb {
            r: self.r as f64 / 255.0,
            g: self.g as f64 / 255.0,
            b: self.b as f64 / 255.0,
        }
    }

    /// Quantizes an sRGB color to 8 bits with rounding, clamped to [0, 255].
    pub fn from_srgb(c: Srgb) -> Color {
        let q = |v: f64| codec::channel_byte((v * 255.0).round());
        Color {
            r: q(c.r),
            g: q(c.g),
            b: q(c.b),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Applies inverse sRGB gamma to convert a single sRGB component to linear.
fn srgb_component_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies sRGB gamma to convert a single linear component to sRGB.
fn linear_component_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Converts sRGB to linear RGB by applying inverse sRGB gamma.
pub fn srgb_to_linear(c: Srgb) -> LinearRgb {
    LinearRgb {
        r: srgb_component_to_linear(c.r),
        g: srgb_component_to_linear(c.g),
        b: srgb_component_to_linear(c.b),
    }
}

/// Converts linear RGB to sRGB by applying sRGB gamma.
pub fn linear_to_srgb(c: LinearRgb) -> Srgb {
    Srgb {
        r: linear_component_to_srgb(c.r),
        g: linear_component_to_srgb(c.g),
        b: linear_component_to_srgb(c.b),
    }
}

/// Relative luminance (Y) of a linear RGB color.
pub fn relative_luminance(c: LinearRgb) -> f64 {
    LUMA_WEIGHTS[0] * c.r + LUMA_WEIGHTS[1] * c.g + LUMA_WEIGHTS[2] * c.b
}

/// Converts sRGB to HSL.
///
/// Achromatic colors (max == min) get hue 0 and saturation 0.
pub fn srgb_to_hsl(c: Srgb) -> Hsl {
    let max = c.r.max(c.g).max(c.b);
    let min = c.r.min(c.g).min(c.b);
    let l = (max + min) / 2.0;
    let d = max - min;
    if d <= f64::EPSILON {
        return Hsl { h: 0.0, s: 0.0, l };
    }
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == c.r {
        (c.g - c.b) / d + if c.g < c.b { 6.0 } else { 0.0 }
    } else if max == c.g {
        (c.b - c.r) / d + 2.0
    } else {
        (c.r - c.g) / d + 4.0
    };
    Hsl {
        h: (h * 60.0).rem_euclid(360.0),
        s,
        l,
    }
}

/// Converts HSL to sRGB.
pub fn hsl_to_srgb(c: Hsl) -> Srgb {
    let chroma = (1.0 - (2.0 * c.l - 1.0).abs()) * c.s;
    from_hue_chroma(c.h, chroma, c.l - chroma / 2.0)
}

/// Converts HSV to sRGB.
pub fn hsv_to_srgb(c: Hsv) -> Srgb {
    let chroma = c.v * c.s;
    from_hue_chroma(c.h, chroma, c.v - chroma)
}

/// Shared tail of the HSL and HSV conversions: places `chroma` on the hue
/// hexagon and lifts every component by `m`.
fn from_hue_chroma(h: f64, chroma: f64, m: f64) -> Srgb {
    let hp = h.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    Srgb {
        r: r + m,
        g: g + m,
        b: b + m,
    }
}

/// Produces the color of relative luminance `y` along the hue of `reference`.
///
/// Below the reference's own luminance the color is scaled toward black; above
/// it, mixed toward white. Both happen in linear light, where luminance is
/// linear in the components, so the result hits `y` exactly before gamma.
/// `y` is clamped to [0, 1]; output is clamped to [0, 1].
pub fn with_luminance(reference: Srgb, y: f64) -> Srgb {
    let y = if y.is_nan() { 0.0 } else { y.clamp(0.0, 1.0) };
    let lin = srgb_to_linear(reference);
    let y_ref = relative_luminance(lin);
    let mapped = if y <= y_ref {
        let k = if y_ref > 0.0 { y / y_ref } else { 0.0 };
        LinearRgb {
            r: lin.r * k,
            g: lin.g * k,
            b: lin.b * k,
        }
    } else {
        let k = (y - y_ref) / (1.0 - y_ref);
        LinearRgb {
            r: lin.r + (1.0 - lin.r) * k,
            g: lin.g + (1.0 - lin.g) * k,
            b: lin.b + (1.0 - lin.b) * k,
        }
    };
    let srgb = linear_to_srgb(mapped);
    Srgb {
        r: srgb.r.clamp(0.0, 1.0),
        g: srgb.g.clamp(0.0, 1.0),
        b: srgb.b.clamp(0.0, 1.0),
    }
}
