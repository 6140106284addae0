//! Gradient generators: functions from a position `t` in [0, 1] to a [`Color`].
//!
//! Two variants are provided. [`LinearGradient`] scales each channel of a base
//! color by `t`. [`LuminanceGradient`] walks the base color's hue from near
//! black to near white by relative luminance, which gives perceptually even
//! steps where a plain RGB scale bunches up in the dark end.

use crate::codec::channel_byte;
use crate::color::{hsl_to_srgb, srgb_to_hsl, with_luminance, Color, Hsl, Srgb};
use crate::error::SwatchError;

/// Luminance reached at `t = 0` (and one minus it at `t = 1`) when no range is given.
pub const DEFAULT_LOW_BOUND: f64 = 0.05;

/// A pure function from `t` in [0, 1] to a color.
///
/// Implemented for the two built-in gradients and for any `Fn(f64) -> Color`.
pub trait Gradient {
    fn color_at(&self, t: f64) -> Color;
}

impl<F> Gradient for F
where
    F: Fn(f64) -> Color,
{
    fn color_at(&self, t: f64) -> Color {
        self(t)
    }
}

/// Scales every channel of `base` by `t`.
///
/// `t = 0` gives black, `t = 1` gives `base` exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    base: Color,
}

impl LinearGradient {
    pub fn new(base: Color) -> Self {
        Self { base }
    }
}

impl Gradient for LinearGradient {
    fn color_at(&self, t: f64) -> Color {
        let [r, g, b] = self.base.channels();
        Color {
            r: channel_byte(t * r),
            g: channel_byte(t * g),
            b: channel_byte(t * b),
        }
    }
}

/// Walks a fixed hue by relative luminance.
///
/// The hue of the base color is rounded to a whole degree and rebuilt at full
/// saturation and half lightness. `color_at(t)` then produces the color of
/// luminance `low + (1 - 2 * low) * t` along that hue. Achromatic bases keep
/// zero saturation and give a neutral ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuminanceGradient {
    reference: Srgb,
    hue: f64,
    low_bound: f64,
}

impl LuminanceGradient {
    /// Ramp with the fixed low bound [`DEFAULT_LOW_BOUND`].
    pub fn new(base: Color) -> Self {
        Self::from_parts(base, DEFAULT_LOW_BOUND)
    }

    /// Ramp with a caller-supplied low bound.
    ///
    /// Returns `SwatchError::InvalidRange` unless `range` is in the open
    /// interval (0, 0.5).
    pub fn with_range(base: Color, range: f64) -> Result<Self, SwatchError> {
        if !(range > 0.0 && range < 0.5) {
            return Err(SwatchError::InvalidRange(range));
        }
        Ok(Self::from_parts(base, range))
    }

    fn from_parts(base: Color, low_bound: f64) -> Self {
        let hsl = srgb_to_hsl(base.to_srgb());
        let hue = hsl.h.round().rem_euclid(360.0);
        let s = if hsl.s > 0.0 { 1.0 } else { 0.0 };
        let reference = hsl_to_srgb(Hsl { h: hue, s, l: 0.5 });
        Self {
            reference,
            hue,
            low_bound,
        }
    }

    /// Hue in whole degrees.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn low_bound(&self) -> f64 {
        self.low_bound
    }

    /// Target relative luminance at `t` (clamped to [0, 1]; NaN reads as 0).
    pub fn luminance_at(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        self.low_bound + (1.0 - 2.0 * self.low_bound) * t
    }
}

impl Gradient for LuminanceGradient {
    fn color_at(&self, t: f64) -> Color {
        Color::from_srgb(with_luminance(self.reference, self.luminance_at(t)))
    }
}

/// Evaluates `gradient` at `count` evenly spaced positions.
///
/// Positions are `i / (count - 1)`, so both ends are included; with `cyclic`
/// they are `i / count`, which leaves out `t = 1` for hue wheels where it would
/// repeat `t = 0`. A single color samples `t = 0`.
pub fn sample(gradient: &dyn Gradient, count: usize, cyclic: bool) -> Vec<Color> {
    match count {
        0 => Vec::new(),
        1 => vec![gradient.color_at(0.0)],
        n => {
            let denom = if cyclic { n as f64 } else { (n - 1) as f64 };
            (0..n)
                .map(|i| gradient.color_at(i as f64 / denom))
                .collect()
        }
    }
}
