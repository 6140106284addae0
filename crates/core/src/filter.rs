//! Per-pixel channel transforms, including the color-vision-deficiency filters.
//!
//! Every filter maps `(r, g, b)` on the [0, 255] scale to a new triple. Results
//! may leave that range; the hex codec clamps them on the way out.

use crate::color::LUMA_WEIGHTS;
use crate::error::SwatchError;
use serde::{Deserialize, Serialize};
use std::fmt;

const GAMMA: f64 = 2.2;

/// A pure function from channel values in [0, 255] to a transformed triple.
///
/// Implemented for [`Filter`] and for any `Fn(f64, f64, f64) -> [f64; 3]`, so
/// ad-hoc closures can be passed wherever a named filter can.
pub trait ChannelTransform {
    fn transform(&self, r: f64, g: f64, b: f64) -> [f64; 3];
}

impl<F> ChannelTransform for F
where
    F: Fn(f64, f64, f64) -> [f64; 3],
{
    fn transform(&self, r: f64, g: f64, b: f64) -> [f64; 3] {
        self(r, g, b)
    }
}

/// Named vision filters selectable from the CLI and the sheet builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Filter {
    /// Green deficiency.
    Deutan,
    /// Rec. 709 luminance.
    Gray,
    /// Red deficiency.
    Protan,
}

/// All filters, sorted by key.
const FILTERS: &[Filter] = &[Filter::Deutan, Filter::Gray, Filter::Protan];

impl Filter {
    /// Looks a filter up by its key (`"deutan"`, `"gray"`, `"protan"`).
    ///
    /// Returns `SwatchError::UnknownFilter` for anything else.
    pub fn from_name(name: &str) -> Result<Self, SwatchError> {
        FILTERS
            .iter()
            .copied()
            .find(|f| f.key() == name)
            .ok_or_else(|| SwatchError::UnknownFilter(name.to_string()))
    }

    /// Every filter, sorted by key.
    pub fn list() -> &'static [Filter] {
        FILTERS
    }

    pub fn key(self) -> &'static str {
        match self {
            Filter::Deutan => "deutan",
            Filter::Gray => "gray",
            Filter::Protan => "protan",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Filter::Deutan => "Deuteranopia (green deficiency)",
            Filter::Gray => "Grayscale",
            Filter::Protan => "Protanopia (red deficiency)",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ChannelTransform for Filter {
    fn transform(&self, r: f64, g: f64, b: f64) -> [f64; 3] {
        match self {
            Filter::Deutan => deuteranopia(r, g, b),
            Filter::Gray => grayscale(r, g, b),
            Filter::Protan => protanopia(r, g, b),
        }
    }
}

/// Replaces every channel with the Rec. 709 weighted luminance.
///
/// Achromatic input is returned as is, which makes the filter idempotent.
pub fn grayscale(r: f64, g: f64, b: f64) -> [f64; 3] {
    if r == g && g == b {
        return [r, g, b];
    }
    let y = LUMA_WEIGHTS[0] * r + LUMA_WEIGHTS[1] * g + LUMA_WEIGHTS[2] * b;
    [y, y, y]
}

/// Dichromat simulation for a missing green (M) cone.
pub fn deuteranopia(r: f64, g: f64, b: f64) -> [f64; 3] {
    let (r, g, b) = (decode_gamma(r), decode_gamma(g), decode_gamma(b));
    let rg = encode_gamma(0.02138 + 0.677 * g + 0.2802 * r);
    let b = encode_gamma(0.02138 * (1.0 + g - r) + 0.9572 * b);
    [rg, rg, b]
}

/// Dichromat simulation for a missing red (L) cone.
pub fn protanopia(r: f64, g: f64, b: f64) -> [f64; 3] {
    let (r, g, b) = (decode_gamma(r), decode_gamma(g), decode_gamma(b));
    let rg = encode_gamma(0.003974 + 0.8806 * g + 0.1115 * r);
    let b = encode_gamma(0.003974 * (1.0 - g + r) + 0.9921 * b);
    [rg, rg, b]
}

/// [0, 255] channel to linear light in [0, 1].
fn decode_gamma(v: f64) -> f64 {
    (v / 255.0).powf(GAMMA)
}

/// Linear light in [0, 1] back to a [0, 255] channel.
fn encode_gamma(v: f64) -> f64 {
    v.powf(1.0 / GAMMA) * 255.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode;

    fn hex(t: &dyn ChannelTransform, r: f64, g: f64, b: f64) -> String {
        let [r, g, b] = t.transform(r, g, b);
        encode(r, g, b)
    }

    #[test]
    fn grayscale_weights_channels() {
        // 0.2126*255 + 0.7152*128 + 0.0722*64 = 150.3794
        let [y0, y1, y2] = grayscale(255.0, 128.0, 64.0);
        assert!((y0 - 150.3794).abs() < 1e-9, "got {y0}");
        assert_eq!(y0, y1);
        assert_eq!(y1, y2);
        assert_eq!(hex(&Filter::Gray, 255.0, 128.0, 64.0), "969696");
    }

    #[test]
    fn grayscale_of_white_is_white() {
        assert_eq!(hex(&Filter::Gray, 255.0, 255.0, 255.0), "ffffff");
    }

    #[test]
    fn grayscale_is_idempotent_on_encoded_output() {
        for (r, g, b) in [(255.0, 128.0, 64.0), (1.0, 2.0, 3.0), (17.0, 250.0, 90.0)] {
            let once = grayscale(r, g, b);
            let c = crate::codec::decode(&encode(once[0], once[1], once[2])).unwrap();
            let [r1, g1, b1] = c.channels();
            let twice = grayscale(r1, g1, b1);
            assert_eq!(encode(twice[0], twice[1], twice[2]), c.to_hex());
        }
    }

    #[test]
    fn deficiency_filters_lift_black() {
        // 0.02138^(1/2.2) * 255 = 44.4; 0.003974^(1/2.2) * 255 = 20.7
        assert_eq!(hex(&Filter::Deutan, 0.0, 0.0, 0.0), "2c2c2c");
        assert_eq!(hex(&Filter::Protan, 0.0, 0.0, 0.0), "141414");
    }

    #[test]
    fn deficiency_filters_merge_red_and_green() {
        for filter in [Filter::Deutan, Filter::Protan] {
            let [r, g, _] = filter.transform(200.0, 30.0, 90.0);
            assert_eq!(r, g, "{filter} should emit equal red and green");
        }
    }

    #[test]
    fn protanopia_darkens_pure_red_more_than_deuteranopia() {
        let [p, _, _] = protanopia(255.0, 0.0, 0.0);
        let [d, _, _] = deuteranopia(255.0, 0.0, 0.0);
        assert!(p < d, "protan {p} vs deutan {d}");
    }

    #[test]
    fn closures_are_channel_transforms() {
        let swap = |r: f64, g: f64, b: f64| [b, g, r];
        assert_eq!(hex(&swap, 255.0, 128.0, 0.0), "0080ff");
    }

    #[test]
    fn from_name_round_trips_keys() {
        for &f in Filter::list() {
            assert_eq!(Filter::from_name(f.key()).unwrap(), f);
        }
    }

    #[test]
    fn from_name_unknown_returns_error() {
        assert!(matches!(
            Filter::from_name("tritan"),
            Err(SwatchError::UnknownFilter(_))
        ));
    }

    #[test]
    fn list_is_sorted_by_key() {
        let keys: Vec<_> = Filter::list().iter().map(|f| f.key()).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn filter_serializes_as_key() {
        assert_eq!(serde_json::to_string(&Filter::Gray).unwrap(), "\"gray\"");
        let f: Filter = serde_json::from_str("\"protan\"").unwrap();
        assert_eq!(f, Filter::Protan);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn channel() -> impl Strategy<Value = f64> {
            0.0_f64..=255.0
        }

        proptest! {
            #[test]
            fn deficiency_output_stays_in_range(r in channel(), g in channel(), b in channel()) {
                for out in [deuteranopia(r, g, b), protanopia(r, g, b)] {
                    for v in out {
                        prop_assert!(v.is_finite() && v >= 0.0 && v <= 255.5, "got {}", v);
                    }
                }
            }

            #[test]
            fn grayscale_output_is_achromatic(r in channel(), g in channel(), b in channel()) {
                let [y0, y1, y2] = grayscale(r, g, b);
                prop_assert_eq!(y0, y1);
                prop_assert_eq!(y1, y2);
            }
        }
    }
}
