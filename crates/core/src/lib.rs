#![deny(unsafe_code)]
//! Core types for swatch: color swatch tables viewed through vision filters.
//!
//! Provides the 8-bit [`Color`] and its hex codec, the float color spaces
//! (`Srgb`, `LinearRgb`, `Hsl`, `Hsv`), the vision-deficiency [`Filter`]s behind
//! the [`ChannelTransform`] trait, the linear and luminance [`Gradient`]s, and
//! [`transform_colors`], which maps a list of hex colors through a transform.

pub mod codec;
pub mod color;
pub mod error;
pub mod filter;
pub mod gradient;
pub mod pipeline;

pub use color::{Color, Hsl, Hsv, LinearRgb, Srgb};
pub use error::SwatchError;
pub use filter::{ChannelTransform, Filter};
pub use gradient::{Gradient, LinearGradient, LuminanceGradient};
pub use pipeline::transform_colors;
