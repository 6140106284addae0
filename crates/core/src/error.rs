//! Error types for the swatch core.

use thiserror::Error;

/// Errors produced by swatch operations.
#[derive(Debug, Error)]
pub enum SwatchError {
    /// A hex color string had the wrong length or a non-hex character.
    #[error("invalid hex color: {0}")]
    Format(String),

    /// A luminance range-control value was outside the open interval (0, 0.5).
    #[error("luminance range {0} out of bounds: expected a value in (0, 0.5)")]
    InvalidRange(f64),

    /// A filter name was not recognized.
    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    /// A scheme name or group prefix matched nothing.
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),

    /// An image would have zero or overflowing dimensions.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// I/O failure while writing output.
    #[error("I/O error: {0}")]
    Io(String),
}
