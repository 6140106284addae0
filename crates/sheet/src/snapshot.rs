//! CPU-side PNG rendering of a [`Sheet`].
//!
//! This module is feature-gated behind `png` (default on) so that consumers
//! that only need hex output do not pull in the `image` crate.
//! The pixel layout itself lives in [`crate::pixel`] (always available).

use std::path::Path;

use swatch_core::SwatchError;
use tracing::info;

use crate::pixel::sheet_to_rgba;
use crate::Sheet;

/// Writes the sheet as a PNG image, one strip per row.
///
/// Returns `SwatchError::InvalidDimensions` if the image would be empty or
/// overflow `u32`, or `SwatchError::Io` on write failure.
pub fn write_png(sheet: &Sheet, path: &Path) -> Result<(), SwatchError> {
    let buf = sheet_to_rgba(sheet)?;
    let w = u32::try_from(buf.width).map_err(|_| SwatchError::InvalidDimensions)?;
    let h = u32::try_from(buf.height).map_err(|_| SwatchError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, buf.pixels)
        .ok_or_else(|| SwatchError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| SwatchError::Io(e.to_string()))?;
    info!(path = %path.display(), width = w, height = h, "wrote swatch png");
    Ok(())
}
