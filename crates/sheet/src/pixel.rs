//! Pure-computation pixel buffer conversion from a [`Sheet`].
//!
//! This module is always available (no feature gate) so that the `png`
//! snapshot path and any other raster consumer share the same layout.

use swatch_core::{Color, SwatchError};

use crate::Sheet;

/// Nominal strip width; swatches are sized to fill it.
pub const STRIP_WIDTH: usize = 500;
/// Narrowest swatch drawn, however many colors a row holds.
pub const MIN_SWATCH_WIDTH: usize = 5;
/// Height of one row strip in pixels.
pub const ROW_HEIGHT: usize = 20;
/// Fill for empty rows and any space right of a row's last swatch.
pub const BACKGROUND: Color = Color::new(0x80, 0x80, 0x80);

/// An RGBA8 image, row-major, four bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

/// Width of each swatch for a row of `count` colors.
pub fn swatch_width(count: usize) -> usize {
    let w = (STRIP_WIDTH as f64 / count.max(1) as f64).round() as usize;
    w.max(MIN_SWATCH_WIDTH)
}

/// Lays the sheet out as one horizontal strip per row.
///
/// Rows without colors are drawn as plain background. Returns
/// `SwatchError::InvalidDimensions` for a sheet with no rows, or
/// `SwatchError::Format` if a row holds a malformed color.
pub fn sheet_to_rgba(sheet: &Sheet) -> Result<RgbaBuffer, SwatchError> {
    let rows: Vec<Option<Vec<Color>>> = sheet
        .rows()
        .map(|row| {
            row.colors
                .as_ref()
                .map(|colors| {
                    colors
                        .iter()
                        .map(|h| Color::from_hex(h))
                        .collect::<Result<Vec<_>, _>>()
                })
                .transpose()
        })
        .collect::<Result<_, _>>()?;
    if rows.is_empty() {
        return Err(SwatchError::InvalidDimensions);
    }

    let swatch = swatch_width(sheet.count);
    let width = rows
        .iter()
        .flatten()
        .map(|colors| colors.len() * swatch)
        .fold(STRIP_WIDTH, usize::max);
    let height = rows.len() * ROW_HEIGHT;

    let mut pixels = Vec::with_capacity(width * height * 4);
    for row in &rows {
        let line: Vec<u8> = (0..width)
            .flat_map(|x| {
                let c = row
                    .as_ref()
                    .and_then(|colors| colors.get(x / swatch))
                    .copied()
                    .unwrap_or(BACKGROUND);
                [c.r, c.g, c.b, 255u8]
            })
            .collect();
        for _ in 0..ROW_HEIGHT {
            pixels.extend_from_slice(&line);
        }
    }

    Ok(RgbaBuffer {
        width,
        height,
        pixels,
    })
}
