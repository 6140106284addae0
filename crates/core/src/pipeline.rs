//! Maps a list of hex colors through an optional channel transform.

use std::borrow::Cow;

use crate::codec;
use crate::error::SwatchError;
use crate::filter::ChannelTransform;

/// Applies `transform` to every color in `colors`.
///
/// With no transform the input is handed back borrowed and untouched. With
/// one, each color is decoded, transformed, clamped and re-encoded as
/// `"rrggbb"`; order and length are preserved. The first malformed color
/// fails the whole call with `SwatchError::Format`.
pub fn transform_colors<'a>(
    colors: &'a [String],
    transform: Option<&dyn ChannelTransform>,
) -> Result<Cow<'a, [String]>, SwatchError> {
    let Some(transform) = transform else {
        return Ok(Cow::Borrowed(colors));
    };
    colors
        .iter()
        .map(|hex| {
            let [r, g, b] = codec::decode(hex)?.channels();
            let [r, g, b] = transform.transform(r, g, b);
            Ok(codec::encode(r, g, b))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Cow::Owned)
}
