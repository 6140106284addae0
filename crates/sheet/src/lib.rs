#![deny(unsafe_code)]
//! Swatch sheets: titled rows of palette colors viewed through a filter.
//!
//! This crate sits between `swatch-core` (colors, filters, gradients, the
//! transform pipeline) and the CLI. It owns the built-in [`Scheme`] provider,
//! the [`Source`] of each row, the fixed sheet layout, and CPU-side pixel and
//! PNG output.

pub mod pixel;
pub mod scheme;
pub mod source;

#[cfg(feature = "png")]
pub mod snapshot;

use serde::{Deserialize, Serialize};
use swatch_core::{transform_colors, ChannelTransform, Color, Filter, LinearGradient};
use swatch_core::{LuminanceGradient, SwatchError};
use tracing::{debug, info};

pub use scheme::Scheme;
pub use source::Source;

/// Largest color count a sheet will request per row.
pub const MAX_COUNT: usize = 100;

/// Shown in place of a row the scheme cannot fill.
pub const TOO_MANY_COLOURS: &str = "Too many colours requested.";

/// Base colors of the gradient sections, with their row titles.
const GRADIENT_BASES: &[(&str, Color)] = &[
    ("Red", Color::new(255, 0, 0)),
    ("Green", Color::new(0, 255, 0)),
    ("Blue", Color::new(0, 0, 255)),
    ("Yellow", Color::new(255, 255, 0)),
    ("Magenta", Color::new(255, 0, 255)),
    ("Cyan", Color::new(0, 255, 255)),
    ("Grayscale", Color::new(255, 255, 255)),
];

/// Knobs for one render pass of the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetOptions {
    /// Colors per row; clamped to [1, `MAX_COUNT`].
    pub count: usize,
    /// Vision filter applied to every row.
    pub filter: Option<Filter>,
    /// Luminance range control for the luminance gradients. `None` uses the
    /// fixed default of the luminance ramp.
    pub low_bound: Option<f64>,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            count: 8,
            filter: None,
            low_bound: None,
        }
    }
}

/// One titled row of hex colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub title: String,
    /// `None` when the scheme cannot supply the requested count.
    pub colors: Option<Vec<String>>,
}

/// A headed group of rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub rows: Vec<Row>,
}

/// The full swatch table for one count and filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sheet {
    pub count: usize,
    pub filter: Option<Filter>,
    pub sections: Vec<Section>,
}

impl Sheet {
    /// Builds the standard sheet.
    ///
    /// Returns `SwatchError::InvalidRange` if `low_bound` is outside (0, 0.5).
    pub fn build(options: &SheetOptions) -> Result<Sheet, SwatchError> {
        let count = options.count.clamp(1, MAX_COUNT);
        let transform = options.filter.as_ref().map(|f| f as &dyn ChannelTransform);
        let mut builder = Builder::new(count, transform);

        builder.heading("Miscellaneous");
        builder.add("Big qualitative palette", Source::named("mpn65"))?;

        builder.heading("Paul Tol's palettes");
        builder.add("qualitative palette (cbf)", Source::named("tol"))?;
        builder.add("diverging palette (cbf)", Source::named("tol-dv"))?;
        builder.add("sequential palette (cbf)", Source::named("tol-sq"))?;
        builder.add("rainbow palette (cbf)", Source::named("tol-rainbow"))?;

        for kind in ["sequential", "diverging", "qualitative"] {
            builder.heading(&format!("ColorBrewer {kind} palettes"));
            builder.add("", Source::group(&format!("cb-{kind}")))?;
        }

        builder.heading("HSV rainbows");
        builder.add("HSV Rainbow (s=1, v=1)", Source::named("rainbow"))?;
        builder.add("HSV Rainbow (s=.5, v=1)", Source::named_with("rainbow", &[0.5]))?;
        builder.add("HSV Rainbow (s=1, v=.5)", Source::named_with("rainbow", &[1.0, 0.5]))?;
        builder.add("HSV Rainbow (s=.5, v=.5)", Source::named_with("rainbow", &[0.5, 0.5]))?;

        builder.heading("RGB gradients");
        for &(title, base) in GRADIENT_BASES {
            builder.add(title, Source::inline(LinearGradient::new(base)))?;
        }

        builder.heading("Luminance gradients");
        for &(title, base) in GRADIENT_BASES {
            let ramp = match options.low_bound {
                Some(range) => LuminanceGradient::with_range(base, range)?,
                None => LuminanceGradient::new(base),
            };
            builder.add(title, Source::inline(ramp))?;
        }

        builder.heading("Solarized palettes");
        builder.add("Solarized", Source::group("sol"))?;

        let sheet = Sheet {
            count,
            filter: options.filter,
            sections: builder.sections,
        };
        info!(
            count,
            filter = ?options.filter,
            rows = sheet.rows().count(),
            "built swatch sheet"
        );
        Ok(sheet)
    }

    /// Every row, in section order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.sections.iter().flat_map(|s| s.rows.iter())
    }
}

/// Accumulates sections, resolving each source and filtering its colors.
struct Builder<'a> {
    count: usize,
    transform: Option<&'a dyn ChannelTransform>,
    sections: Vec<Section>,
}

impl<'a> Builder<'a> {
    fn new(count: usize, transform: Option<&'a dyn ChannelTransform>) -> Self {
        Self {
            count,
            transform,
            sections: Vec::new(),
        }
    }

    fn heading(&mut self, title: &str) {
        self.sections.push(Section {
            title: title.to_string(),
            rows: Vec::new(),
        });
    }

    fn add(&mut self, title: &str, source: Source) -> Result<(), SwatchError> {
        let raw = source.resolve(title, self.count)?;
        let mut rows = Vec::with_capacity(raw.len());
        for (title, colors) in raw {
            let colors = match colors {
                Some(colors) => Some(transform_colors(&colors, self.transform)?.into_owned()),
                None => None,
            };
            debug!(row = %title, filled = colors.is_some(), "resolved row");
            rows.push(Row { title, colors });
        }
        match self.sections.last_mut() {
            Some(section) => section.rows.extend(rows),
            None => self.sections.push(Section {
                title: String::new(),
                rows,
            }),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(count: usize) -> SheetOptions {
        SheetOptions {
            count,
            ..SheetOptions::default()
        }
    }

    fn find<'s>(sheet: &'s Sheet, title: &str) -> &'s Row {
        sheet
            .rows()
            .find(|r| r.title == title)
            .unwrap_or_else(|| panic!("no row titled {title}"))
    }

    #[test]
    fn default_sheet_has_all_sections() {
        let sheet = Sheet::build(&SheetOptions::default()).unwrap();
        let titles: Vec<_> = sheet.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Miscellaneous",
                "Paul Tol's palettes",
                "ColorBrewer sequential palettes",
                "ColorBrewer diverging palettes",
                "ColorBrewer qualitative palettes",
                "HSV rainbows",
                "RGB gradients",
                "Luminance gradients",
                "Solarized palettes",
            ]
        );
        assert_eq!(sheet.rows().count(), 1 + 4 + 18 + 9 + 8 + 4 + 7 + 7 + 2);
    }

    #[test]
    fn count_is_clamped() {
        assert_eq!(Sheet::build(&options(0)).unwrap().count, 1);
        assert_eq!(Sheet::build(&options(5000)).unwrap().count, MAX_COUNT);
    }

    #[test]
    fn rows_honor_requested_count() {
        let sheet = Sheet::build(&options(6)).unwrap();
        for row in sheet.rows() {
            if let Some(colors) = &row.colors {
                assert_eq!(colors.len(), 6, "row {}", row.title);
            }
        }
    }

    #[test]
    fn fixed_schemes_run_out_past_their_length() {
        let sheet = Sheet::build(&options(20)).unwrap();
        assert_eq!(find(&sheet, "tol: qualitative palette (cbf)").colors, None);
        assert_eq!(find(&sheet, "Solarized base colours").colors, None);
        assert_eq!(find(&sheet, "Blues (cbf)").colors, None);
        assert!(find(&sheet, "tol-rainbow: rainbow palette (cbf)").colors.is_some());
        assert!(find(&sheet, "mpn65: Big qualitative palette").colors.is_some());
    }

    #[test]
    fn rgb_gradient_rows_run_from_black_to_base() {
        let sheet = Sheet::build(&options(5)).unwrap();
        let red = find(&sheet, "Red");
        let colors = red.colors.as_ref().unwrap();
        assert_eq!(colors.first().map(String::as_str), Some("000000"));
        assert_eq!(colors.last().map(String::as_str), Some("ff0000"));
    }

    #[test]
    fn filter_is_applied_to_every_row() {
        let sheet = Sheet::build(&SheetOptions {
            count: 4,
            filter: Some(Filter::Gray),
            low_bound: None,
        })
        .unwrap();
        for row in sheet.rows() {
            for hex in row.colors.iter().flatten() {
                let c = Color::from_hex(hex).unwrap();
                assert!(c.r == c.g && c.g == c.b, "{} has {hex}", row.title);
            }
        }
    }

    #[test]
    fn deficiency_filter_merges_red_and_green_channels() {
        let sheet = Sheet::build(&SheetOptions {
            count: 3,
            filter: Some(Filter::Deutan),
            low_bound: None,
        })
        .unwrap();
        for hex in sheet.rows().flat_map(|r| r.colors.iter().flatten()) {
            let c = Color::from_hex(hex).unwrap();
            assert_eq!(c.r, c.g, "{hex}");
        }
    }

    #[test]
    fn invalid_low_bound_is_rejected() {
        let err = Sheet::build(&SheetOptions {
            low_bound: Some(0.6),
            ..SheetOptions::default()
        })
        .unwrap_err();
        assert!(matches!(err, SwatchError::InvalidRange(_)));
    }

    #[test]
    fn low_bound_changes_luminance_rows_only() {
        let fixed = Sheet::build(&options(3)).unwrap();
        let ranged = Sheet::build(&SheetOptions {
            count: 3,
            filter: None,
            low_bound: Some(0.25),
        })
        .unwrap();
        assert_eq!(fixed.sections[6].title, "RGB gradients");
        assert_eq!(fixed.sections[6], ranged.sections[6]);
        assert_eq!(fixed.sections[7].title, "Luminance gradients");
        assert_ne!(fixed.sections[7], ranged.sections[7]);
    }

    #[test]
    fn brewer_sections_carry_color_blind_labels() {
        let sheet = Sheet::build(&options(4)).unwrap();
        let section = |title: &str| {
            sheet
                .sections
                .iter()
                .find(|s| s.title == title)
                .unwrap_or_else(|| panic!("no section {title}"))
        };
        let sequential = section("ColorBrewer sequential palettes");
        assert!(sequential.rows.iter().all(|r| r.title.ends_with(" (cbf)")));
        let qualitative = section("ColorBrewer qualitative palettes");
        assert!(qualitative
            .rows
            .iter()
            .any(|r| r.title.contains(" (cbf if no more than ")));
        assert!(qualitative
            .rows
            .iter()
            .all(|r| r.colors.as_ref().map(Vec::len) == Some(4)));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: SheetOptions = serde_json::from_str(r#"{"filter":"protan"}"#).unwrap();
        assert_eq!(opts.count, 8);
        assert_eq!(opts.filter, Some(Filter::Protan));
        assert_eq!(opts.low_bound, None);
    }

    #[test]
    fn sheet_serializes_missing_rows_as_null() {
        let sheet = Sheet::build(&options(50)).unwrap();
        let json = serde_json::to_value(&sheet).unwrap();
        let tol = &json["sections"][1]["rows"][0];
        assert_eq!(tol["title"], "tol: qualitative palette (cbf)");
        assert!(tol["colors"].is_null());
        let mpn65 = &json["sections"][0]["rows"][0];
        assert_eq!(mpn65["colors"].as_array().map(Vec::len), Some(50));
        assert_eq!(json["count"], 50);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            #[test]
            fn every_filled_row_has_the_clamped_count(count in 0_usize..150, filter_idx in 0_usize..4) {
                let filter = Filter::list().get(filter_idx).copied();
                let sheet = Sheet::build(&SheetOptions { count, filter, low_bound: None }).unwrap();
                prop_assert_eq!(sheet.count, count.clamp(1, MAX_COUNT));
                for row in sheet.rows() {
                    if let Some(colors) = &row.colors {
                        prop_assert_eq!(colors.len(), sheet.count, "row {}", row.title);
                        prop_assert!(colors.iter().all(|h| h.len() == 6));
                    }
                }
            }
        }
    }
}
