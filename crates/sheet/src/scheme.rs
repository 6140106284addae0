//! Built-in palette schemes.
//!
//! Paul Tol's qualitative, diverging, sequential and rainbow schemes, the
//! mpn65 qualitative list, HSV rainbows, the Solarized tones and every
//! ColorBrewer family. Fixed schemes hand out a prefix of their color list;
//! function schemes are sampled evenly along [0, 1]; ColorBrewer schemes pick
//! the hand-tuned list for the requested count.

use color_brewery::{PaletteIter, RGBColor, Trivalent};
use rgb::RGB8;
use swatch_core::color::{hsv_to_srgb, Hsv, Srgb};
use swatch_core::gradient::sample;
use swatch_core::{Color, SwatchError};

/// How a scheme produces its colors.
#[derive(Debug, Clone, Copy)]
enum Kind {
    /// A fixed list; at most `len` colors.
    Fixed(&'static [&'static str]),
    /// A closed-form gradient over [0, 1].
    Function(fn(f64) -> Color),
    /// HSV hue wheel; args are saturation and value.
    Rainbow,
    /// A ColorBrewer family: one list per supported color count.
    Brewer(fn() -> PaletteIter<RGB8>),
}

/// A named palette scheme.
#[derive(Debug, Clone, Copy)]
pub struct Scheme {
    key: &'static str,
    title: &'static str,
    /// Color-blind friendly up to this many colors. Unused for ColorBrewer
    /// families, which carry the flag per list.
    cbf: usize,
    kind: Kind,
}

const fn scheme(key: &'static str, title: &'static str, cbf: usize, kind: Kind) -> Scheme {
    Scheme {
        key,
        title,
        cbf,
        kind,
    }
}

const fn brewer(
    key: &'static str,
    title: &'static str,
    family: fn() -> PaletteIter<RGB8>,
) -> Scheme {
    scheme(key, title, 0, Kind::Brewer(family))
}

const MPN65: &[&str] = &[
    "ff0029", "377eb8", "66a61e", "984ea3", "00d2d5", "ff7f00", "af8d00", "7f80cd", "b3e900",
    "c42e60", "a65628", "f781bf", "8dd3c7", "bebada", "fb8072", "80b1d3", "fdb462", "fccde5",
    "bc80bd", "ffed6f", "c4eaff", "cf8c00", "1b9e77", "d95f02", "e7298a", "e6ab02", "a6761d",
    "0097ff", "00d067", "000000", "252525", "525252", "737373", "969696", "bdbdbd", "f43600",
    "4ba93b", "5779bb", "927acc", "97ee3f", "bf3947", "9f5b00", "f48758", "8caed6", "f2b94f",
    "eff26e", "e43872", "d9b100", "9d7a00", "698cff", "d9d9d9", "00d27e", "d06800", "009f82",
    "c49200", "cbe8ff", "fecddf", "c27eb6", "8cd2ce", "c4b8d9", "f883b0", "a49100", "f48800",
    "27d0df", "a04a9b",
];

const TOL: &[&str] = &[
    "332288", "6699cc", "88ccee", "44aa99", "117733", "999933", "ddcc77", "661100", "cc6677",
    "aa4466", "882255", "aa4499",
];

const SOL_BASE: &[&str] = &[
    "002b36", "073642", "586e75", "657b83", "839496", "93a1a1", "eee8d5", "fdf6e3",
];

const SOL_ACCENT: &[&str] = &[
    "b58900", "cb4b16", "dc322f", "d33682", "6c71c4", "268bd2", "2aa198", "859900",
];

/// Sorted by key.
const SCHEMES: &[Scheme] = &[
    brewer("cb-diverging-brbg", "BrBG", RGB8::brbg),
    brewer("cb-diverging-piyg", "PiYG", RGB8::piyg),
    brewer("cb-diverging-prgn", "PRGn", RGB8::prgn),
    brewer("cb-diverging-puor", "PuOr", RGB8::puor),
    brewer("cb-diverging-rdbu", "RdBu", RGB8::rdbu),
    brewer("cb-diverging-rdgy", "RdGy", RGB8::rdgy),
    brewer("cb-diverging-rdylbu", "RdYlBu", RGB8::rdylbu),
    brewer("cb-diverging-rdylgn", "RdYlGn", RGB8::rdylgn),
    brewer("cb-diverging-spectral", "Spectral", RGB8::spectral),
    brewer("cb-qualitative-accent", "Accent", RGB8::accent),
    brewer("cb-qualitative-dark2", "Dark2", RGB8::dark2),
    brewer("cb-qualitative-paired", "Paired", RGB8::paired),
    brewer("cb-qualitative-pastel1", "Pastel1", RGB8::pastel1),
    brewer("cb-qualitative-pastel2", "Pastel2", RGB8::pastel2),
    brewer("cb-qualitative-set1", "Set1", RGB8::set1),
    brewer("cb-qualitative-set2", "Set2", RGB8::set2),
    brewer("cb-qualitative-set3", "Set3", RGB8::set3),
    brewer("cb-sequential-blues", "Blues", RGB8::blues),
    brewer("cb-sequential-bugn", "BuGn", RGB8::bugn),
    brewer("cb-sequential-bupu", "BuPu", RGB8::bupu),
    brewer("cb-sequential-gnbu", "GnBu", RGB8::gnbu),
    brewer("cb-sequential-greens", "Greens", RGB8::greens),
    brewer("cb-sequential-greys", "Greys", RGB8::greys),
    brewer("cb-sequential-oranges", "Oranges", RGB8::oranges),
    brewer("cb-sequential-orrd", "OrRd", RGB8::orrd),
    brewer("cb-sequential-pubu", "PuBu", RGB8::pubu),
    brewer("cb-sequential-pubugn", "PuBuGn", RGB8::pubugn),
    brewer("cb-sequential-purd", "PuRd", RGB8::purd),
    brewer("cb-sequential-purples", "Purples", RGB8::purples),
    brewer("cb-sequential-rdpu", "RdPu", RGB8::rdpu),
    brewer("cb-sequential-reds", "Reds", RGB8::reds),
    brewer("cb-sequential-ylgn", "YlGn", RGB8::ylgn),
    brewer("cb-sequential-ylgnbu", "YlGnBu", RGB8::ylgnbu),
    brewer("cb-sequential-ylorbr", "YlOrBr", RGB8::ylorbr),
    brewer("cb-sequential-ylorrd", "YlOrRd", RGB8::ylorrd),
    scheme("mpn65", "Big qualitative palette", 0, Kind::Fixed(MPN65)),
    scheme("rainbow", "HSV rainbow", 0, Kind::Rainbow),
    scheme("sol-accent", "Solarized accent colours", 0, Kind::Fixed(SOL_ACCENT)),
    scheme("sol-base", "Solarized base colours", 0, Kind::Fixed(SOL_BASE)),
    scheme("tol", "Tol's qualitative palette", TOL.len(), Kind::Fixed(TOL)),
    scheme("tol-dv", "Tol's diverging palette", usize::MAX, Kind::Function(tol_diverging)),
    scheme("tol-rainbow", "Tol's rainbow palette", usize::MAX, Kind::Function(tol_rainbow)),
    scheme("tol-sq", "Tol's sequential palette", usize::MAX, Kind::Function(tol_sequential)),
];

impl Scheme {
    /// Looks a scheme up by key.
    ///
    /// Returns `SwatchError::UnknownScheme` if no scheme has that key.
    pub fn by_name(name: &str) -> Result<&'static Scheme, SwatchError> {
        SCHEMES
            .iter()
            .find(|s| s.key == name)
            .ok_or_else(|| SwatchError::UnknownScheme(name.to_string()))
    }

    /// All built-in schemes, sorted by key.
    pub fn list() -> &'static [Scheme] {
        SCHEMES
    }

    /// Schemes whose key starts with `prefix`, in key order.
    pub fn list_group(prefix: &str) -> Vec<&'static Scheme> {
        SCHEMES.iter().filter(|s| s.key.starts_with(prefix)).collect()
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Largest color count this scheme can produce.
    pub fn max(&self) -> usize {
        match self.kind {
            Kind::Fixed(list) => list.len(),
            Kind::Function(_) | Kind::Rainbow => usize::MAX,
            Kind::Brewer(family) => family().map(|p| p.len()).max().unwrap_or(0),
        }
    }

    /// Largest count at which the scheme is color-blind friendly.
    pub fn cbf_max(&self) -> usize {
        match self.kind {
            Kind::Brewer(family) => family()
                .filter(|p| p.blind() == Trivalent::Yes)
                .map(|p| p.len())
                .max()
                .unwrap_or(0),
            _ => self.cbf,
        }
    }

    /// Title annotated with how far the scheme stays color-blind friendly.
    pub fn label(&self) -> String {
        let cbf_max = self.cbf_max();
        if cbf_max >= self.max() {
            format!("{} (cbf)", self.title)
        } else if cbf_max > 1 {
            format!("{} (cbf if no more than {cbf_max} colours)", self.title)
        } else {
            self.title.to_string()
        }
    }

    /// Produces `count` hex colors, or `None` if the scheme cannot supply that many.
    ///
    /// `args` only affects `rainbow`: saturation then value, each defaulting to 1.
    /// ColorBrewer schemes use the shortest list holding at least `count`
    /// colors, so counts below the family's smallest list take its prefix.
    pub fn generate(&self, count: usize, args: &[f64]) -> Option<Vec<String>> {
        if count > self.max() {
            return None;
        }
        let colors = match self.kind {
            Kind::Fixed(list) => return Some(list[..count].iter().map(|h| h.to_string()).collect()),
            Kind::Function(f) => sample(&f, count, false),
            Kind::Rainbow => {
                let s = args.first().copied().unwrap_or(1.0);
                let v = args.get(1).copied().unwrap_or(1.0);
                let wheel = |t: f64| Color::from_srgb(hsv_to_srgb(Hsv { h: t * 360.0, s, v }));
                sample(&wheel, count, true)
            }
            Kind::Brewer(family) => family()
                .filter(|p| p.len() >= count)
                .min_by_key(|p| p.len())?
                .colors()
                .into_iter()
                .take(count)
                .map(|c| Color::new(c.r, c.g, c.b))
                .collect(),
        };
        Some(colors.into_iter().map(Color::to_hex).collect())
    }
}

/// Paul Tol's diverging blue-white-red scheme.
fn tol_diverging(x: f64) -> Color {
    let r = 0.237 - 2.13 * x + 26.92 * x.powi(2) - 65.5 * x.powi(3) + 63.5 * x.powi(4)
        - 22.36 * x.powi(5);
    let g = ((0.572 + 1.524 * x - 1.811 * x.powi(2)) / (1.0 - 0.291 * x + 0.1574 * x.powi(2)))
        .powi(2);
    let b = 1.0
        / (1.579 - 4.03 * x + 12.92 * x.powi(2) - 31.4 * x.powi(3) + 48.6 * x.powi(4)
            - 23.36 * x.powi(5));
    Color::from_srgb(Srgb { r, g, b })
}

/// Paul Tol's purple-to-red rainbow.
fn tol_rainbow(x: f64) -> Color {
    let r = (0.472 - 0.567 * x + 4.05 * x.powi(2))
        / (1.0 + 8.72 * x - 19.17 * x.powi(2) + 14.1 * x.powi(3));
    let g = 0.108932 - 1.22635 * x + 27.284 * x.powi(2) - 98.577 * x.powi(3)
        + 163.3 * x.powi(4)
        - 131.395 * x.powi(5)
        + 40.634 * x.powi(6);
    let b = 1.0
        / (1.97 + 3.54 * x - 68.5 * x.powi(2) + 243.0 * x.powi(3) - 297.0 * x.powi(4)
            + 125.0 * x.powi(5));
    Color::from_srgb(Srgb { r, g, b })
}

/// Paul Tol's pale-yellow to dark-brown sequential scheme.
fn tol_sequential(x: f64) -> Color {
    let r = 1.0 - 0.392 * (1.0 + erf((x - 0.869) / 0.255));
    let g = 1.021 - 0.456 * (1.0 + erf((x - 0.527) / 0.376));
    let b = 1.0 - 0.493 * (1.0 + erf((x - 0.272) / 0.309));
    Color::from_srgb(Srgb { r, g, b })
}

/// Error function (Abramowitz & Stegun 7.1.26, max error 1.5e-7).
fn erf(x: f64) -> f64 {
    if x < 0.0 {
        return -erf(-x);
    }
    let t = 1.0 / 0.327_591_1f64.mul_add(x, 1.0);
    let poly = t
        * (0.254_829_592
            + t * (-0.284_496_736
                + t * (1.421_413_741 + t * (-1.453_152_027 + t * 1.061_405_429))));
    1.0 - poly * (-x * x).exp()
}
