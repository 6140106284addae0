//! Where a sheet row gets its colors from.

use std::fmt;

use swatch_core::gradient::{sample, Gradient};
use swatch_core::SwatchError;

use crate::scheme::Scheme;

/// The origin of one or more sheet rows.
///
/// Resolved to concrete color lists by the sheet before any filtering.
pub enum Source {
    /// A built-in scheme by key, with scheme-specific arguments.
    Named { name: String, args: Vec<f64> },
    /// An ad-hoc gradient sampled evenly over [0, 1].
    Inline(Box<dyn Gradient + Send + Sync>),
    /// Every built-in scheme whose key starts with the prefix, one row each.
    GroupPrefix(String),
}

/// A resolved row before filtering: title plus colors, or `None` when the
/// scheme cannot supply the requested count.
pub type RawRow = (String, Option<Vec<String>>);

impl Source {
    pub fn named(name: &str) -> Self {
        Source::Named {
            name: name.to_string(),
            args: Vec::new(),
        }
    }

    pub fn named_with(name: &str, args: &[f64]) -> Self {
        Source::Named {
            name: name.to_string(),
            args: args.to_vec(),
        }
    }

    pub fn inline(gradient: impl Gradient + Send + Sync + 'static) -> Self {
        Source::Inline(Box::new(gradient))
    }

    pub fn group(prefix: &str) -> Self {
        Source::GroupPrefix(prefix.to_string())
    }

    /// Produces the rows for this source at `count` colors.
    ///
    /// Named rows are titled `"<key>: <title>"`. Group rows take each scheme's
    /// label and ignore `title`. Returns `SwatchError::UnknownScheme` for a
    /// name or prefix that matches nothing.
    pub fn resolve(&self, title: &str, count: usize) -> Result<Vec<RawRow>, SwatchError> {
        match self {
            Source::Named { name, args } => {
                let scheme = Scheme::by_name(name)?;
                Ok(vec![(
                    format!("{name}: {title}"),
                    scheme.generate(count, args),
                )])
            }
            Source::Inline(gradient) => {
                let colors = sample(&**gradient, count, false)
                    .into_iter()
                    .map(|c| c.to_hex())
                    .collect();
                Ok(vec![(title.to_string(), Some(colors))])
            }
            Source::GroupPrefix(prefix) => {
                let schemes = Scheme::list_group(prefix);
                if schemes.is_empty() {
                    return Err(SwatchError::UnknownScheme(format!("{prefix}*")));
                }
                Ok(schemes
                    .into_iter()
                    .map(|s| (s.label(), s.generate(count, &[])))
                    .collect())
            }
        }
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Named { name, args } => f
                .debug_struct("Named")
                .field("name", name)
                .field("args", args)
                .finish(),
            Source::Inline(_) => f.write_str("Inline(..)"),
            Source::GroupPrefix(prefix) => f.debug_tuple("GroupPrefix").field(prefix).finish(),
        }
    }
}
