//! CLI errors and the exit code each one maps to.
//!
//! - 2: clap parse error (raised before `run`)
//! - 10: core failure (malformed hex, luminance bound outside (0, 0.5), unknown scheme)
//! - 11: PNG write failure
//! - 12: unknown filter or gradient variant
//! - 13: JSON output failure

use swatch_core::{Filter, SwatchError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Swatch(SwatchError),
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    Input(String),
    #[error("cannot serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Swatch(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

/// Filter names are typed on the command line, so an unknown one is reported
/// as bad input along with the accepted keys.
impl From<SwatchError> for CliError {
    fn from(e: SwatchError) -> Self {
        match e {
            SwatchError::Io(msg) => CliError::Io(msg),
            SwatchError::UnknownFilter(name) => {
                let keys: Vec<_> = Filter::list().iter().map(|f| f.key()).collect();
                CliError::Input(format!(
                    "unknown filter: {name} (expected one of {}, none)",
                    keys.join(", ")
                ))
            }
            other => CliError::Swatch(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_route_to_exit_codes() {
        let cases = [
            (SwatchError::Format("zz".into()), 10),
            (SwatchError::InvalidRange(0.7), 10),
            (SwatchError::UnknownScheme("viridis".into()), 10),
            (SwatchError::InvalidDimensions, 10),
            (SwatchError::Io("disk full".into()), 11),
            (SwatchError::UnknownFilter("tritan".into()), 12),
        ];
        for (err, code) in cases {
            let shown = format!("{err:?}");
            assert_eq!(CliError::from(err).exit_code(), code, "{shown}");
        }
    }

    #[test]
    fn unknown_filter_lists_accepted_keys() {
        let msg = CliError::from(SwatchError::UnknownFilter("tritan".into())).to_string();
        assert_eq!(
            msg,
            "unknown filter: tritan (expected one of deutan, gray, protan, none)"
        );
    }

    #[test]
    fn core_error_message_is_passed_through() {
        let err = SwatchError::InvalidRange(0.7);
        let expected = err.to_string();
        assert_eq!(CliError::from(err).to_string(), expected);
    }

    #[test]
    fn io_message_is_kept_verbatim() {
        let err = CliError::from(SwatchError::Io("disk full".into()));
        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn serde_json_errors_exit_with_13() {
        let bad = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let err = CliError::from(bad);
        assert_eq!(err.exit_code(), 13);
        assert!(err.to_string().starts_with("cannot serialize output"));
    }
}
