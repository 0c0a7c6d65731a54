//! Error types for parsing and converting colors.

use thiserror::Error;

/// Returned when a string does not match any supported color notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input matches none of the accepted grammars.
    #[error("invalid color {input:?}: {reason}")]
    InvalidFormat {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

impl ParseError {
    pub(crate) fn invalid_format(input: &str, reason: &'static str) -> Self {
        ParseError::InvalidFormat {
            input: input.to_string(),
            reason,
        }
    }
}

/// Returned by the conversion entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The input could not be parsed; no output is produced.
    #[error("invalid input {input:?}")]
    InvalidInput {
        /// The original input string.
        input: String,
        /// Why parsing failed.
        #[source]
        source: ParseError,
    },
}

/// Returned when a color space discriminator is not `HEX`, `P3` or `OKLCH`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color space {0:?} (expected HEX, P3 or OKLCH)")]
pub struct UnknownColorSpace(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn parse_error_message() {
        let error = ParseError::invalid_format("#12", "expected 3, 4, 6 or 8 hex digits");
        assert_eq!(
            error.to_string(),
            "invalid color \"#12\": expected 3, 4, 6 or 8 hex digits"
        );
    }

    #[test]
    fn conversion_error_keeps_parse_error_as_source() {
        let parse = ParseError::invalid_format("nope", "unknown notation");
        let error = ConversionError::InvalidInput {
            input: "nope".to_string(),
            source: parse.clone(),
        };
        assert_eq!(error.to_string(), "invalid input \"nope\"");
        assert_eq!(
            error.source().map(|s| s.to_string()),
            Some(parse.to_string())
        );
    }

    #[test]
    fn unknown_color_space_message() {
        let error = UnknownColorSpace("hsl".to_string());
        assert_eq!(
            error.to_string(),
            "unknown color space \"hsl\" (expected HEX, P3 or OKLCH)"
        );
    }
}
