//! Error types for pattern matching operations.

use thiserror::Error;

/// Errors that can occur while matching a document against a pattern.
///
/// Structural mismatches (wrong kind, wrong length, missing required key,
/// unequal literal) are *not* errors — they are `Ok(false)` verdicts. An
/// error means the match could not be carried out at all: one of the text
/// inputs failed to decode, or the pattern itself is malformed.
#[derive(Error, Debug)]
pub enum MatchError {
    /// The document text was not valid JSON (text entry point only).
    #[error("can't decode document argument: {0}")]
    DecodeDocument(#[source] serde_json::Error),

    /// The pattern text was not valid JSON (text entry point only).
    #[error("can't decode pattern argument: {0}")]
    DecodePattern(#[source] serde_json::Error),

    /// A pattern string started with `#` but named no known marker.
    /// Carries the full marker string including any argument.
    #[error("unsupported specifier '{0}'")]
    UnsupportedSpecifier(String),

    /// A `#regex` marker appeared without its required pattern argument.
    #[error("expected exactly one argument for #regex")]
    MissingRegexArgument,

    /// The argument to a `#regex` marker was not a valid regular expression.
    #[error("invalid regex argument to #regex: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// A nested error, located at an object member of the pattern.
    #[error("can't compare object member '{key}': {source}")]
    ObjectMember {
        key: String,
        source: Box<MatchError>,
    },

    /// A nested error, located at an array index of the pattern.
    #[error("can't compare array element {index}: {source}")]
    ArrayElement {
        index: usize,
        source: Box<MatchError>,
    },
}

/// Convenience alias used throughout jsonmatch-core.
pub type Result<T> = std::result::Result<T, MatchError>;
