//! Specifier evaluation — turning a marker plus a runtime value into a verdict.
//!
//! Each marker names a constraint on a single value: a type check (`#string`,
//! `#number`, ...), a presence rule (`#present`, `#notpresent`, `#ignore`),
//! a null check (`#null`, `#notnull`), or a formatted-string check (`#date`,
//! `#datetime`, `#uuid`, `#uuid-v4`, `#regex PATTERN`).
//!
//! # Key semantics
//!
//! - A value of the wrong kind for a marker is an ordinary `false` verdict,
//!   not an error. Errors are reserved for malformed patterns: an unknown
//!   marker name, or a `#regex` with a missing or uncompilable argument.
//! - A null value satisfies `#ignore`, `#null`, and `#present`, and fails
//!   every other marker without ever producing an error — the null check
//!   happens before the marker name is even looked up.
//! - An absent value (a missing object key) satisfies `#ignore` and
//!   `#notpresent` and fails everything else, likewise without error.
//! - Markers that take no argument simply ignore any argument they are
//!   given; only the name before the first space selects the evaluator.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use serde_json::Value;

use crate::error::{MatchError, Result};
use crate::marker::{self, Marker};

// Syntactic UUID checks, shared by #uuid and #uuid-v4. The v4 form
// additionally pins the version nibble to 4 and the variant nibble to 8-b.
static UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}$").unwrap()
});
static UUID_V4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-f0-9]{8}-[a-f0-9]{4}-4[a-f0-9]{3}-[89ab][a-f0-9]{3}-[a-f0-9]{12}$")
        .unwrap()
});

/// Evaluate a marker against a runtime value.
///
/// `value` is `None` when the marker sits under an object key the document
/// does not have; `#ignore` and `#notpresent` are the only markers that can
/// succeed there.
///
/// # Errors
///
/// [`MatchError::UnsupportedSpecifier`] for an unknown marker name,
/// [`MatchError::MissingRegexArgument`] / [`MatchError::InvalidRegex`] for a
/// defective `#regex`. Errors only arise for a present, non-null value: a
/// null or absent value short-circuits to a verdict before the marker table
/// is consulted.
pub fn evaluate(value: Option<&Value>, marker: &Marker<'_>) -> Result<bool> {
    // Null short-circuit: these three accept null before anything else runs.
    if matches!(value, Some(Value::Null))
        && matches!(marker.name, marker::IGNORE | marker::NULL | marker::PRESENT)
    {
        return Ok(true);
    }

    let value = match value {
        None => {
            return Ok(matches!(
                marker.name,
                marker::IGNORE | marker::NOT_PRESENT
            ))
        }
        // Null fails every remaining marker, including unknown ones.
        Some(Value::Null) => return Ok(false),
        Some(v) => v,
    };

    match marker.name {
        marker::IGNORE => Ok(true),
        marker::NULL => Ok(false),
        marker::NOT_NULL => Ok(true),
        marker::PRESENT => Ok(true),
        marker::NOT_PRESENT => Ok(false),
        "#array" => Ok(value.is_array()),
        "#object" => Ok(value.is_object()),
        "#bool" | "#boolean" => Ok(value.is_boolean()),
        "#number" => Ok(value.is_number()),
        "#string" => Ok(value.is_string()),
        "#date" => Ok(value
            .as_str()
            .is_some_and(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok())),
        "#datetime" => Ok(value
            .as_str()
            .is_some_and(|s| DateTime::parse_from_rfc3339(s).is_ok())),
        "#uuid" => Ok(value.as_str().is_some_and(|s| UUID_RE.is_match(s))),
        "#uuid-v4" => Ok(value.as_str().is_some_and(|s| UUID_V4_RE.is_match(s))),
        "#regex" => {
            // Argument problems are pattern defects and error out even when
            // the value would fail the string-kind check anyway.
            let pattern = marker.argument.ok_or(MatchError::MissingRegexArgument)?;
            let re = Regex::new(pattern)?;
            Ok(value.as_str().is_some_and(|s| re.is_match(s)))
        }
        _ => Err(MatchError::UnsupportedSpecifier(marker.raw.to_string())),
    }
}
