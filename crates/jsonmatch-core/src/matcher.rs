//! Structural matcher — the recursive core comparing document to pattern.
//!
//! The pattern drives the comparison. At every node it is one of:
//!
//! - a marker string (starts with `#`) — delegated to [`crate::specifier`],
//! - a literal primitive — exact equality, same kind required,
//! - an array — positional comparison, or the `["#array-of", P]` sugar that
//!   broadcasts one element-pattern over the whole document array,
//! - an object — a *partial* shape: every pattern key constrains the
//!   document, extra document keys are unconstrained.
//!
//! # Key design decisions
//!
//! - **Absence is `Option`**: a missing object key recurses as `None`, which
//!   is distinct from a present `null`. Only the presence markers and
//!   `#ignore` can succeed against `None`.
//! - **No short-circuit on mismatch**: object and array loops visit every
//!   entry and AND the results, so a malformed marker is reported even when
//!   an earlier sibling already failed to match. Errors abort immediately.
//! - **Kind before value**: when the pattern is not a marker, document and
//!   pattern must share a `Value` variant or the verdict is `false` — never
//!   an error.

use serde_json::{Map, Value};

use crate::error::{MatchError, Result};
use crate::marker::{self, Marker};
use crate::specifier;

/// Check whether a decoded document conforms to a decoded pattern.
///
/// Returns `Ok(true)` / `Ok(false)` for a verdict, `Err` when the pattern is
/// malformed (unknown marker, bad `#regex` argument). Never mutates either
/// tree; safe to call concurrently on independent inputs.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use jsonmatch_core::matches;
///
/// let document = json!({"id": 7, "name": "Alice", "debug": "0xfe12"});
/// let pattern = json!({"id": "#number", "name": "Alice"});
/// assert!(matches(&document, &pattern).unwrap());
/// ```
pub fn matches(document: &Value, pattern: &Value) -> Result<bool> {
    match_value(Some(document), pattern)
}

/// Decode both texts as JSON, then check conformance like [`matches`].
///
/// # Errors
///
/// A decode failure on either argument is reported as
/// [`MatchError::DecodeDocument`] or [`MatchError::DecodePattern`];
/// matching is not attempted.
///
/// # Examples
///
/// ```
/// use jsonmatch_core::matches_json;
///
/// let document = r#"{"id": "a5bf6b35-61b2-4187-8396-463a3d6c742b"}"#;
/// assert!(matches_json(document, r##"{"id": "#uuid"}"##).unwrap());
/// ```
pub fn matches_json(document: &str, pattern: &str) -> Result<bool> {
    let document: Value = serde_json::from_str(document).map_err(MatchError::DecodeDocument)?;
    let pattern: Value = serde_json::from_str(pattern).map_err(MatchError::DecodePattern)?;
    matches(&document, &pattern)
}

/// Recursive entry point. `value` is `None` for a missing object key.
fn match_value(value: Option<&Value>, pattern: &Value) -> Result<bool> {
    if let Some(m) = Marker::recognize(pattern) {
        return specifier::evaluate(value, &m);
    }

    // A non-marker pattern can never be satisfied by an absent value.
    let Some(value) = value else {
        return Ok(false);
    };

    match (value, pattern) {
        (Value::Null, Value::Null) => Ok(true),
        (Value::Bool(v), Value::Bool(p)) => Ok(v == p),
        // Number equality distinguishes the decoder's internal
        // representations (i64/u64/f64), exactly as decoded.
        (Value::Number(v), Value::Number(p)) => Ok(v == p),
        (Value::String(v), Value::String(p)) => Ok(v == p),
        (Value::Array(v), Value::Array(p)) => match_array(v, p),
        (Value::Object(v), Value::Object(p)) => match_object(v, p),
        // Kind mismatch is a verdict, not an error.
        _ => Ok(false),
    }
}

/// Object comparison, driven entirely by the pattern's keys.
///
/// Document keys without a pattern counterpart are unconstrained, so the
/// pattern acts as a subset specification. Presence rules (`#present`,
/// `#notpresent`, `#ignore`) fall out of the `Option` recursion: the member
/// lookup hands `None` to the evaluator when the key is missing.
fn match_object(value: &Map<String, Value>, pattern: &Map<String, Value>) -> Result<bool> {
    let mut matched = true;
    for (key, member_pattern) in pattern {
        let member = match_value(value.get(key), member_pattern).map_err(|source| {
            MatchError::ObjectMember {
                key: key.clone(),
                source: Box::new(source),
            }
        })?;
        matched = matched && member;
    }
    Ok(matched)
}

/// Array comparison: `#array-of` broadcast when the pattern is exactly
/// `["#array-of", P]`, positional with required equal lengths otherwise.
///
/// The sugar shape is strict: the first element must be the bare string
/// `"#array-of"` and the pattern must have exactly two elements. Anything
/// else — including `"#array-of"` with a trailing argument or extra
/// elements — is compared positionally.
fn match_array(value: &[Value], pattern: &[Value]) -> Result<bool> {
    let broadcast = match pattern {
        [first, element_pattern] if Marker::is_exactly(first, marker::ARRAY_OF) => {
            Some(element_pattern)
        }
        _ => None,
    };

    if broadcast.is_none() && value.len() != pattern.len() {
        return Ok(false);
    }

    let mut matched = true;
    for (index, element) in value.iter().enumerate() {
        let element_pattern = broadcast.unwrap_or_else(|| &pattern[index]);
        let item = match_value(Some(element), element_pattern).map_err(|source| {
            MatchError::ArrayElement {
                index,
                source: Box::new(source),
            }
        })?;
        matched = matched && item;
    }
    Ok(matched)
}
