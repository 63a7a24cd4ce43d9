//! Marker recognition — the `#`-string grammar used inside patterns.
//!
//! A pattern-side string whose first character is `#` is never matched
//! literally; it names a constraint. The grammar is `"#" name [" " argument]`
//! where the argument, if present, is everything after the *first* space,
//! taken verbatim (a `#regex` argument may itself contain spaces).
//!
//! There is no escape syntax: a document field that genuinely holds a string
//! starting with `#` cannot be required literally by a pattern.

use serde_json::Value;

pub(crate) const IGNORE: &str = "#ignore";
pub(crate) const NULL: &str = "#null";
pub(crate) const NOT_NULL: &str = "#notnull";
pub(crate) const PRESENT: &str = "#present";
pub(crate) const NOT_PRESENT: &str = "#notpresent";
pub(crate) const ARRAY_OF: &str = "#array-of";

/// A parsed marker, borrowing from the pattern string it was recognized in.
///
/// `name` includes the leading `#` and is case-sensitive; `raw` is the whole
/// original string (used verbatim in error messages).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    pub name: &'a str,
    pub argument: Option<&'a str>,
    pub raw: &'a str,
}

impl<'a> Marker<'a> {
    /// Recognize a pattern value as a marker.
    ///
    /// Returns `Some` only for string values starting with `#`. Splits on
    /// the first space: the part before it is the marker name, the remainder
    /// (if any) is the argument, untokenized.
    pub fn recognize(pattern: &'a Value) -> Option<Self> {
        let raw = pattern.as_str()?;
        if !raw.starts_with('#') {
            return None;
        }
        Some(match raw.split_once(' ') {
            Some((name, argument)) => Marker {
                name,
                argument: Some(argument),
                raw,
            },
            None => Marker {
                name: raw,
                argument: None,
                raw,
            },
        })
    }

    /// Whether the pattern value is exactly the given bare marker (name
    /// only, no argument). Used for the markers that carry structural
    /// meaning at the object/array level (`#array-of` sugar detection).
    pub(crate) fn is_exactly(pattern: &Value, marker: &str) -> bool {
        pattern.as_str() == Some(marker)
    }
}
