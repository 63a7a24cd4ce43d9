//! # jsonmatch-core
//!
//! Structural matching of JSON documents against JSON-shaped patterns.
//!
//! A pattern is itself a JSON value. Plain literals require exact equality;
//! strings starting with `#` are **markers** standing for constraints: type
//! checks (`#string`, `#number`, ...), presence rules (`#present`,
//! `#notpresent`, `#ignore`), null checks (`#null`, `#notnull`), formatted
//! strings (`#date`, `#datetime`, `#uuid`, `#uuid-v4`), and free-form
//! `#regex PATTERN`. Objects match as partial shapes (extra document keys
//! are fine) and `["#array-of", P]` broadcasts one pattern over a whole
//! array. The typical use is asserting that an API response has an expected
//! shape without requiring byte-exact equality.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonmatch_core::matches_json;
//!
//! let response = r#"{
//!     "id": "a5bf6b35-61b2-4187-8396-463a3d6c742b",
//!     "created": "2026-08-27T10:30:00Z",
//!     "tags": ["alpha", "beta"],
//!     "internal": {"shard": 3}
//! }"#;
//!
//! let pattern = r##"{
//!     "id": "#uuid",
//!     "created": "#datetime",
//!     "tags": ["#array-of", "#string"],
//!     "error": "#notpresent"
//! }"##;
//!
//! assert!(matches_json(response, pattern).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`matcher`] — the recursive structural matcher and the two entry points
//! - [`specifier`] — marker evaluation (the `#`-constraint table)
//! - [`marker`] — marker grammar: `"#" name [" " argument]`
//! - [`error`] — error types; structural mismatches are verdicts, not errors

pub mod error;
pub mod marker;
pub mod matcher;
pub mod specifier;

pub use error::{MatchError, Result};
pub use marker::Marker;
pub use matcher::{matches, matches_json};
