//! # canon-json
//!
//! `canon-json` is a strict JSON parser and canonical serializer built
//! around an owned value tree, in 100% safe Rust.
//!
//! ## Key Features
//!
//! * **Strict Parsing:** Accepts exactly RFC 8259 JSON text. Every rejected
//!   document fails with one of a fixed set of [`ParseErrorKind`]s, each
//!   with a stable message.
//! * **Owned Value Tree:** [`JsonValue`] is a plain enum. Objects keep their
//!   keys in insertion order.
//! * **Canonical Output:** [`serialize`] emits one deterministic text form
//!   that parses back to an equal value.
//! * **Bounded Recursion:** Nesting depth is capped (see [`ParserOptions`]),
//!   so hostile input cannot overflow the stack.
//!
//! ## Quick Start
//!
//! ```
//! use canon_json::{parse, serialize, JsonValue};
//!
//! let value = parse(r#"{ "name": "Babbage", "ids": [1815, 1871] }"#).unwrap();
//! assert_eq!(value["name"], "Babbage");
//! assert_eq!(value["ids"][1].to_number(), 1871.0);
//! assert_eq!(serialize(&value), r#"{ "name": "Babbage", "ids": [ 1815, 1871 ] }"#);
//!
//! let err = parse("[1,]").unwrap_err();
//! assert_eq!(err.to_string(), "parse invalid value");
//!
//! let built = JsonValue::from_iter([("ok", JsonValue::from(true))]);
//! assert_eq!(built.to_string(), r#"{ "ok": true }"#);
//! ```

/// Contains the `ParseError` type and the error taxonomy.
pub mod error;
/// Contains the recursive-descent parser and its options.
pub mod parser;
/// Contains the canonical and pretty serializers.
pub mod serializer;
/// Contains the `JsonValue` enum and its accessors.
pub mod value;

/// The byte-level scan cursor. Private to the crate.
mod cursor;

pub use error::{ParseError, ParseErrorKind};
pub use parser::{ParserOptions, DEFAULT_MAX_DEPTH};
pub use serializer::{serialize, serialize_pretty};
pub use value::{Array, JsonValue, Object, ValueKind};

use parser::Parser;

/// Parses a complete JSON document with the default [`ParserOptions`].
///
/// # Errors
/// Returns the first [`ParseError`] found. Its `to_string()` is one of the
/// fixed messages listed on [`ParseErrorKind`].
///
/// # Examples
/// ```
/// use canon_json::{parse, ParseErrorKind};
///
/// assert!(parse(" null ").unwrap().is_null());
/// assert_eq!(parse("0123").unwrap_err().kind, ParseErrorKind::RootNotSingular);
/// ```
pub fn parse(input: &str) -> Result<JsonValue, ParseError> {
    parse_with_options(input, ParserOptions::default())
}

/// Parses a complete JSON document with explicit limits.
///
/// # Errors
/// Returns the first [`ParseError`] found, including
/// [`ParseErrorKind::DepthExceeded`] when nesting goes past
/// `options.max_depth`.
pub fn parse_with_options(input: &str, options: ParserOptions) -> Result<JsonValue, ParseError> {
    tracing::trace!(len = input.len(), max_depth = options.max_depth, "parsing document");
    let result = Parser::new(input, options).parse();
    if let Err(err) = &result {
        tracing::debug!(
            kind = ?err.kind,
            line = err.line,
            column = err.column,
            "rejected document"
        );
    }
    result
}
