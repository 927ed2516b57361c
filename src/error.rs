//! Contains the `ParseError` type and the fixed taxonomy of parse failures.
use std::fmt;

/// The reason a parse failed.
///
/// Each kind maps to one fixed, human-readable message. The messages are
/// part of the public contract: callers may compare `to_string()` output
/// against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    /// The input (or an array slot) ended before any value started.
    #[error("parse expect value")]
    ExpectValue,
    /// The next bytes do not start any valid value.
    #[error("parse invalid value")]
    InvalidValue,
    /// A complete value was parsed but more non-whitespace input follows.
    #[error("parse root not singular")]
    RootNotSingular,
    /// A string was not closed before the end of input.
    #[error("parse miss quotation mark")]
    MissQuotationMark,
    /// A backslash was followed by a character that is not a known escape.
    #[error("parse invalid string escape")]
    InvalidStringEscape,
    /// An unescaped control character (below `0x20`) appeared in a string.
    #[error("parse invalid string char")]
    InvalidStringChar,
    /// A `\u` escape was not followed by four hexadecimal digits.
    #[error("parse invalid unicode hex")]
    InvalidUnicodeHex,
    /// A UTF-16 surrogate escape was unpaired or mismatched.
    #[error("parse invalid unicode surrogate")]
    InvalidUnicodeSurrogate,
    /// An array element was followed by something other than `,` or `]`.
    #[error("parse miss comma or square bracket")]
    MissCommaOrSquareBracket,
    /// An object member did not start with a string key.
    #[error("parse miss key")]
    MissKey,
    /// An object key was not followed by `:`.
    #[error("parse miss colon")]
    MissColon,
    /// An object member was followed by something other than `,` or `}`.
    #[error("parse miss comma or curly bracket")]
    MissCommaOrCurlyBracket,
    /// Arrays and objects were nested deeper than the configured limit.
    #[error("parse depth exceeded")]
    DepthExceeded,
}

/// The primary error type for all parsing operations.
///
/// `Display` prints only the fixed message of [`ParseErrorKind`]; the
/// location is available through the public fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// The line number (1-indexed) where the error was detected.
    pub line: usize,
    /// The column number (1-indexed, in bytes) where the error was detected.
    pub column: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for ParseError {}
