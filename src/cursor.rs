//! The scan cursor shared by every parsing routine.
//!
//! It walks the raw input `&str` as `&[u8]`, tracks line and column for
//! error reporting, and skips insignificant whitespace with a byte lookup
//! table. It is *not* part of the public API.

use crate::error::{ParseError, ParseErrorKind};

// A 256-entry table classifying every byte. Only whitespace needs a class
// here; everything else is dispatched on the byte value by the parser.
const W: u8 = 1;

static BYTE_PROPERTIES: [u8; 256] = {
    let mut table = [0; 256];
    table[b' ' as usize] = W;
    table[b'\n' as usize] = W;
    table[b'\r' as usize] = W;
    table[b'\t' as usize] = W;
    table
};

/// A forward-only position in the input.
pub(crate) struct Cursor<'a> {
    /// The original input, used to copy validated runs out as `&str`.
    input: &'a str,
    /// The raw byte view of `input`.
    bytes: &'a [u8],
    /// The current position (index) in `bytes`.
    offset: usize,
    /// The current line number (1-indexed).
    line: usize,
    /// The current column number (1-indexed, counted in bytes).
    column: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Cursor {
            input,
            bytes: input.as_bytes(),
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Creates a `ParseError` located at the current position.
    pub(crate) fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            line: self.line,
            column: self.column,
        }
    }

    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.offset >= self.bytes.len()
    }

    /// The byte under the cursor, if any.
    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.offset).copied()
    }

    /// Everything from the cursor to the end of input.
    #[inline]
    pub(crate) fn rest(&self) -> &'a [u8] {
        self.bytes.get(self.offset..).unwrap_or_default()
    }

    /// The input between two byte offsets, if they lie on character
    /// boundaries.
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> Option<&'a str> {
        self.input.get(start..end)
    }

    /// Consumes one byte and returns it. Returns `None` at end of input.
    #[inline]
    pub(crate) fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.offset += 1;
        Some(byte)
    }

    /// Consumes up to `n` bytes.
    #[inline]
    pub(crate) fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consumes `byte` if it is the next one.
    #[inline]
    pub(crate) fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips spaces, tabs, and line breaks.
    #[inline]
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(byte) = self.peek() {
            if BYTE_PROPERTIES[byte as usize] != W {
                break;
            }
            self.advance();
        }
    }
}
