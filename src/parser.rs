//! Contains the recursive-descent `Parser` and its options.
//!
//! The parser reads the input once, left to right, never looking more than
//! one byte ahead, and stops at the first violation. Nesting is bounded by
//! [`ParserOptions::max_depth`], so adversarial input cannot exhaust the
//! native stack.

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind};
use crate::value::{Array, JsonValue, Object};
use memchr::memchr2;

/// The default maximum nesting depth (e.g., `[[[]]]`) to prevent stack overflows.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Tunable limits for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// The deepest allowed nesting of arrays and objects. A document nested
    /// deeper fails with [`ParseErrorKind::DepthExceeded`].
    pub max_depth: usize,
}

impl ParserOptions {
    #[must_use]
    pub const fn new() -> Self {
        ParserOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    max_depth: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str, options: ParserOptions) -> Self {
        Parser {
            cursor: Cursor::new(input),
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    /// Parses exactly one value surrounded by optional whitespace.
    pub(crate) fn parse(mut self) -> Result<JsonValue, ParseError> {
        self.cursor.skip_whitespace();
        let value = self.parse_value()?;
        self.cursor.skip_whitespace();
        if !self.cursor.is_eof() {
            return Err(self.error(ParseErrorKind::RootNotSingular));
        }
        Ok(value)
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        self.cursor.error(kind)
    }

    /// Dispatches on the first byte of a value. Leading whitespace must
    /// already be skipped.
    fn parse_value(&mut self) -> Result<JsonValue, ParseError> {
        match self.cursor.peek() {
            None => Err(self.error(ParseErrorKind::ExpectValue)),
            Some(b'n') => self.parse_literal(b"null", JsonValue::Null),
            Some(b't') => self.parse_literal(b"true", JsonValue::Bool(true)),
            Some(b'f') => self.parse_literal(b"false", JsonValue::Bool(false)),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(b'"') => self.parse_string().map(JsonValue::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(_) => Err(self.error(ParseErrorKind::InvalidValue)),
        }
    }

    fn parse_literal(
        &mut self,
        expected: &'static [u8],
        value: JsonValue,
    ) -> Result<JsonValue, ParseError> {
        if self.cursor.rest().starts_with(expected) {
            self.cursor.advance_by(expected.len());
            Ok(value)
        } else {
            Err(self.error(ParseErrorKind::InvalidValue))
        }
    }

    /// Validates `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?` and
    /// converts the lexeme with the standard float parser.
    ///
    /// A leading `0` ends the integer part, so in `0123` only the `0` is
    /// consumed and the caller sees trailing data.
    fn parse_number(&mut self) -> Result<JsonValue, ParseError> {
        let start = self.cursor.offset();

        self.cursor.eat(b'-');
        match self.cursor.peek() {
            Some(b'0') => {
                self.cursor.advance();
            }
            Some(b'1'..=b'9') => {
                self.eat_digits();
            }
            _ => return Err(self.error(ParseErrorKind::InvalidValue)),
        }

        if self.cursor.eat(b'.') {
            self.expect_digits()?;
        }

        if matches!(self.cursor.peek(), Some(b'e' | b'E')) {
            self.cursor.advance();
            if matches!(self.cursor.peek(), Some(b'+' | b'-')) {
                self.cursor.advance();
            }
            self.expect_digits()?;
        }

        let lexeme = self
            .cursor
            .slice(start, self.cursor.offset())
            .ok_or_else(|| self.error(ParseErrorKind::InvalidValue))?;
        // Out-of-range magnitudes round to zero or infinity; only a
        // malformed lexeme fails here, and the grammar above rules that out.
        lexeme
            .parse::<f64>()
            .map(JsonValue::Number)
            .map_err(|_| self.error(ParseErrorKind::InvalidValue))
    }

    fn eat_digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.cursor.peek(), Some(b'0'..=b'9')) {
            self.cursor.advance();
            count += 1;
        }
        count
    }

    fn expect_digits(&mut self) -> Result<(), ParseError> {
        if self.eat_digits() == 0 {
            Err(self.error(ParseErrorKind::InvalidValue))
        } else {
            Ok(())
        }
    }

    /// Parses a quoted string, decoding escapes. The cursor must be on the
    /// opening quote.
    fn parse_string(&mut self) -> Result<String, ParseError> {
        self.cursor.advance();
        let mut decoded = String::new();

        loop {
            // Copy the run up to the next quote or backslash in one go.
            let rest = self.cursor.rest();
            let run_len = memchr2(b'"', b'\\', rest).unwrap_or(rest.len());
            if let Some(bad) = rest[..run_len].iter().position(|&b| b < 0x20) {
                self.cursor.advance_by(bad);
                return Err(self.error(ParseErrorKind::InvalidStringChar));
            }
            let start = self.cursor.offset();
            let run = self
                .cursor
                .slice(start, start + run_len)
                .ok_or_else(|| self.error(ParseErrorKind::InvalidStringChar))?;
            decoded.push_str(run);
            self.cursor.advance_by(run_len);

            match self.cursor.advance() {
                Some(b'"') => return Ok(decoded),
                Some(b'\\') => self.parse_escape(&mut decoded)?,
                _ => return Err(self.error(ParseErrorKind::MissQuotationMark)),
            }
        }
    }

    /// Decodes the escape after a backslash and appends it to `decoded`.
    fn parse_escape(&mut self, decoded: &mut String) -> Result<(), ParseError> {
        let unescaped = match self.cursor.peek() {
            Some(b'"') => '"',
            Some(b'\\') => '\\',
            Some(b'/') => '/',
            Some(b'b') => '\u{0008}',
            Some(b'f') => '\u{000C}',
            Some(b'n') => '\n',
            Some(b'r') => '\r',
            Some(b't') => '\t',
            Some(b'u') => {
                self.cursor.advance();
                decoded.push(self.parse_unicode_escape()?);
                return Ok(());
            }
            Some(_) => return Err(self.error(ParseErrorKind::InvalidStringEscape)),
            None => return Err(self.error(ParseErrorKind::MissQuotationMark)),
        };
        self.cursor.advance();
        decoded.push(unescaped);
        Ok(())
    }

    /// Decodes the hex digits of a `\u` escape, combining a UTF-16
    /// surrogate pair into one code point. The cursor must be just past
    /// the `u`.
    fn parse_unicode_escape(&mut self) -> Result<char, ParseError> {
        let high = self.parse_hex4()?;
        let code = match high {
            0xD800..=0xDBFF => {
                if !(self.cursor.eat(b'\\') && self.cursor.eat(b'u')) {
                    return Err(self.error(ParseErrorKind::InvalidUnicodeSurrogate));
                }
                let low = self.parse_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(self.error(ParseErrorKind::InvalidUnicodeSurrogate));
                }
                0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
            }
            0xDC00..=0xDFFF => return Err(self.error(ParseErrorKind::InvalidUnicodeSurrogate)),
            _ => high,
        };
        char::from_u32(code).ok_or_else(|| self.error(ParseErrorKind::InvalidUnicodeSurrogate))
    }

    fn parse_hex4(&mut self) -> Result<u32, ParseError> {
        let mut code = 0;
        for _ in 0..4 {
            let digit = self
                .cursor
                .peek()
                .and_then(|b| char::from(b).to_digit(16))
                .ok_or_else(|| self.error(ParseErrorKind::InvalidUnicodeHex))?;
            self.cursor.advance();
            code = (code << 4) | digit;
        }
        Ok(code)
    }

    fn enter_container(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(self.error(ParseErrorKind::DepthExceeded));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_array(&mut self) -> Result<JsonValue, ParseError> {
        self.enter_container()?;
        self.cursor.advance();
        self.cursor.skip_whitespace();

        let mut items = Array::new();
        if !self.cursor.eat(b']') {
            loop {
                items.push(self.parse_value()?);
                self.cursor.skip_whitespace();
                match self.cursor.peek() {
                    Some(b',') => {
                        self.cursor.advance();
                        self.cursor.skip_whitespace();
                    }
                    Some(b']') => {
                        self.cursor.advance();
                        break;
                    }
                    _ => return Err(self.error(ParseErrorKind::MissCommaOrSquareBracket)),
                }
            }
        }

        self.depth -= 1;
        Ok(JsonValue::Array(items))
    }

    /// Parses an object. A repeated key keeps its first position and takes
    /// the value of its last occurrence.
    fn parse_object(&mut self) -> Result<JsonValue, ParseError> {
        self.enter_container()?;
        self.cursor.advance();
        self.cursor.skip_whitespace();

        let mut members = Object::new();
        if !self.cursor.eat(b'}') {
            loop {
                if self.cursor.peek() != Some(b'"') {
                    return Err(self.error(ParseErrorKind::MissKey));
                }
                let key = self.parse_string()?;
                self.cursor.skip_whitespace();
                if !self.cursor.eat(b':') {
                    return Err(self.error(ParseErrorKind::MissColon));
                }
                self.cursor.skip_whitespace();
                let value = self.parse_value()?;
                members.insert(key, value);
                self.cursor.skip_whitespace();
                match self.cursor.peek() {
                    Some(b',') => {
                        self.cursor.advance();
                        self.cursor.skip_whitespace();
                    }
                    Some(b'}') => {
                        self.cursor.advance();
                        break;
                    }
                    _ => return Err(self.error(ParseErrorKind::MissCommaOrCurlyBracket)),
                }
            }
        }

        self.depth -= 1;
        Ok(JsonValue::Object(members))
    }
}
