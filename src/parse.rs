//! Recursive descent JSON parser.
//!
//! One method per grammar production (value, object, array, string,
//! number, literal), all advancing a shared byte cursor. Every
//! structural violation is reported as a [`ParseError`] carrying the
//! byte offset and what was expected versus found; the parser never
//! writes diagnostics to a side channel and never substitutes a Null
//! for a failure.
//!
//! Two deliberate deviations from strict JSON are preserved from the
//! format this crate renders:
//!
//! - `\u` escapes are validated (four hex digits) but kept verbatim as
//!   the six literal characters, not decoded to a code point.
//! - An exponent on an integer mantissa (`15e1`) is applied through
//!   floating arithmetic and produces a Floating value, so very large
//!   results can lose integer precision.

use std::collections::BTreeMap;

use crate::error::{ParseError, ParseResult};
use crate::value::Json;

/// Default nesting depth limit for containers.
///
/// Deeply nested input fails with [`ParseError::TooDeep`] instead of
/// exhausting the call stack.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Recursive descent parser over a text buffer.
///
/// [`Parser::parse_next`] consumes exactly one JSON value starting at
/// the cursor; [`parse`] wraps it with a whole-document check.
pub struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser with the default nesting limit.
    pub fn new(input: &'a str) -> Self {
        Self::with_max_depth(input, DEFAULT_MAX_DEPTH)
    }

    /// Create a parser with a custom nesting limit.
    pub fn with_max_depth(input: &'a str, max_depth: usize) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Get the current byte position in the input.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Peek at the current byte without consuming it.
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consume and return the current byte.
    fn advance(&mut self) -> Option<u8> {
        let b = self.input.get(self.pos).copied();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    /// Skip whitespace characters.
    fn consume_ws(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.advance();
        }
    }

    /// Build the error for a delimiter that was not where the grammar
    /// required it.
    fn expected(&self, what: &'static str) -> ParseError {
        match self.peek() {
            Some(found) => ParseError::Expected {
                at: self.pos,
                expected: what,
                found: found as char,
            },
            None => ParseError::UnexpectedEnd { at: self.pos },
        }
    }

    /// Up to `len` bytes of input at the cursor, for literal errors.
    fn snippet(&self, len: usize) -> String {
        let end = usize::min(self.pos + len, self.input.len());
        String::from_utf8_lossy(&self.input[self.pos..end]).into_owned()
    }

    fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::TooDeep {
                at: self.pos,
                depth: self.depth,
                limit: self.max_depth,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Parse the next JSON value starting at the cursor.
    ///
    /// Dispatches on the first non-whitespace character and leaves the
    /// cursor just past the consumed value.
    pub fn parse_next(&mut self) -> ParseResult<Json> {
        self.consume_ws();
        match self.peek() {
            None => Err(ParseError::UnexpectedEnd { at: self.pos }),
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(b'"') => self.parse_string().map(Json::String),
            Some(b't' | b'f') => self.parse_boolean(),
            Some(b'n') => self.parse_null(),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(other) => Err(ParseError::UnknownToken {
                at: self.pos,
                found: other as char,
            }),
        }
    }

    /// Parse a JSON object.
    fn parse_object(&mut self) -> ParseResult<Json> {
        self.enter()?;

        // Consume opening brace
        self.advance();

        let mut map = BTreeMap::new();

        // Empty object
        self.consume_ws();
        if self.peek() == Some(b'}') {
            self.advance();
            self.leave();
            return Ok(Json::Object(map));
        }

        loop {
            // Keys go through the string production
            self.consume_ws();
            if self.peek() != Some(b'"') {
                return Err(self.expected("a string key"));
            }
            let key = self.parse_string()?;

            self.consume_ws();
            if self.peek() != Some(b':') {
                return Err(self.expected("':' after object key"));
            }
            self.advance();

            let value = self.parse_next()?;
            // Duplicate keys: last one wins
            map.insert(key, value);

            self.consume_ws();
            match self.peek() {
                Some(b',') => {
                    self.advance();
                }
                Some(b'}') => {
                    self.advance();
                    break;
                }
                _ => return Err(self.expected("',' or '}' in object")),
            }
        }

        self.leave();
        Ok(Json::Object(map))
    }

    /// Parse a JSON array.
    fn parse_array(&mut self) -> ParseResult<Json> {
        self.enter()?;

        // Consume opening bracket
        self.advance();

        let mut list = Vec::new();

        // Empty array
        self.consume_ws();
        if self.peek() == Some(b']') {
            self.advance();
            self.leave();
            return Ok(Json::Array(list));
        }

        loop {
            list.push(self.parse_next()?);

            self.consume_ws();
            match self.peek() {
                Some(b',') => {
                    self.advance();
                }
                Some(b']') => {
                    self.advance();
                    break;
                }
                _ => return Err(self.expected("',' or ']' in array")),
            }
        }

        self.leave();
        Ok(Json::Array(list))
    }

    /// Parse a string token, handling escape sequences.
    ///
    /// The escape set `\" \\ \/ \b \f \n \r \t` is decoded. A `\u`
    /// escape is checked for four hex digits but copied through
    /// verbatim. An unknown escape keeps the backslash and drops the
    /// escaped character.
    fn parse_string(&mut self) -> ParseResult<String> {
        // Consume opening quote
        self.advance();

        let mut buf: Vec<u8> = Vec::new();
        loop {
            match self.advance() {
                None => return Err(ParseError::UnexpectedEnd { at: self.pos }),
                Some(b'"') => break,
                Some(b'\\') => match self.advance() {
                    None => return Err(ParseError::UnexpectedEnd { at: self.pos }),
                    Some(b'"') => buf.push(b'"'),
                    Some(b'\\') => buf.push(b'\\'),
                    Some(b'/') => buf.push(b'/'),
                    Some(b'b') => buf.push(0x08),
                    Some(b'f') => buf.push(0x0C),
                    Some(b'n') => buf.push(b'\n'),
                    Some(b'r') => buf.push(b'\r'),
                    Some(b't') => buf.push(b'\t'),
                    Some(b'u') => {
                        buf.extend_from_slice(b"\\u");
                        for _ in 0..4 {
                            match self.advance() {
                                Some(h) if h.is_ascii_hexdigit() => buf.push(h),
                                Some(h) => {
                                    return Err(ParseError::BadUnicodeEscape {
                                        at: self.pos - 1,
                                        found: h as char,
                                    })
                                }
                                None => {
                                    return Err(ParseError::UnexpectedEnd { at: self.pos })
                                }
                            }
                        }
                    }
                    Some(_) => buf.push(b'\\'),
                },
                Some(b) => buf.push(b),
            }
        }

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Parse a number token.
    fn parse_number(&mut self) -> ParseResult<Json> {
        let start = self.pos;
        let mut literal = String::new();
        let mut is_float = false;

        loop {
            match self.peek() {
                Some(c @ (b'-' | b'0'..=b'9')) => {
                    literal.push(c as char);
                    self.advance();
                }
                Some(b'.') => {
                    literal.push('.');
                    is_float = true;
                    self.advance();
                }
                _ => break,
            }
        }

        let mut exponent: i32 = 0;
        let mut has_exponent = false;
        if let Some(b'e' | b'E') = self.peek() {
            self.advance();
            has_exponent = true;

            let mut exp_literal = String::new();
            if self.peek() == Some(b'-') {
                exp_literal.push('-');
                self.advance();
            }
            while let Some(d @ b'0'..=b'9') = self.peek() {
                exp_literal.push(d as char);
                self.advance();
            }
            exponent = match exp_literal.as_str() {
                "" | "-" => return Err(ParseError::BadExponent { at: self.pos }),
                digits => digits
                    .parse()
                    .map_err(|_| ParseError::BadExponent { at: self.pos })?,
            };
        }

        // A number token must stop at whitespace, a delimiter, or the
        // end of input.
        match self.peek() {
            None | Some(b' ' | b'\t' | b'\n' | b'\r' | b',' | b']' | b'}') => {}
            Some(_) => return Err(self.expected("end of number")),
        }

        if is_float {
            let mantissa: f64 = literal.parse().map_err(|_| ParseError::BadNumber {
                at: start,
                literal: literal.clone(),
            })?;
            Ok(Json::Floating(mantissa * 10f64.powi(exponent)))
        } else if has_exponent {
            // Integer mantissa with an exponent promotes through f64.
            let mantissa: i64 = literal.parse().map_err(|_| ParseError::BadNumber {
                at: start,
                literal: literal.clone(),
            })?;
            Ok(Json::Floating(mantissa as f64 * 10f64.powi(exponent)))
        } else {
            let value: i64 = literal.parse().map_err(|_| ParseError::BadNumber {
                at: start,
                literal: literal.clone(),
            })?;
            Ok(Json::Integral(value))
        }
    }

    /// Parse the 'true' or 'false' literal.
    fn parse_boolean(&mut self) -> ParseResult<Json> {
        if self.input[self.pos..].starts_with(b"true") {
            self.pos += 4;
            Ok(Json::Boolean(true))
        } else if self.input[self.pos..].starts_with(b"false") {
            self.pos += 5;
            Ok(Json::Boolean(false))
        } else {
            Err(ParseError::BadLiteral {
                at: self.pos,
                expected: "true' or 'false",
                found: self.snippet(5),
            })
        }
    }

    /// Parse the 'null' literal.
    fn parse_null(&mut self) -> ParseResult<Json> {
        if self.input[self.pos..].starts_with(b"null") {
            self.pos += 4;
            Ok(Json::Null)
        } else {
            Err(ParseError::BadLiteral {
                at: self.pos,
                expected: "null",
                found: self.snippet(4),
            })
        }
    }

    /// Check that only whitespace remains after a parsed document.
    fn finish(&mut self) -> ParseResult<()> {
        self.consume_ws();
        match self.peek() {
            None => Ok(()),
            Some(found) => Err(ParseError::TrailingContent {
                at: self.pos,
                found: found as char,
            }),
        }
    }
}

/// Parse a complete JSON document.
///
/// Exactly one value plus surrounding whitespace; anything else after
/// the value is [`ParseError::TrailingContent`].
pub fn parse(input: &str) -> ParseResult<Json> {
    parse_with_max_depth(input, DEFAULT_MAX_DEPTH)
}

/// Parse a complete JSON document with a custom nesting limit.
pub fn parse_with_max_depth(input: &str, max_depth: usize) -> ParseResult<Json> {
    let mut parser = Parser::with_max_depth(input, max_depth);
    let value = parser.parse_next()?;
    parser.finish()?;
    Ok(value)
}
