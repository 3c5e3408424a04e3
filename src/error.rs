//! Typed errors for parsing and file loading.
//!
//! Parse failures are ordinary values, not a diagnostic stream: every
//! variant records the byte offset where the parser stopped, and the
//! structural variants carry what was expected versus what was found.
//! Callers can therefore always distinguish "parsed a null" from
//! "parsing failed".

use std::path::PathBuf;

use thiserror::Error;

/// A structural violation encountered while parsing JSON text.
///
/// Offsets are byte positions into the input buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input ended in the middle of a token or document.
    #[error("unexpected end of input at byte {at}")]
    UnexpectedEnd {
        /// Byte offset where input ran out
        at: usize,
    },

    /// A token began with a character no grammar production accepts.
    #[error("unknown starting character '{found}' at byte {at}")]
    UnknownToken {
        /// Byte offset of the offending character
        at: usize,
        /// The character that was found
        found: char,
    },

    /// A structural delimiter (colon, comma, bracket, key) was missing.
    #[error("expected {expected} at byte {at}, found '{found}'")]
    Expected {
        /// Byte offset of the offending character
        at: usize,
        /// Description of what the grammar required here
        expected: &'static str,
        /// The character that was found instead
        found: char,
    },

    /// A `true`/`false`/`null` literal did not match exactly.
    #[error("expected literal '{expected}' at byte {at}, found '{found}'")]
    BadLiteral {
        /// Byte offset where the literal was expected
        at: usize,
        /// The literal text the grammar required
        expected: &'static str,
        /// The input text that was found instead
        found: String,
    },

    /// A `\u` escape contained a non-hex character.
    #[error("expected hex digit in unicode escape at byte {at}, found '{found}'")]
    BadUnicodeEscape {
        /// Byte offset of the offending character
        at: usize,
        /// The character that was found
        found: char,
    },

    /// An exponent marker was not followed by a digit run.
    #[error("expected digits in exponent at byte {at}")]
    BadExponent {
        /// Byte offset where digits were expected
        at: usize,
    },

    /// A number token was delimited correctly but did not parse.
    #[error("malformed number '{literal}' at byte {at}")]
    BadNumber {
        /// Byte offset where the number began
        at: usize,
        /// The accumulated number text
        literal: String,
    },

    /// Containers nested deeper than the configured limit.
    #[error("nesting depth {depth} exceeds limit {limit} at byte {at}")]
    TooDeep {
        /// Byte offset of the container that crossed the limit
        at: usize,
        /// Depth that was reached
        depth: usize,
        /// The configured limit
        limit: usize,
    },

    /// Non-whitespace input remained after a complete document.
    #[error("trailing content at byte {at}, found '{found}'")]
    TrailingContent {
        /// Byte offset of the first trailing character
        at: usize,
        /// The character that was found
        found: char,
    },
}

impl ParseError {
    /// Get the byte offset the error was reported at.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedEnd { at }
            | ParseError::UnknownToken { at, .. }
            | ParseError::Expected { at, .. }
            | ParseError::BadLiteral { at, .. }
            | ParseError::BadUnicodeEscape { at, .. }
            | ParseError::BadExponent { at }
            | ParseError::BadNumber { at, .. }
            | ParseError::TooDeep { at, .. }
            | ParseError::TrailingContent { at, .. } => *at,
        }
    }
}

/// Result type for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// A failure while loading JSON from a file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its contents did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
