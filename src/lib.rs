//! simplejson - a self-contained JSON value type with a recursive descent
//! parser and a pretty-printing serializer.
//!
//! A [`Json`] is a tagged union over null, booleans, 64-bit integers,
//! 64-bit floats, strings, arrays, and objects. Values retype themselves
//! on assignment and on indexed access, auto-creating nested containers
//! along the way, so a tree can be built without declaring its shape up
//! front.
//!
//! # Architecture
//!
//! The crate is organized into modules that mirror the data flow:
//!
//! - [`value`] - the [`Json`] tagged union and its mutation API
//! - [`parse`] - recursive descent parser (text to tree)
//! - [`dump`] - pretty-printing serializer (tree to text)
//! - [`load`] - file-loading collaborator
//! - [`error`] - typed parse and load errors
//!
//! The parser and serializer both operate purely through the value
//! model's public contract; serializer output is always valid parser
//! input.
//!
//! # Example
//!
//! ```
//! use simplejson::{object, parse, Json};
//!
//! // Build a tree programmatically; containers appear on access.
//! let mut value = object();
//! value["name"] = Json::from("simplejson");
//! value["tags"].append("json");
//! value["tags"].append("parser");
//!
//! // Parse text into the same representation.
//! let parsed = parse(r#"{"a": 1, "b": [true, null]}"#).unwrap();
//! assert_eq!(parsed["a"], Json::Integral(1));
//!
//! // Render back to canonical text.
//! assert_eq!(parsed.dump(), "{\n  \"a\" : 1,\n  \"b\" : [true, null]\n}");
//! ```

// Library code must avoid unwrap/expect/panic; parse failures are values.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod dump;
pub mod error;
pub mod load;
pub mod parse;
pub mod value;

// Re-export commonly used items
pub use error::{LoadError, ParseError, ParseResult};
pub use load::load_file;
pub use parse::{parse, parse_with_max_depth, Parser, DEFAULT_MAX_DEPTH};
pub use value::{array, array_of, object, Json, Kind};
