//! Pretty-printing serializer.
//!
//! [`Json::dump`] renders a value tree to JSON text. Objects are
//! printed one entry per line with the closing brace one indent level
//! shallower than the entries; arrays stay on a single line. Floats
//! always render with six fractional digits (`249.990000`), not the
//! shortest round-trippable form.
//!
//! The output is valid input to [`crate::parse`]: dumping, parsing, and
//! dumping again reproduces the first dump byte for byte.

use crate::value::Json;

impl Json {
    /// Render to JSON text with the default two-space indent.
    pub fn dump(&self) -> String {
        self.dump_with(1, "  ")
    }

    /// Render to JSON text starting at `depth`, indenting object
    /// entries by `depth` repetitions of `indent`.
    pub fn dump_with(&self, depth: usize, indent: &str) -> String {
        match self {
            Json::Null => "null".to_owned(),
            Json::Boolean(true) => "true".to_owned(),
            Json::Boolean(false) => "false".to_owned(),
            Json::Integral(i) => i.to_string(),
            Json::Floating(f) => format!("{f:.6}"),
            Json::String(s) => format!("\"{}\"", escape(s)),
            Json::Array(list) => {
                let items: Vec<String> = list
                    .iter()
                    .map(|item| item.dump_with(depth + 1, indent))
                    .collect();
                format!("[{}]", items.join(", "))
            }
            Json::Object(map) => {
                let pad = indent.repeat(depth);
                let entries: Vec<String> = map
                    .iter()
                    .map(|(key, value)| {
                        format!("{pad}\"{}\" : {}", escape(key), value.dump_with(depth + 1, indent))
                    })
                    .collect();
                format!(
                    "{{\n{}\n{}}}",
                    entries.join(",\n"),
                    indent.repeat(depth.saturating_sub(1))
                )
            }
        }
    }
}

/// Escape a string for JSON output.
///
/// Only the fixed escape set is applied; forward slashes and raw
/// non-ASCII bytes pass through untouched.
fn escape(s: &str) -> String {
    let mut output = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\x08' => output.push_str("\\b"),
            '\x0C' => output.push_str("\\f"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c => output.push(c),
        }
    }
    output
}
