//! File-loading collaborator.
//!
//! Reads a whole file into a text buffer and hands it to the parser.
//! The file is read as raw bytes and decoded lossily, so the parser
//! sees exactly the file's content with any invalid UTF-8 replaced;
//! I/O failures surface as errors instead of being swallowed.

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::parse::parse;
use crate::value::Json;

/// Load and parse a JSON file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Json, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(parse(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn test_load_file() {
        let path = temp_path("simplejson_load_test.json");
        fs::write(&path, b"[1, 2, 3]").unwrap();
        let v = load_file(&path).unwrap();
        assert_eq!(v.length(), 3);
        assert_eq!(v[2], Json::Integral(3));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_file(temp_path("simplejson_no_such_file.json"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_parse_failure_propagates() {
        let path = temp_path("simplejson_bad_test.json");
        fs::write(&path, b"{oops}").unwrap();
        let result = load_file(&path);
        assert!(matches!(result, Err(LoadError::Parse(_))));
        let _ = fs::remove_file(&path);
    }
}
