//! Loading options and configuration.

use crate::detect::{detect_delimiter_from_path, DEFAULT_DELIMITER};
use std::path::Path;

/// Options for loading delimited files.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Field delimiter byte
    pub delimiter: u8,

    /// Quote character
    pub quote: u8,

    /// Whether header names are de-duplicated with `.1`, `.2`, ... suffixes
    pub mangle_duplicate_headers: bool,
}

impl LoadOptions {
    /// Create new load options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options whose delimiter matches the file extension.
    pub fn for_path<P: AsRef<Path>>(path: P) -> Self {
        Self::default().with_delimiter(detect_delimiter_from_path(path))
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character.
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Reject duplicate header names instead of renaming them.
    pub fn strict_headers(mut self) -> Self {
        self.mangle_duplicate_headers = false;
        self
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            quote: b'"',
            mangle_duplicate_headers: true,
        }
    }
}
