//! Input format detection.

use std::path::Path;

/// Delimiter used when the file extension says nothing more specific.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Known delimited-text formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimitedFormat {
    /// Comma-separated values
    Csv,
    /// Tab-separated values
    Tsv,
    /// Pipe-separated values
    Psv,
}

impl DelimitedFormat {
    /// Field delimiter byte for this format.
    pub fn delimiter(self) -> u8 {
        match self {
            DelimitedFormat::Csv => b',',
            DelimitedFormat::Tsv => b'\t',
            DelimitedFormat::Psv => b'|',
        }
    }

    /// Map a file extension (without the dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "csv" | "txt" => Some(DelimitedFormat::Csv),
            "tsv" | "tab" => Some(DelimitedFormat::Tsv),
            "psv" => Some(DelimitedFormat::Psv),
            _ => None,
        }
    }
}

impl std::fmt::Display for DelimitedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DelimitedFormat::Csv => "CSV",
            DelimitedFormat::Tsv => "TSV",
            DelimitedFormat::Psv => "PSV",
        };
        f.write_str(name)
    }
}

/// Detect the delimited format from a file path's extension.
///
/// # Example
/// ```
/// use tabreport::detect::{detect_format_from_path, DelimitedFormat};
///
/// assert_eq!(detect_format_from_path("data.tsv"), Some(DelimitedFormat::Tsv));
/// assert_eq!(detect_format_from_path("data"), None);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Option<DelimitedFormat> {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .and_then(DelimitedFormat::from_extension)
}

/// Pick the field delimiter for a path, falling back to a comma.
pub fn detect_delimiter_from_path<P: AsRef<Path>>(path: P) -> u8 {
    detect_format_from_path(path)
        .map(DelimitedFormat::delimiter)
        .unwrap_or(DEFAULT_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(detect_format_from_path("a/b/data.csv"), Some(DelimitedFormat::Csv));
        assert_eq!(detect_format_from_path("DATA.TSV"), Some(DelimitedFormat::Tsv));
        assert_eq!(detect_format_from_path("x.psv"), Some(DelimitedFormat::Psv));
        assert_eq!(detect_format_from_path("x.xlsx"), None);
    }

    #[test]
    fn test_delimiter_fallback() {
        assert_eq!(detect_delimiter_from_path("data.tab"), b'\t');
        assert_eq!(detect_delimiter_from_path("data.dat"), b',');
        assert_eq!(detect_delimiter_from_path("data"), b',');
    }

    #[test]
    fn test_format_display() {
        assert_eq!(DelimitedFormat::Tsv.to_string(), "TSV");
    }
}
