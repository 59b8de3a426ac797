//! Error types for tabreport library.

use std::io;
use thiserror::Error;

/// Result type alias for tabreport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, analyzing or rendering.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The delimited input could not be parsed.
    #[error("CSV parsing error: {0}")]
    Csv(String),

    /// The input has no header record.
    #[error("No columns to parse from input")]
    EmptyInput,

    /// A column referenced by name does not exist.
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// A numeric operation was requested on a text column.
    #[error("Column '{0}' is not numeric")]
    NonNumericColumn(String),

    /// Error assembling or serializing the PDF structure.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Error during rendering (PDF layout, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            if let csv::ErrorKind::Io(e) = err.into_kind() {
                return Error::Io(e);
            }
            return Error::Other("CSV I/O error".into());
        }
        Error::Csv(err.to_string())
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyInput;
        assert_eq!(err.to_string(), "No columns to parse from input");

        let err = Error::NonNumericColumn("Temperature".into());
        assert_eq!(err.to_string(), "Column 'Temperature' is not numeric");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
