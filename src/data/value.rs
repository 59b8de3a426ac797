//! Scalar cell values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw cell texts treated as missing values.
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A single cell of a data table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// No value present
    Missing,

    /// A numeric value
    Number(f64),

    /// A text value
    Text(String),
}

impl Value {
    /// Check whether a raw cell text denotes a missing value.
    pub fn is_na_token(raw: &str) -> bool {
        NA_TOKENS.contains(&raw)
    }

    /// Parse a raw cell as a number, ignoring surrounding whitespace.
    pub fn parse_number(raw: &str) -> Option<f64> {
        raw.trim().parse::<f64>().ok()
    }

    /// Check if this value is missing.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Get the numeric value, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the text value, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => f.write_str("NaN"),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_na_tokens() {
        assert!(Value::is_na_token(""));
        assert!(Value::is_na_token("NA"));
        assert!(Value::is_na_token("null"));
        assert!(!Value::is_na_token("0"));
        assert!(!Value::is_na_token(" NA "));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(Value::parse_number("12.5"), Some(12.5));
        assert_eq!(Value::parse_number(" -3 "), Some(-3.0));
        assert_eq!(Value::parse_number("1e3"), Some(1000.0));
        assert_eq!(Value::parse_number("Paris"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Number(15.0).to_string(), "15");
        assert_eq!(Value::Text("CityA".into()).to_string(), "CityA");
        assert_eq!(Value::Missing.to_string(), "NaN");
    }
}
