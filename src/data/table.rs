//! In-memory column-oriented table.

use super::Value;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Declared kind of a column, decided once at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Every non-missing value is a number
    Numeric,
    /// At least one value is not a number
    Text,
}

/// A named column of values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name (unique within its table)
    pub name: String,

    /// Declared kind
    pub kind: ColumnKind,

    /// Cell values, one per row
    pub values: Vec<Value>,
}

impl Column {
    /// Build a column from raw cell texts, inferring its kind.
    ///
    /// A column is numeric if every cell that is not an NA token parses as
    /// a number; otherwise all non-missing cells are kept as text.
    pub fn from_raw<S: AsRef<str>>(name: impl Into<String>, cells: &[S]) -> Self {
        let numeric = cells.iter().all(|cell| {
            let cell = cell.as_ref();
            Value::is_na_token(cell) || Value::parse_number(cell).is_some()
        });

        let values = cells
            .iter()
            .map(|cell| {
                let cell = cell.as_ref();
                if Value::is_na_token(cell) {
                    Value::Missing
                } else if numeric {
                    Value::parse_number(cell).map_or(Value::Missing, Value::Number)
                } else {
                    Value::Text(cell.to_string())
                }
            })
            .collect();

        Self {
            name: name.into(),
            kind: if numeric {
                ColumnKind::Numeric
            } else {
                ColumnKind::Text
            },
            values,
        }
    }

    /// Build a numeric column directly.
    pub fn numeric(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Numeric,
            values: values.into_iter().map(Value::Number).collect(),
        }
    }

    /// Build a text column directly.
    pub fn text<S: Into<String>>(name: impl Into<String>, values: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Text,
            values: values.into_iter().map(|s| Value::Text(s.into())).collect(),
        }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check if the column is numeric.
    pub fn is_numeric(&self) -> bool {
        self.kind == ColumnKind::Numeric
    }

    /// Non-missing numeric values, in row order.
    pub fn numbers(&self) -> Vec<f64> {
        self.values.iter().filter_map(Value::as_number).collect()
    }
}

/// A table of equally long named columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataTable {
    columns: Vec<Column>,
    row_count: usize,
}

impl DataTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from columns, checking that lengths agree.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let mut table = Self::new();
        for column in columns {
            table.add_column(column)?;
        }
        Ok(table)
    }

    /// Append a column.
    ///
    /// The first column fixes the row count; later columns must match it
    /// and must not reuse an existing name.
    pub fn add_column(&mut self, column: Column) -> Result<()> {
        if self.column(&column.name).is_some() {
            return Err(Error::Other(format!("Duplicate column name: {}", column.name)));
        }
        if self.columns.is_empty() {
            self.row_count = column.len();
        } else if column.len() != self.row_count {
            return Err(Error::Other(format!(
                "Column '{}' has {} values, expected {}",
                column.name,
                column.len(),
                self.row_count
            )));
        }
        self.columns.push(column);
        Ok(())
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// All columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in order.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Look up a column by exact (case-sensitive) name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Look up a column, failing with [`Error::ColumnNotFound`] if absent.
    pub fn require_column(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// Check whether a column exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Iterate over numeric columns in order.
    pub fn numeric_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_numeric())
    }

    /// Check if the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_kind_inference() {
        let col = Column::from_raw("Temperature", &["10", "", "20.5"]);
        assert_eq!(col.kind, ColumnKind::Numeric);
        assert_eq!(col.values[1], Value::Missing);
        assert_eq!(col.numbers(), vec![10.0, 20.5]);

        let col = Column::from_raw("City", &["Paris", "3", "NA"]);
        assert_eq!(col.kind, ColumnKind::Text);
        assert_eq!(col.values[1], Value::Text("3".into()));
        assert_eq!(col.values[2], Value::Missing);
    }

    #[test]
    fn test_all_missing_column_is_numeric() {
        let col = Column::from_raw("Empty", &["", "NA"]);
        assert!(col.is_numeric());
        assert!(col.numbers().is_empty());
    }

    #[test]
    fn test_table_rejects_unequal_columns() {
        let mut table = DataTable::new();
        table.add_column(Column::numeric("A", [1.0, 2.0])).unwrap();
        assert!(table.add_column(Column::numeric("B", [1.0])).is_err());
        assert!(table.add_column(Column::numeric("A", [3.0, 4.0])).is_err());
        assert_eq!(table.column_count(), 1);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_numeric_columns() {
        let table = DataTable::from_columns(vec![
            Column::text("City", ["A", "B"]),
            Column::numeric("Temperature", [1.0, 2.0]),
        ])
        .unwrap();
        let names: Vec<_> = table.numeric_columns().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Temperature"]);
        assert!(table.has_column("City"));
        assert!(!table.has_column("city"));
        assert!(table.require_column("City").is_ok());
        assert!(matches!(
            table.require_column("city"),
            Err(Error::ColumnNotFound(ref name)) if name == "city"
        ));
    }
}
