//! Summary types produced by the analyzer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal places used for every displayed statistic.
pub const DISPLAY_DECIMALS: usize = 2;

/// Format a statistic the way it appears in the report.
pub fn format_stat(value: f64) -> String {
    format!("{:.*}", DISPLAY_DECIMALS, value)
}

/// Derived statistics bundle computed once per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// Number of rows in the source table
    pub row_count: usize,

    /// Column names in source order
    pub columns: Vec<String>,

    /// Descriptive statistics over numeric columns
    pub describe: DescribeTable,

    /// Grouped mean, present only when both designated columns exist
    pub grouped_mean: Option<GroupedMean>,
}

impl Summary {
    /// Number of source columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// A standard descriptive statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    /// Number of non-missing values
    Count,
    /// Arithmetic mean
    Mean,
    /// Sample standard deviation
    Std,
    /// Minimum
    Min,
    /// First quartile
    Q25,
    /// Median
    Q50,
    /// Third quartile
    Q75,
    /// Maximum
    Max,
}

impl Statistic {
    /// All statistics in display order.
    pub const ALL: [Statistic; 8] = [
        Statistic::Count,
        Statistic::Mean,
        Statistic::Std,
        Statistic::Min,
        Statistic::Q25,
        Statistic::Q50,
        Statistic::Q75,
        Statistic::Max,
    ];

    /// Row label used in the statistics table.
    pub fn label(self) -> &'static str {
        match self {
            Statistic::Count => "count",
            Statistic::Mean => "mean",
            Statistic::Std => "std",
            Statistic::Min => "min",
            Statistic::Q25 => "25%",
            Statistic::Q50 => "50%",
            Statistic::Q75 => "75%",
            Statistic::Max => "max",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the statistics table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatRow {
    /// Which statistic this row holds
    pub statistic: Statistic,

    /// One rounded value per numeric column
    pub values: Vec<f64>,
}

/// Descriptive statistics: one row per statistic, one column per numeric
/// source column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescribeTable {
    /// Numeric source column names
    pub columns: Vec<String>,

    /// Rows in [`Statistic::ALL`] order
    pub rows: Vec<StatRow>,
}

impl DescribeTable {
    /// Get a rounded value by statistic and column name.
    pub fn get(&self, statistic: Statistic, column: &str) -> Option<f64> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.rows
            .iter()
            .find(|r| r.statistic == statistic)
            .and_then(|r| r.values.get(index).copied())
    }

    /// Check if there are no value columns.
    pub fn has_no_columns(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Mean of a measurement column per distinct group value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupedMean {
    /// Grouping column name
    pub group_column: String,

    /// Measurement column name
    pub value_column: String,

    /// `(group, rounded mean)` sorted by mean, highest first
    pub entries: Vec<(String, f64)>,
}

impl GroupedMean {
    /// Number of groups.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Group labels in sorted order.
    pub fn groups(&self) -> Vec<&str> {
        self.entries.iter().map(|(g, _)| g.as_str()).collect()
    }

    /// Look up the mean for a group.
    pub fn get(&self, group: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(g, _)| g == group)
            .map(|(_, v)| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistic_labels() {
        let labels: Vec<_> = Statistic::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec!["count", "mean", "std", "min", "25%", "50%", "75%", "max"]
        );
    }

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(15.0), "15.00");
        assert_eq!(format_stat(2.5), "2.50");
        assert_eq!(format_stat(f64::NAN), "NaN");
    }

    #[test]
    fn test_grouped_mean_lookup() {
        let gm = GroupedMean {
            group_column: "City".into(),
            value_column: "Temperature".into(),
            entries: vec![("CityB".into(), 30.0), ("CityA".into(), 15.0)],
        };
        assert_eq!(gm.groups(), vec!["CityB", "CityA"]);
        assert_eq!(gm.get("CityA"), Some(15.0));
        assert_eq!(gm.get("CityC"), None);
    }
}
