//! Dataset analysis: row/column overview, descriptive statistics and the
//! optional grouped mean.

pub mod stats;
mod summary;

pub use summary::{
    format_stat, DescribeTable, GroupedMean, StatRow, Statistic, Summary, DISPLAY_DECIMALS,
};

use crate::data::{Column, DataTable, Value};
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Default grouping column for the grouped mean.
pub const DEFAULT_GROUP_COLUMN: &str = "City";

/// Default measurement column for the grouped mean.
pub const DEFAULT_VALUE_COLUMN: &str = "Temperature";

/// Options controlling the analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Column whose distinct values define the groups
    pub group_column: String,

    /// Column averaged within each group
    pub value_column: String,
}

impl AnalyzeOptions {
    /// Create new analyze options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grouping column.
    pub fn with_group_column(mut self, name: impl Into<String>) -> Self {
        self.group_column = name.into();
        self
    }

    /// Set the measurement column.
    pub fn with_value_column(mut self, name: impl Into<String>) -> Self {
        self.value_column = name.into();
        self
    }
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            group_column: DEFAULT_GROUP_COLUMN.to_string(),
            value_column: DEFAULT_VALUE_COLUMN.to_string(),
        }
    }
}

/// Analyze a table with default options.
pub fn analyze(table: &DataTable) -> Result<Summary> {
    Analyzer::new(AnalyzeOptions::default()).analyze(table)
}

/// Derives a [`Summary`] from a [`DataTable`].
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    options: AnalyzeOptions,
}

impl Analyzer {
    /// Create a new analyzer.
    pub fn new(options: AnalyzeOptions) -> Self {
        Self { options }
    }

    /// Compute the summary.
    pub fn analyze(&self, table: &DataTable) -> Result<Summary> {
        let describe = describe(table);
        log::debug!(
            "Described {} numeric columns out of {}",
            describe.columns.len(),
            table.column_count()
        );

        let grouped_mean = match (
            table.column(&self.options.group_column),
            table.column(&self.options.value_column),
        ) {
            (Some(group), Some(value)) => Some(grouped_mean(group, value)?),
            _ => {
                log::debug!(
                    "Skipping grouped mean: '{}' or '{}' not present",
                    self.options.group_column,
                    self.options.value_column
                );
                None
            }
        };

        Ok(Summary {
            row_count: table.row_count(),
            columns: table.column_names(),
            describe,
            grouped_mean,
        })
    }
}

/// Descriptive statistics over the numeric columns of a table.
///
/// Missing cells are skipped. Statistics that are undefined for a column
/// (e.g. every statistic but `count` on an empty column) are NaN.
pub fn describe(table: &DataTable) -> DescribeTable {
    let numeric: Vec<&Column> = table.numeric_columns().collect();

    let per_column: Vec<[f64; 8]> = numeric
        .iter()
        .map(|column| describe_values(&column.numbers()))
        .collect();

    let rows = Statistic::ALL
        .iter()
        .enumerate()
        .map(|(i, statistic)| StatRow {
            statistic: *statistic,
            values: per_column
                .iter()
                .map(|values| stats::round_to(values[i], DISPLAY_DECIMALS as u32))
                .collect(),
        })
        .collect();

    DescribeTable {
        columns: numeric.iter().map(|c| c.name.clone()).collect(),
        rows,
    }
}

fn describe_values(values: &[f64]) -> [f64; 8] {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let nan = f64::NAN;

    [
        values.len() as f64,
        stats::mean(values).unwrap_or(nan),
        stats::std_dev(values).unwrap_or(nan),
        stats::min(values).unwrap_or(nan),
        stats::quantile_sorted(&sorted, 0.25).unwrap_or(nan),
        stats::quantile_sorted(&sorted, 0.5).unwrap_or(nan),
        stats::quantile_sorted(&sorted, 0.75).unwrap_or(nan),
        stats::max(values).unwrap_or(nan),
    ]
}

/// Grouped mean over two named columns of a table.
pub fn grouped_mean_by(table: &DataTable, group: &str, value: &str) -> Result<GroupedMean> {
    grouped_mean(table.require_column(group)?, table.require_column(value)?)
}

/// Mean of `value` per distinct value of `group`, highest first.
///
/// Groups are collected in order of first appearance and the sort is
/// stable, so equal means keep that order; NaN means sort last. Rows with
/// a missing group are dropped.
pub fn grouped_mean(group: &Column, value: &Column) -> Result<GroupedMean> {
    if !value.is_numeric() {
        return Err(Error::NonNumericColumn(value.name.clone()));
    }
    if group.len() != value.len() {
        return Err(Error::Other(format!(
            "Columns '{}' and '{}' differ in length",
            group.name, value.name
        )));
    }

    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<f64>> = HashMap::new();

    for (key, cell) in group.values.iter().zip(&value.values) {
        if key.is_missing() {
            continue;
        }
        let key = group_label(key);
        let bucket = buckets.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            Vec::new()
        });
        if let Some(x) = cell.as_number() {
            bucket.push(x);
        }
    }

    let mut entries: Vec<(String, f64)> = order
        .into_iter()
        .map(|key| {
            let mean = buckets
                .get(&key)
                .and_then(|values| stats::mean(values))
                .unwrap_or(f64::NAN);
            (key, stats::round_to(mean, DISPLAY_DECIMALS as u32))
        })
        .collect();

    entries.sort_by(|(_, a), (_, b)| match (a.is_nan(), b.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => b.total_cmp(a),
    });

    Ok(GroupedMean {
        group_column: group.name.clone(),
        value_column: value.name.clone(),
        entries,
    })
}

fn group_label(value: &Value) -> String {
    value.to_string()
}
