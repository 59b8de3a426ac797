//! Tabular data types produced by the loader and consumed by the analyzer.

mod table;
mod value;

pub use table::{Column, ColumnKind, DataTable};
pub use value::{Value, NA_TOKENS};
