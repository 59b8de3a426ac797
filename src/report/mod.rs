//! Report assembly: from analysis results to a document.

mod builder;

pub use builder::{
    describe_table, grouped_mean_table, overview_paragraph, ReportBuilder, ReportOptions,
    GROUP_TABLE_WIDTHS, METRIC_LABEL, NOTES_TEXT, REPORT_TITLE,
};

use crate::analysis::Summary;
use crate::model::Document;

/// Build a report document with default options.
pub fn build_report(summary: &Summary) -> Document {
    ReportBuilder::new().build(summary)
}
