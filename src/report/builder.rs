//! Turns a [`Summary`] into a report [`Document`].

use chrono::{DateTime, Local};

use crate::analysis::{format_stat, DescribeTable, GroupedMean, Summary};
use crate::model::{Alignment, Document, Metadata, Paragraph, Table, TableCell, TableRow};

/// Title repeated in every page header.
pub const REPORT_TITLE: &str = "Data Analysis Report";

/// Label of the leftmost column of the statistics table.
pub const METRIC_LABEL: &str = "Metric";

/// Boilerplate paragraph of the closing section.
pub const NOTES_TEXT: &str = "This report was generated automatically from the input data. \
The analysis can be extended with additional metrics, charts, or \
domain-specific insights as required.";

/// Widths (mm) of the label and value columns of the grouped-mean table.
pub const GROUP_TABLE_WIDTHS: [f32; 2] = [80.0, 40.0];

/// Options for building a report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Title shown in every page header
    pub title: String,

    /// Generation timestamp; `None` means "now" at build time
    pub generated_at: Option<DateTime<Local>>,

    /// Text of the closing notes section
    pub notes: String,
}

impl ReportOptions {
    /// Create new report options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Fix the generation timestamp.
    pub fn with_generated_at(mut self, timestamp: DateTime<Local>) -> Self {
        self.generated_at = Some(timestamp);
        self
    }

    /// Replace the closing notes text.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: REPORT_TITLE.to_string(),
            generated_at: None,
            notes: NOTES_TEXT.to_string(),
        }
    }
}

/// Report document builder.
///
/// Sections are emitted in a fixed order: dataset overview and descriptive
/// statistics on the first page, the grouped mean (when present) on its
/// own page, then the notes on a final page.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    options: ReportOptions,
}

impl ReportBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with custom options.
    pub fn with_options(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Fix the generation timestamp.
    pub fn with_generated_at(mut self, timestamp: DateTime<Local>) -> Self {
        self.options.generated_at = Some(timestamp);
        self
    }

    /// Options in use.
    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Build the document.
    pub fn build(&self, summary: &Summary) -> Document {
        let mut metadata = Metadata::with_title(self.options.title.clone());
        metadata.subject = Some("Descriptive statistics".to_string());
        metadata.producer = Some(format!("tabreport {}", crate::VERSION));
        metadata.created = Some(self.options.generated_at.unwrap_or_else(Local::now));

        let mut doc = Document::with_metadata(metadata);

        let page = doc.new_page();
        page.add_section_title("1. Dataset Overview");
        page.add_paragraph(overview_paragraph(summary));
        page.add_section_title("2. Descriptive Statistics");
        page.add_table(describe_table(&summary.describe));

        if let Some(ref grouped) = summary.grouped_mean {
            let page = doc.new_page();
            page.add_section_title(format!(
                "3. Mean {} by {}",
                grouped.value_column, grouped.group_column
            ));
            page.add_paragraph(Paragraph::with_text(format!(
                "The following table shows the average {} for each {} in the dataset \
                 (sorted from highest to lowest).",
                grouped.value_column.to_lowercase(),
                grouped.group_column.to_lowercase()
            )));
            page.add_table(grouped_mean_table(grouped));
        }

        let page = doc.new_page();
        page.add_section_title("4. Notes");
        page.add_paragraph(Paragraph::with_text(self.options.notes.clone()));

        log::debug!("Built report with {} sections", doc.section_titles().len());
        doc
    }
}

/// Overview sentence listing row and column counts and column names.
pub fn overview_paragraph(summary: &Summary) -> Paragraph {
    Paragraph::with_text(format!(
        "The input file contains {} rows and {} columns.\n\nColumns: {}.",
        summary.row_count,
        summary.column_count(),
        summary.columns.join(", ")
    ))
}

/// Statistics table: label column first, one centered column per numeric
/// source column. Widths are left to the renderer.
pub fn describe_table(describe: &DescribeTable) -> Table {
    let header = std::iter::once(METRIC_LABEL.to_string()).chain(describe.columns.iter().cloned());
    let mut table = Table::with_header(TableRow::from_strings(header));

    for row in &describe.rows {
        let cells = std::iter::once(row.statistic.label().to_string())
            .chain(row.values.iter().map(|v| format_stat(*v)));
        table.add_row(TableRow::from_strings(cells));
    }

    table
}

/// Two-column grouped-mean table in the analyzer's order.
pub fn grouped_mean_table(grouped: &GroupedMean) -> Table {
    let mut table = Table::with_header(TableRow::from_strings([
        grouped.group_column.clone(),
        format!("Mean {}", grouped.value_column),
    ]))
    .widths(GROUP_TABLE_WIDTHS.to_vec());

    for (group, mean) in &grouped.entries {
        table.add_row(TableRow::new(vec![
            TableCell::text(group.clone()),
            TableCell::text(format_stat(*mean)).align(Alignment::Center),
        ]));
    }

    table
}
