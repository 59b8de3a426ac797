//! # tabreport
//!
//! Descriptive-statistics PDF reports from delimited tabular data.
//!
//! The pipeline loads a CSV file into a typed [`DataTable`], computes a
//! [`Summary`] (per-column descriptive statistics and an optional grouped
//! mean), lays the results out as a paginated [`Document`] and renders it
//! to PDF.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tabreport::ReportConfig;
//!
//! fn main() -> tabreport::Result<()> {
//!     let output = ReportConfig::new()
//!         .with_input("data.csv")
//!         .with_output("report.pdf")
//!         .run()?;
//!     println!("Report generated: {}", output.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Stages
//!
//! - **Loading**: [`loader::CsvLoader`] infers numeric and text columns
//! - **Analysis**: [`analysis::Analyzer`] computes the [`Summary`]
//! - **Assembly**: [`report::ReportBuilder`] builds the [`Document`]
//! - **Rendering**: [`render::PdfRenderer`], plus text and JSON output

pub mod analysis;
pub mod data;
pub mod detect;
pub mod error;
pub mod loader;
pub mod model;
pub mod render;
pub mod report;

// Re-export commonly used types
pub use analysis::{AnalyzeOptions, Analyzer, DescribeTable, GroupedMean, Statistic, Summary};
pub use data::{Column, ColumnKind, DataTable, Value};
pub use detect::{detect_format_from_path, DelimitedFormat};
pub use error::{Error, Result};
pub use loader::{CsvLoader, LoadOptions};
pub use model::{Alignment, Block, Document, Metadata, Page, Paragraph, Table, TableCell, TableRow};
pub use render::{JsonFormat, PageGeometry, RenderOptions};
pub use report::{ReportBuilder, ReportOptions};

use std::path::{Path, PathBuf};

/// Crate version, recorded as the PDF producer.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Input path used when none is given.
pub const DEFAULT_INPUT: &str = "data.csv";

/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "report.pdf";

/// Load a delimited file into a table.
///
/// The delimiter is chosen from the file extension.
///
/// # Example
///
/// ```no_run
/// use tabreport::load_table;
///
/// let table = load_table("data.csv").unwrap();
/// println!("Rows: {}", table.row_count());
/// ```
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<DataTable> {
    CsvLoader::open(path)?.load()
}

/// Load a delimited file with custom options.
pub fn load_table_with_options<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<DataTable> {
    CsvLoader::open_with_options(path, options)?.load()
}

/// Load a file and compute its summary with default analysis options.
///
/// # Example
///
/// ```no_run
/// use tabreport::summarize_file;
///
/// let summary = summarize_file("data.csv").unwrap();
/// if let Some(grouped) = summary.grouped_mean {
///     println!("{} groups", grouped.len());
/// }
/// ```
pub fn summarize_file<P: AsRef<Path>>(path: P) -> Result<Summary> {
    let table = load_table(path)?;
    analysis::analyze(&table)
}

/// Generate a PDF report from `input` into `output`.
pub fn generate_report<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<PathBuf> {
    ReportConfig::new()
        .with_input(input.as_ref())
        .with_output(output.as_ref())
        .run()
}

/// Configuration of one report run.
///
/// # Example
///
/// ```no_run
/// use tabreport::{AnalyzeOptions, RenderOptions, ReportConfig};
///
/// let output = ReportConfig::new()
///     .with_input("measurements.tsv")
///     .with_analyze_options(
///         AnalyzeOptions::new()
///             .with_group_column("Station")
///             .with_value_column("Rainfall"),
///     )
///     .with_render_options(RenderOptions::new().with_compression(false))
///     .run()?;
/// # Ok::<(), tabreport::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Delimited input file
    pub input: PathBuf,

    /// PDF output file
    pub output: PathBuf,

    /// Loader options; `None` derives them from the input extension
    pub load_options: Option<LoadOptions>,

    /// Analysis options
    pub analyze_options: AnalyzeOptions,

    /// Report content options
    pub report_options: ReportOptions,

    /// PDF rendering options
    pub render_options: RenderOptions,
}

impl ReportConfig {
    /// Create a configuration with default paths and options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input file.
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = path.into();
        self
    }

    /// Set the output file.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    /// Set loader options.
    pub fn with_load_options(mut self, options: LoadOptions) -> Self {
        self.load_options = Some(options);
        self
    }

    /// Set analysis options.
    pub fn with_analyze_options(mut self, options: AnalyzeOptions) -> Self {
        self.analyze_options = options;
        self
    }

    /// Set report content options.
    pub fn with_report_options(mut self, options: ReportOptions) -> Self {
        self.report_options = options;
        self
    }

    /// Set PDF rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Load, analyze and assemble the report without writing it.
    pub fn build_document(&self) -> Result<Document> {
        let loader = match self.load_options {
            Some(ref options) => CsvLoader::open_with_options(&self.input, options.clone())?,
            None => CsvLoader::open(&self.input)?,
        };
        let table = loader.load()?;
        log::debug!(
            "Loaded {} rows x {} columns from {}",
            table.row_count(),
            table.column_count(),
            self.input.display()
        );

        let summary = Analyzer::new(self.analyze_options.clone()).analyze(&table)?;
        Ok(ReportBuilder::with_options(self.report_options.clone()).build(&summary))
    }

    /// Run the whole pipeline and return the path of the written report.
    ///
    /// Nothing is written unless every earlier stage succeeds.
    pub fn run(&self) -> Result<PathBuf> {
        let doc = self.build_document()?;
        render::write_pdf(&doc, &self.output, &self.render_options)?;
        log::info!("Report written to {}", self.output.display());
        Ok(self.output.clone())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            load_options: None,
            analyze_options: AnalyzeOptions::default(),
            report_options: ReportOptions::default(),
            render_options: RenderOptions::default(),
        }
    }
}
