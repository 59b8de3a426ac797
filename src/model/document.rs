//! The report document and its metadata.

use super::Page;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Format of the generation timestamp shown in page headers.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A report ready to be rendered: metadata plus logical pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Header and PDF Info fields
    pub metadata: Metadata,

    /// Logical pages, each starting a new physical page
    pub pages: Vec<Page>,
}

impl Document {
    /// Empty document without metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty document with the given metadata.
    pub fn with_metadata(metadata: Metadata) -> Self {
        Self {
            metadata,
            pages: Vec::new(),
        }
    }

    /// Number of logical pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Page by 1-based number.
    pub fn get_page(&self, number: u32) -> Option<&Page> {
        let index = number.checked_sub(1)?;
        self.pages.get(index as usize)
    }

    /// Append a page numbered after the existing ones and return it.
    pub fn new_page(&mut self) -> &mut Page {
        let number = self.page_count() + 1;
        self.pages.push(Page::new(number));
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// True when there are no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// All section titles, in document order.
    pub fn section_titles(&self) -> Vec<&str> {
        self.pages.iter().flat_map(|p| p.section_titles()).collect()
    }

    /// Text of every page, separated by blank lines.
    pub fn plain_text(&self) -> String {
        let pages: Vec<String> = self.pages.iter().map(Page::plain_text).collect();
        pages.join("\n\n")
    }
}

/// Header and PDF Info fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Repeated in every page header
    pub title: Option<String>,

    /// Author recorded in the PDF Info dictionary
    pub author: Option<String>,

    /// Subject recorded in the PDF Info dictionary
    pub subject: Option<String>,

    /// Application that produced the file
    pub producer: Option<String>,

    /// Generation time, local clock
    pub created: Option<DateTime<Local>>,
}

impl Metadata {
    /// Metadata with only a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// `Generated on: YYYY-MM-DD HH:MM:SS`
    pub fn generated_on(&self) -> Option<String> {
        self.created
            .as_ref()
            .map(|ts| format!("Generated on: {}", ts.format(TIMESTAMP_FORMAT)))
    }

    /// Timestamp in PDF date syntax (`D:YYYYMMDDHHmmSS`).
    pub fn pdf_date(&self) -> Option<String> {
        self.created
            .as_ref()
            .map(|ts| ts.format("D:%Y%m%d%H%M%S").to_string())
    }
}
