//! Logical pages and their content blocks.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A group of sections that begins on a fresh physical page.
///
/// Its blocks may still flow over several physical pages when rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Position in the document, starting at 1
    pub number: u32,

    /// Content in reading order
    pub blocks: Vec<Block>,
}

impl Page {
    /// Empty page with the given number.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            blocks: Vec::new(),
        }
    }

    /// Append a section heading.
    pub fn add_section_title(&mut self, title: impl Into<String>) {
        self.blocks.push(Block::SectionTitle(title.into()));
    }

    /// Append a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    /// Append a table.
    pub fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    /// Section titles on this page, in order.
    pub fn section_titles(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::SectionTitle(title) => Some(title.as_str()),
                _ => None,
            })
            .collect()
    }

    /// First table on the page, if any.
    pub fn first_table(&self) -> Option<&Table> {
        self.blocks.iter().find_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }

    /// Blocks separated by blank lines.
    pub fn plain_text(&self) -> String {
        let parts: Vec<String> = self.blocks.iter().map(Block::plain_text).collect();
        parts.join("\n\n")
    }

    /// True when the page has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Content of a page, in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum Block {
    /// Numbered heading such as `2. Descriptive Statistics`
    SectionTitle(String),

    Paragraph(Paragraph),

    Table(Table),
}

impl Block {
    /// Text of the block; tables are tab-separated.
    pub fn plain_text(&self) -> String {
        match self {
            Block::SectionTitle(title) => title.clone(),
            Block::Paragraph(p) => p.plain_text(),
            Block::Table(t) => t.plain_text(),
        }
    }
}
