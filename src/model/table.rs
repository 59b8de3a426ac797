//! Bordered grid of text cells.

use super::Alignment;
use serde::{Deserialize, Serialize};

/// Grid of cells; leading rows flagged `is_header` form the header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Header rows first, then body rows
    pub rows: Vec<TableRow>,

    /// Column widths in mm; `None` lets the renderer split the page width
    pub column_widths: Option<Vec<f32>>,
}

impl Table {
    /// Start a table from its header row.
    pub fn with_header(mut header: TableRow) -> Self {
        header.is_header = true;
        Self {
            rows: vec![header],
            column_widths: None,
        }
    }

    /// Fix the width of each column.
    pub fn widths(mut self, widths: Vec<f32>) -> Self {
        self.column_widths = Some(widths);
        self
    }

    /// Append a body row.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Rows including the header.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cells in the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    fn header_len(&self) -> usize {
        self.rows.iter().take_while(|r| r.is_header).count()
    }

    /// Leading header rows.
    pub fn header(&self) -> &[TableRow] {
        &self.rows[..self.header_len()]
    }

    /// Rows after the header.
    pub fn body(&self) -> &[TableRow] {
        &self.rows[self.header_len()..]
    }

    /// One line per row, cells separated by tabs.
    pub fn plain_text(&self) -> String {
        let lines: Vec<String> = self.rows.iter().map(TableRow::plain_text).collect();
        lines.join("\n")
    }
}

/// One row of a [`Table`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells left to right
    pub cells: Vec<TableCell>,

    /// Drawn in the bold header face
    pub is_header: bool,
}

impl TableRow {
    /// Body row from prepared cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: false,
        }
    }

    /// Body row of centered cells.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(
            values
                .into_iter()
                .map(|v| TableCell::text(v).align(Alignment::Center))
                .collect(),
        )
    }

    /// Cells joined by tabs.
    pub fn plain_text(&self) -> String {
        let texts: Vec<&str> = self.cells.iter().map(|c| c.text.as_str()).collect();
        texts.join("\t")
    }
}

/// Single line of text inside a bordered box. Never wrapped or truncated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content, drawn on one line
    pub text: String,

    /// Placement inside the bordered box
    pub alignment: Alignment,
}

impl TableCell {
    /// Left-aligned cell.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alignment: Alignment::Left,
        }
    }

    /// Change the alignment.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}
