//! PDF rendering.
//!
//! Each logical [`Page`] of the document starts a new physical page;
//! content that reaches the bottom break margin continues on additional
//! physical pages. Every physical page carries the running header and the
//! `Page N` footer.

mod cursor;
mod decoration;
mod fonts;
mod writer;

pub use cursor::{Cursor, CELL_PADDING, LINE_WIDTH};
pub use decoration::{PageDecoration, RunningHeader};
pub use fonts::{encode_win_ansi, FontFace, FontRole, PT_PER_MM};
pub use writer::PDF_VERSION;

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::{Alignment, Block, Document, Page, Paragraph, Table};

use super::RenderOptions;

/// Gap before a section title (mm).
const SECTION_GAP: f32 = 4.0;

/// Height of a section title line (mm).
const SECTION_HEIGHT: f32 = 8.0;

/// Line height of paragraph text (mm).
const PARAGRAPH_LINE_HEIGHT: f32 = 6.0;

/// Gap after a paragraph (mm).
const PARAGRAPH_GAP: f32 = 1.0;

/// Height of a table row (mm).
pub const TABLE_ROW_HEIGHT: f32 = 8.0;

/// Render a document to PDF bytes.
pub fn to_pdf(doc: &Document, options: &RenderOptions) -> Result<Vec<u8>> {
    PdfRenderer::new(options.clone()).render(doc)
}

/// Render a document and write it to `path`, replacing any existing file.
pub fn write_pdf<P: AsRef<Path>>(doc: &Document, path: P, options: &RenderOptions) -> Result<()> {
    let bytes = to_pdf(doc, options)?;
    fs::write(path.as_ref(), &bytes)?;
    log::debug!("Wrote {} bytes to {}", bytes.len(), path.as_ref().display());
    Ok(())
}

/// Lays out document blocks onto physical pages.
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    options: RenderOptions,
}

impl PdfRenderer {
    /// Create a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render with the default [`RunningHeader`] built from document metadata.
    pub fn render(&self, doc: &Document) -> Result<Vec<u8>> {
        let decoration = RunningHeader::from_metadata(&doc.metadata);
        self.render_with(doc, &decoration)
    }

    /// Render with a custom page decoration.
    pub fn render_with(&self, doc: &Document, decoration: &dyn PageDecoration) -> Result<Vec<u8>> {
        let mut layout = Layout {
            cursor: Cursor::new(self.options.page),
            decoration,
            auto_page_break: self.options.auto_page_break,
        };

        if doc.is_empty() {
            layout.add_page();
        }
        for page in &doc.pages {
            layout.page(page);
        }

        let replaced = layout.cursor.replaced_chars();
        if replaced > 0 {
            log::warn!(
                "{} character(s) could not be encoded in WinAnsi and were replaced with '?'",
                replaced
            );
        }

        let pages = layout.finish();
        log::debug!("Laid out {} physical page(s)", pages.len());
        writer::assemble(pages, &doc.metadata, &self.options)
    }
}

struct Layout<'d> {
    cursor: Cursor,
    decoration: &'d dyn PageDecoration,
    auto_page_break: bool,
}

impl Layout<'_> {
    fn add_page(&mut self) {
        if self.cursor.page_number() > 0 {
            self.decoration.footer(&mut self.cursor);
        }
        let font = self.cursor.font();
        self.cursor.start_page();
        self.decoration.header(&mut self.cursor);
        self.cursor.set_font(font);
    }

    fn finish(mut self) -> Vec<Vec<lopdf::content::Operation>> {
        if self.cursor.page_number() > 0 {
            self.decoration.footer(&mut self.cursor);
        }
        self.cursor.finish()
    }

    /// Break to a new page if a cell of height `h` would cross the margin.
    fn ensure_room(&mut self, h: f32) {
        if self.auto_page_break && !self.cursor.fits(h) {
            let x = self.cursor.x();
            self.add_page();
            self.cursor.set_x(x);
        }
    }

    fn cell(&mut self, w: f32, h: f32, text: &str, border: bool, align: Alignment) {
        self.ensure_room(h);
        self.cursor.cell(w, h, text, border, align);
    }

    fn page(&mut self, page: &Page) {
        self.add_page();
        for block in &page.blocks {
            match block {
                Block::SectionTitle(title) => self.section_title(title),
                Block::Paragraph(paragraph) => self.paragraph(paragraph),
                Block::Table(table) => self.table(table),
            }
        }
    }

    fn section_title(&mut self, title: &str) {
        self.cursor.advance_line(SECTION_GAP);
        self.cursor.set_font(FontRole::SectionTitle);
        self.cell(0.0, SECTION_HEIGHT, title, false, Alignment::Left);
        self.cursor.advance_line(SECTION_HEIGHT);
    }

    fn paragraph(&mut self, paragraph: &Paragraph) {
        self.cursor.set_font(FontRole::Body);
        let width = self.cursor.remaining_width();
        let max_text_width = width - 2.0 * CELL_PADDING;

        for line in paragraph.lines() {
            for wrapped in wrap_line(&self.cursor, line, max_text_width) {
                self.cell(
                    width,
                    PARAGRAPH_LINE_HEIGHT,
                    &wrapped,
                    false,
                    paragraph.alignment,
                );
                self.cursor.advance_line(PARAGRAPH_LINE_HEIGHT);
            }
        }

        self.cursor.advance_line(PARAGRAPH_GAP);
    }

    fn table(&mut self, table: &Table) {
        let columns = table.column_count();
        if columns == 0 {
            return;
        }

        let widths = match table.column_widths {
            Some(ref widths) => widths.clone(),
            None => default_column_widths(self.cursor.geometry().width, columns),
        };

        for row in &table.rows {
            self.cursor.set_font(if row.is_header {
                FontRole::TableHeader
            } else {
                FontRole::TableBody
            });
            for (cell, width) in row.cells.iter().zip(&widths) {
                self.cell(*width, TABLE_ROW_HEIGHT, &cell.text, true, cell.alignment);
            }
            self.cursor.advance_line(TABLE_ROW_HEIGHT);
        }
    }
}

/// Equal column widths: the full page width divided by one more than the
/// number of columns. Wide tables may run past the right margin.
pub fn default_column_widths(page_width: f32, columns: usize) -> Vec<f32> {
    vec![page_width / (columns as f32 + 1.0); columns]
}

/// Split one line of text into pieces no wider than `max_width` in the
/// cursor's current font. Words longer than a line are broken by character.
fn wrap_line(cursor: &Cursor, line: &str, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in line.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if cursor.text_width(&candidate) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if cursor.text_width(word) <= max_width {
            current = word.to_string();
        } else {
            for ch in word.chars() {
                current.push(ch);
                if cursor.text_width(&current) > max_width && current.chars().count() > 1 {
                    current.pop();
                    lines.push(std::mem::take(&mut current));
                    current.push(ch);
                }
            }
        }
    }

    lines.push(current);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Metadata, TableRow};
    use lopdf::content::Content;
    use lopdf::Document as PdfDocument;

    fn page_texts(bytes: &[u8]) -> Vec<String> {
        let pdf = PdfDocument::load_mem(bytes).unwrap();
        pdf.get_pages()
            .values()
            .map(|id| {
                let content = Content::decode(&pdf.get_page_content(*id).unwrap()).unwrap();
                content
                    .operations
                    .iter()
                    .filter(|op| op.operator == "Tj")
                    .map(|op| String::from_utf8_lossy(op.operands[0].as_str().unwrap()).into_owned())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect()
    }

    fn sample_document(rows: usize) -> Document {
        let mut doc = Document::with_metadata(Metadata::with_title("Data Analysis Report"));
        let page = doc.new_page();
        page.add_section_title("1. Overview");
        page.add_paragraph(Paragraph::with_text("First line.\n\nThird line."));

        let mut table = Table::with_header(TableRow::from_strings(["Metric", "A"]));
        for i in 0..rows {
            table.add_row(TableRow::from_strings([format!("row{}", i), "1.00".to_string()]));
        }
        page.add_table(table);

        doc.new_page().add_section_title("2. Notes");
        doc
    }

    #[test]
    fn test_one_physical_page_per_logical_page() {
        let bytes = to_pdf(&sample_document(3), &RenderOptions::default()).unwrap();
        let texts = page_texts(&bytes);

        assert_eq!(texts.len(), 2);
        assert!(texts[0].contains("Data Analysis Report"));
        assert!(texts[0].contains("1. Overview"));
        assert!(texts[0].contains("Page 1"));
        assert!(texts[1].contains("2. Notes"));
        assert!(texts[1].contains("Page 2"));
    }

    #[test]
    fn test_long_table_breaks_pages() {
        let bytes = to_pdf(&sample_document(60), &RenderOptions::default()).unwrap();
        let texts = page_texts(&bytes);

        assert!(texts.len() > 2);
        assert!(texts[1].contains("row40"));
        for (i, text) in texts.iter().enumerate() {
            assert!(text.contains(&format!("Page {}", i + 1)));
            assert!(text.contains("Data Analysis Report"));
        }
    }

    #[test]
    fn test_no_page_break_when_disabled() {
        let options = RenderOptions::default().with_auto_page_break(false);
        let bytes = to_pdf(&sample_document(60), &options).unwrap();
        assert_eq!(page_texts(&bytes).len(), 2);
    }

    #[test]
    fn test_empty_document_has_one_page() {
        let bytes = to_pdf(&Document::new(), &RenderOptions::default()).unwrap();
        let texts = page_texts(&bytes);
        assert_eq!(texts.len(), 1);
        assert!(texts[0].contains("Page 1"));
    }

    #[test]
    fn test_default_column_widths() {
        assert_eq!(default_column_widths(210.0, 1), vec![105.0]);
        assert_eq!(default_column_widths(210.0, 4), vec![42.0; 4]);
    }

    #[test]
    fn test_table_cells_use_page_width() {
        let mut doc = Document::new();
        let mut table = Table::with_header(TableRow::from_strings(["Metric", "A", "B", "C"]));
        table.add_row(TableRow::from_strings(["mean", "1.00", "2.00", "3.00"]));
        doc.new_page().add_table(table);

        let bytes = to_pdf(&doc, &RenderOptions::default()).unwrap();
        let pdf = PdfDocument::load_mem(&bytes).unwrap();
        let id = *pdf.get_pages().values().next().unwrap();
        let content = Content::decode(&pdf.get_page_content(id).unwrap()).unwrap();

        // 210 mm / 5 columns = 42 mm per cell
        let expected = 42.0 * PT_PER_MM;
        let widths: Vec<f32> = content
            .operations
            .iter()
            .filter(|op| op.operator == "re")
            .map(|op| op.operands[2].as_float().unwrap())
            .collect();
        assert_eq!(widths.len(), 8);
        for w in widths {
            assert!((w - expected).abs() < 0.01);
        }
    }

    #[test]
    fn test_wrap_line() {
        let mut cursor = Cursor::new(crate::render::PageGeometry::a4());
        cursor.set_font(FontRole::Body);

        assert_eq!(wrap_line(&cursor, "", 100.0), vec![""]);
        assert_eq!(wrap_line(&cursor, "short text", 100.0), vec!["short text"]);

        let long = "word ".repeat(60);
        let lines = wrap_line(&cursor, long.trim_end(), 50.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(cursor.text_width(line) <= 50.0);
        }
        assert_eq!(lines.join(" "), long.trim_end());

        let unbroken = "x".repeat(200);
        let pieces = wrap_line(&cursor, &unbroken, 20.0);
        assert!(pieces.len() > 1);
        assert_eq!(pieces.concat(), unbroken);
    }
}
