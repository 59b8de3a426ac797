//! Explicit layout state for drawing onto PDF pages.
//!
//! Coordinates are millimetres from the top-left corner of the page; they
//! are converted to PDF user space (points, bottom-left origin) only when
//! operations are emitted.

use lopdf::content::Operation;
use lopdf::{Object, StringFormat};

use super::fonts::{encode_win_ansi, FontRole, PT_PER_MM};
use crate::model::Alignment;
use crate::render::PageGeometry;

/// Horizontal gap between a cell border and its text (mm).
pub const CELL_PADDING: f32 = 1.0;

/// Stroke width of cell borders and rules (mm).
pub const LINE_WIDTH: f32 = 0.2;

/// Drawing position, current font and the operations of every page so far.
#[derive(Debug, Clone)]
pub struct Cursor {
    geometry: PageGeometry,
    x: f32,
    y: f32,
    font: FontRole,
    pages: Vec<Vec<Operation>>,
    replaced_chars: usize,
}

impl Cursor {
    /// Create a cursor with no pages yet.
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            x: geometry.margin_left,
            y: geometry.margin_top,
            geometry,
            font: FontRole::Body,
            pages: Vec::new(),
            replaced_chars: 0,
        }
    }

    /// Page geometry in use.
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Begin a new physical page and move to its top-left margin corner.
    pub fn start_page(&mut self) {
        self.pages.push(vec![Operation::new(
            "w",
            vec![real(LINE_WIDTH * PT_PER_MM)],
        )]);
        self.x = self.geometry.margin_left;
        self.y = self.geometry.margin_top;
    }

    /// Number of the current page (1-indexed), 0 before the first page.
    pub fn page_number(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Current horizontal position.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Current vertical position.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Move horizontally.
    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    /// Move vertically and return to the left margin.
    ///
    /// Negative values are measured from the bottom edge.
    pub fn set_y(&mut self, y: f32) {
        self.y = if y >= 0.0 { y } else { self.geometry.height + y };
        self.x = self.geometry.margin_left;
    }

    /// Current font role.
    pub fn font(&self) -> FontRole {
        self.font
    }

    /// Select the font used by subsequent cells.
    pub fn set_font(&mut self, role: FontRole) {
        self.font = role;
    }

    /// Return to the left margin and move down by `h`.
    pub fn advance_line(&mut self, h: f32) {
        self.x = self.geometry.margin_left;
        self.y += h;
    }

    /// Width from the current position to the right margin.
    pub fn remaining_width(&self) -> f32 {
        self.geometry.width - self.geometry.margin_right - self.x
    }

    /// Whether a cell of height `h` fits above the break margin.
    pub fn fits(&self, h: f32) -> bool {
        self.y + h <= self.geometry.break_trigger()
    }

    /// Width of `text` in the current font.
    pub fn text_width(&self, text: &str) -> f32 {
        let (bytes, _) = encode_win_ansi(text);
        self.font.width_of(&bytes)
    }

    /// Draw a cell at the current position and move right past it.
    ///
    /// A width of zero or less extends the cell to the right margin.
    pub fn cell(&mut self, w: f32, h: f32, text: &str, border: bool, align: Alignment) {
        let w = if w <= 0.0 { self.remaining_width() } else { w };

        if border {
            let (px, py) = self.to_user_space(self.x, self.y);
            self.push(Operation::new(
                "re",
                vec![real(px), real(py), real(w * PT_PER_MM), real(-h * PT_PER_MM)],
            ));
            self.push(Operation::new("S", vec![]));
        }

        if !text.is_empty() {
            let (bytes, replaced) = encode_win_ansi(text);
            self.replaced_chars += replaced;

            let text_width = self.font.width_of(&bytes);
            let dx = match align {
                Alignment::Left => CELL_PADDING,
                Alignment::Center => (w - text_width) / 2.0,
                Alignment::Right => w - CELL_PADDING - text_width,
            };
            let baseline = self.y + 0.5 * h + 0.3 * self.font.size_mm();
            let (px, py) = self.to_user_space(self.x + dx, baseline);
            let face = self.font.face();
            let size = self.font.size();

            self.push(Operation::new("BT", vec![]));
            self.push(Operation::new(
                "Tf",
                vec![Object::Name(face.resource_name().as_bytes().to_vec()), real(size)],
            ));
            self.push(Operation::new("Td", vec![real(px), real(py)]));
            self.push(Operation::new(
                "Tj",
                vec![Object::String(bytes, StringFormat::Literal)],
            ));
            self.push(Operation::new("ET", vec![]));
        }

        self.x += w;
    }

    /// Draw a straight line between two points.
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let (ax, ay) = self.to_user_space(x1, y1);
        let (bx, by) = self.to_user_space(x2, y2);
        self.push(Operation::new("m", vec![real(ax), real(ay)]));
        self.push(Operation::new("l", vec![real(bx), real(by)]));
        self.push(Operation::new("S", vec![]));
    }

    /// Characters replaced with `?` because WinAnsi cannot encode them.
    pub fn replaced_chars(&self) -> usize {
        self.replaced_chars
    }

    /// Consume the cursor, returning the operations of each page.
    pub fn finish(self) -> Vec<Vec<Operation>> {
        self.pages
    }

    fn to_user_space(&self, x: f32, y: f32) -> (f32, f32) {
        (x * PT_PER_MM, (self.geometry.height - y) * PT_PER_MM)
    }

    fn push(&mut self, op: Operation) {
        if self.pages.is_empty() {
            self.start_page();
        }
        if let Some(ops) = self.pages.last_mut() {
            ops.push(op);
        }
    }
}

fn real(value: f32) -> Object {
    Object::Real(value.into())
}
