//! Per-page header and footer drawing.

use super::cursor::Cursor;
use super::fonts::FontRole;
use crate::model::{Alignment, Metadata};

/// Height of the header title line (mm).
const TITLE_HEIGHT: f32 = 10.0;

/// Height of the "Generated on" line (mm).
const TIMESTAMP_HEIGHT: f32 = 6.0;

/// Gap above and below the header rule (mm).
const RULE_GAP: f32 = 4.0;

/// Distance of the footer line from the bottom edge (mm).
const FOOTER_OFFSET: f32 = 15.0;

/// Height of the footer line (mm).
const FOOTER_HEIGHT: f32 = 10.0;

/// Content drawn on every physical page.
pub trait PageDecoration {
    /// Draw at the top of a freshly started page.
    fn header(&self, cursor: &mut Cursor);

    /// Draw at the bottom of a page before it is closed.
    fn footer(&self, cursor: &mut Cursor);
}

/// Centered title, generation timestamp and rule on top; page number at
/// the bottom.
#[derive(Debug, Clone, Default)]
pub struct RunningHeader {
    title: String,
    subtitle: Option<String>,
}

impl RunningHeader {
    /// Create a header with a title and optional second line.
    pub fn new(title: impl Into<String>, subtitle: Option<String>) -> Self {
        Self {
            title: title.into(),
            subtitle,
        }
    }

    /// Header showing the document title and generation timestamp.
    pub fn from_metadata(metadata: &Metadata) -> Self {
        Self {
            title: metadata.title.clone().unwrap_or_default(),
            subtitle: metadata.generated_on(),
        }
    }

    /// Footer text for a page.
    pub fn page_label(number: u32) -> String {
        format!("Page {}", number)
    }
}

impl PageDecoration for RunningHeader {
    fn header(&self, cursor: &mut Cursor) {
        cursor.set_font(FontRole::Title);
        cursor.cell(0.0, TITLE_HEIGHT, &self.title, false, Alignment::Center);
        cursor.advance_line(TITLE_HEIGHT);

        if let Some(ref subtitle) = self.subtitle {
            cursor.set_font(FontRole::Timestamp);
            cursor.cell(0.0, TIMESTAMP_HEIGHT, subtitle, false, Alignment::Center);
            cursor.advance_line(TIMESTAMP_HEIGHT);
        }

        cursor.advance_line(RULE_GAP);
        let geometry = *cursor.geometry();
        let y = cursor.y();
        cursor.line(
            geometry.margin_left,
            y,
            geometry.width - geometry.margin_right,
            y,
        );
        cursor.advance_line(RULE_GAP);
    }

    fn footer(&self, cursor: &mut Cursor) {
        let label = Self::page_label(cursor.page_number());
        cursor.set_y(-FOOTER_OFFSET);
        cursor.set_font(FontRole::Footer);
        cursor.cell(0.0, FOOTER_HEIGHT, &label, false, Alignment::Center);
    }
}
