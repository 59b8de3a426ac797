//! Paragraphs and horizontal alignment.

use serde::{Deserialize, Serialize};

/// Body text; `\n` forces a line break, everything else is word-wrapped
/// by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Raw text, `\n` separated
    pub text: String,

    /// Horizontal placement of every line
    pub alignment: Alignment,
}

impl Paragraph {
    /// Left-aligned paragraph.
    pub fn with_text(text: impl Into<String>) -> Self {
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

    /// Hard lines, before wrapping. Blank lines are kept.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    /// The text as written.
    pub fn plain_text(&self) -> String {
        self.text.clone()
    }
}

/// Horizontal placement of text inside its box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Offset by the cell padding from the left edge
    #[default]
    Left,
    /// Centered in the cell
    Center,
    /// Offset by the cell padding from the right edge
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_line_breaks() {
        let p = Paragraph::with_text("The input file contains 3 rows.\n\nColumns: A, B.");
        assert_eq!(
            p.lines().collect::<Vec<_>>(),
            vec!["The input file contains 3 rows.", "", "Columns: A, B."]
        );
        assert_eq!(p.plain_text(), p.text);
    }

    #[test]
    fn test_alignment() {
        let p = Paragraph::with_text("centered").align(Alignment::Center);
        assert_eq!(p.alignment, Alignment::Center);
        assert_eq!(Paragraph::default().alignment, Alignment::Left);
        assert_eq!(serde_json::to_string(&Alignment::Right).unwrap(), "\"right\"");
    }
}
