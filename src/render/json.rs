//! JSON serialization of the document model.

use crate::error::{Error, Result};
use crate::model::Document;

/// Layout of the JSON text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Indented, one field per line
    #[default]
    Pretty,
    /// Single line
    Compact,
}

/// Serialize a document, blocks tagged by `type`.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let json = if format == JsonFormat::Pretty {
        serde_json::to_string_pretty(doc)
    } else {
        serde_json::to_string(doc)
    };

    json.map_err(|e| Error::Render(format!("cannot serialize document as JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Metadata, Table, TableRow};

    #[test]
    fn test_pretty_tags_blocks() {
        let mut doc = Document::with_metadata(Metadata::with_title("Report"));
        let page = doc.new_page();
        page.add_section_title("1. Dataset Overview");
        page.add_table(Table::with_header(TableRow::from_strings(["Metric", "A"])));

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\": \"Report\""));
        assert!(json.contains("\"section_title\""));
        assert!(json.contains("\"table\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_compact_round_trip() {
        let mut doc = Document::new();
        doc.new_page().add_section_title("4. Notes");

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));

        let parsed: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }
}
