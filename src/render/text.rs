//! Plain text rendering for report documents.

use crate::error::Result;
use crate::model::Document;

/// Convert a document to plain text.
///
/// The header lines (title and generation timestamp) come first, followed
/// by the blocks of every page. Table cells are tab-separated.
pub fn to_text(doc: &Document) -> Result<String> {
    let mut output = String::new();

    if let Some(ref title) = doc.metadata.title {
        output.push_str(title);
        output.push('\n');
    }
    if let Some(generated_on) = doc.metadata.generated_on() {
        output.push_str(&generated_on);
        output.push('\n');
    }
    if !output.is_empty() {
        output.push('\n');
    }

    output.push_str(&doc.plain_text());
    Ok(output.trim_end().to_string())
}
