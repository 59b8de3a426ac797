//! Rendering module for converting report documents to output formats.

mod json;
mod options;
pub mod pdf;
mod text;

pub use json::{to_json, JsonFormat};
pub use options::{PageGeometry, RenderOptions};
pub use pdf::{to_pdf, write_pdf, PageDecoration, PdfRenderer, RunningHeader};
pub use text::to_text;
