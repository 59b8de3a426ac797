//! Document model types for report content.
//!
//! This module defines the intermediate representation that bridges the
//! report builder and the renderers. The model is format-agnostic: the
//! same document renders to PDF, plain text or JSON.

mod document;
mod page;
mod paragraph;
mod table;

pub use document::{Document, Metadata, TIMESTAMP_FORMAT};
pub use page::{Block, Page};
pub use paragraph::{Alignment, Paragraph};
pub use table::{Table, TableCell, TableRow};
