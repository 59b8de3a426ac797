//! Assembles laid-out pages into a PDF file.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document as PdfDocument, Object, Stream};

use super::fonts::{encode_win_ansi, FontFace, PT_PER_MM};
use crate::error::Result;
use crate::model::Metadata;
use crate::render::RenderOptions;

/// PDF header version of generated files.
pub const PDF_VERSION: &str = "1.5";

/// Serialize page operations and metadata into PDF bytes.
pub fn assemble(
    pages: Vec<Vec<Operation>>,
    metadata: &Metadata,
    options: &RenderOptions,
) -> Result<Vec<u8>> {
    let mut doc = PdfDocument::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for face in FontFace::ALL {
        let font_id = doc.add_object(face.dictionary());
        fonts.set(face.resource_name(), font_id);
    }
    let resources_id = doc.add_object(dictionary! { "Font" => fonts });

    let media_box: Vec<Object> = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Real((options.page.width * PT_PER_MM).into()),
        Object::Real((options.page.height * PT_PER_MM).into()),
    ];

    let mut kids = Vec::with_capacity(pages.len());
    for operations in pages {
        let encoded = Content { operations }.encode()?;
        let content_id = doc.add_object(content_stream(encoded, options.compress)?);
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => media_box.clone(),
            "Resources" => resources_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => media_box,
            "Resources" => resources_id,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let info = info_dictionary(metadata);
    if !info.is_empty() {
        let info_id = doc.add_object(info);
        doc.trailer.set("Info", info_id);
    }

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}

fn content_stream(content: Vec<u8>, compress: bool) -> Result<Stream> {
    if !compress {
        return Ok(Stream::new(Dictionary::new(), content));
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&content)?;
    let compressed = encoder.finish()?;

    Ok(Stream::new(
        dictionary! { "Filter" => "FlateDecode" },
        compressed,
    ))
}

fn info_dictionary(metadata: &Metadata) -> Dictionary {
    let mut info = Dictionary::new();

    let fields = [
        ("Title", metadata.title.clone()),
        ("Author", metadata.author.clone()),
        ("Subject", metadata.subject.clone()),
        ("Producer", metadata.producer.clone()),
        ("CreationDate", metadata.pdf_date()),
    ];

    for (key, value) in fields {
        if let Some(value) = value {
            let (bytes, _) = encode_win_ansi(&value);
            info.set(key, Object::string_literal(bytes));
        }
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_page(text: &str) -> Vec<Operation> {
        vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), Object::Integer(11)]),
            Operation::new("Td", vec![Object::Integer(72), Object::Integer(720)]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ]
    }

    #[test]
    fn test_assemble_page_count() {
        let pages = vec![text_page("one"), text_page("two")];
        let bytes = assemble(pages, &Metadata::default(), &RenderOptions::default()).unwrap();

        assert!(bytes.starts_with(b"%PDF-1.5"));
        let doc = PdfDocument::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn test_uncompressed_content_is_readable() {
        let options = RenderOptions::default().with_compression(false);
        let bytes = assemble(vec![text_page("hello")], &Metadata::default(), &options).unwrap();

        let needle = b"(hello) Tj";
        assert!(bytes.windows(needle.len()).any(|w| w == needle));
    }

    #[test]
    fn test_info_dictionary() {
        let mut metadata = Metadata::with_title("Data Analysis Report");
        metadata.producer = Some("tabreport".into());

        let info = info_dictionary(&metadata);
        assert_eq!(
            info.get(b"Title").unwrap().as_str().unwrap(),
            b"Data Analysis Report"
        );
        assert!(info.get(b"Author").is_err());
        assert!(info.get(b"CreationDate").is_err());
    }
}
