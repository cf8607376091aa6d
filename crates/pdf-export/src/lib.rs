//! Multi-page PDF serialization for rendered mask pages.
//!
//! Each raster page becomes one PDF page: the RGB pixels are Flate-compressed
//! into an Image XObject and drawn across the full MediaBox, which is sized
//! from the pixel dimensions and the target resolution so the sheet prints
//! at its physical size.

use std::io::Write;

use chrono::Utc;
use flate2::{Compression, write::ZlibEncoder};
use image::RgbImage;
use lopdf::content::{Content, Operation};
use lopdf::xref::XrefType;
use lopdf::{Document, Object, Stream, dictionary};
use tracing::debug;

/// PDF points per inch.
const POINTS_PER_INCH: f64 = 72.0;

/// Errors that can occur while serializing the document.
#[derive(Debug, thiserror::Error)]
pub enum PdfExportError {
    #[error("document has no pages")]
    NoPages,

    #[error("failed to compress page image: {0}")]
    Compress(#[from] std::io::Error),

    #[error("failed to serialize PDF: {0}")]
    Pdf(#[from] lopdf::Error),
}

/// Result type alias for PDF export operations.
pub type Result<T> = std::result::Result<T, PdfExportError>;

/// Serialize an ordered page sequence into a single PDF document.
///
/// `dpi` fixes the physical size: a page of `w x h` pixels maps to a
/// MediaBox of `w / dpi * 72` by `h / dpi * 72` points.
pub fn write_pdf(pages: &[RgbImage], dpi: f64) -> Result<Vec<u8>> {
    if pages.is_empty() {
        return Err(PdfExportError::NoPages);
    }

    let mut doc = Document::with_version("1.4");
    doc.reference_table.cross_reference_type = XrefType::CrossReferenceTable;
    let id_pages = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::new();
    for (index, page) in pages.iter().enumerate() {
        let (width, height) = page.dimensions();
        let pt_w = f64::from(width) / dpi * POINTS_PER_INCH;
        let pt_h = f64::from(height) / dpi * POINTS_PER_INCH;

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(page.as_raw())?;
        let compressed = encoder.finish()?;
        debug!(index, width, height, bytes = compressed.len(), "Embedded page image");

        let image_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "FlateDecode",
            },
            compressed,
        ));

        // Scale the unit image square up to the page, then draw it.
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        pt_w.into(),
                        0.into(),
                        0.into(),
                        pt_h.into(),
                        0.into(),
                        0.into(),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let resources_id = doc.add_object(dictionary! {
            "XObject" => dictionary! {
                "Im0" => image_id,
            },
        });

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => id_pages,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), pt_w.into(), pt_h.into()],
        });
        kids.push(page_id.into());
    }

    doc.set_object(
        id_pages,
        dictionary! {
            "Type" => "Pages",
            "Count" => kids.len() as i32,
            "Kids" => kids,
        },
    );

    let id_catalog = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => id_pages,
    });
    doc.trailer.set("Root", id_catalog);

    let date = Utc::now();
    let s_date = date.format("D:%Y%m%d%H%M%SZ").to_string();
    let id_info = doc.add_object(dictionary! {
        "Title" => Object::string_literal("Papercraft Mask"),
        "Creator" => Object::string_literal("skinmask"),
        "CreationDate" => Object::string_literal(s_date),
    });
    doc.trailer.set("Info", id_info);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}
