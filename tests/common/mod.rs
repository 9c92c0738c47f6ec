#![allow(dead_code)]

use image::{ImageFormat, RgbImage};
use std::io::Cursor;
use tabula::{Document, FontSpec, PageConfiguration, RecordingDocument};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn body_font() -> FontSpec {
    FontSpec::new("Helvetica").with_size(10.0)
}

/// An open-ready document on an A4 recording with Helvetica 10 as the default font.
pub fn recording_document() -> Document<RecordingDocument> {
    paginated_document(None)
}

pub fn paginated_document(items_per_page: Option<usize>) -> Document<RecordingDocument> {
    let page = PageConfiguration::default();
    let renderer = match items_per_page {
        Some(limit) => RecordingDocument::new(page).with_items_per_page(limit),
        None => RecordingDocument::new(page),
    };
    let mut document = Document::new(renderer, page);
    document.register_font(body_font(), true);
    document
}

/// PNG bytes of a black `width` x `height` image.
pub fn png(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    RgbImage::new(width, height)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode png");
    bytes
}
