mod common;

use common::{TestResult, init_logger, paginated_document, png, recording_document};
use std::cell::RefCell;
use std::rc::Rc;
use tabula::preview::document_preview;
use tabula::render::recording::Recorded;
use tabula::{
    ColumnLayout, Document, DocumentError, Element, FontProvider, ImageElement, InMemoryResourceProvider,
    PageConfiguration, PageSize, Paragraph, RecordingDocument, RenderError, ReportConfig, Size,
    TableError, Tabular,
};

#[derive(Tabular)]
struct Line {
    n: usize,
}

fn lines(count: usize) -> Vec<Line> {
    (0..count).map(|n| Line { n }).collect()
}

/// Whether each page opens with the two-column header table.
fn pages_start_with_header(doc: &Document<RecordingDocument>) -> Vec<bool> {
    doc.renderer()
        .pages()
        .iter()
        .map(|page| {
            matches!(
                page.items.first(),
                Some(Recorded::Table(table)) if table.layout == ColumnLayout::Relative(vec![1.0, 3.0])
            )
        })
        .collect()
}

#[test]
fn test_header_table_starts_every_page() -> TestResult {
    init_logger();
    let mut doc = paginated_document(Some(3));
    let pages_seen = Rc::new(RefCell::new(Vec::new()));
    let seen = pages_seen.clone();
    doc.set_header(move |editor| {
        seen.borrow_mut().push(editor.page_configuration().size);
        editor.add_table(ColumnLayout::Relative(vec![1.0, 3.0]), |table| {
            table.add(ImageElement::new("logo.png").with_size(Size::new(30.0, 15.0)))?;
            table.add(Paragraph::new("Inventory"))?;
            Ok(())
        })?;
        Ok(())
    });

    doc.open()?;
    for chunk in lines(10).chunks(2) {
        doc.add_data_table(chunk, |table| table)?;
    }
    doc.close()?;

    // Header plus two data tables per page: 1+2, 1+2, 1+1.
    assert_eq!(doc.renderer().page_count(), 3);
    assert_eq!(pages_seen.borrow().len(), 3);
    assert!(pages_seen.borrow().iter().all(|size| *size == PageSize::A4));
    assert_eq!(pages_start_with_header(&doc), vec![true, true, true]);
    let counts: Vec<_> = doc.renderer().pages().iter().map(|p| p.items.len()).collect();
    assert_eq!(counts, vec![3, 3, 2]);
    Ok(())
}

#[test]
fn test_explicit_new_page_runs_header_once() -> TestResult {
    let mut doc = recording_document();
    let calls = Rc::new(RefCell::new(0));
    let counter = calls.clone();
    doc.set_header(move |editor| {
        *counter.borrow_mut() += 1;
        editor.add(Paragraph::new("Header"))?;
        Ok(())
    });

    doc.open()?.add(Paragraph::new("one"))?.new_page()?.add(Paragraph::new("two"))?;
    doc.close()?;

    assert_eq!(*calls.borrow(), 2);
    let preview = document_preview(doc.renderer());
    assert_eq!(
        preview,
        "--- page 1 ---\nHeader\none\n\n--- page 2 ---\nHeader\ntwo\n"
    );
    Ok(())
}

#[test]
fn test_header_error_aborts_open() {
    let mut doc = recording_document();
    doc.set_header(|_| Err(RenderError::from("header unavailable").into()));

    let err = doc.open().err().unwrap();
    assert!(matches!(err, DocumentError::Render(RenderError::Other(_))));
}

#[test]
fn test_data_table_needs_default_font() {
    let page = PageConfiguration::default();
    let mut doc = Document::new(RecordingDocument::new(page), page);
    doc.open().unwrap();

    let err = doc.add_data_table(&lines(1), |table| table).err().unwrap();
    assert!(matches!(err, DocumentError::Render(RenderError::MissingFont { .. })));
    assert_eq!(doc.renderer().tables().count(), 0);
}

#[test]
fn test_refused_table_insertion() {
    let mut doc = recording_document();
    doc.open().unwrap();
    doc.renderer_mut().set_reject_insertions(true);

    let err = doc.add_data_table(&lines(2), |table| table).err().unwrap();
    assert!(matches!(
        err,
        DocumentError::Table(TableError::Render(RenderError::CouldNotInsert { .. }))
    ));
}

#[test]
fn test_from_config() -> TestResult {
    let config = ReportConfig::from_json(
        r#"{ "page": { "size": "Letter" }, "defaultFont": { "name": "Courier", "size": 8 } }"#,
    )?;
    let mut doc = Document::from_config(RecordingDocument::new(config.page), &config);
    assert_eq!(doc.page_configuration().size, PageSize::Letter);
    assert_eq!(doc.fonts().default_font().map(|f| f.size), Some(8.0));

    doc.open()?;
    doc.add(Paragraph::new("styled by config"))?;
    let Some(Recorded::Element(Element::Paragraph(p))) = doc.renderer().pages()[0].items.first() else {
        panic!("expected a paragraph");
    };
    assert_eq!(p.font.as_ref().map(|f| f.name.as_ref()), Some("Courier"));
    Ok(())
}

#[test]
fn test_layout_places_flow_image() -> TestResult {
    let resources = InMemoryResourceProvider::new();
    resources.add("logo.png", png(200, 100))?;

    let mut doc = recording_document();
    doc.open()?;
    doc.add(ImageElement::new("logo.png").with_size(Size::new(100.0, 80.0)))?;
    doc.close()?;

    let pages = doc.renderer().layout(&resources)?;
    let image = &pages[0][0];
    // The requested size wins over the natural 200 x 100.
    assert_eq!(image.images[0].size, Size::new(100.0, 80.0));
    assert_eq!(image.rect.height, 80.0);
    Ok(())
}
