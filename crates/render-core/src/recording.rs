//! An in-memory renderer that records what it is given.
//!
//! Used by the tests, the demo binary and text previews. Pagination is
//! simulated by a per-page item limit; geometry can be computed afterwards
//! with [`RecordingDocument::layout`].

use crate::error::RenderError;
use crate::traits::{DocumentRenderer, TableRenderer};
use log::debug;
use tabula_idf::{CellContent, ColumnLayout, Element, Paragraph, StyledCell};
use tabula_layout::grid::DEFAULT_CELL_PADDING;
use tabula_layout::{
    distribute_widths, place_content, solve_grid, text_cell_height, GridLayout, ImageCellLayout,
    ImageMeasurer, Placement,
};
use tabula_style::{FontSpec, PageConfiguration, TableWidth};
use tabula_traits::ResourceProvider;
use tabula_types::{Edges, Point, Rect};

/// A finished table as the recorder received it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedTable {
    pub layout: ColumnLayout,
    pub width: TableWidth,
    /// Absolute widths, when set explicitly.
    pub column_widths: Option<Vec<f32>>,
    pub cells: Vec<StyledCell>,
}

/// Grid geometry of a recorded table plus where each image cell draws.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub grid: GridLayout,
    /// `(cell index, placement)` for every image cell.
    pub images: Vec<(usize, Placement)>,
}

fn font_size(paragraph: &Paragraph) -> f32 {
    paragraph
        .font
        .as_ref()
        .map(FontSpec::effective_size)
        .unwrap_or(FontSpec::RENDERER_FONT_SIZE)
}

impl RecordedTable {
    pub fn column_count(&self) -> usize {
        self.layout.column_count()
    }

    /// Cells grouped by row. The last row may be short.
    pub fn rows(&self) -> impl Iterator<Item = &[StyledCell]> {
        self.cells.chunks(self.column_count().max(1))
    }

    pub fn resolve_column_widths(&self, available_width: f32) -> Vec<f32> {
        match &self.column_widths {
            Some(widths) => widths.clone(),
            None => distribute_widths(&self.layout.weights(), self.width.resolve(available_width)),
        }
    }

    /// Lays the table out downwards from `top_left` and places its images.
    pub fn layout(
        &self,
        top_left: Point,
        available_width: f32,
        measurer: &mut ImageMeasurer<'_>,
    ) -> Result<TableLayout, RenderError> {
        let widths = self.resolve_column_widths(available_width);
        let default_padding = Edges::all(DEFAULT_CELL_PADDING);

        let mut heights = Vec::with_capacity(self.cells.len());
        for cell in &self.cells {
            let height = match &cell.content {
                CellContent::Image(image) => measurer.fixed_height(image)?,
                CellContent::Text(p) => {
                    text_cell_height(&p.text, font_size(p), cell.style.padding_or(default_padding))
                }
            };
            heights.push(height);
        }
        let grid = solve_grid(top_left, &widths, &heights);

        let mut images = Vec::new();
        for (index, cell) in self.cells.iter().enumerate() {
            if let (CellContent::Image(image), Some(rect)) = (&cell.content, grid.cells.get(index)) {
                let natural = measurer.measure(&image.uri)?;
                images.push((index, ImageCellLayout::new(image).layout(natural, *rect)?));
            }
        }
        Ok(TableLayout { grid, images })
    }
}

/// Table handed out by [`RecordingDocument::create_table`].
#[derive(Debug, Clone)]
pub struct RecordingTable {
    table: RecordedTable,
    reject_cells: bool,
}

impl RecordingTable {
    pub fn new(layout: ColumnLayout) -> Self {
        Self {
            table: RecordedTable {
                layout,
                width: TableWidth::default(),
                column_widths: None,
                cells: Vec::new(),
            },
            reject_cells: false,
        }
    }

    /// Makes every `append_cell` fail.
    pub fn rejecting_cells(mut self) -> Self {
        self.reject_cells = true;
        self
    }

    pub fn finish(self) -> RecordedTable {
        self.table
    }
}

impl TableRenderer for RecordingTable {
    fn set_width(&mut self, width: TableWidth) {
        self.table.width = width;
    }

    fn set_column_widths(&mut self, widths: &[f32]) -> Result<(), RenderError> {
        let expected = self.table.column_count();
        if widths.len() != expected {
            return Err(RenderError::ColumnMismatch {
                expected,
                found: widths.len(),
            });
        }
        self.table.column_widths = Some(widths.to_vec());
        Ok(())
    }

    fn append_cell(&mut self, cell: &StyledCell) -> bool {
        if self.reject_cells {
            return false;
        }
        self.table.cells.push(cell.clone());
        true
    }
}

/// One recorded item of the document flow.
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Element(Element),
    Table(RecordedTable),
}

impl Recorded {
    pub fn kind(&self) -> &'static str {
        match self {
            Recorded::Element(e) => e.kind(),
            Recorded::Table(_) => "table",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedPage {
    pub items: Vec<Recorded>,
}

/// Geometry of one recorded item on its page.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutItem {
    pub rect: Rect,
    pub images: Vec<Placement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Created,
    Open,
    Closed,
}

#[derive(Debug)]
pub struct RecordingDocument {
    page: PageConfiguration,
    pages: Vec<RecordedPage>,
    state: State,
    items_per_page: Option<usize>,
    reject_insertions: bool,
    pending_page_starts: usize,
}

impl RecordingDocument {
    pub fn new(page: PageConfiguration) -> Self {
        Self {
            page,
            pages: Vec::new(),
            state: State::Created,
            items_per_page: None,
            reject_insertions: false,
            pending_page_starts: 0,
        }
    }

    /// Starts a new page on its own once a page holds `limit` items.
    pub fn with_items_per_page(mut self, limit: usize) -> Self {
        self.items_per_page = Some(limit.max(1));
        self
    }

    /// Makes every insertion report failure while set.
    pub fn set_reject_insertions(&mut self, reject: bool) {
        self.reject_insertions = reject;
    }

    pub fn page_configuration(&self) -> &PageConfiguration {
        &self.page
    }

    pub fn pages(&self) -> &[RecordedPage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_open(&self) -> bool {
        self.state == State::Open
    }

    pub fn is_closed(&self) -> bool {
        self.state == State::Closed
    }

    /// Every recorded table in document order.
    pub fn tables(&self) -> impl Iterator<Item = &RecordedTable> {
        self.pages.iter().flat_map(|p| &p.items).filter_map(|item| match item {
            Recorded::Table(t) => Some(t),
            Recorded::Element(_) => None,
        })
    }

    fn start_page(&mut self) {
        self.pages.push(RecordedPage::default());
    }

    fn insert(&mut self, item: Recorded) -> bool {
        if self.state != State::Open || self.reject_insertions {
            return false;
        }
        let limit = self.items_per_page;
        let Some(current) = self.pages.last_mut() else {
            return false;
        };
        current.items.push(item);
        if limit.is_some_and(|limit| current.items.len() >= limit) {
            // Break eagerly so a page-start hook runs before the next item.
            self.start_page();
            self.pending_page_starts += 1;
            debug!("Page {} full, started page {}", self.pages.len() - 1, self.pages.len());
        }
        true
    }

    /// Stacks every page's items from the top margin down and places images.
    pub fn layout(
        &self,
        resources: &dyn ResourceProvider,
    ) -> Result<Vec<Vec<LaidOutItem>>, RenderError> {
        let mut measurer = ImageMeasurer::new(resources);
        let left = self.page.margins.left;
        let width = self.page.utilizable_width();

        let mut pages = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            let mut top = self.page.total_height() - self.page.margins.top;
            let mut laid_out = Vec::with_capacity(page.items.len());
            for item in &page.items {
                let entry = match item {
                    Recorded::Element(Element::Paragraph(p)) => {
                        let height = text_cell_height(&p.text, font_size(p), Edges::zero());
                        LaidOutItem {
                            rect: Rect::new(left, top - height, width, height),
                            images: Vec::new(),
                        }
                    }
                    Recorded::Element(Element::Image(image)) => {
                        let natural = measurer.measure(&image.uri)?;
                        let height = image.size.unwrap_or(natural).height;
                        let rect = Rect::new(left, top - height, width, height);
                        let placement = place_content(
                            natural,
                            image.size,
                            rect,
                            image.edges,
                            image.h_align,
                            image.v_align,
                        )?;
                        LaidOutItem {
                            rect,
                            images: vec![placement],
                        }
                    }
                    Recorded::Table(table) => {
                        let table_layout = table.layout(Point::new(left, top), width, &mut measurer)?;
                        LaidOutItem {
                            rect: table_layout.grid.bounds,
                            images: table_layout.images.into_iter().map(|(_, p)| p).collect(),
                        }
                    }
                };
                top -= entry.rect.height;
                laid_out.push(entry);
            }
            pages.push(laid_out);
        }
        Ok(pages)
    }
}

impl DocumentRenderer for RecordingDocument {
    type Table = RecordingTable;

    fn open(&mut self) -> Result<(), RenderError> {
        if self.state != State::Created {
            return Err(RenderError::State("document was already opened".to_string()));
        }
        self.state = State::Open;
        self.start_page();
        Ok(())
    }

    fn close(&mut self) -> Result<(), RenderError> {
        if self.state != State::Open {
            return Err(RenderError::State("document is not open".to_string()));
        }
        self.state = State::Closed;
        debug!("Closed recording with {} page(s)", self.pages.len());
        Ok(())
    }

    fn create_table(&mut self, layout: ColumnLayout) -> RecordingTable {
        let table = RecordingTable::new(layout);
        if self.reject_insertions {
            table.rejecting_cells()
        } else {
            table
        }
    }

    fn add_table(&mut self, table: RecordingTable) -> bool {
        self.insert(Recorded::Table(table.finish()))
    }

    fn add_element(&mut self, element: &Element) -> bool {
        self.insert(Recorded::Element(element.clone()))
    }

    fn new_page(&mut self) -> bool {
        if self.state != State::Open {
            return false;
        }
        self.start_page();
        true
    }

    fn take_page_starts(&mut self) -> usize {
        std::mem::take(&mut self.pending_page_starts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use std::io::Cursor;
    use tabula_idf::ImageElement;
    use tabula_traits::InMemoryResourceProvider;
    use tabula_types::Size;

    fn paragraph(text: &str) -> Element {
        Element::Paragraph(Paragraph::new(text).with_font(FontSpec::new("Helvetica").with_size(10.0)))
    }

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        RgbImage::new(width, height)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_lifecycle() {
        let mut doc = RecordingDocument::new(PageConfiguration::default());
        assert!(!doc.add_element(&paragraph("too early")));
        assert!(doc.close().is_err());

        doc.open().unwrap();
        assert!(doc.open().is_err());
        assert!(doc.add_element(&paragraph("hello")));
        assert!(doc.new_page());
        doc.close().unwrap();

        assert!(doc.is_closed());
        assert_eq!(doc.page_count(), 2);
        assert!(!doc.add_element(&paragraph("too late")));
    }

    #[test]
    fn test_paginates_after_limit() {
        let mut doc = RecordingDocument::new(PageConfiguration::default()).with_items_per_page(2);
        doc.open().unwrap();
        for i in 0..5 {
            assert!(doc.add_element(&paragraph(&i.to_string())));
        }

        assert_eq!(doc.take_page_starts(), 2);
        assert_eq!(doc.take_page_starts(), 0);
        let counts: Vec<_> = doc.pages().iter().map(|p| p.items.len()).collect();
        assert_eq!(counts, vec![2, 2, 1]);
    }

    #[test]
    fn test_rejects_insertions() {
        let mut doc = RecordingDocument::new(PageConfiguration::default());
        doc.open().unwrap();
        doc.set_reject_insertions(true);

        assert!(!doc.add_element(&paragraph("x")));
        let mut table = doc.create_table(ColumnLayout::Count(1));
        assert!(!table.append_cell(&Paragraph::new("x").into()));
    }

    #[test]
    fn test_table_layout_places_images() {
        let provider = InMemoryResourceProvider::new();
        provider.add("logo.png", png(40, 20)).unwrap();

        let mut table = RecordingTable::new(ColumnLayout::Relative(vec![1.0, 3.0]));
        table.append_cell(&ImageElement::new("logo.png").into());
        table.append_cell(&Paragraph::new("Report").with_font(FontSpec::new("Helvetica").with_size(10.0)).into());
        let recorded = table.finish();

        let mut measurer = ImageMeasurer::new(&provider);
        let layout = recorded
            .layout(Point::new(36.0, 806.0), 400.0, &mut measurer)
            .unwrap();

        assert_eq!(layout.grid.column_widths, vec![100.0, 300.0]);
        assert_eq!(layout.grid.row_heights, vec![20.0]);
        let (index, placement) = layout.images[0];
        assert_eq!(index, 0);
        assert_eq!(placement.size, Size::new(40.0, 20.0));
        // Centered horizontally in the 100pt column.
        assert_eq!(placement.position.x, 36.0 + 30.0);
        assert_eq!(placement.position.y, 786.0);
    }

    #[test]
    fn test_document_layout_stacks_items() {
        let provider = InMemoryResourceProvider::new();
        provider.add("logo.png", png(10, 10)).unwrap();

        let mut doc = RecordingDocument::new(PageConfiguration::default());
        doc.open().unwrap();
        doc.add_element(&Element::Image(ImageElement::new("logo.png").with_size(Size::new(30.0, 30.0))));
        doc.add_element(&paragraph("below"));

        let pages = doc.layout(&provider).unwrap();
        let items = &pages[0];
        assert_eq!(items[0].rect, Rect::new(36.0, 842.0 - 36.0 - 30.0, 523.0, 30.0));
        assert_eq!(items[0].images[0].size, Size::new(30.0, 30.0));
        assert!(items[1].rect.top() <= items[0].rect.bottom() + 1e-3);
    }
}
