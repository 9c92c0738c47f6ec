//! Building a document on top of a [`DocumentRenderer`].
//!
//! [`Document`] owns the renderer, the registered fonts and an optional
//! header hook. The hook runs after `open`, after every explicit
//! `new_page`, and once for every page the renderer starts on its own while
//! content is added.

use crate::config::ReportConfig;
use crate::error::DocumentError;
use log::{debug, warn};
use tabula_idf::{ColumnLayout, Element};
use tabula_render_core::{element_with_default_font, DocumentRenderer, RenderError, TableEditor};
use tabula_style::{FontSpec, PageConfiguration, TableTheme};
use tabula_table::{DataTable, DataTableStyle, Schema, Tabular};
use tabula_traits::{FontProvider, FontRegistry};

/// Callback run at the start of every page.
pub type HeaderHook<R> = Box<dyn FnMut(&mut Editor<'_, R>) -> Result<(), DocumentError>>;

/// Insertion access to the document, as handed to the header hook.
pub struct Editor<'a, R: DocumentRenderer> {
    renderer: &'a mut R,
    fonts: &'a FontRegistry,
    theme: &'a TableTheme,
    page: &'a PageConfiguration,
}

impl<'a, R: DocumentRenderer> Editor<'a, R> {
    pub fn fonts(&self) -> &FontRegistry {
        self.fonts
    }

    pub fn page_configuration(&self) -> &PageConfiguration {
        self.page
    }

    /// Adds a flow element. Paragraphs without a font get the default font.
    pub fn add(&mut self, element: impl Into<Element>) -> Result<&mut Self, DocumentError> {
        let element = element_with_default_font(element.into(), self.fonts)?;
        if !self.renderer.add_element(&element) {
            return Err(RenderError::CouldNotInsert {
                element: element.kind().to_string(),
            }
            .into());
        }
        Ok(self)
    }

    /// Creates a table, lets `build` fill it, then adds it.
    pub fn add_table<F>(&mut self, layout: ColumnLayout, build: F) -> Result<&mut Self, DocumentError>
    where
        F: FnOnce(&mut TableEditor<'_, R::Table>) -> Result<(), DocumentError>,
    {
        let mut editor = TableEditor::new(self.renderer.create_table(layout), self.fonts);
        build(&mut editor)?;
        self.insert_table(editor)
    }

    /// Renders `items` through their derived schema, zebra-styled with the
    /// default font unless `configure` picks another style.
    pub fn add_data_table<'i, T, F>(&mut self, items: &'i [T], configure: F) -> Result<&mut Self, DocumentError>
    where
        T: Tabular,
        F: FnOnce(DataTable<'i, T>) -> DataTable<'i, T>,
    {
        self.add_data_table_with_schema(items, T::schema(), configure)
    }

    pub fn add_data_table_with_schema<'i, T, F>(
        &mut self,
        items: &'i [T],
        schema: &'i Schema<T>,
        configure: F,
    ) -> Result<&mut Self, DocumentError>
    where
        F: FnOnce(DataTable<'i, T>) -> DataTable<'i, T>,
    {
        let font = self.default_font("data table")?;
        let table = configure(
            DataTable::with_schema(items, schema).with_style(DataTableStyle::from_theme(&font, *self.theme)),
        );
        // Build every cell before touching the renderer.
        let rendered = table.render()?;

        let mut editor = TableEditor::new(self.renderer.create_table(rendered.column_layout()), self.fonts);
        rendered.emit(&mut editor)?;
        self.insert_table(editor)
    }

    fn default_font(&self, element: &str) -> Result<FontSpec, RenderError> {
        self.fonts.default_font().ok_or_else(|| RenderError::MissingFont {
            element: element.to_string(),
        })
    }

    fn insert_table(&mut self, editor: TableEditor<'_, R::Table>) -> Result<&mut Self, DocumentError> {
        let cells = editor.cell_count();
        if !self.renderer.add_table(editor.into_inner()) {
            return Err(RenderError::CouldNotInsert {
                element: format!("table with {} cells", cells),
            }
            .into());
        }
        debug!("Added table with {} cells", cells);
        Ok(self)
    }
}

pub struct Document<R: DocumentRenderer> {
    renderer: R,
    page: PageConfiguration,
    fonts: FontRegistry,
    theme: TableTheme,
    header: Option<HeaderHook<R>>,
}

impl<R: DocumentRenderer> Document<R> {
    pub fn new(renderer: R, page: PageConfiguration) -> Self {
        Self {
            renderer,
            page,
            fonts: FontRegistry::new(),
            theme: TableTheme::default(),
            header: None,
        }
    }

    /// Page, theme and fonts taken from `config`.
    pub fn from_config(renderer: R, config: &ReportConfig) -> Self {
        Self {
            fonts: config.font_registry(),
            theme: config.theme,
            ..Self::new(renderer, config.page)
        }
    }

    pub fn with_theme(self, theme: TableTheme) -> Self {
        Self { theme, ..self }
    }

    /// Registers a font. The first registered font is the default until
    /// another one is registered with `set_as_default`.
    pub fn register_font(&mut self, font: FontSpec, set_as_default: bool) -> &mut Self {
        debug!("Registering font '{}' (default: {})", font.name, set_as_default);
        self.fonts.register(font, set_as_default);
        self
    }

    /// Installs the page-start hook, replacing any earlier one.
    pub fn set_header<F>(&mut self, hook: F) -> &mut Self
    where
        F: FnMut(&mut Editor<'_, R>) -> Result<(), DocumentError> + 'static,
    {
        self.header = Some(Box::new(hook));
        self
    }

    pub fn open(&mut self) -> Result<&mut Self, DocumentError> {
        self.renderer.open()?;
        self.renderer.take_page_starts();
        self.run_header(1)?;
        Ok(self)
    }

    pub fn add(&mut self, element: impl Into<Element>) -> Result<&mut Self, DocumentError> {
        self.editor().add(element)?;
        self.after_insert()
    }

    pub fn add_table<F>(&mut self, layout: ColumnLayout, build: F) -> Result<&mut Self, DocumentError>
    where
        F: FnOnce(&mut TableEditor<'_, R::Table>) -> Result<(), DocumentError>,
    {
        self.editor().add_table(layout, build)?;
        self.after_insert()
    }

    pub fn add_data_table<'i, T, F>(&mut self, items: &'i [T], configure: F) -> Result<&mut Self, DocumentError>
    where
        T: Tabular,
        F: FnOnce(DataTable<'i, T>) -> DataTable<'i, T>,
    {
        self.editor().add_data_table(items, configure)?;
        self.after_insert()
    }

    pub fn add_data_table_with_schema<'i, T, F>(
        &mut self,
        items: &'i [T],
        schema: &'i Schema<T>,
        configure: F,
    ) -> Result<&mut Self, DocumentError>
    where
        F: FnOnce(DataTable<'i, T>) -> DataTable<'i, T>,
    {
        self.editor().add_data_table_with_schema(items, schema, configure)?;
        self.after_insert()
    }

    pub fn new_page(&mut self) -> Result<&mut Self, DocumentError> {
        if !self.renderer.new_page() {
            return Err(RenderError::CouldNotCreatePage.into());
        }
        self.renderer.take_page_starts();
        self.run_header(1)?;
        Ok(self)
    }

    pub fn close(&mut self) -> Result<(), DocumentError> {
        self.renderer.close()?;
        Ok(())
    }

    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    pub fn theme(&self) -> &TableTheme {
        &self.theme
    }

    pub fn page_configuration(&self) -> &PageConfiguration {
        &self.page
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn editor(&mut self) -> Editor<'_, R> {
        Editor {
            renderer: &mut self.renderer,
            fonts: &self.fonts,
            theme: &self.theme,
            page: &self.page,
        }
    }

    fn after_insert(&mut self) -> Result<&mut Self, DocumentError> {
        let starts = self.renderer.take_page_starts();
        self.run_header(starts)?;
        Ok(self)
    }

    /// Runs the header hook `times` times. Page starts the hook itself
    /// causes do not re-trigger it.
    fn run_header(&mut self, times: usize) -> Result<(), DocumentError> {
        if times == 0 {
            return Ok(());
        }
        let Some(mut hook) = self.header.take() else {
            return Ok(());
        };

        let mut result = Ok(());
        for _ in 0..times {
            result = hook(&mut self.editor());
            if result.is_err() {
                break;
            }
        }
        self.header = Some(hook);

        let discarded = self.renderer.take_page_starts();
        if discarded > 0 {
            warn!(
                "Header content started {} page(s) on its own; not running the header again for them",
                discarded
            );
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tabula_idf::Paragraph;
    use tabula_render_core::recording::Recorded;
    use tabula_render_core::RecordingDocument;

    fn document() -> Document<RecordingDocument> {
        let mut doc = Document::new(
            RecordingDocument::new(PageConfiguration::default()),
            PageConfiguration::default(),
        );
        doc.register_font(FontSpec::new("Helvetica").with_size(10.0), true);
        doc
    }

    fn counting_header(doc: &mut Document<RecordingDocument>) -> Rc<Cell<usize>> {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        doc.set_header(move |editor| {
            counter.set(counter.get() + 1);
            editor.add(Paragraph::new("Header"))?;
            Ok(())
        });
        calls
    }

    #[test]
    fn test_header_runs_on_open_and_new_page() {
        let mut doc = document();
        let calls = counting_header(&mut doc);

        doc.open().unwrap();
        doc.add(Paragraph::new("body")).unwrap();
        doc.new_page().unwrap();
        doc.close().unwrap();

        assert_eq!(calls.get(), 2);
        let pages = doc.renderer().pages();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].items.len(), 2);
        assert_eq!(pages[1].items.len(), 1);
    }

    #[test]
    fn test_header_runs_on_automatic_page_start() {
        let mut doc = Document::new(
            RecordingDocument::new(PageConfiguration::default()).with_items_per_page(3),
            PageConfiguration::default(),
        );
        doc.register_font(FontSpec::new("Helvetica"), false);
        let calls = counting_header(&mut doc);

        doc.open().unwrap();
        for i in 0..4 {
            doc.add(Paragraph::new(format!("line {}", i))).unwrap();
        }

        // Header + 2 lines fill page one, header + 2 lines fill page two.
        assert_eq!(calls.get(), 3);
        let first: Vec<_> = doc
            .renderer()
            .pages()
            .iter()
            .map(|p| match p.items.first() {
                Some(Recorded::Element(Element::Paragraph(p))) => p.text.clone(),
                _ => String::new(),
            })
            .collect();
        assert_eq!(first, vec!["Header", "Header", "Header"]);
    }

    #[test]
    fn test_header_overflow_does_not_loop() {
        let mut doc = Document::new(
            RecordingDocument::new(PageConfiguration::default()).with_items_per_page(1),
            PageConfiguration::default(),
        );
        doc.register_font(FontSpec::new("Helvetica"), false);
        let calls = counting_header(&mut doc);

        doc.open().unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(doc.renderer().page_count(), 2);
    }

    #[test]
    fn test_missing_font() {
        let mut doc = Document::new(
            RecordingDocument::new(PageConfiguration::default()),
            PageConfiguration::default(),
        );
        doc.open().unwrap();

        let err = doc.add(Paragraph::new("no font")).err().unwrap();
        assert!(matches!(err, DocumentError::Render(RenderError::MissingFont { .. })));
    }

    #[test]
    fn test_refused_insertion() {
        let mut doc = document();
        doc.open().unwrap();
        doc.renderer_mut().set_reject_insertions(true);

        let err = doc.add(Paragraph::new("x")).err().unwrap();
        assert!(matches!(err, DocumentError::Render(RenderError::CouldNotInsert { .. })));
    }

    #[test]
    fn test_new_page_before_open_fails() {
        let mut doc = document();
        assert!(matches!(
            doc.new_page().err(),
            Some(DocumentError::Render(RenderError::CouldNotCreatePage))
        ));
    }
}
