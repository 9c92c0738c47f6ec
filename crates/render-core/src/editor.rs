//! Filling cells into a table while supplying the default font.

use crate::error::RenderError;
use crate::traits::TableRenderer;
use log::trace;
use tabula_idf::{CellContent, Element, Paragraph, StyledCell};
use tabula_style::TableWidth;
use tabula_traits::FontProvider;

/// Gives `paragraph` the provider's default font unless it has one.
pub fn paragraph_with_default_font(
    paragraph: Paragraph,
    fonts: &dyn FontProvider,
    element: &str,
) -> Result<Paragraph, RenderError> {
    if paragraph.has_font() {
        return Ok(paragraph);
    }
    let font = fonts.default_font().ok_or_else(|| RenderError::MissingFont {
        element: element.to_string(),
    })?;
    Ok(paragraph.with_font(font))
}

pub fn cell_with_default_font(
    cell: StyledCell,
    fonts: &dyn FontProvider,
) -> Result<StyledCell, RenderError> {
    match cell.content {
        CellContent::Text(ref paragraph) if !paragraph.has_font() => {
            let filled = paragraph_with_default_font(paragraph.clone(), fonts, "table cell")?;
            Ok(cell.with_content(filled))
        }
        _ => Ok(cell),
    }
}

pub fn element_with_default_font(
    element: Element,
    fonts: &dyn FontProvider,
) -> Result<Element, RenderError> {
    match element {
        Element::Paragraph(p) => Ok(Element::Paragraph(paragraph_with_default_font(
            p,
            fonts,
            "paragraph",
        )?)),
        other => Ok(other),
    }
}

/// Adds cells to a renderer table, one row-major cell at a time.
///
/// Bare paragraphs and images are wrapped in a default cell, and text
/// without a font gets the provider's default font.
pub struct TableEditor<'a, T: TableRenderer> {
    table: T,
    fonts: &'a dyn FontProvider,
    cells: usize,
}

impl<'a, T: TableRenderer> TableEditor<'a, T> {
    pub fn new(table: T, fonts: &'a dyn FontProvider) -> Self {
        Self {
            table,
            fonts,
            cells: 0,
        }
    }

    pub fn set_width(&mut self, width: TableWidth) -> &mut Self {
        self.table.set_width(width);
        self
    }

    pub fn set_column_widths(&mut self, widths: &[f32]) -> Result<&mut Self, RenderError> {
        self.table.set_column_widths(widths)?;
        Ok(self)
    }

    pub fn add(&mut self, cell: impl Into<StyledCell>) -> Result<&mut Self, RenderError> {
        let cell = cell_with_default_font(cell.into(), self.fonts)?;
        trace!("Appending {} cell #{}", cell.content.kind(), self.cells);
        if !self.table.append_cell(&cell) {
            return Err(RenderError::CouldNotInsert {
                element: format!("{} cell #{}", cell.content.kind(), self.cells),
            });
        }
        self.cells += 1;
        Ok(self)
    }

    pub fn add_all<I, C>(&mut self, cells: I) -> Result<&mut Self, RenderError>
    where
        I: IntoIterator<Item = C>,
        C: Into<StyledCell>,
    {
        for cell in cells {
            self.add(cell)?;
        }
        Ok(self)
    }

    /// Number of cells appended so far.
    pub fn cell_count(&self) -> usize {
        self.cells
    }

    pub fn fonts(&self) -> &'a dyn FontProvider {
        self.fonts
    }

    pub fn into_inner(self) -> T {
        self.table
    }
}
