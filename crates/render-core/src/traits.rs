use crate::error::RenderError;
use tabula_idf::{ColumnLayout, Element, StyledCell};
use tabula_style::TableWidth;

/// A table under construction inside the output document.
pub trait TableRenderer {
    fn set_width(&mut self, width: TableWidth);

    /// Fixes every column to an absolute width in points.
    fn set_column_widths(&mut self, widths: &[f32]) -> Result<(), RenderError>;

    /// Appends the next cell in row-major order. `false` means the cell was
    /// refused and the table is no longer consistent.
    fn append_cell(&mut self, cell: &StyledCell) -> bool;
}

/// The document-writing collaborator: pages, flow elements and tables.
///
/// Insertion methods report failure through their `bool` result; turning
/// that into an error is left to the caller.
pub trait DocumentRenderer {
    type Table: TableRenderer;

    fn open(&mut self) -> Result<(), RenderError>;

    fn close(&mut self) -> Result<(), RenderError>;

    fn create_table(&mut self, layout: ColumnLayout) -> Self::Table;

    fn add_table(&mut self, table: Self::Table) -> bool;

    fn add_element(&mut self, element: &Element) -> bool;

    fn new_page(&mut self) -> bool;

    /// Pages the renderer started on its own since the last call, e.g.
    /// because content overflowed. Resets the count.
    fn take_page_starts(&mut self) -> usize;
}
