//! Assembly of data tables: header row, then one row per item.

use crate::error::TableError;
use crate::extract::Extractors;
use crate::schema::{Column, Schema, Tabular};
use crate::style::{DataTableStyle, RowContext};
use log::{debug, trace};
use tabula_idf::{ColumnLayout, StyledCell};
use tabula_render_core::{TableEditor, TableRenderer};
use tabula_style::TableWidth;

/// Text shown for absent values.
pub const NULL_TEXT: &str = "NULL";

/// The cells of one data table, header row first, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTable {
    pub column_names: Vec<String>,
    pub header: Vec<StyledCell>,
    pub body: Vec<StyledCell>,
    /// Resolved cell text per body row.
    pub values: Vec<Vec<String>>,
    pub width: TableWidth,
}

impl RenderedTable {
    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    /// Body rows, one per item.
    pub fn row_count(&self) -> usize {
        self.values.len()
    }

    pub fn cell_count(&self) -> usize {
        self.header.len() + self.body.len()
    }

    pub fn body_rows(&self) -> impl Iterator<Item = &[StyledCell]> {
        self.body.chunks(self.column_count().max(1))
    }

    /// All cells in emission order.
    pub fn cells(&self) -> impl Iterator<Item = &StyledCell> {
        self.header.iter().chain(&self.body)
    }

    pub fn column_layout(&self) -> ColumnLayout {
        ColumnLayout::Count(self.column_count())
    }

    /// Sends every cell to `editor` in order. Returns the number of cells sent.
    pub fn emit<R: TableRenderer>(&self, editor: &mut TableEditor<'_, R>) -> Result<usize, TableError> {
        editor.set_width(self.width);
        for cell in self.cells() {
            editor.add(cell.clone())?;
        }
        debug!("Emitted {} cells in {} columns", self.cell_count(), self.column_count());
        Ok(self.cell_count())
    }
}

/// A list of items rendered as a table through their schema.
pub struct DataTable<'a, T> {
    items: &'a [T],
    schema: &'a Schema<T>,
    extractors: Extractors<T>,
    style: DataTableStyle,
    width: TableWidth,
}

impl<'a, T: Tabular> DataTable<'a, T> {
    /// Starts from [`DataTableStyle::plain`]. For the zebra-striped default
    /// look pass [`DataTableStyle::defaults`] to [`DataTable::with_style`];
    /// `Document::add_data_table` does this with the document's font.
    pub fn new(items: &'a [T]) -> Self {
        Self::with_schema(items, T::schema())
    }
}

impl<'a, T> DataTable<'a, T> {
    /// Uses an explicit schema, e.g. one built with [`Schema::builder`].
    /// Styled like [`DataTable::new`].
    pub fn with_schema(items: &'a [T], schema: &'a Schema<T>) -> Self {
        Self {
            items,
            schema,
            extractors: Extractors::new(),
            style: DataTableStyle::plain(),
            width: TableWidth::max(),
        }
    }

    pub fn with_extractors(self, extractors: Extractors<T>) -> Self {
        Self { extractors, ..self }
    }

    pub fn extractor<F>(self, field: &str, extract: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            extractors: self.extractors.with(field, extract),
            ..self
        }
    }

    pub fn with_style(self, style: DataTableStyle) -> Self {
        Self { style, ..self }
    }

    pub fn with_width(self, width: TableWidth) -> Self {
        Self { width, ..self }
    }

    pub fn schema(&self) -> &Schema<T> {
        self.schema
    }

    pub fn items(&self) -> &[T] {
        self.items
    }

    fn resolve_value(&self, item: &T, column: &Column<T>) -> Result<String, TableError> {
        match self.extractors.get(column.id().as_str()) {
            Some(extract) => extract(item).map_err(|source| TableError::Extraction {
                field: column.id().to_string(),
                source,
            }),
            None => Ok(column.read(item).unwrap_or_else(|| NULL_TEXT.to_string())),
        }
    }

    /// Builds every cell. Nothing is emitted, so a failing extractor leaves
    /// no partial table behind.
    pub fn render(&self) -> Result<RenderedTable, TableError> {
        let columns = self.schema.columns();
        if columns.is_empty() {
            return Err(TableError::NoColumns {
                type_name: self.schema.type_name(),
            });
        }
        debug!(
            "Rendering {} item(s) of {} in {} column(s)",
            self.items.len(),
            self.schema.type_name(),
            columns.len()
        );
        self.extractors.warn_unused(self.schema);

        let column_names: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();
        let header = column_names.iter().map(|name| self.style.header_cell(name)).collect();

        let mut body = Vec::with_capacity(columns.len() * self.items.len());
        let mut values = Vec::with_capacity(self.items.len());
        for (row_index, item) in self.items.iter().enumerate() {
            let mut row_values = Vec::with_capacity(columns.len());
            for column in columns {
                let value = self.resolve_value(item, column)?;
                trace!("Row {} column '{}': {}", row_index, column.id(), value);
                body.push(self.style.body_cell(&RowContext::new(value.as_str(), row_index)));
                row_values.push(value);
            }
            values.push(row_values);
        }

        Ok(RenderedTable {
            column_names,
            header,
            body,
            values,
            width: self.width,
        })
    }

    /// Renders, then sends the cells to `editor`.
    pub fn emit<R: TableRenderer>(&self, editor: &mut TableEditor<'_, R>) -> Result<usize, TableError> {
        self.render()?.emit(editor)
    }
}
