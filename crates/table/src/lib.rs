//! Tables generated from lists of records.
//!
//! A record type describes its columns through a [`Schema`]; a
//! [`DataTable`] turns items into styled cells (header row first) and hands
//! them to a rendering collaborator.

pub mod error;
pub mod extract;
pub mod naming;
pub mod schema;
pub mod style;
pub mod table;

pub use error::TableError;
pub use extract::{ExtractError, Extractors};
pub use schema::{Accessor, CellValue, Column, Field, Schema, SchemaBuilder, Tabular};
pub use style::{DataTableStyle, RowContext};
pub use table::{DataTable, RenderedTable, NULL_TEXT};
