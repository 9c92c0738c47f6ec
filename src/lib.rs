//! # tabula
//!
//! Data tables from lists of records.
//!
//! - **table**: schemas, extractors, style strategies and table assembly
//! - **layout**: content fitting and alignment inside cells, grid solving
//! - **render**: the document-writing collaborator traits and an in-memory
//!   recording renderer
//! - **document**: a document builder with a page-start header hook
//! - **config**: JSON-loadable page, theme and font settings
//!
//! ```ignore
//! use tabula::{Document, Tabular};
//!
//! #[derive(Tabular)]
//! struct Employee {
//!     id: u32,
//!     #[tabula(rename = "Full Name")]
//!     name: String,
//! }
//!
//! document.add_data_table(&employees, |table| table)?;
//! ```

// Generated `Tabular` impls name `::tabula::...`, which must also resolve
// inside this crate's own tests.
extern crate self as tabula;

// Re-export foundation crates
pub use tabula_idf as idf;
pub use tabula_style as style;
pub use tabula_traits as traits;
pub use tabula_types as types;

// Re-export algorithm crates
pub use tabula_layout as layout;
pub use tabula_render_core as render;
pub use tabula_resource as resource;
pub use tabula_table as table;

// The trait and its derive share a name, like serde's `Serialize`.
pub use tabula_derive::Tabular;
pub use tabula_table::Tabular;

pub mod config;
pub mod document;
pub mod error;
pub mod preview;

pub use config::{ConfigError, ReportConfig};
pub use document::{Document, Editor};
pub use error::DocumentError;

// Re-export commonly used types from foundation crates
pub use idf::{CellContent, ColumnLayout, Element, ImageElement, Paragraph, StyledCell};
pub use layout::{place_content, LayoutError, Placement};
pub use render::{DocumentRenderer, RecordingDocument, RenderError, TableEditor, TableRenderer};
pub use style::{
    CellStyle, FontSpec, FontStyle, HorizontalAlignment, PageConfiguration, PageSize, TableTheme,
    TableWidth, VerticalAlignment,
};
pub use table::{DataTable, DataTableStyle, Extractors, RowContext, Schema, TableError};
pub use traits::{FontProvider, FontRegistry, InMemoryResourceProvider, ResourceProvider};
pub use types::{Color, Edges, Point, Rect, Size};
