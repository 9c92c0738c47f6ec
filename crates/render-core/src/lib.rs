//! Rendering collaborator abstractions.
//!
//! - `DocumentRenderer` / `TableRenderer`: the document-writing primitives
//!   table assembly talks to
//! - `TableEditor`: cell insertion with default-font filling
//! - `recording`: an in-memory renderer for tests and previews

mod editor;
mod error;
pub mod recording;
mod traits;

pub use editor::{
    cell_with_default_font, element_with_default_font, paragraph_with_default_font, TableEditor,
};
pub use error::RenderError;
pub use recording::{RecordedTable, RecordingDocument, RecordingTable};
pub use traits::{DocumentRenderer, TableRenderer};
