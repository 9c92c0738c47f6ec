use crate::config::ConfigError;
use tabula_layout::LayoutError;
use tabula_render_core::RenderError;
use tabula_table::TableError;
use tabula_traits::ResourceError;
use thiserror::Error;

/// Any failure while building a document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Table generation failed: {0}")]
    Table(#[from] TableError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
