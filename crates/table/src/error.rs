use crate::extract::ExtractError;
use tabula_render_core::RenderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("{type_name} has no columns to render; every field is ignored or none is declared.")]
    NoColumns { type_name: &'static str },
    #[error("Failed to extract a value for field '{field}': {source}")]
    Extraction { field: String, source: ExtractError },
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}
