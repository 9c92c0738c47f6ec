use tabula_layout::LayoutError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Could not insert {element} into the document.")]
    CouldNotInsert { element: String },
    #[error("Could not start a new page.")]
    CouldNotCreatePage,
    #[error("No font set on {element} and no default font registered.")]
    MissingFont { element: String },
    #[error("Table has {expected} columns but {found} column widths were given.")]
    ColumnMismatch { expected: usize, found: usize },
    #[error("Invalid table definition: {0}")]
    InvalidTable(String),
    #[error("Document state error: {0}")]
    State(String),
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("Other rendering error: {0}")]
    Other(String),
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Other(s.to_string())
    }
}
