//! Geometry of cell content: fitting and aligning content inside a
//! rectangle, measuring images and solving simple table grids.

use tabula_style::{HorizontalAlignment, VerticalAlignment};
use tabula_traits::ResourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Horizontal alignment {0} is not supported for content placement.")]
    UnsupportedHorizontalAlignment(HorizontalAlignment),
    #[error("Vertical alignment {0} is not supported for content placement.")]
    UnsupportedVerticalAlignment(VerticalAlignment),
    #[error("Failed to load image resource: {0}")]
    Resource(#[from] ResourceError),
    #[error("Failed to read image '{uri}': {message}")]
    ImageDecode { uri: String, message: String },
}

pub mod grid;
pub mod image;
pub mod placement;

pub use self::grid::{distribute_widths, solve_grid, text_cell_height, GridLayout};
pub use self::image::{natural_size, ImageCellLayout, ImageMeasurer};
pub use self::placement::{place_content, scale_to_fit, Placement};

// Re-export geometry types used by callers of the resolver
pub use tabula_types::{BoxConstraints, Edges, Point, Rect, Size};
