pub mod color;
pub mod edges;
pub mod geometry;
pub mod ids;

pub use color::Color;
pub use edges::Edges;
pub use geometry::{BoxConstraints, Point, Rect, Size};
pub use ids::{FieldId, ResourceUri};
