pub mod alignment;
pub mod cell;
pub mod font;
pub mod page;
pub mod parsers;
pub mod theme;
pub mod width;

pub use alignment::{HorizontalAlignment, VerticalAlignment};
pub use cell::CellStyle;
pub use font::{FontSpec, FontStyle};
pub use page::{PageConfiguration, PageSize};
pub use parsers::StyleParseError;
pub use theme::TableTheme;
pub use width::TableWidth;
