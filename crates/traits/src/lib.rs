pub mod font;
pub mod resource;

pub use font::{FontProvider, FontRegistry};
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
