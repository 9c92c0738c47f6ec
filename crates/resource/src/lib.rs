//! Disk-backed resource provider.
//!
//! The in-memory provider lives in `tabula-traits` and is re-exported here so
//! callers can pick either from one place.

mod filesystem;

pub use filesystem::{FilesystemResourceProvider, IMAGE_EXTENSIONS};
pub use tabula_traits::InMemoryResourceProvider;
