//! Where image cells get their bytes from.
//!
//! An image cell names its picture by URI only. Layout asks a
//! [`ResourceProvider`] for the bytes when it needs the natural size, so
//! tables can be built without any I/O.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResourceError {
    #[error("no image resource at '{0}'")]
    NotFound(String),

    #[error("could not read image resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    /// The URI resolved to something that cannot be an image.
    #[error("unusable image resource: {0}")]
    InvalidFormat(String),
}

/// Image bytes, shared between the provider and every cell using them.
pub type SharedResourceData = Arc<Vec<u8>>;

/// Resolves image URIs to bytes.
///
/// Providers are shared by reference across layout passes, hence
/// `Send + Sync`.
pub trait ResourceProvider: Send + Sync + Debug {
    fn load(&self, uri: &str) -> Result<SharedResourceData, ResourceError>;

    fn exists(&self, uri: &str) -> bool;

    /// Directory relative URIs are resolved against, for providers backed by one.
    fn base_path(&self) -> Option<&str> {
        None
    }

    /// Shown in log lines about measured images.
    fn name(&self) -> &'static str;
}

/// Images registered up front, e.g. a generated logo or test fixtures.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    images: RwLock<HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `bytes` under `uri`. A second call for the same URI replaces the image.
    pub fn add(&self, uri: impl Into<String>, bytes: Vec<u8>) -> Result<(), ResourceError> {
        let uri = uri.into();
        let mut images = self.images.write().map_err(|_| poisoned(&uri))?;
        images.insert(uri, Arc::new(bytes));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.images.read().map_or(0, |images| images.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned(uri: &str) -> ResourceError {
    ResourceError::LoadFailed {
        path: uri.to_string(),
        message: "image store lock poisoned".to_string(),
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, uri: &str) -> Result<SharedResourceData, ResourceError> {
        let images = self.images.read().map_err(|_| poisoned(uri))?;
        images
            .get(uri)
            .map(Arc::clone)
            .ok_or_else(|| ResourceError::NotFound(uri.to_string()))
    }

    fn exists(&self, uri: &str) -> bool {
        self.images
            .read()
            .is_ok_and(|images| images.contains_key(uri))
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}
