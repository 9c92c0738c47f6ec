//! Image bytes read from a directory on disk.
//!
//! URIs are resolved below a root directory. Absolute paths and `..`
//! components that would leave the root are refused.

use log::debug;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tabula_traits::{ResourceError, ResourceProvider, SharedResourceData};

const FILE_SCHEME: &str = "file:";

/// Extensions accepted when no explicit list is configured.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// Loads image cell resources relative to a root directory.
#[derive(Debug)]
pub struct FilesystemResourceProvider {
    root: PathBuf,
    root_str: Option<String>,
    /// Canonical root, when it exists at construction time.
    canonical_root: Option<PathBuf>,
    extensions: Vec<String>,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            canonical_root: root.canonicalize().ok(),
            root_str: root.to_str().map(str::to_owned),
            root,
            extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Replaces the accepted extensions. An empty list accepts any file.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.into().to_ascii_lowercase())
            .collect();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn accepts_extension(&self, relative: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        relative
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }

    /// Maps a URI to a path inside the root, or `None` when it would escape.
    fn resolve(&self, uri: &str) -> Option<PathBuf> {
        let relative = Path::new(uri.strip_prefix(FILE_SCHEME).unwrap_or(uri));
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return None;
        }

        let joined = self.root.join(relative);
        match (joined.canonicalize(), &self.canonical_root) {
            (Ok(canonical), Some(root)) if canonical.starts_with(root) => Some(canonical),
            (Ok(_), Some(_)) => None,
            _ => Some(joined),
        }
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let resolved = self
            .resolve(path)
            .ok_or_else(|| ResourceError::NotFound(format!("{path} (outside resource root)")))?;
        if !self.accepts_extension(&resolved) {
            return Err(ResourceError::InvalidFormat(format!(
                "'{path}' is not one of: {}",
                self.extensions.join(", ")
            )));
        }
        if resolved.is_dir() {
            return Err(ResourceError::InvalidFormat(format!("'{path}' is a directory")));
        }

        debug!("Loading resource '{}' from {}", path, resolved.display());
        std::fs::read(&resolved).map(Arc::new).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ResourceError::NotFound(path.to_string()),
            _ => ResourceError::LoadFailed {
                path: path.to_string(),
                message: e.to_string(),
            },
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_some_and(|p| p.is_file())
    }

    fn base_path(&self) -> Option<&str> {
        self.root_str.as_deref()
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}
