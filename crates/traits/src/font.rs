//! Font lookup for cells that leave their font unset.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;
use tabula_style::FontSpec;

/// Supplies fonts known to the output document.
pub trait FontProvider: Send + Sync + Debug {
    /// Font used for text that carries no font of its own.
    fn default_font(&self) -> Option<FontSpec>;

    /// Looks up a registered font by name.
    fn font(&self, name: &str) -> Option<FontSpec>;

    fn name(&self) -> &'static str;
}

/// Fonts registered with a document, plus the current default.
///
/// Registration does not load font files; it only records the specs the
/// renderer will be asked to use.
#[derive(Debug, Clone, Default)]
pub struct FontRegistry {
    fonts: BTreeMap<Arc<str>, FontSpec>,
    default: Option<Arc<str>>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `font`, replacing an earlier font of the same name.
    ///
    /// The first registered font becomes the default even when
    /// `set_as_default` is false.
    pub fn register(&mut self, font: FontSpec, set_as_default: bool) {
        let name = font.name.clone();
        if set_as_default || self.default.is_none() {
            self.default = Some(name.clone());
        }
        self.fonts.insert(name, font);
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FontSpec> {
        self.fonts.values()
    }
}

impl FontProvider for FontRegistry {
    fn default_font(&self) -> Option<FontSpec> {
        self.default
            .as_deref()
            .and_then(|name| self.fonts.get(name))
            .cloned()
    }

    fn font(&self, name: &str) -> Option<FontSpec> {
        self.fonts.get(name).cloned()
    }

    fn name(&self) -> &'static str {
        "FontRegistry"
    }
}
