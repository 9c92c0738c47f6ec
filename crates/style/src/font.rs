use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tabula_types::Color;

/// Font style flags as the renderer encodes them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    Normal,
    Bold,
    Italic,
    Underline,
    StrikeThru,
    BoldItalic,
    #[default]
    Undefined,
}

impl FontStyle {
    pub fn code(self) -> i32 {
        match self {
            FontStyle::Normal => 0,
            FontStyle::Bold => 1,
            FontStyle::Italic => 2,
            FontStyle::Underline => 4,
            FontStyle::StrikeThru => 8,
            FontStyle::BoldItalic => 3,
            FontStyle::Undefined => -1,
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(self, FontStyle::Bold | FontStyle::BoldItalic)
    }
}

/// A registered font plus the size, style and color to draw it with.
///
/// The font file itself is owned by the renderer; this is only the handle
/// and the text styling applied on top of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FontSpec {
    pub name: Arc<str>,
    #[serde(default = "default_font_size")]
    pub size: f32,
    #[serde(default)]
    pub style: FontStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

fn default_font_size() -> f32 {
    FontSpec::DEFAULT_FONT_SIZE
}

impl FontSpec {
    /// Size sentinel meaning "whatever the renderer uses by default".
    pub const DEFAULT_FONT_SIZE: f32 = -1.0;

    /// Point size renderers substitute for `DEFAULT_FONT_SIZE`.
    pub const RENDERER_FONT_SIZE: f32 = 12.0;

    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            size: Self::DEFAULT_FONT_SIZE,
            style: FontStyle::Undefined,
            color: None,
        }
    }

    pub fn with_size(&self, size: f32) -> Self {
        Self { size, ..self.clone() }
    }

    /// Grows the font by `delta` points, starting from the renderer size
    /// when no explicit size is set.
    pub fn with_increased_size(&self, delta: f32) -> Self {
        self.with_size(self.effective_size() + delta)
    }

    pub fn with_style(&self, style: FontStyle) -> Self {
        Self { style, ..self.clone() }
    }

    pub fn with_color(&self, color: Color) -> Self {
        Self {
            color: Some(color),
            ..self.clone()
        }
    }

    pub fn has_explicit_size(&self) -> bool {
        self.size > 0.0
    }

    pub fn effective_size(&self) -> f32 {
        if self.has_explicit_size() {
            self.size
        } else {
            Self::RENDERER_FONT_SIZE
        }
    }
}
