//! Report settings loaded from JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tabula_style::{FontSpec, PageConfiguration, TableTheme};
use tabula_table::DataTableStyle;
use tabula_traits::FontRegistry;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Page layout, table theme and fonts of a report.
///
/// Every key is optional:
///
/// ```json
/// {
///   "page": { "size": "Letter", "margins": "0.5in" },
///   "theme": { "oddBackground": "#eef", "headerPadding": 4 },
///   "defaultFont": { "name": "Helvetica", "size": 9 },
///   "fonts": [{ "name": "Courier", "style": "bold" }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportConfig {
    pub page: PageConfiguration,
    pub theme: TableTheme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_font: Option<FontSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fonts: Vec<FontSpec>,
}

impl ReportConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Registers `fonts` in order, then `default_font` as the default.
    pub fn font_registry(&self) -> FontRegistry {
        let mut registry = FontRegistry::new();
        for font in &self.fonts {
            registry.register(font.clone(), false);
        }
        if let Some(font) = &self.default_font {
            registry.register(font.clone(), true);
        }
        registry
    }

    /// Zebra style in this theme, when a default font is configured.
    pub fn table_style(&self) -> Option<DataTableStyle> {
        self.default_font
            .as_ref()
            .map(|font| DataTableStyle::from_theme(font, self.theme))
    }
}
