//! Page size and margins of the output document.

use crate::parsers::{deserialize_edges, StyleParseError};
use serde::{de, ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};
use tabula_types::{Edges, Size};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    pub fn dimensions_pt(&self) -> Size {
        match self {
            PageSize::A4 => Size::new(595.0, 842.0),
            PageSize::Letter => Size::new(612.0, 792.0),
            PageSize::Legal => Size::new(612.0, 1008.0),
            PageSize::Custom { width, height } => Size::new(*width, *height),
        }
    }

    /// Parse a page size name (e.g., "A4", "Letter", "Legal")
    fn parse(s: &str) -> Result<Self, StyleParseError> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(StyleParseError::InvalidValue {
                property: "size".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Legal => serializer.serialize_str("Legal"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: f32, height: f32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}

/// Page size plus the margins kept free on each side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageConfiguration {
    #[serde(default)]
    pub size: PageSize,
    #[serde(
        default = "PageConfiguration::default_margins",
        deserialize_with = "deserialize_edges"
    )]
    pub margins: Edges,
}

impl Default for PageConfiguration {
    fn default() -> Self {
        Self::new(PageSize::A4)
    }
}

impl PageConfiguration {
    pub const DEFAULT_MARGIN: f32 = 36.0;

    fn default_margins() -> Edges {
        Edges::all(Self::DEFAULT_MARGIN)
    }

    pub fn new(size: PageSize) -> Self {
        Self {
            size,
            margins: Self::default_margins(),
        }
    }

    pub fn with_margins(self, margins: Edges) -> Self {
        Self { margins, ..self }
    }

    pub fn horizontal_total_margin(&self) -> f32 {
        self.margins.horizontal()
    }

    pub fn vertical_total_margin(&self) -> f32 {
        self.margins.vertical()
    }

    pub fn total_width(&self) -> f32 {
        self.size.dimensions_pt().width
    }

    pub fn total_height(&self) -> f32 {
        self.size.dimensions_pt().height
    }

    /// Width left for content once both side margins are taken.
    pub fn utilizable_width(&self) -> f32 {
        self.total_width() - self.horizontal_total_margin()
    }

    pub fn utilizable_height(&self) -> f32 {
        self.total_height() - self.vertical_total_margin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_a4_with_36pt_margins() {
        let page = PageConfiguration::default();
        assert_eq!(page.size, PageSize::A4);
        assert_eq!(page.margins, Edges::all(36.0));
        assert_eq!(page.horizontal_total_margin(), 72.0);
        assert_eq!(page.vertical_total_margin(), 72.0);
        assert_eq!(page.utilizable_width(), 595.0 - 72.0);
    }

    #[test]
    fn test_custom_margins() {
        let page = PageConfiguration::new(PageSize::Letter).with_margins(Edges::symmetric_horizontal(10.0));
        assert_eq!(page.utilizable_width(), 592.0);
        assert_eq!(page.utilizable_height(), 792.0);
    }

    #[test]
    fn test_deserialize_page_configuration() {
        let page: PageConfiguration =
            serde_json::from_str(r#"{"size": "letter", "margins": "1in 18pt"}"#).unwrap();
        assert_eq!(page.size, PageSize::Letter);
        assert_eq!(page.margins, Edges::new(72.0, 18.0, 72.0, 18.0));

        let page: PageConfiguration = serde_json::from_str(r#"{"size": {"width": 300, "height": 200}}"#).unwrap();
        assert_eq!(page.size.dimensions_pt(), Size::new(300.0, 200.0));
        assert_eq!(page.margins, Edges::all(36.0));

        assert!(serde_json::from_str::<PageConfiguration>(r#"{"size": "A0"}"#).is_err());
    }
}
