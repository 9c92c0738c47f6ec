use serde::{Deserialize, Serialize};
use tabula_types::{Color, Edges};

/// Background and padding overrides for a single table cell.
///
/// `None` leaves the renderer's default in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellStyle {
    #[serde(default)]
    pub background_color: Option<Color>,
    #[serde(default, deserialize_with = "crate::parsers::deserialize_optional_edges")]
    pub padding: Option<Edges>,
}

impl CellStyle {
    pub fn new(background_color: Option<Color>, padding: Option<Edges>) -> Self {
        Self {
            background_color,
            padding,
        }
    }

    pub fn with_background_color(self, color: Color) -> Self {
        Self {
            background_color: Some(color),
            ..self
        }
    }

    pub fn with_padding(self, padding: Edges) -> Self {
        Self {
            padding: Some(padding),
            ..self
        }
    }

    /// Effective padding, falling back to `default` when unset.
    pub fn padding_or(&self, default: Edges) -> Edges {
        self.padding.unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_background_keeps_padding() {
        let even = CellStyle::new(Some(Color::WHITE), Some(Edges::all(2.0)));
        let odd = even.with_background_color(Color::gray(230));

        assert_eq!(odd.padding, Some(Edges::all(2.0)));
        assert_eq!(odd.background_color, Some(Color::gray(230)));
        assert_eq!(even.background_color, Some(Color::WHITE));
    }

    #[test]
    fn test_default_is_no_override() {
        let style = CellStyle::default();
        assert!(style.background_color.is_none());
        assert_eq!(style.padding_or(Edges::all(1.0)), Edges::all(1.0));
    }
}
