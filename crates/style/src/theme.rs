//! Colors and paddings of the default zebra-striped data table.

use crate::parsers::deserialize_edges;
use serde::{Deserialize, Serialize};
use tabula_types::{Color, Edges};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableTheme {
    pub header_background: Color,
    #[serde(deserialize_with = "deserialize_edges")]
    pub header_padding: Edges,
    /// Points added to the default font size for header text.
    pub header_font_increase: f32,
    pub even_background: Color,
    pub odd_background: Color,
    #[serde(deserialize_with = "deserialize_edges")]
    pub body_padding: Edges,
}

impl Default for TableTheme {
    fn default() -> Self {
        Self {
            header_background: Color::LIGHT_GRAY,
            header_padding: Edges::all(5.0),
            header_font_increase: 2.0,
            even_background: Color::WHITE,
            odd_background: Color::gray(230),
            body_padding: Edges::all(2.0),
        }
    }
}

impl TableTheme {
    pub fn row_background(&self, is_even: bool) -> Color {
        if is_even {
            self.even_background
        } else {
            self.odd_background
        }
    }
}
