//! Per-cell styling strategies for data tables.
//!
//! A [`DataTableStyle`] pairs a header strategy (column title to cell) with
//! a body strategy (row context to cell). Both are plain shared closures, so
//! one style can serve any number of renders and threads.

use std::fmt;
use std::sync::Arc;
use tabula_idf::{Paragraph, StyledCell};
use tabula_style::{CellStyle, FontSpec, FontStyle, TableTheme, VerticalAlignment};

/// What a body strategy knows about the cell it styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowContext {
    pub value: String,
    /// 0-based index of the item the row shows.
    pub row_index: usize,
}

impl RowContext {
    pub fn new(value: impl Into<String>, row_index: usize) -> Self {
        Self {
            value: value.into(),
            row_index,
        }
    }

    pub fn with_value(&self, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            row_index: self.row_index,
        }
    }

    pub fn is_even(&self) -> bool {
        self.row_index % 2 == 0
    }

    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }
}

pub type HeaderStyleFn = Arc<dyn Fn(&str) -> StyledCell + Send + Sync>;
pub type BodyStyleFn = Arc<dyn Fn(&RowContext) -> StyledCell + Send + Sync>;

/// Header cell of the zebra style: bold, enlarged, gray background.
pub fn default_header_cell(title: &str, font: &FontSpec, theme: &TableTheme) -> StyledCell {
    let header_font = font
        .with_style(FontStyle::Bold)
        .with_increased_size(theme.header_font_increase);
    StyledCell::new(
        Paragraph::new(title).with_font(header_font),
        CellStyle::new(Some(theme.header_background), Some(theme.header_padding)),
    )
}

/// Body cell of the zebra style: alternating background, vertically centered.
pub fn default_body_cell(row: &RowContext, font: &FontSpec, theme: &TableTheme) -> StyledCell {
    let even = CellStyle::new(Some(theme.even_background), Some(theme.body_padding));
    let style = if row.is_even() {
        even
    } else {
        even.with_background_color(theme.odd_background)
    };
    StyledCell::new(
        Paragraph::new(row.value.as_str())
            .with_font(font.clone())
            .with_vertical_alignment(VerticalAlignment::Middle),
        style,
    )
}

fn plain_cell(text: &str) -> StyledCell {
    Paragraph::new(text)
        .with_vertical_alignment(VerticalAlignment::Middle)
        .into()
}

#[derive(Clone)]
pub struct DataTableStyle {
    header: HeaderStyleFn,
    body: BodyStyleFn,
}

impl DataTableStyle {
    pub fn new<H, B>(header: H, body: B) -> Self
    where
        H: Fn(&str) -> StyledCell + Send + Sync + 'static,
        B: Fn(&RowContext) -> StyledCell + Send + Sync + 'static,
    {
        Self {
            header: Arc::new(header),
            body: Arc::new(body),
        }
    }

    /// Zebra striping with the default theme.
    pub fn defaults(font: &FontSpec) -> Self {
        Self::from_theme(font, TableTheme::default())
    }

    pub fn from_theme(font: &FontSpec, theme: TableTheme) -> Self {
        let header_font = font.clone();
        let body_font = font.clone();
        Self::new(
            move |title| default_header_cell(title, &header_font, &theme),
            move |row| default_body_cell(row, &body_font, &theme),
        )
    }

    /// Unstyled, vertically centered text. Fonts come from the document default.
    pub fn plain() -> Self {
        Self::new(plain_cell, |row: &RowContext| plain_cell(&row.value))
    }

    pub fn default_header_and_custom_body<B>(font: &FontSpec, body: B) -> Self
    where
        B: Fn(&RowContext) -> StyledCell + Send + Sync + 'static,
    {
        Self::defaults(font).with_body(body)
    }

    pub fn default_body_and_custom_header<H>(font: &FontSpec, header: H) -> Self
    where
        H: Fn(&str) -> StyledCell + Send + Sync + 'static,
    {
        Self::defaults(font).with_header(header)
    }

    pub fn with_header<H>(self, header: H) -> Self
    where
        H: Fn(&str) -> StyledCell + Send + Sync + 'static,
    {
        Self {
            header: Arc::new(header),
            ..self
        }
    }

    pub fn with_body<B>(self, body: B) -> Self
    where
        B: Fn(&RowContext) -> StyledCell + Send + Sync + 'static,
    {
        Self {
            body: Arc::new(body),
            ..self
        }
    }

    pub fn header_cell(&self, title: &str) -> StyledCell {
        (self.header)(title)
    }

    pub fn body_cell(&self, row: &RowContext) -> StyledCell {
        (self.body)(row)
    }
}

impl fmt::Debug for DataTableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTableStyle").finish_non_exhaustive()
    }
}
