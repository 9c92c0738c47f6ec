//! Document elements handed to the rendering collaborator.
//!
//! Everything here is an immutable value: the `with_*` methods return a
//! modified copy and leave the receiver untouched.

use tabula_style::{CellStyle, FontSpec, HorizontalAlignment, VerticalAlignment};
use tabula_types::{Edges, ResourceUri, Size};

// --- Paragraph ---

/// A run of text drawn with one font.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    /// `None` until filled from the document's default font.
    pub font: Option<FontSpec>,
    pub h_align: HorizontalAlignment,
    pub v_align: VerticalAlignment,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
            h_align: HorizontalAlignment::Left,
            v_align: VerticalAlignment::Top,
        }
    }

    pub fn with_font(&self, font: FontSpec) -> Self {
        Self {
            font: Some(font),
            ..self.clone()
        }
    }

    pub fn with_horizontal_alignment(&self, h_align: HorizontalAlignment) -> Self {
        Self {
            h_align,
            ..self.clone()
        }
    }

    pub fn with_vertical_alignment(&self, v_align: VerticalAlignment) -> Self {
        Self {
            v_align,
            ..self.clone()
        }
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new("")
    }
}

// --- Image ---

/// An image referenced by URI and fitted into whatever box holds it.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub uri: ResourceUri,
    /// Explicit size in points. `None` scales the natural size to fit.
    pub size: Option<Size>,
    /// Padding kept free around the image inside its box.
    pub edges: Edges,
    pub h_align: HorizontalAlignment,
    pub v_align: VerticalAlignment,
}

impl ImageElement {
    pub fn new(uri: impl Into<ResourceUri>) -> Self {
        Self {
            uri: uri.into(),
            size: None,
            edges: Edges::zero(),
            h_align: HorizontalAlignment::Center,
            v_align: VerticalAlignment::Middle,
        }
    }

    pub fn with_size(&self, size: Size) -> Self {
        Self {
            size: Some(size),
            ..self.clone()
        }
    }

    pub fn with_edges(&self, edges: Edges) -> Self {
        Self {
            edges,
            ..self.clone()
        }
    }

    pub fn with_horizontal_alignment(&self, h_align: HorizontalAlignment) -> Self {
        Self {
            h_align,
            ..self.clone()
        }
    }

    pub fn with_vertical_alignment(&self, v_align: VerticalAlignment) -> Self {
        Self {
            v_align,
            ..self.clone()
        }
    }
}

// --- Table cells ---

/// What a table cell holds.
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Text(Paragraph),
    Image(ImageElement),
}

impl CellContent {
    pub fn kind(&self) -> &'static str {
        match self {
            CellContent::Text(_) => "paragraph",
            CellContent::Image(_) => "image",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellContent::Text(p) => Some(&p.text),
            CellContent::Image(_) => None,
        }
    }
}

impl From<Paragraph> for CellContent {
    fn from(p: Paragraph) -> Self {
        CellContent::Text(p)
    }
}

impl From<ImageElement> for CellContent {
    fn from(image: ImageElement) -> Self {
        CellContent::Image(image)
    }
}

/// A table cell: content plus background, padding and alignment.
///
/// Text cells are aligned by their paragraph, image cells by the image's
/// own alignment; the cell alignment is the fallback the renderer applies
/// when the content leaves it undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledCell {
    pub content: CellContent,
    pub style: CellStyle,
    pub h_align: HorizontalAlignment,
    pub v_align: VerticalAlignment,
}

impl StyledCell {
    pub fn new(content: impl Into<CellContent>, style: CellStyle) -> Self {
        Self {
            content: content.into(),
            style,
            h_align: HorizontalAlignment::Left,
            v_align: VerticalAlignment::Middle,
        }
    }

    pub fn with_content(&self, content: impl Into<CellContent>) -> Self {
        Self {
            content: content.into(),
            ..self.clone()
        }
    }

    pub fn with_style(&self, style: CellStyle) -> Self {
        Self {
            style,
            ..self.clone()
        }
    }

    pub fn with_horizontal_alignment(&self, h_align: HorizontalAlignment) -> Self {
        Self {
            h_align,
            ..self.clone()
        }
    }

    pub fn with_vertical_alignment(&self, v_align: VerticalAlignment) -> Self {
        Self {
            v_align,
            ..self.clone()
        }
    }

    /// Alignment the renderer should apply to the cell as a whole.
    pub fn effective_alignment(&self) -> (HorizontalAlignment, VerticalAlignment) {
        let (h, v) = match &self.content {
            CellContent::Text(p) => (p.h_align, p.v_align),
            CellContent::Image(img) => (img.h_align, img.v_align),
        };
        (
            if h == HorizontalAlignment::Undefined { self.h_align } else { h },
            if v == VerticalAlignment::Undefined { self.v_align } else { v },
        )
    }

    /// Fixed height of an image cell: the requested height, else the natural one.
    ///
    /// Text cells grow with their content and return `None`.
    pub fn fixed_height(&self, natural: Option<Size>) -> Option<f32> {
        match &self.content {
            CellContent::Image(img) => img.size.or(natural).map(|s| s.height),
            CellContent::Text(_) => None,
        }
    }
}

impl From<Paragraph> for StyledCell {
    fn from(p: Paragraph) -> Self {
        StyledCell::new(p, CellStyle::default())
    }
}

impl From<ImageElement> for StyledCell {
    fn from(image: ImageElement) -> Self {
        StyledCell::new(image, CellStyle::default())
    }
}

// --- Document-level structures ---

/// An element added directly to the document flow.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Paragraph(Paragraph),
    Image(ImageElement),
}

impl Element {
    /// Short name used in log lines and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Paragraph(_) => "paragraph",
            Element::Image(_) => "image",
        }
    }
}

impl From<Paragraph> for Element {
    fn from(p: Paragraph) -> Self {
        Element::Paragraph(p)
    }
}

impl From<ImageElement> for Element {
    fn from(image: ImageElement) -> Self {
        Element::Image(image)
    }
}

/// How a new table divides its width between columns.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnLayout {
    /// `n` columns of equal width.
    Count(usize),
    /// One column per entry, sized proportionally to it.
    Relative(Vec<f32>),
}

impl ColumnLayout {
    pub fn column_count(&self) -> usize {
        match self {
            ColumnLayout::Count(n) => *n,
            ColumnLayout::Relative(widths) => widths.len(),
        }
    }

    /// Relative weight of every column; equal weights for `Count`.
    pub fn weights(&self) -> Vec<f32> {
        match self {
            ColumnLayout::Count(n) => vec![1.0; *n],
            ColumnLayout::Relative(widths) => widths.clone(),
        }
    }
}
