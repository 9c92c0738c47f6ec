//! Natural image sizes and the placement of images inside table cells.

use crate::placement::{place_content, Placement};
use crate::LayoutError;
use image::ImageReader;
use log::debug;
use std::collections::HashMap;
use std::io::Cursor;
use tabula_idf::ImageElement;
use tabula_traits::ResourceProvider;
use tabula_types::{Rect, ResourceUri, Size};

/// Reads the pixel dimensions from encoded image bytes without decoding the
/// pixel data. One pixel maps to one point.
pub fn natural_size(uri: &str, bytes: &[u8]) -> Result<Size, LayoutError> {
    let decode_err = |message: String| LayoutError::ImageDecode {
        uri: uri.to_string(),
        message,
    };
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| decode_err(e.to_string()))?
        .into_dimensions()
        .map_err(|e| decode_err(e.to_string()))?;
    Ok(Size::new(width as f32, height as f32))
}

/// Measures images through a resource provider, remembering each URI.
#[derive(Debug)]
pub struct ImageMeasurer<'a> {
    provider: &'a dyn ResourceProvider,
    cache: HashMap<ResourceUri, Size>,
}

impl<'a> ImageMeasurer<'a> {
    pub fn new(provider: &'a dyn ResourceProvider) -> Self {
        Self {
            provider,
            cache: HashMap::new(),
        }
    }

    pub fn measure(&mut self, uri: &ResourceUri) -> Result<Size, LayoutError> {
        if let Some(size) = self.cache.get(uri) {
            return Ok(*size);
        }
        let bytes = self.provider.load(uri.as_str())?;
        let size = natural_size(uri.as_str(), &bytes)?;
        debug!(
            "Measured image '{}' via {}: {}x{}",
            uri,
            self.provider.name(),
            size.width,
            size.height
        );
        self.cache.insert(uri.clone(), size);
        Ok(size)
    }

    /// Height an image cell is fixed to: the requested height, else the natural one.
    pub fn fixed_height(&mut self, image: &ImageElement) -> Result<f32, LayoutError> {
        match image.size {
            Some(size) => Ok(size.height),
            None => Ok(self.measure(&image.uri)?.height),
        }
    }
}

/// Layout hook run once the renderer knows the final rectangle of an image cell.
#[derive(Debug, Clone, Copy)]
pub struct ImageCellLayout<'a> {
    image: &'a ImageElement,
}

impl<'a> ImageCellLayout<'a> {
    pub fn new(image: &'a ImageElement) -> Self {
        Self { image }
    }

    /// Fits the image into `cell`, honouring its requested size, edges and alignment.
    pub fn layout(&self, natural: Size, cell: Rect) -> Result<Placement, LayoutError> {
        place_content(
            natural,
            self.image.size,
            cell,
            self.image.edges,
            self.image.h_align,
            self.image.v_align,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use tabula_style::{HorizontalAlignment, VerticalAlignment};
    use tabula_traits::InMemoryResourceProvider;
    use tabula_types::Edges;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        RgbImage::new(width, height)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_natural_size_from_png() {
        let size = natural_size("logo.png", &png(64, 32)).unwrap();
        assert_eq!(size, Size::new(64.0, 32.0));
    }

    #[test]
    fn test_garbage_bytes_are_a_decode_error() {
        let result = natural_size("logo.png", b"not an image");
        assert!(matches!(result, Err(LayoutError::ImageDecode { ref uri, .. }) if uri == "logo.png"));
    }

    #[test]
    fn test_measurer_loads_through_provider() {
        let provider = InMemoryResourceProvider::new();
        provider.add("logo.png", png(20, 10)).unwrap();
        let mut measurer = ImageMeasurer::new(&provider);

        let uri = ResourceUri::from("logo.png");
        assert_eq!(measurer.measure(&uri).unwrap(), Size::new(20.0, 10.0));
        assert_eq!(measurer.fixed_height(&ImageElement::new("logo.png")).unwrap(), 10.0);
        assert_eq!(
            measurer
                .fixed_height(&ImageElement::new("missing.png").with_size(Size::new(5.0, 7.0)))
                .unwrap(),
            7.0
        );
        assert!(matches!(
            measurer.measure(&ResourceUri::from("missing.png")),
            Err(LayoutError::Resource(_))
        ));
    }

    #[test]
    fn test_cell_layout_applies_image_settings() {
        let image = ImageElement::new("logo.png")
            .with_edges(Edges::all(2.0))
            .with_horizontal_alignment(HorizontalAlignment::Left)
            .with_vertical_alignment(VerticalAlignment::Bottom);
        let placed = ImageCellLayout::new(&image)
            .layout(Size::new(64.0, 32.0), Rect::new(100.0, 500.0, 68.0, 36.0))
            .unwrap();

        assert_eq!(placed.size, Size::new(64.0, 32.0));
        assert_eq!(placed.position.x, 100.0);
        assert_eq!(placed.position.y, 500.0);
    }
}
