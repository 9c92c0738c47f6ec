//! Fitting content of a known natural size into a target rectangle.
//!
//! Coordinates follow the page convention of the output: the origin is the
//! bottom-left corner and y grows upwards, so "top" is `y + height`.

use crate::LayoutError;
use tabula_style::{HorizontalAlignment, VerticalAlignment};
use tabula_types::{BoxConstraints, Edges, Point, Rect, Size};

/// Where content ends up: absolute bottom-left corner plus drawn size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Point,
    pub size: Size,
}

impl Placement {
    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.width, self.size.height)
    }
}

/// Positions content inside `target`.
///
/// Padding only shrinks the space the content may occupy. Alignment offsets
/// are measured against the full target rectangle.
pub fn place_content(
    natural: Size,
    requested: Option<Size>,
    target: Rect,
    padding: Edges,
    h_align: HorizontalAlignment,
    v_align: VerticalAlignment,
) -> Result<Placement, LayoutError> {
    let available = target.size().subtract_edge(padding).non_negative();
    let size = match requested {
        Some(requested) => BoxConstraints::loose(available).constrain(requested.non_negative()),
        None => scale_to_fit(natural, available),
    };

    let position = Point::new(
        horizontal_offset(target, size.width, h_align)?,
        vertical_offset(target, size.height, v_align)?,
    );
    Ok(Placement { position, size })
}

/// Scales `natural` by one factor so it just fits inside `available`.
///
/// Content with no area stays empty.
pub fn scale_to_fit(natural: Size, available: Size) -> Size {
    if natural.width <= 0.0 || natural.height <= 0.0 {
        return Size::zero();
    }
    let factor = (available.width / natural.width).min(available.height / natural.height);
    Size::new(natural.width * factor, natural.height * factor)
}

pub fn horizontal_offset(
    target: Rect,
    width: f32,
    align: HorizontalAlignment,
) -> Result<f32, LayoutError> {
    match align {
        HorizontalAlignment::Left => Ok(target.left()),
        HorizontalAlignment::Right => Ok(target.right() - width),
        HorizontalAlignment::Center | HorizontalAlignment::Undefined => {
            Ok(target.left() + (target.width - width) / 2.0)
        }
        other => Err(LayoutError::UnsupportedHorizontalAlignment(other)),
    }
}

pub fn vertical_offset(
    target: Rect,
    height: f32,
    align: VerticalAlignment,
) -> Result<f32, LayoutError> {
    match align {
        VerticalAlignment::Top => Ok(target.top() - height),
        VerticalAlignment::Bottom => Ok(target.bottom()),
        VerticalAlignment::Middle | VerticalAlignment::Undefined => {
            Ok(target.bottom() + (target.height - height) / 2.0)
        }
        other => Err(LayoutError::UnsupportedVerticalAlignment(other)),
    }
}
