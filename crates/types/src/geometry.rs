use crate::edges::Edges;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point in page space. The y axis points up, as on a PDF canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// A rectangle of the given size sitting on the origin.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn with_width(self, width: f32) -> Self {
        Self { width, ..self }
    }

    pub fn with_height(self, height: f32) -> Self {
        Self { height, ..self }
    }

    pub fn add(self, other: Size) -> Self {
        Self::new(self.width + other.width, self.height + other.height)
    }

    pub fn subtract(self, other: Size) -> Self {
        Self::new(self.width - other.width, self.height - other.height)
    }

    /// Inflates the size by the edges on both sides of each axis.
    pub fn add_edge(self, edges: Edges) -> Self {
        Self::new(
            self.width + edges.horizontal(),
            self.height + edges.vertical(),
        )
    }

    /// Deflates the size by the edges on both sides of each axis.
    pub fn subtract_edge(self, edges: Edges) -> Self {
        Self::new(
            self.width - edges.horizontal(),
            self.height - edges.vertical(),
        )
    }

    /// Clamps negative components to zero.
    pub fn non_negative(self) -> Self {
        Self::new(self.width.max(0.0), self.height.max(0.0))
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size::add(self, rhs)
    }
}

impl Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Size {
        Size::subtract(self, rhs)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BoxConstraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl PartialEq for BoxConstraints {
    fn eq(&self, other: &Self) -> bool {
        const EPSILON: f32 = 0.01;
        (self.min_width - other.min_width).abs() < EPSILON
            && (self.max_width - other.max_width).abs() < EPSILON
            && (self.min_height - other.min_height).abs() < EPSILON
            && (self.max_height - other.max_height).abs() < EPSILON
    }
}

impl BoxConstraints {
    pub fn tight(size: Size) -> Self {
        Self {
            min_width: size.width,
            max_width: size.width,
            min_height: size.height,
            max_height: size.height,
        }
    }

    /// Anything from zero up to `size`. Negative sizes are treated as zero.
    pub fn loose(size: Size) -> Self {
        let size = size.non_negative();
        Self {
            min_width: 0.0,
            max_width: size.width,
            min_height: 0.0,
            max_height: size.height,
        }
    }

    pub fn is_tight(self) -> bool {
        self.min_width >= self.max_width && self.min_height >= self.max_height
    }

    pub fn constrain(self, size: Size) -> Size {
        Size {
            width: size.width.clamp(self.min_width, self.max_width),
            height: size.height.clamp(self.min_height, self.max_height),
        }
    }

    pub fn max_size(self) -> Size {
        Size::new(self.max_width, self.max_height)
    }
}

impl Default for BoxConstraints {
    fn default() -> Self {
        Self {
            min_width: 0.0,
            max_width: f32::INFINITY,
            min_height: 0.0,
            max_height: f32::INFINITY,
        }
    }
}
