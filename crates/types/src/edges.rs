//! Four-sided insets used for cell padding and image edges.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

// `-0.0 == 0.0`, so both must hash alike.
fn hash_bits(value: f32) -> u32 {
    (value + 0.0).to_bits()
}

impl Hash for Edges {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_bits(self.top).hash(state);
        hash_bits(self.right).hash(state);
        hash_bits(self.bottom).hash(state);
        hash_bits(self.left).hash(state);
    }
}

impl Eq for Edges {}

impl Edges {
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Same value on top and bottom, zero left and right.
    pub const fn symmetric_vertical(vertical: f32) -> Self {
        Self::new(vertical, 0.0, vertical, 0.0)
    }

    /// Same value on left and right, zero top and bottom.
    pub const fn symmetric_horizontal(horizontal: f32) -> Self {
        Self::new(0.0, horizontal, 0.0, horizontal)
    }

    pub const fn only_top(top: f32) -> Self {
        Self::new(top, 0.0, 0.0, 0.0)
    }

    pub const fn only_right(right: f32) -> Self {
        Self::new(0.0, right, 0.0, 0.0)
    }

    pub const fn only_bottom(bottom: f32) -> Self {
        Self::new(0.0, 0.0, bottom, 0.0)
    }

    pub const fn only_left(left: f32) -> Self {
        Self::new(0.0, 0.0, 0.0, left)
    }

    pub fn with_top(self, top: f32) -> Self {
        Self { top, ..self }
    }

    pub fn with_right(self, right: f32) -> Self {
        Self { right, ..self }
    }

    pub fn with_bottom(self, bottom: f32) -> Self {
        Self { bottom, ..self }
    }

    pub fn with_left(self, left: f32) -> Self {
        Self { left, ..self }
    }

    pub fn add(self, other: Edges) -> Self {
        Self::new(
            self.top + other.top,
            self.right + other.right,
            self.bottom + other.bottom,
            self.left + other.left,
        )
    }

    pub fn subtract(self, other: Edges) -> Self {
        Self::new(
            self.top - other.top,
            self.right - other.right,
            self.bottom - other.bottom,
            self.left - other.left,
        )
    }

    /// Sum of the left and right insets.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom insets.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl Add for Edges {
    type Output = Edges;

    fn add(self, rhs: Edges) -> Edges {
        Edges::add(self, rhs)
    }
}

impl Sub for Edges {
    type Output = Edges;

    fn sub(self, rhs: Edges) -> Edges {
        Edges::subtract(self, rhs)
    }
}

impl<'de> Deserialize<'de> for Edges {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EdgesVisitor;
        impl<'de> de::Visitor<'de> for EdgesVisitor {
            type Value = Edges;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a number, a [top, right, bottom, left] list or a map")
            }

            fn visit_f64<E>(self, value: f64) -> Result<Edges, E>
            where
                E: de::Error,
            {
                Ok(Edges::all(value as f32))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Edges, E>
            where
                E: de::Error,
            {
                Ok(Edges::all(value as f32))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Edges, E>
            where
                E: de::Error,
            {
                Ok(Edges::all(value as f32))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Edges, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut values = [0f32; 4];
                for (i, slot) in values.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                if seq.next_element::<f32>()?.is_some() {
                    return Err(de::Error::invalid_length(5, &self));
                }
                Ok(Edges::new(values[0], values[1], values[2], values[3]))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Edges, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut edges = Edges::zero();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "top" => edges.top = map.next_value()?,
                        "right" => edges.right = map.next_value()?,
                        "bottom" => edges.bottom = map.next_value()?,
                        "left" => edges.left = map.next_value()?,
                        _ => {
                            map.next_value::<de::IgnoredAny>()?;
                        }
                    }
                }
                Ok(edges)
            }
        }
        deserializer.deserialize_any(EdgesVisitor)
    }
}
