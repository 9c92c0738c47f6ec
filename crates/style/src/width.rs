use serde::{Deserialize, Serialize};

/// Width of a table, either in points or as a percentage of the available width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TableWidth {
    Absolute(f32),
    Relative(f32),
}

impl TableWidth {
    pub fn absolute(points: f32) -> Self {
        TableWidth::Absolute(points)
    }

    pub fn relative(percentage: f32) -> Self {
        TableWidth::Relative(percentage)
    }

    /// The full available width (100%).
    pub fn max() -> Self {
        TableWidth::Relative(100.0)
    }

    /// Resolves to points against the available width.
    pub fn resolve(&self, available: f32) -> f32 {
        match self {
            TableWidth::Absolute(points) => *points,
            TableWidth::Relative(percentage) => available * percentage / 100.0,
        }
    }
}

impl Default for TableWidth {
    fn default() -> Self {
        Self::max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_is_full_relative_width() {
        assert_eq!(TableWidth::max(), TableWidth::Relative(100.0));
        assert_eq!(TableWidth::max().resolve(523.0), 523.0);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(TableWidth::relative(50.0).resolve(400.0), 200.0);
        assert_eq!(TableWidth::absolute(120.0).resolve(400.0), 120.0);
    }
}
