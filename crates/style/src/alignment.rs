//! Horizontal and vertical alignment of content inside a cell.
//!
//! Both enums carry the numeric codes the renderer understands. Unknown codes
//! and names resolve to `Undefined` instead of failing.

use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    #[default]
    Undefined,
    Left,
    Center,
    Right,
    Justify,
    JustifyAll,
}

impl HorizontalAlignment {
    pub fn code(self) -> i32 {
        match self {
            HorizontalAlignment::Undefined => -1,
            HorizontalAlignment::Left => 0,
            HorizontalAlignment::Center => 1,
            HorizontalAlignment::Right => 2,
            HorizontalAlignment::Justify => 3,
            HorizontalAlignment::JustifyAll => 8,
        }
    }

    pub fn from_code(code: i32) -> Self {
        match code {
            0 => HorizontalAlignment::Left,
            1 => HorizontalAlignment::Center,
            2 => HorizontalAlignment::Right,
            3 => HorizontalAlignment::Justify,
            8 => HorizontalAlignment::JustifyAll,
            -1 => HorizontalAlignment::Undefined,
            _ => {
                warn!("Unknown horizontal alignment code {}, using undefined", code);
                HorizontalAlignment::Undefined
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HorizontalAlignment::Undefined => "undefined",
            HorizontalAlignment::Left => "left",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::Right => "right",
            HorizontalAlignment::Justify => "justify",
            HorizontalAlignment::JustifyAll => "justify-all",
        }
    }
}

impl FromStr for HorizontalAlignment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().replace('_', "-").as_str() {
            "left" => HorizontalAlignment::Left,
            "center" => HorizontalAlignment::Center,
            "right" => HorizontalAlignment::Right,
            "justify" => HorizontalAlignment::Justify,
            "justify-all" => HorizontalAlignment::JustifyAll,
            _ => HorizontalAlignment::Undefined,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    #[default]
    Undefined,
    Top,
    Middle,
    Bottom,
    Baseline,
}

impl VerticalAlignment {
    pub fn code(self) -> i32 {
        match self {
            VerticalAlignment::Undefined => -1,
            VerticalAlignment::Top => 4,
            VerticalAlignment::Middle => 5,
            VerticalAlignment::Bottom => 6,
            VerticalAlignment::Baseline => 7,
        }
    }

    pub fn from_code(code: i32) -> Self {
        match code {
            4 => VerticalAlignment::Top,
            5 => VerticalAlignment::Middle,
            6 => VerticalAlignment::Bottom,
            7 => VerticalAlignment::Baseline,
            -1 => VerticalAlignment::Undefined,
            _ => {
                warn!("Unknown vertical alignment code {}, using undefined", code);
                VerticalAlignment::Undefined
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VerticalAlignment::Undefined => "undefined",
            VerticalAlignment::Top => "top",
            VerticalAlignment::Middle => "middle",
            VerticalAlignment::Bottom => "bottom",
            VerticalAlignment::Baseline => "baseline",
        }
    }
}

impl FromStr for VerticalAlignment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "top" => VerticalAlignment::Top,
            "middle" => VerticalAlignment::Middle,
            "bottom" => VerticalAlignment::Bottom,
            "baseline" => VerticalAlignment::Baseline,
            _ => VerticalAlignment::Undefined,
        })
    }
}

macro_rules! alignment_serde {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                #[derive(Deserialize)]
                #[serde(untagged)]
                enum AlignmentDef {
                    Name(String),
                    Code(i32),
                }

                Ok(match AlignmentDef::deserialize(deserializer)? {
                    AlignmentDef::Name(name) => {
                        let parsed = name.parse::<$ty>().unwrap_or_default();
                        if parsed == <$ty>::default() && !name.trim().eq_ignore_ascii_case("undefined") {
                            warn!("Unknown alignment '{}', using undefined", name);
                        }
                        parsed
                    }
                    AlignmentDef::Code(code) => <$ty>::from_code(code),
                })
            }
        }
    };
}

alignment_serde!(HorizontalAlignment);
alignment_serde!(VerticalAlignment);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_codes_round_trip() {
        for alignment in [
            HorizontalAlignment::Left,
            HorizontalAlignment::Center,
            HorizontalAlignment::Right,
            HorizontalAlignment::Justify,
            HorizontalAlignment::JustifyAll,
            HorizontalAlignment::Undefined,
        ] {
            assert_eq!(HorizontalAlignment::from_code(alignment.code()), alignment);
        }
    }

    #[test]
    fn test_unknown_codes_fall_back_to_undefined() {
        assert_eq!(HorizontalAlignment::from_code(42), HorizontalAlignment::Undefined);
        assert_eq!(HorizontalAlignment::from_code(4), HorizontalAlignment::Undefined);
        assert_eq!(VerticalAlignment::from_code(0), VerticalAlignment::Undefined);
        assert_eq!(VerticalAlignment::from_code(-7), VerticalAlignment::Undefined);
    }

    #[test]
    fn test_vertical_codes() {
        assert_eq!(VerticalAlignment::Top.code(), 4);
        assert_eq!(VerticalAlignment::from_code(5), VerticalAlignment::Middle);
        assert_eq!(VerticalAlignment::from_code(6), VerticalAlignment::Bottom);
        assert_eq!(VerticalAlignment::from_code(7), VerticalAlignment::Baseline);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("CENTER".parse::<HorizontalAlignment>().unwrap(), HorizontalAlignment::Center);
        assert_eq!("justify_all".parse::<HorizontalAlignment>().unwrap(), HorizontalAlignment::JustifyAll);
        assert_eq!("diagonal".parse::<HorizontalAlignment>().unwrap(), HorizontalAlignment::Undefined);
        assert_eq!("Middle".parse::<VerticalAlignment>().unwrap(), VerticalAlignment::Middle);
    }

    #[test]
    fn test_deserialize_names_and_codes() {
        let h: HorizontalAlignment = serde_json::from_str(r#""right""#).unwrap();
        assert_eq!(h, HorizontalAlignment::Right);
        let h: HorizontalAlignment = serde_json::from_str("8").unwrap();
        assert_eq!(h, HorizontalAlignment::JustifyAll);
        let v: VerticalAlignment = serde_json::from_str(r#""sideways""#).unwrap();
        assert_eq!(v, VerticalAlignment::Undefined);
    }
}
