//! nom parsers for CSS-like length and edge values in configuration files.

use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit1, one_of, space1};
use nom::combinator::{map, map_res, opt, recognize};
use nom::multi::separated_list1;
use nom::{IResult, Parser};
use serde::{de, Deserialize, Deserializer};
use tabula_types::Edges;
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(one_of("+-")),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        map(tag_no_case("pt"), |_| 1.0),
        map(tag_no_case("px"), |_| 1.0),
        map(tag_no_case("in"), |_| 72.0),
        map(tag_no_case("cm"), |_| 28.35),
        map(tag_no_case("mm"), |_| 2.835),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g., "12pt", "1in", "10mm").
/// A bare number is in points.
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, (value, unit)) = (parse_f32, opt(parse_unit)).parse(input)?;
    Ok((input, value * unit.unwrap_or(1.0)))
}

/// Parses CSS shorthand edges: 1 value (all), 2 values (vertical horizontal)
/// or 4 values (top right bottom left).
pub fn parse_edges(input: &str) -> Result<Edges, StyleParseError> {
    let parsed = separated_list1(space1, parse_length).parse(input.trim());

    match parsed {
        Ok(("", parts)) => match parts.as_slice() {
            [all] => Ok(Edges::all(*all)),
            [vertical, horizontal] => Ok(Edges::new(*vertical, *horizontal, *vertical, *horizontal)),
            [top, right, bottom, left] => Ok(Edges::new(*top, *right, *bottom, *left)),
            _ => Err(StyleParseError::InvalidValue {
                property: "edges".to_string(),
                value: format!("expected 1, 2 or 4 values, got {}", parts.len()),
            }),
        },
        Ok((rest, _)) => Err(StyleParseError::Parse(format!(
            "unexpected trailing input '{}' in '{}'",
            rest, input
        ))),
        Err(e) => Err(StyleParseError::Parse(format!("invalid edges '{}': {}", input, e))),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EdgesDef {
    Shorthand(String),
    Value(Edges),
}

impl EdgesDef {
    fn resolve<E: de::Error>(self) -> Result<Edges, E> {
        match self {
            EdgesDef::Shorthand(s) => parse_edges(&s).map_err(E::custom),
            EdgesDef::Value(edges) => Ok(edges),
        }
    }
}

/// `deserialize_with` helper accepting shorthand strings as well as the
/// number/list/map forms `Edges` understands on its own.
pub fn deserialize_edges<'de, D>(deserializer: D) -> Result<Edges, D::Error>
where
    D: Deserializer<'de>,
{
    EdgesDef::deserialize(deserializer)?.resolve()
}

pub fn deserialize_optional_edges<'de, D>(deserializer: D) -> Result<Option<Edges>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<EdgesDef>::deserialize(deserializer)?
        .map(EdgesDef::resolve)
        .transpose()
}
