use crate::parser::Selector;
use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::char,
    combinator::map,
    multi::many1,
    sequence::preceded,
};

/// Parses an identifier (alphanumeric characters, dashes, and underscores).
///
/// Identifiers are used for property names, device ids and labels.
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Parses a `.label` term.
pub fn parse_label(input: &str) -> IResult<&str, &str> {
    preceded(char('.'), parse_ident)(input)
}

/// Parses a compound selector: `*`, `#id`, or chained labels (`.spot.left`).
pub fn parse_selector(input: &str) -> IResult<&str, Selector> {
    alt((
        map(char('*'), |_| Selector::Universal),
        map(preceded(char('#'), parse_ident), |s| {
            Selector::Id(s.to_string())
        }),
        map(many1(parse_label), |labels| {
            Selector::Labels(labels.into_iter().map(str::to_string).collect())
        }),
    ))(input)
}
