//! Cue sheet parsing and data structures.
//!
//! This module provides the parsing functionality for cue sheets:
//!
//! - [`parse_stylesheet`]: Main entry point for parsing rule text
//! - [`RuleSet`]: A rule with its selector strings and declarations
//! - [`Declaration`]: A raw property-value pair like `tilt: 30deg`
//! - [`Selector`]: The compound selector grammar (`*`, `#id`, `.a.b`)
//!
//! ## Submodules
//!
//! - [`comments`]: Comment stripping ahead of parsing
//! - [`selectors`]: Selector and identifier parsing
//! - [`stylesheet`]: Core data structures for rules and declarations
//! - [`units`]: Numeric prefix scanning for value coercion
//!
//! ## Example
//!
//! ```rust
//! use cuesheet::parser::{parse_stylesheet, Declaration};
//!
//! let rules = parse_stylesheet(".wash { dimmer: .5; }").unwrap();
//! assert_eq!(rules[0].selectors, vec![".wash"]);
//! assert_eq!(rules[0].declarations[0], Declaration::new("dimmer", ".5"));
//! ```

pub mod comments;
pub mod selectors;
pub mod stylesheet;
pub mod units;

pub use crate::parser::comments::strip_comments;
pub use crate::parser::stylesheet::{Declaration, RuleSet, Selector, Specificity};

use crate::SheetError;
use crate::parser::selectors::parse_ident;

use nom::{
    IResult,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::{map, opt, verify},
    multi::{many0, separated_list1},
    sequence::{delimited, preceded, tuple},
};

/// Parses a full cue sheet into its rules, in source order.
pub fn parse_stylesheet(source: &str) -> Result<Vec<RuleSet>, SheetError> {
    let clean_source = strip_comments(source);

    let (remaining, rules) =
        many0(parse_rule)(&clean_source).map_err(|e| SheetError::InvalidSyntax(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(SheetError::InvalidSyntax(format!(
            "Unexpected tokens at end of stylesheet: {}",
            remaining.trim()
        )));
    }

    Ok(rules)
}

/// Top-level parser for a rule (e.g., ".test1 .spot { color: red; }").
pub fn parse_rule(input: &str) -> IResult<&str, RuleSet> {
    let (input, _) = multispace0(input)?;
    let (input, selectors) = parse_selector_list(input)?;

    let (input, declarations) = delimited(
        char('{'),
        parse_declarations,
        preceded(multispace0, char('}')),
    )(input)?;

    Ok((input, RuleSet::new(selectors, declarations)))
}

/// Parses a comma-separated list of selectors (e.g., ".spot, .wash").
///
/// Each selector is returned as trimmed source text with whitespace runs
/// collapsed to a single space, so `.test1   .spot` becomes `.test1 .spot`.
pub fn parse_selector_list(input: &str) -> IResult<&str, Vec<String>> {
    separated_list1(
        char(','),
        map(
            verify(
                take_while1(|c: char| !matches!(c, ',' | '{' | '}' | ';')),
                |s: &str| !s.trim().is_empty(),
            ),
            normalize_selector,
        ),
    )(input)
}

/// Parses multiple declarations inside a block.
pub fn parse_declarations(input: &str) -> IResult<&str, Vec<Declaration>> {
    many0(parse_single_declaration)(input)
}

fn parse_single_declaration(input: &str) -> IResult<&str, Declaration> {
    let (input, _) = multispace0(input)?;
    let (input, property) = parse_ident(input)?;
    let (input, _) = tuple((multispace0, char(':'), multispace0))(input)?;

    let (input, value) = verify(
        map(take_while1(|c: char| c != ';' && c != '}'), clean_value),
        |v: &str| !v.is_empty(),
    )(input)?;

    let (input, _) = multispace0(input)?;
    let (input, _) = opt(char(';'))(input)?;
    Ok((input, Declaration::new(property, value)))
}

/// Trims a raw value and drops a trailing `!important`, which has no meaning
/// for cues.
fn clean_value(raw: &str) -> &str {
    let value = raw.trim();
    value.strip_suffix("!important").map_or(value, str::trim_end)
}

fn normalize_selector(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
