use std::fmt;
use std::str::FromStr;

use nom::combinator::all_consuming;

use crate::SheetError;
use crate::parser::selectors::parse_selector;

/// Selector specificity for determining cue and setting precedence.
///
/// Only label (class) terms count. `*` and `#id` selectors both have zero
/// specificity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity {
    pub labels: u32,
}

/// A compound selector: `*`, a single `#id`, or one or more `.label` terms.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    Universal,
    Id(String),
    Labels(Vec<String>),
}

impl Selector {
    /// Parses a complete selector. Surrounding whitespace is ignored; any
    /// other syntax is an [`SheetError::UnsupportedSelector`].
    pub fn parse(input: &str) -> Result<Self, SheetError> {
        all_consuming(parse_selector)(input.trim())
            .map(|(_, selector)| selector)
            .map_err(|_| SheetError::UnsupportedSelector(input.to_string()))
    }

    pub fn specificity(&self) -> Specificity {
        Specificity {
            labels: self.labels().len() as u32,
        }
    }

    /// The label terms of this selector, empty for `*` and `#id`.
    pub fn labels(&self) -> &[String] {
        match self {
            Selector::Labels(labels) => labels,
            Selector::Universal | Selector::Id(_) => &[],
        }
    }
}

impl FromStr for Selector {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Universal => f.write_str("*"),
            Selector::Id(id) => write!(f, "#{id}"),
            Selector::Labels(labels) => {
                for label in labels {
                    write!(f, ".{label}")?;
                }
                Ok(())
            }
        }
    }
}

/// A raw `property: value` pair. Values are kept verbatim (trimmed).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// A parsed rule: its selector strings and its declarations, both in source
/// order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    pub selectors: Vec<String>,
    pub declarations: Vec<Declaration>,
}

impl RuleSet {
    pub fn new(selectors: Vec<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selectors,
            declarations,
        }
    }
}
