//! Parameter maps applied to devices.

use std::collections::BTreeMap;
use std::fmt;

use cuesheet::Declaration;
use cuesheet::parser::units::numeric_prefix;

/// Declared parameters keyed by property name.
pub type Params = BTreeMap<String, ParamValue>;

/// A declared parameter value: a number when the raw value starts with one,
/// the raw text otherwise.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl ParamValue {
    /// Coerces a raw declaration value.
    ///
    /// Any unit suffix after the leading number is dropped (`30deg` -> `30`,
    /// `.2` -> `0.2`). Values without a leading number are kept verbatim.
    /// This never fails.
    pub fn coerce(raw: &str) -> Self {
        match numeric_prefix(raw) {
            Some(n) => ParamValue::Number(n),
            None => ParamValue::Text(raw.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            ParamValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            ParamValue::Number(_) => None,
        }
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        ParamValue::Number(n)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(n) => write!(f, "{n}"),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

/// Builds the parameter map for a rule. A property declared twice keeps the
/// later value.
pub fn declared_params(declarations: &[Declaration]) -> Params {
    declarations
        .iter()
        .map(|d| (d.property.clone(), ParamValue::coerce(&d.value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_strips_unit_suffix() {
        assert_eq!(ParamValue::coerce("30deg"), ParamValue::Number(30.0));
        assert_eq!(ParamValue::coerce("50%"), ParamValue::Number(50.0));
    }

    #[test]
    fn test_coerce_fraction_without_integer_part() {
        assert_eq!(ParamValue::coerce(".2"), ParamValue::Number(0.2));
        assert_eq!(ParamValue::coerce("-.5"), ParamValue::Number(-0.5));
    }

    #[test]
    fn test_coerce_keeps_text_verbatim() {
        assert_eq!(ParamValue::coerce("magenta"), ParamValue::from("magenta"));
        assert_eq!(ParamValue::coerce("#ff00ff"), ParamValue::from("#ff00ff"));
        assert_eq!(ParamValue::coerce("-"), ParamValue::from("-"));
    }

    #[test]
    fn test_declared_params_later_duplicate_wins() {
        let params = declared_params(&[
            Declaration::new("color", "red"),
            Declaration::new("dimmer", "1"),
            Declaration::new("color", "blue"),
        ]);

        assert_eq!(params.len(), 2);
        assert_eq!(params["color"], ParamValue::from("blue"));
        assert_eq!(params["dimmer"], ParamValue::Number(1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(ParamValue::Number(0.5).to_string(), "0.5");
        assert_eq!(ParamValue::from("red").to_string(), "red");
    }
}
