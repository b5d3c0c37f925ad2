use nom::{
    IResult,
    branch::alt,
    character::complete::{char, digit1, one_of},
    combinator::{map_res, opt, recognize},
    sequence::{pair, tuple},
};

/// Parse a signed integer or decimal number. The integer part is optional,
/// so `.2` and `-.5` are accepted.
pub fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(one_of("+-")),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit1)))),
                recognize(pair(char('.'), digit1)),
            )),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Returns the number at the start of `value`, ignoring whatever follows it
/// (`30deg` -> 30, `1.5.3` -> 1.5). `None` when the value does not start with
/// a number.
pub fn numeric_prefix(value: &str) -> Option<f64> {
    parse_number(value.trim_start()).ok().map(|(_, n)| n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_leaves_suffix() {
        assert_eq!(parse_number("30deg"), Ok(("deg", 30.0)));
        assert_eq!(parse_number("-1.25%"), Ok(("%", -1.25)));
    }

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(numeric_prefix(".2"), Some(0.2));
        assert_eq!(numeric_prefix("+4"), Some(4.0));
        assert_eq!(numeric_prefix("5."), Some(5.0));
        assert_eq!(numeric_prefix("1.5.3"), Some(1.5));
        assert_eq!(numeric_prefix("magenta"), None);
        assert_eq!(numeric_prefix("-"), None);
        assert_eq!(numeric_prefix("."), None);
        assert_eq!(numeric_prefix("#ff0000"), None);
    }
}
