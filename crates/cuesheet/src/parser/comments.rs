//! Comment stripping for cue sheets.
//!
//! Both comment styles are removed before the rule parser runs:
//!
//! ```css
//! /* block comments, possibly
//!    spanning several lines */
//! .spot { color: red; } // line comments
//! ```

/// Returns `source` with block and line comments removed.
///
/// Block comments are replaced by a single space so that tokens on either
/// side stay separated. A line comment starts at `//` when it opens the line
/// or follows whitespace, and runs to the end of the line.
pub fn strip_comments(source: &str) -> String {
    let mut clean_source = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut prev: Option<char> = None;

    while let Some(c) = chars.next() {
        if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            while let Some(inner) = chars.next() {
                if inner == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    break;
                }
            }
            clean_source.push(' ');
            prev = Some(' ');
            continue;
        }

        if c == '/' && chars.peek() == Some(&'/') && prev.is_none_or(char::is_whitespace) {
            for inner in chars.by_ref() {
                if inner == '\n' {
                    clean_source.push('\n');
                    break;
                }
            }
            prev = Some('\n');
            continue;
        }

        clean_source.push(c);
        prev = Some(c);
    }

    clean_source
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_block_comment() {
        assert_eq!(strip_comments("a/* x */b"), "a b");
    }

    #[test]
    fn test_unterminated_block_comment_swallows_rest() {
        assert_eq!(strip_comments("a /* never closed"), "a  ");
    }

    #[test]
    fn test_strip_line_comment_keeps_newline() {
        assert_eq!(strip_comments("a // note\nb"), "a \nb");
    }

    #[test]
    fn test_double_slash_inside_token_is_kept() {
        assert_eq!(strip_comments("url: http://host;"), "url: http://host;");
    }
}
