//! Error types for cue sheet parsing.

use thiserror::Error;

/// Errors that can occur while parsing cue sheets and selectors.
///
/// # Examples
///
/// ```rust
/// use cuesheet::{parse_stylesheet, Selector, SheetError};
///
/// // Missing value after colon
/// assert!(parse_stylesheet(".spot { color: }").is_err());
///
/// let err = Selector::parse("Button:hover").unwrap_err();
/// assert!(matches!(err, SheetError::UnsupportedSelector(_)));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SheetError {
    /// Invalid rule syntax was encountered during parsing.
    ///
    /// The string contains details about what was unexpected and where.
    #[error("cue sheet syntax error: {0}")]
    InvalidSyntax(String),

    /// A selector uses grammar outside of `*`, `#id` and `.label` terms.
    #[error("unsupported selector: {0:?}")]
    UnsupportedSelector(String),
}
