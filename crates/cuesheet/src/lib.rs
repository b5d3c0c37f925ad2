//! # cuesheet - Cue stylesheet parser
//!
//! Parses the stylesheet dialect used to author lighting cues. A cue sheet is a
//! list of rules, each with one or more selectors and a block of
//! `property: value` declarations:
//!
//! ```rust
//! use cuesheet::parse_stylesheet;
//!
//! let source = r#"
//!     /* defaults for the whole show */
//!     * { pan: 0; tilt: 0; }
//!
//!     .spot { color: magenta; }
//!     .test1 .spot, .test2 .spot { color: red; }
//! "#;
//!
//! let rules = parse_stylesheet(source).expect("valid cue sheet");
//! assert_eq!(rules.len(), 3);
//! assert_eq!(rules[2].selectors, vec![".test1 .spot", ".test2 .spot"]);
//! ```
//!
//! The parser keeps selectors as normalized source text and declaration values
//! as raw strings. Interpreting them is left to the cascade engine, which uses
//! [`Selector::parse`] for the compound-selector grammar and
//! [`parser::units::numeric_prefix`] for numeric coercion.
//!
//! ## Supported Selector Grammar
//!
//! - Universal selector: `*`
//! - ID selectors: `#front-left`
//! - Class (label) selectors, compounded: `.spot`, `.spot.left`
//! - One descendant level for cue scopes: `.test1 .spot`
//!
//! ## Modules
//!
//! - [`parser`]: rule-text parsing and data structures
//! - [`error`]: error types for parsing failures

pub mod error;
pub mod parser;

pub use error::SheetError;
pub use parser::{Declaration, RuleSet, Selector, Specificity, parse_stylesheet};

pub type Result<T> = std::result::Result<T, SheetError>;
