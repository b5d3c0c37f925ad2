//! Error types for registry selection, loading and activation.

use cuesheet::SheetError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CueError {
    /// A selector uses grammar other than `*`, one `#id` term, or one or
    /// more `.label` terms.
    #[error("unsupported selector syntax: {0:?}")]
    SelectorSyntax(String),

    /// A device id was registered twice under [`DuplicateIdPolicy::Reject`].
    ///
    /// [`DuplicateIdPolicy::Reject`]: crate::DuplicateIdPolicy::Reject
    #[error("device id {0:?} is already registered")]
    DuplicateId(String),

    /// The rule text could not be parsed.
    #[error(transparent)]
    Sheet(#[from] SheetError),
}

pub type Result<T> = std::result::Result<T, CueError>;
