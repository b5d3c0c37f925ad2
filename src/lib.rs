//! Stylesheet-driven cues for groups of addressable devices.
//!
//! This crate bundles the [`cuesheet`] parser and the [`cuecss`] cascade
//! engine behind one dependency, and adds a file logger for hosts that have
//! no logging setup of their own.

pub mod error;
pub mod log_init;

pub use cuecss::{
    Activation, Cue, CueError, CueStore, Declaration, DuplicateIdPolicy, Engine, EngineOptions,
    MemoryTarget, ParamValue, Params, Registry, RegistryOptions, RuleSet, Selection, Selector,
    Setting, Specificity, Target, TargetGroup,
};
pub use cuesheet::{SheetError, parse_stylesheet};
pub use error::{CueCssError, Result};
pub use log_init::init_logger;
