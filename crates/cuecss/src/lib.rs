//! # cuecss - Stylesheet cues for addressable devices
//!
//! Drives groups of devices (typically stage lighting fixtures) from a cue
//! sheet written in a small CSS dialect. Devices are registered with an id
//! and a set of labels; rules select devices with `#id` or `.label`
//! selectors, optionally scoped to a cue (`.test1 .spot`), and activating a
//! cue cascades the matching declarations onto the devices.
//!
//! ```rust
//! use std::sync::Arc;
//! use cuecss::{Engine, MemoryTarget, ParamValue, Registry};
//!
//! let spot = Arc::new(MemoryTarget::new());
//!
//! let mut registry = Registry::new();
//! registry.add(spot.clone(), "d1", &["spot"]).unwrap();
//!
//! let mut engine = Engine::with_css(registry, r#"
//!     * { pan: 0; }
//!     .spot { color: magenta; }
//!     .test1 .spot { color: red; }
//! "#).unwrap();
//!
//! engine.activate(".test1").unwrap();
//! assert_eq!(spot.get("color"), Some(ParamValue::from("red")));
//! assert_eq!(spot.get("pan"), Some(ParamValue::Number(0.0)));
//! ```
//!
//! ## Cascade
//!
//! 1. Cues whose scope labels are all present in the activation selector match
//! 2. Matching cues apply in ascending scope specificity, then source order
//! 3. Settings inside a cue apply in ascending device-selector specificity,
//!    then source order
//!
//! Later applications overwrite earlier ones, so every device ends up holding
//! the value of its most specific matching setting.
//!
//! ## Modules
//!
//! - [`registry`]: device indexing and selection
//! - [`target`]: the [`Target`] capability, groups and selections
//! - [`params`]: parameter maps and value coercion
//! - [`cue`]: the cue store built from parsed rules
//! - [`engine`]: loading and activation
//! - [`error`]: error types

pub mod cue;
pub mod engine;
pub mod error;
pub mod params;
pub mod registry;
pub mod target;

pub use cue::{Cue, CueStore, Setting};
pub use engine::{Activation, Engine, EngineOptions};
pub use error::{CueError, Result};
pub use params::{ParamValue, Params};
pub use registry::{DuplicateIdPolicy, Registry, RegistryOptions};
pub use target::{MemoryTarget, Selection, Target, TargetGroup};

pub use cuesheet::{Declaration, RuleSet, Selector, Specificity};
