//! Cue loading and activation.
//!
//! ## Cascade Algorithm
//!
//! 1. Find every cue whose scope labels are a subset of the activation's
//!    labels (`*` always matches)
//! 2. Sort the cues by scope specificity, then by first appearance
//! 3. Within each cue, sort settings by device-selector specificity, then
//!    source order
//! 4. Apply the settings in that order
//!
//! Devices can belong to several groups, so there is no per-device computed
//! style. Applying everything in ascending precedence leaves each device with
//! the value of its most specific setting for every property, and because the
//! whole pass is synchronous no intermediate value is ever observed.

use std::sync::Arc;

use cuesheet::{RuleSet, Selector, Specificity, parse_stylesheet};
use log::{debug, trace};

use crate::cue::{Cue, CueStore, Setting, parse_scope};
use crate::error::Result;
use crate::registry::Registry;
use crate::target::Target;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineOptions {
    /// Re-apply the current activation after every load.
    pub reapply_on_load: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            reapply_on_load: true,
        }
    }
}

impl EngineOptions {
    pub fn reapply_on_load(mut self, reapply: bool) -> Self {
        self.reapply_on_load = reapply;
        self
    }
}

/// How much of the cue sheet an activation applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Activation {
    /// Number of matching cues.
    pub cues: usize,
    /// Number of settings applied across those cues.
    pub settings: usize,
}

/// A matched cue with its precedence.
#[derive(Debug)]
struct MatchedCue<'a> {
    specificity: Specificity,
    source_order: usize,
    cue: &'a Cue,
}

#[derive(Clone, Debug)]
struct CurrentCue {
    selector: String,
    scope: Selector,
}

/// Applies cue sheets to the devices of a [`Registry`].
#[derive(Debug)]
pub struct Engine {
    registry: Registry,
    cues: Arc<CueStore>,
    current: Option<CurrentCue>,
    options: EngineOptions,
}

impl Engine {
    pub fn new(registry: Registry) -> Self {
        Self::with_options(registry, EngineOptions::default())
    }

    pub fn with_options(registry: Registry, options: EngineOptions) -> Self {
        Self {
            registry,
            cues: Arc::default(),
            current: None,
            options,
        }
    }

    /// Creates an engine and loads `css` unless it is blank.
    pub fn with_css(registry: Registry, css: &str) -> Result<Self> {
        let mut engine = Self::new(registry);
        if !css.trim().is_empty() {
            engine.load_css(css)?;
        }
        Ok(engine)
    }

    /// Parses `css` and loads its rules. On a syntax error the previously
    /// loaded cues stay in place.
    pub fn load_css(&mut self, css: &str) -> Result<Option<Activation>> {
        let rules = parse_stylesheet(css)?;
        Ok(self.load_rules(&rules))
    }

    /// Replaces the cue store with one built from `rules`.
    ///
    /// Returns the re-applied current activation, if there is one (and
    /// [`EngineOptions::reapply_on_load`] is set).
    pub fn load_rules(&mut self, rules: &[RuleSet]) -> Option<Activation> {
        let store = CueStore::build(&self.registry, rules);
        debug!("loaded {} rules into {} cues", rules.len(), store.len());
        self.cues = Arc::new(store);

        if !self.options.reapply_on_load {
            return None;
        }
        self.current.as_ref().map(|current| self.cascade(&current.scope))
    }

    /// Activates the cue selected by `selector` (e.g. `.test1.cue1`) and
    /// makes it current.
    ///
    /// Fails with [`CueError::SelectorSyntax`] unless `selector` is `*` or a
    /// chain of label terms; the current activation is left unchanged in
    /// that case. Matching no cues is not an error.
    ///
    /// [`CueError::SelectorSyntax`]: crate::CueError::SelectorSyntax
    pub fn activate(&mut self, selector: &str) -> Result<Activation> {
        let scope = parse_scope(selector)?;
        let applied = self.cascade(&scope);
        debug!(
            "activated {selector:?}: {} cues, {} settings",
            applied.cues, applied.settings
        );

        self.current = Some(CurrentCue {
            selector: selector.to_string(),
            scope,
        });
        Ok(applied)
    }

    /// The selector of the current activation.
    pub fn current(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.selector.as_str())
    }

    pub fn cues(&self) -> &CueStore {
        &self.cues
    }

    /// A shared handle on the loaded store; it stays valid across reloads.
    pub fn cue_store(&self) -> Arc<CueStore> {
        Arc::clone(&self.cues)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn into_registry(self) -> Registry {
        self.registry
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    fn cascade(&self, activation: &Selector) -> Activation {
        let mut matched: Vec<MatchedCue<'_>> = self
            .cues
            .iter()
            .enumerate()
            .filter(|(_, cue)| cue.matches(activation))
            .map(|(source_order, cue)| MatchedCue {
                specificity: cue.specificity(),
                source_order,
                cue,
            })
            .collect();

        matched.sort_by(|a, b| {
            a.specificity
                .cmp(&b.specificity)
                .then(a.source_order.cmp(&b.source_order))
        });

        let mut applied = Activation::default();
        for matched in &matched {
            for setting in ordered_settings(matched.cue) {
                trace!(
                    "{} {} <- {:?}",
                    matched.cue.selector(),
                    setting.device_selector,
                    setting.declared_params
                );
                setting.group.apply(&setting.declared_params);
                applied.settings += 1;
            }
            applied.cues += 1;
        }

        applied
    }
}

/// The settings of `cue` by ascending device specificity, source order on
/// ties.
fn ordered_settings(cue: &Cue) -> Vec<&Setting> {
    let mut settings: Vec<(usize, &Setting)> = cue.settings().iter().enumerate().collect();
    settings.sort_by_key(|&(source_order, setting)| (setting.specificity, source_order));
    settings.into_iter().map(|(_, setting)| setting).collect()
}
