//! The cue store: parsed rules grouped by activation scope.
//!
//! Every selector in a rule has one or two levels. One-level selectors
//! (`.spot`) describe show-wide defaults and land in the `*` cue. Two-level
//! selectors (`.test1 .spot`) name the cue scope first and the device
//! selector second.

use std::collections::HashMap;

use cuesheet::{RuleSet, Selector, Specificity};
use log::{debug, warn};

use crate::error::{CueError, Result};
use crate::params::{Params, declared_params};
use crate::registry::Registry;
use crate::target::Selection;

/// One rule selector resolved against the registry.
#[derive(Clone, Debug)]
pub struct Setting {
    pub group: Selection,
    /// Source text of the device selector.
    pub device_selector: String,
    pub specificity: Specificity,
    pub declared_params: Params,
}

/// The settings declared for one activation scope, in source order.
#[derive(Clone, Debug)]
pub struct Cue {
    selector: String,
    scope: Selector,
    settings: Vec<Setting>,
}

impl Cue {
    fn new(selector: &str, scope: Selector) -> Self {
        Self {
            selector: selector.to_string(),
            scope,
            settings: Vec::new(),
        }
    }

    /// The scope selector as written, e.g. `*` or `.test1.cue1`.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn scope(&self) -> &Selector {
        &self.scope
    }

    pub fn specificity(&self) -> Specificity {
        self.scope.specificity()
    }

    pub fn settings(&self) -> &[Setting] {
        &self.settings
    }

    /// A cue applies when every one of its labels is also a label of the
    /// activation selector. The `*` cue applies to every activation.
    pub fn matches(&self, activation: &Selector) -> bool {
        let active = activation.labels();
        self.scope.labels().iter().all(|label| active.contains(label))
    }
}

/// All cues of a loaded cue sheet, in order of first appearance.
///
/// A store is immutable once built; loading new rules builds a new store.
#[derive(Clone, Debug, Default)]
pub struct CueStore {
    cues: Vec<Cue>,
    index: HashMap<String, usize>,
}

impl CueStore {
    /// Builds the store for `rules`, resolving each device selector against
    /// `registry` once.
    ///
    /// Selectors with unsupported syntax are logged and skipped; selectors
    /// that match no devices are dropped silently. Neither aborts the build.
    pub fn build(registry: &Registry, rules: &[RuleSet]) -> Self {
        let mut store = CueStore::default();
        let mut resolved: HashMap<&str, Selection> = HashMap::new();

        for rule in rules {
            let params = declared_params(&rule.declarations);

            for text in &rule.selectors {
                let (scope_text, device_text) = split_scope(text);

                let (scope, device) = match (parse_scope(scope_text), parse_device(device_text)) {
                    (Ok(scope), Ok(device)) => (scope, device),
                    (Err(err), _) | (_, Err(err)) => {
                        warn!("skipping selector {text:?}: {err}");
                        continue;
                    }
                };

                let group = resolved
                    .entry(device_text)
                    .or_insert_with(|| registry.resolve(&device))
                    .clone();

                if group.is_empty() {
                    debug!("selector {text:?} matches no devices");
                    continue;
                }

                store.entry(scope_text, scope).settings.push(Setting {
                    group,
                    device_selector: device_text.to_string(),
                    specificity: device.specificity(),
                    declared_params: params.clone(),
                });
            }
        }

        store
    }

    pub fn get(&self, selector: &str) -> Option<&Cue> {
        self.index.get(selector).map(|&i| &self.cues[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cue> {
        self.cues.iter()
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    fn entry(&mut self, selector: &str, scope: Selector) -> &mut Cue {
        let index = match self.index.get(selector) {
            Some(&index) => index,
            None => {
                let index = self.cues.len();
                self.cues.push(Cue::new(selector, scope));
                self.index.insert(selector.to_string(), index);
                index
            }
        };
        &mut self.cues[index]
    }
}

impl<'a> IntoIterator for &'a CueStore {
    type Item = &'a Cue;
    type IntoIter = std::slice::Iter<'a, Cue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Splits a rule selector on its first whitespace run into
/// `(scope, device)`. One-level selectors get the `*` scope.
pub fn split_scope(selector: &str) -> (&str, &str) {
    let selector = selector.trim();
    match selector.split_once(char::is_whitespace) {
        Some((scope, device)) => (scope, device.trim_start()),
        None => ("*", selector),
    }
}

/// Parses a cue scope or activation selector: `*` or one or more labels.
pub(crate) fn parse_scope(text: &str) -> Result<Selector> {
    match Selector::parse(text) {
        Ok(scope @ (Selector::Universal | Selector::Labels(_))) => Ok(scope),
        _ => Err(CueError::SelectorSyntax(text.to_string())),
    }
}

fn parse_device(text: &str) -> Result<Selector> {
    Selector::parse(text).map_err(|_| CueError::SelectorSyntax(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_scope() {
        assert_eq!(split_scope(".spot"), ("*", ".spot"));
        assert_eq!(split_scope(".test1 .spot"), (".test1", ".spot"));
        assert_eq!(split_scope(" .test1 \t  #d1 "), (".test1", "#d1"));
        assert_eq!(split_scope(".a .b .c"), (".a", ".b .c"));
    }

    #[test]
    fn test_parse_scope_rejects_ids() {
        assert!(parse_scope("*").is_ok());
        assert!(parse_scope(".test1.cue1").is_ok());
        assert_eq!(
            parse_scope("#d1"),
            Err(CueError::SelectorSyntax("#d1".to_string()))
        );
    }

    #[test]
    fn test_cue_matches_label_subset() {
        let cue = Cue::new(".test1", Selector::parse(".test1").unwrap());

        assert!(cue.matches(&Selector::parse(".test1").unwrap()));
        assert!(cue.matches(&Selector::parse(".cue1.test1").unwrap()));
        assert!(!cue.matches(&Selector::parse(".test2").unwrap()));
        assert!(!cue.matches(&Selector::Universal));
    }

    #[test]
    fn test_universal_cue_matches_everything() {
        let cue = Cue::new("*", Selector::Universal);

        assert!(cue.matches(&Selector::Universal));
        assert!(cue.matches(&Selector::parse(".anything").unwrap()));
    }
}
