//! The device registry.
//!
//! Borrows the DOM idea of ids and class names to make devices selectable.
//! Every device is added with an id and a list of labels and can then be
//! selected with `*`, `#id`, or one or more `.label` terms.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use cuesheet::Selector;
use log::warn;

use crate::error::{CueError, Result};
use crate::target::{Selection, Target, TargetGroup};

/// What [`Registry::add`] does when an id is already taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicateIdPolicy {
    /// The new device takes over the id. The earlier device stays registered
    /// and selectable through `*` and its labels.
    #[default]
    LastWriteWins,
    /// The add fails with [`CueError::DuplicateId`] and nothing is registered.
    Reject,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegistryOptions {
    pub duplicate_ids: DuplicateIdPolicy,
}

impl RegistryOptions {
    pub fn duplicate_ids(mut self, policy: DuplicateIdPolicy) -> Self {
        self.duplicate_ids = policy;
        self
    }
}

/// Owns every registered device and indexes them by id and by label.
#[derive(Default)]
pub struct Registry {
    targets: Vec<Arc<dyn Target>>,
    /// Maps device ids to positions in `targets`.
    by_id: HashMap<String, usize>,
    /// Maps labels to positions in `targets`, in registration order.
    by_label: HashMap<String, Vec<usize>>,
    options: RegistryOptions,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Registers `target` under `id` and every label in `labels`.
    ///
    /// A label repeated within `labels` is indexed once. Only fails for a
    /// taken id under [`DuplicateIdPolicy::Reject`].
    pub fn add(&mut self, target: Arc<dyn Target>, id: &str, labels: &[&str]) -> Result<()> {
        if let Some(&existing) = self.by_id.get(id) {
            match self.options.duplicate_ids {
                DuplicateIdPolicy::Reject => return Err(CueError::DuplicateId(id.to_string())),
                DuplicateIdPolicy::LastWriteWins => {
                    warn!("device id {id:?} re-registered, replacing device #{existing}");
                }
            }
        }

        let index = self.targets.len();
        self.targets.push(target);
        self.by_id.insert(id.to_string(), index);

        for label in labels {
            let list = self.by_label.entry(label.to_string()).or_default();
            if !list.contains(&index) {
                list.push(index);
            }
        }

        Ok(())
    }

    /// A group containing every registered device, in registration order.
    pub fn get_all(&self) -> TargetGroup {
        TargetGroup::new(self.targets.clone())
    }

    /// The device registered under `id`.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Target>> {
        self.by_id.get(id).map(|&i| self.targets[i].clone())
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn options(&self) -> RegistryOptions {
        self.options
    }

    /// Selects devices with a selector string.
    ///
    /// - `*`: every device, in registration order
    /// - `#id`: the device with that id, or [`Selection::None`]
    /// - `.a.b`: devices carrying all of the labels, in the order of the
    ///   first label's list
    ///
    /// Any other syntax fails with [`CueError::SelectorSyntax`]. Matching
    /// nothing is not an error.
    pub fn select(&self, selector: &str) -> Result<Selection> {
        let parsed =
            Selector::parse(selector).map_err(|_| CueError::SelectorSyntax(selector.to_string()))?;
        Ok(self.resolve(&parsed))
    }

    /// Selects devices with an already parsed selector.
    pub fn resolve(&self, selector: &Selector) -> Selection {
        match selector {
            Selector::Universal => Selection::Group(self.get_all()),
            Selector::Id(id) => self.get(id).map_or(Selection::None, Selection::Target),
            Selector::Labels(labels) => Selection::Group(self.intersect(labels)),
        }
    }

    fn intersect(&self, labels: &[String]) -> TargetGroup {
        let lists: Vec<&[usize]> = labels
            .iter()
            .map(|label| self.by_label.get(label).map_or(&[][..], Vec::as_slice))
            .collect();

        let Some((first, rest)) = lists.split_first() else {
            return TargetGroup::default();
        };

        first
            .iter()
            .filter(|&&index| rest.iter().all(|list| list.contains(&index)))
            .map(|&index| self.targets[index].clone())
            .collect()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&String> = self.by_id.keys().collect();
        ids.sort();
        let mut labels: Vec<&String> = self.by_label.keys().collect();
        labels.sort();

        f.debug_struct("Registry")
            .field("len", &self.targets.len())
            .field("ids", &ids)
            .field("labels", &labels)
            .finish()
    }
}
