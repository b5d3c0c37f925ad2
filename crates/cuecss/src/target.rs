//! The device capability used by the cascade, plus groups and selections.
//!
//! The cascade never looks inside a device. It only calls
//! [`Target::apply`] with the merged parameters of a setting. Single devices,
//! [`TargetGroup`]s and registry [`Selection`]s all implement the same trait,
//! so callers never branch on what a selector returned.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::params::{ParamValue, Params};

/// Something that can receive parameter assignments.
///
/// Devices are shared between every group that selects them, so `apply`
/// takes `&self`; implementations use interior mutability.
pub trait Target: Send + Sync {
    fn apply(&self, params: &Params);
}

/// An ordered collection of devices addressed as one unit.
///
/// Groups never own their members exclusively; the same device may appear
/// in any number of groups.
#[derive(Clone, Default)]
pub struct TargetGroup {
    members: Vec<Arc<dyn Target>>,
}

impl TargetGroup {
    pub fn new(members: Vec<Arc<dyn Target>>) -> Self {
        Self { members }
    }

    /// A new group with the same members as `other`.
    pub fn from_group(other: &TargetGroup) -> Self {
        other.clone()
    }

    pub fn members(&self) -> &[Arc<dyn Target>] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `target` is a member of this group, by identity.
    pub fn contains(&self, target: &Arc<dyn Target>) -> bool {
        self.members.iter().any(|m| same_target(m, target))
    }
}

impl Target for TargetGroup {
    fn apply(&self, params: &Params) {
        for member in &self.members {
            member.apply(params);
        }
    }
}

impl FromIterator<Arc<dyn Target>> for TargetGroup {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Target>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for TargetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetGroup")
            .field("len", &self.members.len())
            .finish()
    }
}

/// The result of a registry selection.
///
/// `#id` selectors yield [`Selection::Target`] (or [`Selection::None`] when
/// no device has that id); `*` and label selectors always yield a
/// [`Selection::Group`], possibly empty.
#[derive(Clone, Default)]
pub enum Selection {
    #[default]
    None,
    Target(Arc<dyn Target>),
    Group(TargetGroup),
}

impl Selection {
    /// True when the selection matched no devices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        match self {
            Selection::None => 0,
            Selection::Target(_) => 1,
            Selection::Group(group) => group.len(),
        }
    }

    pub fn into_group(self) -> TargetGroup {
        match self {
            Selection::None => TargetGroup::default(),
            Selection::Target(target) => TargetGroup::new(vec![target]),
            Selection::Group(group) => group,
        }
    }
}

impl Target for Selection {
    fn apply(&self, params: &Params) {
        match self {
            Selection::None => {}
            Selection::Target(target) => target.apply(params),
            Selection::Group(group) => group.apply(params),
        }
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::None => f.write_str("None"),
            Selection::Target(_) => f.write_str("Target"),
            Selection::Group(group) => f.debug_tuple("Group").field(group).finish(),
        }
    }
}

// Compares data pointers only; vtable pointers for the same type may differ
// between codegen units.
fn same_target(a: &Arc<dyn Target>, b: &Arc<dyn Target>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// A device that keeps the merged parameters it has received.
///
/// Useful as a virtual fixture, for previews, and in tests. Each `apply`
/// merges into the stored map, overwriting properties it declares and
/// keeping the rest.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    params: Mutex<Params>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current value of `property`, if any setting has assigned it.
    pub fn get(&self, property: &str) -> Option<ParamValue> {
        self.lock().get(property).cloned()
    }

    /// A copy of every parameter assigned so far.
    pub fn snapshot(&self) -> Params {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Params> {
        self.params.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Target for MemoryTarget {
    fn apply(&self, params: &Params) {
        let mut stored = self.lock();
        for (property, value) in params {
            stored.insert(property.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, ParamValue)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_memory_target_merges() {
        let target = MemoryTarget::new();
        target.apply(&params(&[("pan", ParamValue::Number(0.0)), ("color", "white".into())]));
        target.apply(&params(&[("color", "red".into())]));

        assert_eq!(target.get("pan"), Some(ParamValue::Number(0.0)));
        assert_eq!(target.get("color"), Some(ParamValue::from("red")));
        assert_eq!(target.get("tilt"), None);
    }

    #[test]
    fn test_group_applies_to_every_member() {
        let a = Arc::new(MemoryTarget::new());
        let b = Arc::new(MemoryTarget::new());
        let group = TargetGroup::new(vec![a.clone() as Arc<dyn Target>, b.clone()]);

        group.apply(&params(&[("dimmer", ParamValue::Number(1.0))]));

        assert_eq!(a.get("dimmer"), Some(ParamValue::Number(1.0)));
        assert_eq!(b.get("dimmer"), Some(ParamValue::Number(1.0)));
    }

    #[test]
    fn test_group_from_group_shares_members() {
        let a: Arc<dyn Target> = Arc::new(MemoryTarget::new());
        let group = TargetGroup::new(vec![a.clone()]);
        let copy = TargetGroup::from_group(&group);

        assert_eq!(copy.len(), 1);
        assert!(copy.contains(&a));
    }

    #[test]
    fn test_selection_into_group() {
        let a: Arc<dyn Target> = Arc::new(MemoryTarget::new());

        assert!(Selection::None.into_group().is_empty());
        assert!(Selection::Target(a.clone()).into_group().contains(&a));
        assert_eq!(Selection::Target(a).len(), 1);
        assert!(Selection::default().is_empty());
    }
}
