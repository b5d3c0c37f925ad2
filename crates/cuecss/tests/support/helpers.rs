//! Shared fixtures for cascade and registry tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use cuecss::{MemoryTarget, ParamValue, Params, Registry, Target};

/// A target that records every call to `apply`.
#[derive(Default)]
pub struct SpyTarget {
    calls: Mutex<Vec<Params>>,
}

impl SpyTarget {
    pub fn calls(&self) -> Vec<Params> {
        self.calls.lock().unwrap().clone()
    }
}

impl Target for SpyTarget {
    fn apply(&self, params: &Params) {
        self.calls.lock().unwrap().push(params.clone());
    }
}

/// Builds a registry of memory targets from `(id, labels)` pairs and returns
/// the targets in the same order.
pub fn stage(devices: &[(&str, &[&str])]) -> (Registry, Vec<Arc<MemoryTarget>>) {
    let mut registry = Registry::new();
    let mut targets = Vec::new();

    for (id, labels) in devices {
        let target = Arc::new(MemoryTarget::new());
        registry.add(target.clone(), id, labels).unwrap();
        targets.push(target);
    }

    (registry, targets)
}

/// Identity comparison between a selected device and a fixture.
pub fn same(selected: &Arc<dyn Target>, fixture: &Arc<MemoryTarget>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(selected), Arc::as_ptr(fixture))
}

pub fn text(value: &str) -> Option<ParamValue> {
    Some(ParamValue::from(value))
}

pub fn number(value: f64) -> Option<ParamValue> {
    Some(ParamValue::Number(value))
}

pub fn params(pairs: &[(&str, ParamValue)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}
