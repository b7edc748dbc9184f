//! Context handed to every solver call.

use std::collections::BTreeMap;

use geneve_core::Value;
use rand::RngCore;

/// Record-wide information available to solvers.
///
/// The core solvers never look inside; it is carried for solvers of other
/// field types that need to know about the rest of the record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    entries: BTreeMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Randomness source and environment for one solver call.
pub struct SolveContext<'a> {
    pub rng: &'a mut dyn RngCore,
    pub environment: &'a Environment,
}

impl<'a> SolveContext<'a> {
    pub fn new(rng: &'a mut dyn RngCore, environment: &'a Environment) -> Self {
        Self { rng, environment }
    }
}
