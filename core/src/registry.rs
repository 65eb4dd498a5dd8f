//! Expression-parameter registry.
//!
//! An ordered list of avatar parameters, replaceable wholesale. The tool
//! only ever appends to it: `upsert` never overwrites an existing entry, so
//! re-running a compile leaves pre-existing parameters untouched.

use serde::{Deserialize, Serialize};
use wardrobe_types::Parameter;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterRegistry {
    parameters: Vec<Parameter>,
}

impl ParameterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parameters(parameters: Vec<Parameter>) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Parameters whose names start with `prefix`, in registry order.
    pub fn filter_by_prefix(&self, prefix: &str) -> Vec<&Parameter> {
        self.parameters
            .iter()
            .filter(|p| p.name.starts_with(prefix))
            .collect()
    }

    /// Parameters whose names do not start with `prefix`, in registry order.
    pub fn excluding_prefix(&self, prefix: &str) -> Vec<&Parameter> {
        self.parameters
            .iter()
            .filter(|p| !p.name.starts_with(prefix))
            .collect()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn find(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Append `parameter` unless one with the same name exists.
    ///
    /// Returns `true` when the parameter was inserted. Existing parameters
    /// are never mutated in place.
    pub fn upsert(&mut self, parameter: Parameter) -> bool {
        if self.exists(&parameter.name) {
            return false;
        }
        self.parameters.push(parameter);
        true
    }

    /// Replace the whole list (the host store is assigned wholesale).
    pub fn replace_all(&mut self, parameters: Vec<Parameter>) {
        self.parameters = parameters;
    }

    pub fn retain(&mut self, keep: impl FnMut(&Parameter) -> bool) {
        self.parameters.retain(keep);
    }
}
