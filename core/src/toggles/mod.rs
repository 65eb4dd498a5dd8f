//! Toggle model.
//!
//! A toggle is one boolean on/off feature over a group of scene objects,
//! compiled into a dedicated two-state layer gated by a single bool
//! parameter. `compile` emits the graph, clips and parameters; `gather`
//! reconstructs the model from a previously compiled avatar.

pub mod compile;
pub mod gather;

use serde::{Deserialize, Serialize};
use wardrobe_types::{Parameter, ToolNamespace, naming};

use crate::scene::SceneObject;

/// Sentinel display name for a freshly added toggle.
pub const INITIAL_TOGGLE_NAME: &str = "New Toggle";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toggle {
    name: String,
    sanitized: String,
    pub default_on: bool,
    /// Persist the parameter across avatar reloads.
    pub saved: bool,
    /// Objects switched by this toggle, in display order.
    pub objects: Vec<SceneObject>,
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new()
    }
}

impl Toggle {
    /// A blank toggle with the sentinel name, off by default and saved.
    pub fn new() -> Self {
        Self {
            name: INITIAL_TOGGLE_NAME.to_string(),
            sanitized: naming::sanitize(INITIAL_TOGGLE_NAME),
            default_on: false,
            saved: true,
            objects: Vec::new(),
        }
    }

    /// Rebuild a toggle from its registry parameter.
    ///
    /// Returns `None` for parameters outside the tool namespace. Affected
    /// objects are recovered separately from the clip artifacts.
    pub fn from_parameter(parameter: &Parameter, namespace: &ToolNamespace) -> Option<Self> {
        let name = namespace.strip_toggle_prefix(&parameter.name)?;
        Some(Self {
            name: name.to_string(),
            sanitized: naming::sanitize(name),
            default_on: parameter.default_on,
            saved: parameter.saved,
            objects: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the toggle, rederiving the sanitized artifact key.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.sanitized = naming::sanitize(&name);
        self.name = name;
    }

    /// Separator-free name keying the clip artifacts.
    pub fn sanitized_name(&self) -> &str {
        &self.sanitized
    }

    pub fn parameter_name(&self, namespace: &ToolNamespace) -> String {
        namespace.toggle_param(&self.name)
    }

    /// Adopt the first affected object's name while the toggle is still
    /// sentinel-named (underscores become menu separators). Returns whether
    /// a rename happened.
    pub fn adopt_object_name(&mut self) -> bool {
        if self.name != INITIAL_TOGGLE_NAME {
            return false;
        }
        let Some(first) = self.objects.first() else {
            return false;
        };
        let adopted = naming::display_name_for_object(&first.name);
        self.set_name(adopted);
        true
    }
}

/// The in-memory toggle list for one editing session.
#[derive(Debug, Clone, Default)]
pub struct ToggleSet {
    toggles: Vec<Toggle>,
    gathered: bool,
}

impl ToggleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blank toggle; list order is compile order.
    pub fn add(&mut self) -> &mut Toggle {
        self.toggles.push(Toggle::new());
        self.toggles.last_mut().unwrap()
    }

    pub fn extend(&mut self, toggles: Vec<Toggle>) {
        self.toggles.extend(toggles);
    }

    pub fn toggles(&self) -> &[Toggle] {
        &self.toggles
    }

    pub fn toggle_mut(&mut self, index: usize) -> Option<&mut Toggle> {
        self.toggles.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }

    /// Drop every toggle from the list. Graph and parameter cleanup is the
    /// caller's job (see [`compile::clear_toggles`]).
    pub fn clear_list(&mut self) {
        self.toggles.clear();
    }

    pub fn is_gathered(&self) -> bool {
        self.gathered
    }

    pub fn mark_gathered(&mut self) {
        self.gathered = true;
    }

    /// Allow a future gather to run again, e.g. after an external edit.
    pub fn reset_gathered(&mut self) {
        self.gathered = false;
    }
}
