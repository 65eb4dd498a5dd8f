//! In-memory animator-controller model.
//!
//! Mirrors the host graph store surface the compiler targets: named layers
//! holding state machines, plus the controller's own parameter list. Layers
//! are located by name so tool-owned regions can be removed and rebuilt
//! without disturbing externally authored layers.

pub mod machine;

pub use machine::{
    Condition, ConditionMode, DriveAction, State, StateMachine, Transition, wire_boolean_switch,
};

use serde::{Deserialize, Serialize};

/// Value type of an animator-controller parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimatorParameterKind {
    Bool,
    Int,
    Float,
    Trigger,
}

/// One parameter on the controller itself (distinct from the avatar's
/// expression-parameter registry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimatorParameter {
    pub name: String,
    pub kind: AnimatorParameterKind,
}

/// A named sub-graph within the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub default_weight: f32,
    pub state_machine: StateMachine,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimatorController {
    pub layers: Vec<Layer>,
    pub parameters: Vec<AnimatorParameter>,
}

impl AnimatorController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new layer and return it for population.
    ///
    /// New layers start at weight 0.0, matching the host default; the
    /// compiler raises tool-owned layers to 1.0 explicitly.
    pub fn add_layer(&mut self, name: impl Into<String>) -> &mut Layer {
        self.layers.push(Layer {
            name: name.into(),
            default_weight: 0.0,
            state_machine: StateMachine::default(),
        });
        self.layers.last_mut().unwrap()
    }

    pub fn remove_layer(&mut self, index: usize) {
        self.layers.remove(index);
    }

    pub fn find_layer(&self, name: &str) -> Option<usize> {
        self.layers.iter().position(|l| l.name == name)
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Remove a layer by name if present. Returns whether one was removed.
    pub fn remove_layer_named(&mut self, name: &str) -> bool {
        match self.find_layer(name) {
            Some(index) => {
                self.remove_layer(index);
                true
            }
            None => false,
        }
    }

    pub fn find_parameter(&self, name: &str) -> Option<usize> {
        self.parameters.iter().position(|p| p.name == name)
    }

    pub fn parameter_exists(&self, name: &str) -> bool {
        self.find_parameter(name).is_some()
    }

    pub fn add_parameter(&mut self, name: impl Into<String>, kind: AnimatorParameterKind) {
        self.parameters.push(AnimatorParameter { name: name.into(), kind });
    }

    /// Add a parameter unless one with the same name already exists.
    pub fn ensure_parameter(&mut self, name: &str, kind: AnimatorParameterKind) {
        if !self.parameter_exists(name) {
            self.add_parameter(name, kind);
        }
    }

    pub fn remove_parameter(&mut self, index: usize) {
        self.parameters.remove(index);
    }

    /// Remove a parameter by name if present. Returns whether one was removed.
    pub fn remove_parameter_named(&mut self, name: &str) -> bool {
        match self.find_parameter(name) {
            Some(index) => {
                self.remove_parameter(index);
                true
            }
            None => false,
        }
    }
}
