//! State machines, states, transitions and parameter-drive actions.

use serde::{Deserialize, Serialize};
use wardrobe_types::wire;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateMachine {
    pub states: Vec<State>,
}

impl StateMachine {
    /// Append a new state and return it for population.
    pub fn add_state(&mut self, name: impl Into<String>) -> &mut State {
        self.states.push(State {
            name: name.into(),
            motion: None,
            write_defaults: true,
            actions: Vec::new(),
            transitions: Vec::new(),
        });
        self.states.last_mut().unwrap()
    }

    pub fn find_state(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|s| s.name == name)
    }

    pub fn state_mut(&mut self, name: &str) -> Option<&mut State> {
        self.states.iter_mut().find(|s| s.name == name)
    }
}

/// One state in a layer's machine.
///
/// `actions` is the typed replacement for the host's behaviour list: every
/// action the state performs on entry is an explicit [`DriveAction`] variant,
/// never an index-cast host object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub name: String,
    /// Asset path of the motion played in this state, if any.
    pub motion: Option<String>,
    pub write_defaults: bool,
    pub actions: Vec<DriveAction>,
    /// Outgoing transitions, in evaluation order.
    pub transitions: Vec<Transition>,
}

impl State {
    /// Append a transition to the named target state.
    ///
    /// Fields start at the host defaults (blended, exit-time driven); the
    /// compiler overrides them for instantaneous switching.
    pub fn add_transition(&mut self, target: impl Into<String>) -> &mut Transition {
        self.transitions.push(Transition {
            target: target.into(),
            duration: 0.25,
            exit_time: 1.0,
            has_exit_time: true,
            conditions: Vec::new(),
        });
        self.transitions.last_mut().unwrap()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub target: String,
    pub duration: f32,
    pub exit_time: f32,
    pub has_exit_time: bool,
    pub conditions: Vec<Condition>,
}

impl Transition {
    pub fn add_condition(&mut self, mode: ConditionMode, threshold: f32, parameter: &str) {
        self.conditions.push(Condition {
            mode,
            threshold,
            parameter: parameter.to_string(),
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionMode {
    If,
    IfNot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub mode: ConditionMode,
    pub threshold: f32,
    pub parameter: String,
}

/// One entry-time action on a state, tagged by kind.
///
/// `Set` values use the artifact wire convention (`1.0 = true`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DriveAction {
    Set { parameter: String, value: f32 },
}

impl DriveAction {
    /// A `Set` action encoding a model bool.
    pub fn set_bool(parameter: impl Into<String>, value: bool) -> Self {
        Self::Set {
            parameter: parameter.into(),
            value: wire::to_wire(value),
        }
    }
}

/// Wire the standard instantaneous boolean switch between two states.
///
/// `active -> inactive` fires when `parameter` is false, `inactive -> active`
/// when it is true. Both edges are zero-duration with exit time disabled, so
/// switching is immediate and cannot race an exit-time window.
pub fn wire_boolean_switch(
    machine: &mut StateMachine,
    active: &str,
    inactive: &str,
    parameter: &str,
) {
    if let Some(state) = machine.state_mut(active) {
        let transition = state.add_transition(inactive);
        transition.duration = 0.0;
        transition.exit_time = 0.0;
        transition.has_exit_time = false;
        transition.add_condition(ConditionMode::IfNot, 0.0, parameter);
    }

    if let Some(state) = machine.state_mut(inactive) {
        let transition = state.add_transition(active);
        transition.duration = 0.0;
        transition.exit_time = 0.0;
        transition.has_exit_time = false;
        transition.add_condition(ConditionMode::If, 0.0, parameter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_switch_wiring() {
        let mut machine = StateMachine::default();
        machine.add_state("Hat_On");
        machine.add_state("Hat_Off");
        wire_boolean_switch(&mut machine, "Hat_On", "Hat_Off", "Wardrobe/Hat");

        let on = machine.find_state("Hat_On").unwrap();
        assert_eq!(on.transitions.len(), 1);
        let t = &on.transitions[0];
        assert_eq!(t.target, "Hat_Off");
        assert_eq!(t.duration, 0.0);
        assert!(!t.has_exit_time);
        assert_eq!(t.conditions[0].mode, ConditionMode::IfNot);
        assert_eq!(t.conditions[0].parameter, "Wardrobe/Hat");

        let off = machine.find_state("Hat_Off").unwrap();
        assert_eq!(off.transitions[0].target, "Hat_On");
        assert_eq!(off.transitions[0].conditions[0].mode, ConditionMode::If);
    }

    #[test]
    fn set_bool_uses_wire_encoding() {
        let DriveAction::Set { value, .. } = DriveAction::set_bool("Wardrobe/Hat", true);
        assert_eq!(value, 1.0);
    }
}
