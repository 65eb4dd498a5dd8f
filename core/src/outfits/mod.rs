//! Outfit model.
//!
//! An outfit is a named snapshot assignment over the toggle namespace,
//! compiled into one exclusive-selection state on the shared outfit layer.
//! Outfits never reference other outfits' parameters, and their check maps
//! are reconciled against the live registry: stale entries drop silently,
//! new toggles appear as `false`.

pub mod compile;
pub mod gather;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wardrobe_types::{Parameter, ToolNamespace, wire};

use crate::animator::{DriveAction, State};
use crate::registry::ParameterRegistry;

/// Sentinel display name for a freshly added outfit.
pub const INITIAL_OUTFIT_NAME: &str = "New Outfit";

/// Name of the auto-created all-off baseline outfit.
pub const BASELINE_OUTFIT_NAME: &str = "Nude";

/// Registry parameters an outfit snapshots: tool-owned, non-outfit.
fn toggle_parameters<'a>(
    registry: &'a ParameterRegistry,
    namespace: &'a ToolNamespace,
) -> impl Iterator<Item = &'a Parameter> {
    registry
        .iter()
        .filter(|p| namespace.owns(&p.name) && !namespace.is_outfit_param(&p.name))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    name: String,
    id: Uuid,
    checks: IndexMap<String, bool>,
}

impl Outfit {
    /// The all-off baseline, snapshotting every current toggle parameter.
    pub fn baseline(
        name: &str,
        registry: &ParameterRegistry,
        namespace: &ToolNamespace,
    ) -> Self {
        Self {
            name: name.to_string(),
            id: Uuid::new_v4(),
            checks: toggle_parameters(registry, namespace)
                .map(|p| (p.name.clone(), false))
                .collect(),
        }
    }

    /// A new outfit named positionally after the current list length.
    pub fn numbered(
        count: usize,
        registry: &ParameterRegistry,
        namespace: &ToolNamespace,
    ) -> Self {
        let mut outfit = Self::baseline(INITIAL_OUTFIT_NAME, registry, namespace);
        outfit.name = format!("{INITIAL_OUTFIT_NAME}_{count}");
        outfit
    }

    /// Rebuild an outfit from a compiled state's action list.
    ///
    /// Actions for parameters no longer in the registry are dropped;
    /// toggles created since the state was compiled are appended as `false`.
    pub fn from_state(
        state: &State,
        registry: &ParameterRegistry,
        namespace: &ToolNamespace,
    ) -> Self {
        let mut checks = IndexMap::new();

        for action in &state.actions {
            let DriveAction::Set { parameter, value } = action;
            if namespace.is_outfit_param(parameter) || !namespace.owns(parameter) {
                continue;
            }
            if !registry.exists(parameter) {
                continue; // Deprecated parameter, not used anymore
            }
            checks.insert(parameter.clone(), wire::from_wire(*value));
        }

        for parameter in toggle_parameters(registry, namespace) {
            if !checks.contains_key(&parameter.name) {
                checks.insert(parameter.name.clone(), false);
            }
        }

        Self {
            name: state.name.clone(),
            id: Uuid::new_v4(),
            checks,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Stable identity, unchanged across renames.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn checks(&self) -> &IndexMap<String, bool> {
        &self.checks
    }

    /// Flip one check. Returns `false` for parameters the outfit does not
    /// snapshot.
    pub fn set_check(&mut self, parameter: &str, value: bool) -> bool {
        match self.checks.get_mut(parameter) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Re-align the check map with the live registry.
    ///
    /// Snapshot-read then two-pass apply: first drop entries whose
    /// parameters left the registry, then append new toggle parameters as
    /// `false`. Existing values and ordering are preserved.
    pub fn reconcile(&mut self, registry: &ParameterRegistry, namespace: &ToolNamespace) {
        let stale: Vec<String> = self
            .checks
            .keys()
            .filter(|name| !registry.exists(name))
            .cloned()
            .collect();
        for name in stale {
            self.checks.shift_remove(&name);
        }

        let missing: Vec<String> = toggle_parameters(registry, namespace)
            .filter(|p| !self.checks.contains_key(&p.name))
            .map(|p| p.name.clone())
            .collect();
        for name in missing {
            self.checks.insert(name, false);
        }
    }

    pub fn parameter_name(&self, namespace: &ToolNamespace) -> String {
        namespace.outfit_param(&self.name)
    }

    /// Entry actions for the outfit's compiled state, in check order.
    pub fn drive_actions(&self) -> Vec<DriveAction> {
        self.checks
            .iter()
            .map(|(parameter, &value)| DriveAction::set_bool(parameter.clone(), value))
            .collect()
    }
}

/// The in-memory outfit list for one editing session.
#[derive(Debug, Clone, Default)]
pub struct OutfitSet {
    outfits: Vec<Outfit>,
    gathered: bool,
}

impl OutfitSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Auto-create the baseline outfit once the toggle namespace is
    /// populated and no outfits exist yet.
    pub fn ensure_baseline(&mut self, registry: &ParameterRegistry, namespace: &ToolNamespace) {
        let namespace_populated = registry
            .iter()
            .any(|p| namespace.owns(&p.name));
        if namespace_populated && self.outfits.is_empty() {
            self.outfits
                .push(Outfit::baseline(BASELINE_OUTFIT_NAME, registry, namespace));
        }
    }

    /// Append a positionally named outfit; list order is compile order.
    pub fn add(&mut self, registry: &ParameterRegistry, namespace: &ToolNamespace) -> &mut Outfit {
        let outfit = Outfit::numbered(self.outfits.len(), registry, namespace);
        self.outfits.push(outfit);
        self.outfits.last_mut().unwrap()
    }

    pub fn extend(&mut self, outfits: Vec<Outfit>) {
        self.outfits.extend(outfits);
    }

    pub fn outfits(&self) -> &[Outfit] {
        &self.outfits
    }

    pub fn outfit_mut(&mut self, index: usize) -> Option<&mut Outfit> {
        self.outfits.get_mut(index)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Outfit> {
        self.outfits.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.outfits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outfits.is_empty()
    }

    /// Drop the in-memory list only. The compiled outfit layer and its
    /// parameters stay until the next apply rebuilds them; this asymmetry
    /// with toggle clearing is intentional.
    pub fn clear_list(&mut self) {
        self.outfits.clear();
    }

    pub fn is_gathered(&self) -> bool {
        self.gathered
    }

    pub fn mark_gathered(&mut self) {
        self.gathered = true;
    }

    pub fn reset_gathered(&mut self) {
        self.gathered = false;
    }
}
