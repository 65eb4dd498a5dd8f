//! Editing session for one selected avatar.
//!
//! The session owns the avatar snapshot (controller, registry, menu, scene),
//! the clip store, and the in-memory toggle/outfit lists. It is rebuilt
//! wholesale whenever the avatar selection changes; everything inside is
//! single-threaded and mutates only in response to discrete operations.

use serde::{Deserialize, Serialize};
use wardrobe_types::ToolNamespace;

use crate::animator::AnimatorController;
use crate::clips::ClipStore;
use crate::config::ToolConfig;
use crate::error::{ApplyError, ValidationError};
use crate::outfits::compile::OUTFITS_LAYER;
use crate::outfits::{self, Outfit, OutfitSet};
use crate::registry::ParameterRegistry;
use crate::scene::{SceneIndex, SceneObject};
use crate::toggles::{self, Toggle, ToggleSet};

/// Marker for the avatar's expression menu. Only its presence matters to the
/// toggle flow; menu contents are host territory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionMenu {
    pub name: String,
}

/// Snapshot of the pieces of a selected avatar the tool works against.
///
/// The three `Option`s are validation surface: a missing piece produces a
/// [`ValidationError`] instead of a panic further in.
#[derive(Debug, Clone, Default)]
pub struct AvatarRig {
    pub name: String,
    pub fx_controller: Option<AnimatorController>,
    pub parameters: Option<ParameterRegistry>,
    pub menu: Option<ExpressionMenu>,
    pub scene: SceneIndex,
    /// Clip assets for this avatar; persists across session rebuilds like
    /// the other host stores.
    pub clips: ClipStore,
}

impl AvatarRig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

fn validate_rig(rig: &AvatarRig, require_menu: bool) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if rig.fx_controller.is_none() {
        errors.push(ValidationError::MissingController);
    }
    if rig.parameters.is_none() {
        errors.push(ValidationError::MissingParameterRegistry);
    }
    if require_menu && rig.menu.is_none() {
        errors.push(ValidationError::MissingExpressionMenu);
    }
    errors
}

pub struct AvatarSession {
    rig: AvatarRig,
    namespace: ToolNamespace,
    asset_root: String,
    toggles: ToggleSet,
    outfits: OutfitSet,
    toggle_errors: Vec<ValidationError>,
    outfit_errors: Vec<ValidationError>,
}

impl AvatarSession {
    /// Start a fresh session for a newly selected avatar.
    ///
    /// Prior session state is never carried over; the caller drops the old
    /// session and everything is rebuilt from the rig snapshot.
    pub fn select_avatar(rig: AvatarRig, config: &ToolConfig) -> Self {
        let asset_root = config.asset_root_for(&rig.name);
        let mut session = Self {
            rig,
            namespace: config.namespace(),
            asset_root,
            toggles: ToggleSet::new(),
            outfits: OutfitSet::new(),
            toggle_errors: Vec::new(),
            outfit_errors: Vec::new(),
        };
        session.validate();
        session.ensure_baseline_outfit();
        session
    }

    /// Recompute both validation lists from the current rig.
    ///
    /// The outfit flow does not need an expression menu; the toggle flow
    /// does.
    pub fn validate(&mut self) {
        self.toggle_errors = validate_rig(&self.rig, true);
        self.outfit_errors = validate_rig(&self.rig, false);
    }

    pub fn toggle_errors(&self) -> &[ValidationError] {
        &self.toggle_errors
    }

    pub fn outfit_errors(&self) -> &[ValidationError] {
        &self.outfit_errors
    }

    pub fn rig(&self) -> &AvatarRig {
        &self.rig
    }

    /// Mutable rig access for host updates; call [`Self::validate`] after.
    pub fn rig_mut(&mut self) -> &mut AvatarRig {
        &mut self.rig
    }

    pub fn clips(&self) -> &ClipStore {
        &self.rig.clips
    }

    pub fn namespace(&self) -> &ToolNamespace {
        &self.namespace
    }

    pub fn asset_root(&self) -> &str {
        &self.asset_root
    }

    pub fn toggles(&self) -> &ToggleSet {
        &self.toggles
    }

    pub fn toggles_mut(&mut self) -> &mut ToggleSet {
        &mut self.toggles
    }

    pub fn outfits(&self) -> &OutfitSet {
        &self.outfits
    }

    pub fn outfits_mut(&mut self) -> &mut OutfitSet {
        &mut self.outfits
    }

    // ─── Toggle flow ─────────────────────────────────────────────────────

    /// Reconstruct toggles from the compiled avatar, at most once per
    /// session.
    ///
    /// Skipped while validation errors exist (never gather from a malformed
    /// avatar) and while the tool namespace is still empty, so a later pass
    /// can pick up parameters created in the meantime.
    pub fn gather_existing_toggles(&mut self) {
        if self.toggles.is_gathered() || !self.toggle_errors.is_empty() {
            return;
        }
        let Some(registry) = self.rig.parameters.as_ref() else {
            return;
        };
        if !registry.iter().any(|p| self.namespace.owns(&p.name)) {
            return;
        }

        let found = toggles::gather::gather_toggles(
            registry,
            &self.rig.clips,
            &self.rig.scene,
            &self.namespace,
            &self.asset_root,
        );
        self.toggles.extend(found);
        self.toggles.mark_gathered();
    }

    /// Append a blank toggle for the user to fill in.
    pub fn add_toggle(&mut self) -> &mut Toggle {
        self.toggles.add()
    }

    /// Assign an affected object to a toggle slot, applying the
    /// name-adoption convenience rule.
    pub fn assign_toggle_object(&mut self, index: usize, slot: usize, object: SceneObject) -> bool {
        let Some(toggle) = self.toggles.toggle_mut(index) else {
            return false;
        };
        if slot < toggle.objects.len() {
            toggle.objects[slot] = object;
        } else {
            toggle.objects.push(object);
        }
        toggle.adopt_object_name();
        true
    }

    /// Compile the toggle list: clip pair per toggle, one layer per toggle,
    /// missing registry parameters appended.
    pub fn apply_toggles(&mut self) -> Result<(), ApplyError> {
        if !self.toggle_errors.is_empty() {
            return Err(ApplyError::Validation(self.toggle_errors.clone()));
        }
        match (
            self.rig.fx_controller.as_mut(),
            self.rig.parameters.as_mut(),
        ) {
            (Some(animator), Some(registry)) => {
                toggles::compile::build_clips(
                    &mut self.rig.clips,
                    self.toggles.toggles(),
                    &self.asset_root,
                );
                toggles::compile::compile_toggles(
                    animator,
                    self.toggles.toggles(),
                    &self.namespace,
                    &self.asset_root,
                );
                toggles::compile::sync_parameters(
                    registry,
                    self.toggles.toggles(),
                    &self.namespace,
                );
                Ok(())
            }
            _ => Err(ApplyError::Validation(self.toggle_errors.clone())),
        }
    }

    /// Destroy everything the toggle list owns (layers, parameters, clips)
    /// and empty the list.
    pub fn clear_toggles(&mut self) -> Result<(), ApplyError> {
        if !self.toggle_errors.is_empty() {
            return Err(ApplyError::Validation(self.toggle_errors.clone()));
        }
        match (
            self.rig.fx_controller.as_mut(),
            self.rig.parameters.as_mut(),
        ) {
            (Some(animator), Some(registry)) => {
                toggles::compile::clear_toggles(
                    animator,
                    registry,
                    &mut self.rig.clips,
                    self.toggles.toggles(),
                    &self.namespace,
                    &self.asset_root,
                );
                self.toggles.clear_list();
                Ok(())
            }
            _ => Err(ApplyError::Validation(self.toggle_errors.clone())),
        }
    }

    // ─── Outfit flow ─────────────────────────────────────────────────────

    /// Auto-create the all-off baseline outfit when toggles exist but no
    /// outfits do.
    pub fn ensure_baseline_outfit(&mut self) {
        if let Some(registry) = self.rig.parameters.as_ref() {
            self.outfits.ensure_baseline(registry, &self.namespace);
        }
    }

    /// Reconstruct outfits from the compiled outfit layer, at most once per
    /// session. Skipped while validation errors exist or no outfit layer has
    /// been compiled yet.
    pub fn gather_existing_outfits(&mut self) {
        if self.outfits.is_gathered() || !self.outfit_errors.is_empty() {
            return;
        }
        let (Some(animator), Some(registry)) =
            (self.rig.fx_controller.as_ref(), self.rig.parameters.as_ref())
        else {
            return;
        };
        if animator.layer(OUTFITS_LAYER).is_none() {
            return;
        }

        let found = outfits::gather::gather_outfits(animator, registry, &self.namespace);
        self.outfits.extend(found);
        self.outfits.mark_gathered();
    }

    /// Append a positionally named outfit snapshotting the current toggle
    /// namespace. Returns `None` while the avatar has no parameter registry.
    pub fn add_outfit(&mut self) -> Option<&mut Outfit> {
        let registry = self.rig.parameters.as_ref()?;
        Some(self.outfits.add(registry, &self.namespace))
    }

    /// Flip one toggle value inside an outfit's snapshot.
    pub fn set_outfit_check(&mut self, index: usize, parameter: &str, value: bool) -> bool {
        self.outfits
            .outfit_mut(index)
            .is_some_and(|outfit| outfit.set_check(parameter, value))
    }

    /// Re-align every outfit's check map with the live registry, e.g. after
    /// toggles were applied or cleared.
    pub fn reconcile_outfits(&mut self) {
        let Some(registry) = self.rig.parameters.as_ref() else {
            return;
        };
        for outfit in self.outfits.iter_mut() {
            outfit.reconcile(registry, &self.namespace);
        }
    }

    /// Drop the in-memory outfit list.
    ///
    /// Deliberately leaves the compiled layer and parameters in place; the
    /// next [`Self::apply_outfits`] rebuilds the layer from whatever the
    /// list holds then.
    pub fn clear_outfits(&mut self) {
        self.outfits.clear_list();
    }

    /// Compile the outfit list into the shared outfit layer and append any
    /// missing outfit parameters.
    pub fn apply_outfits(&mut self) -> Result<(), ApplyError> {
        if !self.outfit_errors.is_empty() {
            return Err(ApplyError::Validation(self.outfit_errors.clone()));
        }
        match (
            self.rig.fx_controller.as_mut(),
            self.rig.parameters.as_mut(),
        ) {
            (Some(animator), Some(registry)) => {
                outfits::compile::compile_outfits(animator, self.outfits.outfits(), &self.namespace);
                outfits::compile::sync_parameters(registry, self.outfits.outfits(), &self.namespace);
                Ok(())
            }
            _ => Err(ApplyError::Validation(self.outfit_errors.clone())),
        }
    }
}
