//! Outfit graph compilation.
//!
//! All outfits share one hub-and-spoke layer: an `Idle` hub plus one state
//! per outfit, each gated by the outfit's own bool parameter and carrying
//! the parameter-set actions that snap every toggle to the outfit's values.

use tracing::debug;
use wardrobe_types::{Parameter, ToolNamespace};

use crate::animator::{wire_boolean_switch, AnimatorController, AnimatorParameterKind};
use crate::registry::ParameterRegistry;

use super::Outfit;

/// Sentinel name of the shared outfit layer.
pub const OUTFITS_LAYER: &str = "--- Wardrobe Outfits ---";

/// Name of the hub state no outfit is selected from.
pub const IDLE_STATE: &str = "Idle";

/// Rebuild the shared outfit layer on the controller.
///
/// The previous layer is removed wholesale; outfits are emitted in list
/// order so recompiling an unchanged list reproduces the layer exactly.
pub fn compile_outfits(
    animator: &mut AnimatorController,
    outfits: &[Outfit],
    namespace: &ToolNamespace,
) {
    animator.remove_layer_named(OUTFITS_LAYER);

    for outfit in outfits {
        animator.ensure_parameter(&outfit.parameter_name(namespace), AnimatorParameterKind::Bool);
    }

    let layer = animator.add_layer(OUTFITS_LAYER);
    layer.default_weight = 1.0;

    let machine = &mut layer.state_machine;
    machine.add_state(IDLE_STATE);

    for outfit in outfits {
        let state = machine.add_state(outfit.name());
        state.write_defaults = false;
        state.actions = outfit.drive_actions();

        wire_boolean_switch(
            machine,
            outfit.name(),
            IDLE_STATE,
            &outfit.parameter_name(namespace),
        );
    }

    debug!(outfits = outfits.len(), "compiled outfit layer");
}

/// Append a registry parameter for every outfit that does not have one yet.
///
/// Outfit parameters are always off by default and never saved; selection
/// is a momentary action, not persisted state.
pub fn sync_parameters(
    registry: &mut ParameterRegistry,
    outfits: &[Outfit],
    namespace: &ToolNamespace,
) {
    for outfit in outfits {
        registry.upsert(Parameter::bool(
            outfit.parameter_name(namespace),
            false,
            false,
        ));
    }
}
