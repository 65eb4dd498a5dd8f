//! Outfit reconstruction from a compiled avatar.
//!
//! Every state on the outfit layer that carries actions, other than the
//! baseline, becomes an outfit again. Check maps are reconciled against the
//! live registry during reconstruction (see [`super::Outfit::from_state`]).

use tracing::debug;
use wardrobe_types::ToolNamespace;

use crate::animator::AnimatorController;
use crate::registry::ParameterRegistry;

use super::compile::OUTFITS_LAYER;
use super::{Outfit, BASELINE_OUTFIT_NAME};

/// Rebuild the outfit list from the compiled outfit layer.
///
/// Returns an empty list when no outfit layer exists. The baseline state and
/// action-less states (the `Idle` hub) are skipped.
pub fn gather_outfits(
    animator: &AnimatorController,
    registry: &ParameterRegistry,
    namespace: &ToolNamespace,
) -> Vec<Outfit> {
    let Some(layer) = animator.layer(OUTFITS_LAYER) else {
        return Vec::new();
    };

    let outfits: Vec<Outfit> = layer
        .state_machine
        .states
        .iter()
        .filter(|state| !state.actions.is_empty())
        .filter(|state| state.name != BASELINE_OUTFIT_NAME)
        .map(|state| Outfit::from_state(state, registry, namespace))
        .collect();

    debug!(outfits = outfits.len(), "gathered existing outfits");
    outfits
}
