//! Toggle graph compilation.
//!
//! Compilation is destructive-and-rebuild for every layer the tool owns:
//! stale layers are located by name and removed, then rebuilt from the
//! in-memory model, so the compiled graph always reflects the model exactly.

use tracing::debug;
use wardrobe_types::{Parameter, ToolNamespace, wire};

use crate::animator::{wire_boolean_switch, AnimatorController, AnimatorParameterKind};
use crate::clips::{clip_asset_path, AnimationClip, ClipKind, ClipStore, ACTIVE_PROPERTY};
use crate::registry::ParameterRegistry;

use super::Toggle;

/// Sentinel layer bracketing the start of the tool-owned toggle region.
pub const TOGGLES_START_LAYER: &str = "--- Wardrobe Toggles START ---";

/// Sentinel layer bracketing the end of the tool-owned toggle region.
pub const TOGGLES_END_LAYER: &str = "--- Wardrobe Toggles END ---";

/// Build the On/Off clip pair for every toggle, overwriting stale artifacts.
///
/// Each clip carries one active-flag curve per affected object, keyed by the
/// object's scene path, with the float wire values.
pub fn build_clips(store: &mut ClipStore, toggles: &[Toggle], asset_root: &str) {
    for toggle in toggles {
        let mut on_clip = AnimationClip::new();
        let mut off_clip = AnimationClip::new();

        for object in &toggle.objects {
            on_clip.set_curve(&object.path, ACTIVE_PROPERTY, wire::to_wire(true));
            off_clip.set_curve(&object.path, ACTIVE_PROPERTY, wire::to_wire(false));
        }

        store.create(
            clip_asset_path(asset_root, toggle.sanitized_name(), ClipKind::On),
            on_clip,
        );
        store.create(
            clip_asset_path(asset_root, toggle.sanitized_name(), ClipKind::Off),
            off_clip,
        );
    }
}

/// Rebuild the tool-owned toggle layers on the controller.
///
/// One layer per toggle, holding `<name>_On` and `<name>_Off` states linked
/// by the instantaneous boolean switch on the toggle's parameter. Toggles are
/// emitted in list order between the two sentinel layers.
pub fn compile_toggles(
    animator: &mut AnimatorController,
    toggles: &[Toggle],
    namespace: &ToolNamespace,
    asset_root: &str,
) {
    animator.remove_layer_named(TOGGLES_START_LAYER);
    animator.remove_layer_named(TOGGLES_END_LAYER);

    animator.add_layer(TOGGLES_START_LAYER);

    for toggle in toggles {
        let parameter = toggle.parameter_name(namespace);

        animator.remove_layer_named(toggle.name());
        animator.ensure_parameter(&parameter, AnimatorParameterKind::Bool);

        let on_name = format!("{}_On", toggle.name());
        let off_name = format!("{}_Off", toggle.name());

        let layer = animator.add_layer(toggle.name());
        layer.default_weight = 1.0;

        let machine = &mut layer.state_machine;

        let on_state = machine.add_state(&on_name);
        on_state.write_defaults = false;
        on_state.motion = Some(clip_asset_path(
            asset_root,
            toggle.sanitized_name(),
            ClipKind::On,
        ));

        let off_state = machine.add_state(&off_name);
        off_state.write_defaults = false;
        off_state.motion = Some(clip_asset_path(
            asset_root,
            toggle.sanitized_name(),
            ClipKind::Off,
        ));

        wire_boolean_switch(machine, &on_name, &off_name, &parameter);
    }

    animator.add_layer(TOGGLES_END_LAYER);

    debug!(toggles = toggles.len(), "compiled toggle layers");
}

/// Append a registry parameter for every toggle that does not have one yet.
///
/// Existing parameters are never touched: changing a toggle's default or
/// saved flag after first compile requires clearing and recreating.
pub fn sync_parameters(
    registry: &mut ParameterRegistry,
    toggles: &[Toggle],
    namespace: &ToolNamespace,
) {
    for toggle in toggles {
        registry.upsert(Parameter::bool(
            toggle.parameter_name(namespace),
            toggle.default_on,
            toggle.saved,
        ));
    }
}

/// Remove everything the toggle list owns: sentinel layers, each toggle's
/// layer, animator parameter and clip pair, and the toggle portion of the
/// registry. Outfit-namespace layers and parameters are never touched.
pub fn clear_toggles(
    animator: &mut AnimatorController,
    registry: &mut ParameterRegistry,
    clips: &mut ClipStore,
    toggles: &[Toggle],
    namespace: &ToolNamespace,
    asset_root: &str,
) {
    animator.remove_layer_named(TOGGLES_START_LAYER);
    animator.remove_layer_named(TOGGLES_END_LAYER);

    for toggle in toggles {
        animator.remove_layer_named(toggle.name());
        animator.remove_parameter_named(&toggle.parameter_name(namespace));

        clips.delete(&clip_asset_path(
            asset_root,
            toggle.sanitized_name(),
            ClipKind::On,
        ));
        clips.delete(&clip_asset_path(
            asset_root,
            toggle.sanitized_name(),
            ClipKind::Off,
        ));
    }

    registry.retain(|p| !namespace.owns(&p.name) || namespace.is_outfit_param(&p.name));

    debug!(toggles = toggles.len(), "cleared toggle layers and parameters");
}
