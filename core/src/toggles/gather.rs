//! Toggle reconstruction from a compiled avatar.
//!
//! The registry is the source of truth for which toggles exist; affected
//! objects are recovered best-effort from the On clip's curve paths. Paths
//! whose objects were deleted or renamed since the last compile are dropped.

use tracing::{debug, warn};
use wardrobe_types::ToolNamespace;

use crate::clips::{clip_asset_path, ClipKind, ClipStore};
use crate::registry::ParameterRegistry;
use crate::scene::SceneIndex;

use super::Toggle;

/// Rebuild the toggle list from the registry plus compiled artifacts.
///
/// One toggle per parameter owned by the namespace, excluding the outfit
/// sub-namespace. Ordering follows the registry.
pub fn gather_toggles(
    registry: &ParameterRegistry,
    clips: &ClipStore,
    scene: &SceneIndex,
    namespace: &ToolNamespace,
    asset_root: &str,
) -> Vec<Toggle> {
    let mut toggles = Vec::new();

    for parameter in registry.iter() {
        if !namespace.owns(&parameter.name) || namespace.is_outfit_param(&parameter.name) {
            continue;
        }
        let Some(mut toggle) = Toggle::from_parameter(parameter, namespace) else {
            continue;
        };

        let on_path = clip_asset_path(asset_root, toggle.sanitized_name(), ClipKind::On);
        if let Some(clip) = clips.load(&on_path) {
            for binding in &clip.curves {
                match scene.resolve(&binding.path) {
                    Some(object) => toggle.objects.push(object.clone()),
                    None => {
                        warn!(path = %binding.path, toggle = toggle.name(), "dropping unresolvable object path");
                    }
                }
            }
        }

        toggles.push(toggle);
    }

    debug!(toggles = toggles.len(), "gathered existing toggles");
    toggles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneObject;
    use crate::toggles::compile::{build_clips, sync_parameters};
    use wardrobe_types::Parameter;

    const ROOT: &str = "Assets/Mira/VRC/Toggles";

    fn scene() -> SceneIndex {
        SceneIndex::new(vec![
            SceneObject::from_path("Hat"),
            SceneObject::from_path("Body/Shoes"),
        ])
    }

    #[test]
    fn gather_after_compile_round_trips_the_model() {
        let ns = ToolNamespace::default();
        let scene = scene();

        let mut hat = Toggle::new();
        hat.set_name("Hat");
        hat.objects.push(scene.resolve("Hat").unwrap().clone());

        let mut registry = ParameterRegistry::new();
        let mut clips = ClipStore::new();
        build_clips(&mut clips, std::slice::from_ref(&hat), ROOT);
        sync_parameters(&mut registry, std::slice::from_ref(&hat), &ns);

        let gathered = gather_toggles(&registry, &clips, &scene, &ns, ROOT);
        assert_eq!(gathered.len(), 1);
        assert_eq!(gathered[0].name(), "Hat");
        assert!(!gathered[0].default_on);
        assert!(gathered[0].saved);
        assert_eq!(gathered[0].objects, hat.objects);
    }

    #[test]
    fn unresolvable_paths_are_dropped() {
        let ns = ToolNamespace::default();

        let mut hat = Toggle::new();
        hat.set_name("Hat");
        hat.objects.push(SceneObject::from_path("Hat"));
        hat.objects.push(SceneObject::from_path("DeletedProp"));

        let mut registry = ParameterRegistry::new();
        let mut clips = ClipStore::new();
        build_clips(&mut clips, std::slice::from_ref(&hat), ROOT);
        sync_parameters(&mut registry, std::slice::from_ref(&hat), &ns);

        // DeletedProp is not in the live scene anymore.
        let gathered = gather_toggles(&registry, &clips, &scene(), &ns, ROOT);
        let paths: Vec<_> = gathered[0].objects.iter().map(|o| o.path.as_str()).collect();
        assert_eq!(paths, ["Hat"]);
    }

    #[test]
    fn outfit_parameters_are_not_toggles() {
        let ns = ToolNamespace::default();
        let registry = ParameterRegistry::from_parameters(vec![
            Parameter::bool("Wardrobe/Hat", false, true),
            Parameter::bool("Wardrobe/Outfits/Casual", false, false),
            Parameter::bool("GestureLeft", false, false),
        ]);

        let gathered = gather_toggles(&registry, &ClipStore::new(), &scene(), &ns, ROOT);
        let names: Vec<_> = gathered.iter().map(|t| t.name()).collect();
        assert_eq!(names, ["Hat"]);
    }
}
