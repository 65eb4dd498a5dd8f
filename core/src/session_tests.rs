//! End-to-end session tests.
//!
//! Exercises the full authoring loop against in-memory host stores: select
//! avatar, edit models, apply, then gather the models back in a fresh
//! session as a re-opened editor would.

use wardrobe_types::Parameter;

use crate::animator::AnimatorController;
use crate::config::ToolConfig;
use crate::error::{ApplyError, ValidationError};
use crate::outfits::compile::OUTFITS_LAYER;
use crate::outfits::BASELINE_OUTFIT_NAME;
use crate::registry::ParameterRegistry;
use crate::scene::{SceneIndex, SceneObject};
use crate::session::{AvatarRig, AvatarSession, ExpressionMenu};
use crate::toggles::compile::{TOGGLES_END_LAYER, TOGGLES_START_LAYER};

/// A fully wired avatar with one pre-existing foreign parameter.
fn complete_rig() -> AvatarRig {
    let mut rig = AvatarRig::new("Mira");
    rig.fx_controller = Some(AnimatorController::new());
    rig.parameters = Some(ParameterRegistry::from_parameters(vec![Parameter::bool(
        "GestureLeft",
        false,
        false,
    )]));
    rig.menu = Some(ExpressionMenu::default());
    rig.scene = SceneIndex::new(vec![
        SceneObject::from_path("Hat_Straw"),
        SceneObject::from_path("Body/Shoes"),
    ]);
    rig
}

fn session() -> AvatarSession {
    AvatarSession::select_avatar(complete_rig(), &ToolConfig::default())
}

/// Reopen the editor on the host state a previous session left behind.
fn reopen(previous: AvatarSession) -> AvatarSession {
    let rig = previous.rig().clone();
    AvatarSession::select_avatar(rig, &ToolConfig::default())
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn bare_rig_fails_validation_and_blocks_apply() {
    let mut session = AvatarSession::select_avatar(AvatarRig::new("Mira"), &ToolConfig::default());

    assert_eq!(
        session.toggle_errors(),
        [
            ValidationError::MissingController,
            ValidationError::MissingParameterRegistry,
            ValidationError::MissingExpressionMenu,
        ]
    );

    let Err(ApplyError::Validation(errors)) = session.apply_toggles() else {
        panic!("apply must be blocked by validation");
    };
    assert_eq!(errors.len(), 3);
    assert!(session.apply_outfits().is_err());
    assert!(session.clear_toggles().is_err());
}

#[test]
fn outfit_flow_does_not_require_a_menu() {
    let mut rig = complete_rig();
    rig.menu = None;
    let session = AvatarSession::select_avatar(rig, &ToolConfig::default());

    assert_eq!(
        session.toggle_errors(),
        [ValidationError::MissingExpressionMenu]
    );
    assert!(session.outfit_errors().is_empty());
}

#[test]
fn gather_is_skipped_while_validation_fails() {
    let mut rig = complete_rig();
    rig.fx_controller = None;
    rig.parameters = Some(ParameterRegistry::from_parameters(vec![Parameter::bool(
        "Wardrobe/Hat",
        false,
        true,
    )]));

    let mut session = AvatarSession::select_avatar(rig, &ToolConfig::default());
    session.gather_existing_toggles();
    assert!(session.toggles().is_empty());
    assert!(!session.toggles().is_gathered());
}

// ─────────────────────────────────────────────────────────────────────────────
// Toggle flow
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn toggle_lifecycle_compiles_and_round_trips() {
    let mut session = session();

    session.add_toggle();
    let hat = session.rig().scene.resolve("Hat_Straw").unwrap().clone();
    assert!(session.assign_toggle_object(0, 0, hat));
    // Name adopted from the object, underscores becoming separators.
    assert_eq!(session.toggles().toggles()[0].name(), "Hat/Straw");

    session.apply_toggles().unwrap();

    let animator = session.rig().fx_controller.as_ref().unwrap();
    let names: Vec<_> = animator.layers.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, [TOGGLES_START_LAYER, "Hat/Straw", TOGGLES_END_LAYER]);
    assert!(animator.parameter_exists("Wardrobe/Hat/Straw"));

    let registry = session.rig().parameters.as_ref().unwrap();
    let created = registry.find("Wardrobe/Hat/Straw").unwrap();
    assert!(!created.default_on);
    assert!(created.saved);
    assert!(created.synced);
    assert_eq!(session.clips().len(), 2);

    // Reopen the editor: the model comes back from the compiled avatar.
    let mut reopened = reopen(session);
    reopened.gather_existing_toggles();

    let gathered = reopened.toggles().toggles();
    assert_eq!(gathered.len(), 1);
    assert_eq!(gathered[0].name(), "Hat/Straw");
    assert!(!gathered[0].default_on);
    assert_eq!(gathered[0].objects[0].path, "Hat_Straw");
}

#[test]
fn gather_runs_at_most_once_per_session() {
    let mut session = session();
    session.add_toggle();
    session.toggles_mut().toggle_mut(0).unwrap().set_name("Hat");
    session.apply_toggles().unwrap();

    let mut reopened = reopen(session);
    reopened.gather_existing_toggles();
    reopened.gather_existing_toggles();
    assert_eq!(reopened.toggles().len(), 1);

    // An explicit reset re-arms it, and the duplicate shows up.
    reopened.toggles_mut().reset_gathered();
    reopened.gather_existing_toggles();
    assert_eq!(reopened.toggles().len(), 2);
}

#[test]
fn applying_twice_with_no_edits_reproduces_the_graph() {
    let mut session = session();
    session.add_toggle();
    session.toggles_mut().toggle_mut(0).unwrap().set_name("Hat");

    session.apply_toggles().unwrap();
    let first = serde_json::to_string(session.rig().fx_controller.as_ref().unwrap()).unwrap();

    session.apply_toggles().unwrap();
    let second = serde_json::to_string(session.rig().fx_controller.as_ref().unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn clearing_toggles_leaves_outfits_and_foreign_parameters() {
    let mut session = session();
    session.add_toggle();
    session.toggles_mut().toggle_mut(0).unwrap().set_name("Hat");
    session.apply_toggles().unwrap();

    session.ensure_baseline_outfit();
    session.apply_outfits().unwrap();

    session.clear_toggles().unwrap();

    assert!(session.toggles().is_empty());
    assert!(session.clips().is_empty());

    let animator = session.rig().fx_controller.as_ref().unwrap();
    assert!(animator.layer("Hat").is_none());
    assert!(animator.layer(TOGGLES_START_LAYER).is_none());
    assert!(animator.layer(OUTFITS_LAYER).is_some());

    let names: Vec<_> = session
        .rig()
        .parameters
        .as_ref()
        .unwrap()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, ["GestureLeft", "Wardrobe/Outfits/Nude"]);
}

#[test]
fn applying_no_toggles_leaves_the_registry_unchanged() {
    let mut session = session();
    let before = session.rig().parameters.clone().unwrap();

    session.apply_toggles().unwrap();

    assert_eq!(session.rig().parameters.as_ref().unwrap(), &before);
}

// ─────────────────────────────────────────────────────────────────────────────
// Outfit flow
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn baseline_outfit_appears_once_toggles_exist() {
    let mut session = session();
    assert!(session.outfits().is_empty());

    session.add_toggle();
    session.toggles_mut().toggle_mut(0).unwrap().set_name("Hat");
    session.apply_toggles().unwrap();

    session.ensure_baseline_outfit();
    assert_eq!(session.outfits().outfits()[0].name(), BASELINE_OUTFIT_NAME);
}

#[test]
fn outfit_lifecycle_compiles_and_round_trips() {
    let mut session = session();
    for name in ["Hat", "Shoes"] {
        session.add_toggle();
        let index = session.toggles().len() - 1;
        session.toggles_mut().toggle_mut(index).unwrap().set_name(name);
    }
    session.apply_toggles().unwrap();
    session.ensure_baseline_outfit();

    session.add_outfit().unwrap().set_name("Casual");
    assert!(session.set_outfit_check(1, "Wardrobe/Hat", true));
    session.apply_outfits().unwrap();

    let mut reopened = reopen(session);
    reopened.gather_existing_outfits();

    // Baseline is skipped on gather but re-created on selection.
    let outfits = reopened.outfits().outfits();
    assert_eq!(outfits[0].name(), BASELINE_OUTFIT_NAME);
    assert_eq!(outfits[1].name(), "Casual");

    let checks: Vec<_> = outfits[1]
        .checks()
        .iter()
        .map(|(k, &v)| (k.as_str(), v))
        .collect();
    assert_eq!(checks, [("Wardrobe/Hat", true), ("Wardrobe/Shoes", false)]);
}

#[test]
fn clearing_outfits_touches_only_the_list() {
    let mut session = session();
    session.add_toggle();
    session.toggles_mut().toggle_mut(0).unwrap().set_name("Hat");
    session.apply_toggles().unwrap();
    session.ensure_baseline_outfit();
    session.apply_outfits().unwrap();

    session.clear_outfits();

    assert!(session.outfits().is_empty());
    let animator = session.rig().fx_controller.as_ref().unwrap();
    assert!(animator.layer(OUTFITS_LAYER).is_some());
    assert!(session
        .rig()
        .parameters
        .as_ref()
        .unwrap()
        .exists("Wardrobe/Outfits/Nude"));

    // The next apply rebuilds the layer from the now-empty list.
    session.apply_outfits().unwrap();
    let animator = session.rig().fx_controller.as_ref().unwrap();
    let layer = animator.layer(OUTFITS_LAYER).unwrap();
    assert_eq!(layer.state_machine.states.len(), 1);
}

#[test]
fn reconcile_outfits_follows_toggle_edits() {
    let mut session = session();
    session.add_toggle();
    session.toggles_mut().toggle_mut(0).unwrap().set_name("Hat");
    session.apply_toggles().unwrap();
    session.ensure_baseline_outfit();

    // A second toggle is applied after the baseline snapshot was taken.
    session.add_toggle();
    session.toggles_mut().toggle_mut(1).unwrap().set_name("Shoes");
    session.apply_toggles().unwrap();

    session.reconcile_outfits();

    let keys: Vec<_> = session.outfits().outfits()[0]
        .checks()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["Wardrobe/Hat", "Wardrobe/Shoes"]);
}
