//! Validation and apply errors.
//!
//! Validation problems are collected into lists and surfaced as data rather
//! than propagated; any present problem disables compiling and skips gather.
//! Failed lookups inside the core (stale parameters, unresolvable object
//! paths) degrade to omission and never surface here.

use thiserror::Error;

/// A problem with the selected avatar that blocks compiling against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no FX controller is assigned to the avatar")]
    MissingController,

    #[error("no expression parameters are assigned to the avatar")]
    MissingParameterRegistry,

    #[error("no expression menu is assigned to the avatar")]
    MissingExpressionMenu,
}

/// Failure of an apply operation. Validation is the only way an apply can
/// fail; everything downstream is infallible against an in-memory model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("avatar failed validation with {} problem(s)", .0.len())]
    Validation(Vec<ValidationError>),
}
