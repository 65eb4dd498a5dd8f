//! Wardrobe engine.
//!
//! Compiles declarative toggle and outfit models into animator-controller
//! layers plus synchronized avatar parameters, and gathers those models back
//! out of a previously compiled avatar. Host stores (controller, parameter
//! registry, clip assets, scene hierarchy) are modeled in memory so the
//! whole pipeline is testable without an editor.

pub mod animator;
pub mod clips;
pub mod config;
pub mod error;
pub mod outfits;
pub mod registry;
pub mod scene;
pub mod session;
pub mod toggles;

pub use config::ToolConfig;
pub use error::{ApplyError, ValidationError};
pub use registry::ParameterRegistry;
pub use session::{AvatarRig, AvatarSession, ExpressionMenu};
pub use wardrobe_types::{Parameter, ParameterKind, ToolNamespace};

#[cfg(test)]
mod session_tests;
