//! Shared value types for the Wardrobe avatar toolkit.
//!
//! Everything here is host-agnostic: namespace handling, the
//! expression-parameter record, name sanitization, and the float wire
//! convention used inside compiled artifacts. The `core` crate builds the
//! actual compiler and session logic on top of these.

pub mod naming;
pub mod namespace;
pub mod parameter;
pub mod wire;

pub use namespace::ToolNamespace;
pub use parameter::{Parameter, ParameterKind};
