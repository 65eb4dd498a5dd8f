//! Two-level parameter namespace.
//!
//! The tool owns every parameter under a single root segment (default
//! `"Wardrobe"`). Toggle parameters live directly under the root
//! (`Wardrobe/Hat`); outfit parameters live one level deeper under a fixed
//! `Outfits` segment (`Wardrobe/Outfits/Casual`). Call sites use the
//! predicates here instead of ad-hoc prefix string checks.

use serde::{Deserialize, Serialize};

/// Sub-namespace segment reserved for outfit parameters.
pub const OUTFIT_SEGMENT: &str = "Outfits";

/// The namespace root owned by this tool within an avatar's parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolNamespace {
    root: String,
}

impl Default for ToolNamespace {
    fn default() -> Self {
        Self::new("Wardrobe")
    }
}

impl ToolNamespace {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Full prefix of the outfit sub-namespace, e.g. `Wardrobe/Outfits`.
    pub fn outfit_prefix(&self) -> String {
        format!("{}/{}", self.root, OUTFIT_SEGMENT)
    }

    /// Parameter name for a toggle, e.g. `Wardrobe/Hat`.
    pub fn toggle_param(&self, name: &str) -> String {
        format!("{}/{}", self.root, name)
    }

    /// Parameter name for an outfit, e.g. `Wardrobe/Outfits/Casual`.
    pub fn outfit_param(&self, name: &str) -> String {
        format!("{}/{}/{}", self.root, OUTFIT_SEGMENT, name)
    }

    /// Whether a parameter name belongs to this tool's namespace at all.
    pub fn owns(&self, parameter: &str) -> bool {
        parameter
            .strip_prefix(&self.root)
            .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Whether a parameter name belongs to the outfit sub-namespace.
    pub fn is_outfit_param(&self, parameter: &str) -> bool {
        self.strip_toggle_prefix(parameter).is_some_and(|rest| {
            rest.strip_prefix(OUTFIT_SEGMENT)
                .is_some_and(|tail| tail.is_empty() || tail.starts_with('/'))
        })
    }

    /// Strip the root prefix from an owned parameter name.
    ///
    /// Returns `None` for parameters outside the namespace.
    pub fn strip_toggle_prefix<'a>(&self, parameter: &'a str) -> Option<&'a str> {
        parameter
            .strip_prefix(&self.root)
            .and_then(|rest| rest.strip_prefix('/'))
    }
}
