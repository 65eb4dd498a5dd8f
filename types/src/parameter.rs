//! Expression-parameter record.

use serde::{Deserialize, Serialize};

/// Value type of an avatar expression parameter.
///
/// The tool only ever creates `Bool` parameters, but the registry it edits
/// can hold pre-existing parameters of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterKind {
    Bool,
    Int,
    Float,
}

/// One entry in the avatar's expression-parameter list.
///
/// `default_on` is an explicit bool at the model boundary; the `1.0 = true`
/// float encoding exists only inside compiled artifacts (see [`crate::wire`]).
/// For non-bool parameters it means "defaults to a non-zero value".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub kind: ParameterKind,
    pub default_on: bool,
    /// Persisted across avatar reloads.
    pub saved: bool,
    /// Replicated to remote players.
    pub synced: bool,
}

impl Parameter {
    /// A networked boolean parameter, the only kind this tool creates.
    pub fn bool(name: impl Into<String>, default_on: bool, saved: bool) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Bool,
            default_on,
            saved,
            synced: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_constructor_is_networked() {
        let p = Parameter::bool("Wardrobe/Hat", true, false);
        assert_eq!(p.kind, ParameterKind::Bool);
        assert!(p.synced);
        assert!(p.default_on);
        assert!(!p.saved);
    }

    #[test]
    fn parameter_toml_round_trip() {
        let p = Parameter::bool("Wardrobe/Hat", false, true);
        let text = toml::to_string(&p).unwrap();
        let back: Parameter = toml::from_str(&text).unwrap();
        assert_eq!(back, p);
    }
}
