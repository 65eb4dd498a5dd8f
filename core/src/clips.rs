//! Animation-artifact store.
//!
//! Clips are keyed by their asset path (`{root}/{sanitized}{On|Off}.anim`)
//! and hold a curve set over `(object path, property)`. Curve values use the
//! float wire convention.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// The active-flag property animated by toggle clips.
pub const ACTIVE_PROPERTY: &str = "m_IsActive";

/// Which half of a toggle's clip pair a path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipKind {
    On,
    Off,
}

impl ClipKind {
    fn suffix(self) -> &'static str {
        match self {
            Self::On => "On",
            Self::Off => "Off",
        }
    }
}

/// Asset path for one half of a toggle's clip pair.
pub fn clip_asset_path(asset_root: &str, sanitized_name: &str, kind: ClipKind) -> String {
    format!("{asset_root}/{sanitized_name}{}.anim", kind.suffix())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveBinding {
    /// Root-relative scene path of the animated object.
    pub path: String,
    pub property: String,
    pub value: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    pub curves: Vec<CurveBinding>,
}

impl AnimationClip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a curve, replacing any existing binding for the same path and
    /// property.
    pub fn set_curve(&mut self, path: &str, property: &str, value: f32) {
        if let Some(existing) = self
            .curves
            .iter_mut()
            .find(|c| c.path == path && c.property == property)
        {
            existing.value = value;
        } else {
            self.curves.push(CurveBinding {
                path: path.to_string(),
                property: property.to_string(),
                value,
            });
        }
    }
}

/// In-memory stand-in for the host asset database, keyed by asset path.
#[derive(Debug, Clone, Default)]
pub struct ClipStore {
    clips: HashMap<String, AnimationClip>,
}

impl ClipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or overwrite the clip at `path`.
    pub fn create(&mut self, path: impl Into<String>, clip: AnimationClip) {
        self.clips.insert(path.into(), clip);
    }

    pub fn load(&self, path: &str) -> Option<&AnimationClip> {
        self.clips.get(path)
    }

    /// Delete the clip at `path` if present. Returns whether one existed.
    pub fn delete(&mut self, path: &str) -> bool {
        self.clips.remove(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
