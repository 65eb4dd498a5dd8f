//! Scene-object resolver.
//!
//! A snapshot of the avatar's hierarchy, indexed once so that resolving
//! animated paths back to live objects is a map lookup rather than a scan
//! over every object per path.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Reference to one object in the avatar hierarchy.
///
/// `path` is root-relative with `/`-joined segments; for objects directly
/// under the avatar root it equals `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub path: String,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Build a reference from a root-relative path; the name is the last
    /// segment.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or(&path).to_string();
        Self { name, path }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SceneIndex {
    objects: Vec<SceneObject>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl SceneIndex {
    /// Index a hierarchy snapshot in a single pass.
    ///
    /// Duplicate names keep the first occurrence, matching the host's
    /// first-match lookup.
    pub fn new(objects: Vec<SceneObject>) -> Self {
        let mut by_path = HashMap::with_capacity(objects.len());
        let mut by_name = HashMap::with_capacity(objects.len());
        for (i, object) in objects.iter().enumerate() {
            by_path.entry(object.path.clone()).or_insert(i);
            by_name.entry(object.name.clone()).or_insert(i);
        }
        Self {
            objects,
            by_path,
            by_name,
        }
    }

    /// Resolve an animated path back to a live object.
    ///
    /// Exact path match first, then a name match for objects that moved in
    /// the hierarchy since the clip was written. Returns `None` when the
    /// object was deleted or renamed; callers drop such paths.
    pub fn resolve(&self, path: &str) -> Option<&SceneObject> {
        self.by_path
            .get(path)
            .or_else(|| self.by_name.get(path))
            .map(|&i| &self.objects[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
