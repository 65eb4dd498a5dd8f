//! Tool configuration.
//!
//! A small TOML file controlling the parameter namespace root and where
//! toggle clip artifacts are keyed. Defaults match the conventional layout
//! (`Wardrobe` namespace, clips under `Assets/{avatar}/VRC/Toggles`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wardrobe_types::ToolNamespace;

/// Placeholder replaced by the avatar name in `asset_root`.
const AVATAR_PLACEHOLDER: &str = "{avatar}";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Root segment of the parameter namespace this tool owns.
    pub namespace_root: String,

    /// Template for the clip asset root; `{avatar}` is replaced by the
    /// selected avatar's name.
    pub asset_root: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            namespace_root: "Wardrobe".to_string(),
            asset_root: "Assets/{avatar}/VRC/Toggles".to_string(),
        }
    }
}

impl ToolConfig {
    pub fn namespace(&self) -> ToolNamespace {
        ToolNamespace::new(&self.namespace_root)
    }

    /// Clip asset root for a concrete avatar.
    pub fn asset_root_for(&self, avatar_name: &str) -> String {
        self.asset_root.replace(AVATAR_PLACEHOLDER, avatar_name)
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn save_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            path: path.to_path_buf(),
            source: e,
        })?;

        fs::write(path, contents).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Errors that can occur while loading or saving the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error for {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("serialize error for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },
}
