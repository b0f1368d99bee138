//! Optional user configuration.
//!
//! A small `config.toml` in the platform config dir can pin a default
//! catalog location and a color preference. A missing file is not an
//! error; a malformed one is. CLI flags always win over config values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default catalog: either a manifest file or a sample tree.
    pub catalog: Option<PathBuf>,
    /// Force colored output on or off; unset means auto-detect.
    pub color: Option<bool>,
}

impl Config {
    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load_default() -> Result<Self> {
        Self::load_from(&default_config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config at {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config at {}", path.display()))
    }
}

pub fn default_config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "sample-gallery-search", "sample-gallery-search")
        .map_or_else(
            || PathBuf::from("config.toml"),
            |dirs| dirs.config_dir().join("config.toml"),
        )
}
