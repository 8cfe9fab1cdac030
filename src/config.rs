use crate::convert::normalizer::CoercionPolicy;
use crate::convert::renderer::NamingConvention;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub convention: NamingConvention,

    #[serde(default)]
    pub policy: CoercionPolicy,
}

/// One configuration layer. Only the fields it sets take effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigLayer {
    #[serde(default)]
    pub convention: Option<NamingConvention>,

    #[serde(default)]
    pub policy: Option<CoercionPolicy>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        convention: Option<NamingConvention>,
        policy: Option<CoercionPolicy>,
    ) -> Result<Self> {
        let global_path = Self::global_config_path();
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        let cli = ConfigLayer { convention, policy };

        Self::load_from(global_path.as_deref(), &local_path, cli)
    }

    /// Layer the global file, the local file and `overrides` over the defaults.
    /// Missing files are skipped.
    pub fn load_from(global: Option<&Path>, local: &Path, overrides: ConfigLayer) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                config = config.merge(ConfigLayer::from_file(global_path)?);
            }
        }

        if local.exists() {
            config = config.merge(ConfigLayer::from_file(local)?);
        }

        Ok(config.merge(overrides))
    }

    /// Values set in `layer` win, even when they equal the defaults.
    pub fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(convention) = layer.convention {
            self.convention = convention;
        }
        if let Some(policy) = layer.policy {
            self.policy = policy;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
