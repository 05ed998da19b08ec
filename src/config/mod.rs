//! Configuration loading and management

mod catalog;
mod io;
mod settings;

pub use catalog::{Catalog, BADGES_FILE, DEFAULT_CATALOG, EXERCISES_FILE, QUESTS_FILE};
pub use io::write_atomic;
pub use settings::{CatalogSettings, PlannerSettings};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rewards::ProgressionRules;

/// Project-local config location, relative to the working directory
pub const LOCAL_CONFIG_PATH: &str = ".fitquest/config.toml";

/// Legacy single-file config location
pub const LEGACY_CONFIG_FILE: &str = "fitquest.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// XP formula and level thresholds
    #[serde(default)]
    pub progression: ProgressionRules,

    /// Reference data location
    #[serde(default)]
    pub catalog: CatalogSettings,

    /// Workout generation
    #[serde(default)]
    pub planner: PlannerSettings,

    /// Directory of the file this config was read from
    #[serde(skip)]
    pub source_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.source_dir = path.parent().map(Path::to_path_buf);

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a directory
    /// Looks for: .fitquest/config.toml (preferred) or fitquest.toml (legacy)
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let local_path = dir.join(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            return Self::from_file(&local_path);
        }

        let legacy_path = dir.join(LEGACY_CONFIG_FILE);
        if legacy_path.exists() {
            return Self::from_file(&legacy_path);
        }

        let global_path = Self::global_config_path();
        if global_path.exists() {
            return Self::from_file(&global_path);
        }

        Ok(Self::with_defaults())
    }

    /// Load from an explicit path if given, otherwise search `dir`
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Self::from_dir(dir),
        }
    }

    /// Create a config with the built-in defaults
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Resolved catalog directory, if one is configured
    pub fn catalog_dir(&self) -> Option<PathBuf> {
        let path = self.catalog.path.as_ref()?;
        if path.is_absolute() {
            return Some(path.clone());
        }
        Some(match &self.source_dir {
            Some(base) => base.join(path),
            None => path.clone(),
        })
    }

    /// Load the reference data this config points at
    pub fn load_catalog(&self) -> Catalog {
        match self.catalog_dir() {
            Some(dir) => Catalog::from_dir_or_builtin(&dir),
            None => DEFAULT_CATALOG.clone(),
        }
    }
}
