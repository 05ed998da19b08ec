//! CLI command implementations

pub mod complete;
pub mod exercises;
pub mod history;
pub mod init;
pub mod plan;
pub mod profile;
pub mod quests;
pub mod stats;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fitquest::config::{Catalog, Config};
use fitquest::store::ProgressStore;

/// Loaded configuration shared by every command
pub struct Context {
    pub config: Config,
    pub catalog: Catalog,
    pub profile_path: PathBuf,
}

impl Context {
    pub fn load(work_dir: &Path, config_path: Option<&Path>, profile_path: &Path) -> Result<Self> {
        let config = Config::load(config_path, work_dir)?;
        let catalog = config.load_catalog();
        let profile_path = if profile_path.is_absolute() {
            profile_path.to_path_buf()
        } else {
            work_dir.join(profile_path)
        };

        Ok(Self {
            config,
            catalog,
            profile_path,
        })
    }

    /// Store holding just the local profile
    pub fn store(&self, profile: fitquest::store::UserProfile) -> ProgressStore {
        ProgressStore::with_profiles(
            vec![profile],
            Arc::new(self.catalog.clone()),
            Arc::new(self.config.progression.clone()),
        )
    }
}

/// Display name, or the id when the catalog entry has none
pub(crate) fn display_name<'a>(name: &'a str, id: &'a str) -> &'a str {
    if name.trim().is_empty() { id } else { name }
}
