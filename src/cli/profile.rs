//! Local profile file

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use fitquest::config::write_atomic;
use fitquest::store::UserProfile;

/// Name used when no profile exists yet
pub fn default_username() -> String {
    std::env::var("USER")
        .ok()
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| "athlete".to_string())
}

/// Read the profile at `path`, or start a fresh one if the file is missing
pub fn load_or_new(path: &Path) -> Result<UserProfile> {
    if !path.exists() {
        debug!("No profile at {}, starting fresh", path.display());
        return Ok(UserProfile::new(1, &default_username()));
    }
    load(path)
}

pub fn load(path: &Path) -> Result<UserProfile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse profile: {}", path.display()))
}

pub fn save(path: &Path, profile: &UserProfile) -> Result<()> {
    let content =
        serde_json::to_string_pretty(profile).with_context(|| "Failed to serialize profile")?;
    write_atomic(path, content.as_bytes())?;
    debug!("Saved profile to {}", path.display());
    Ok(())
}
