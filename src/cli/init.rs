//! Init command implementation

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use fitquest::config::{write_atomic, LOCAL_CONFIG_PATH};
use fitquest::store::UserProfile;

use super::profile;

/// Default configuration content for fitquest init
pub const DEFAULT_CONFIG: &str = r#"# fitquest configuration
# =====================
#
# Every key is optional. Remove a line to fall back to the built-in value.

# ============================================================================
# PROGRESSION - XP formula and level curve
# ============================================================================
#
#   base_xp          - XP for any completed workout (default: 50)
#   xp_per_exercise  - Extra XP per exercise in the workout (default: 5)

[progression]
base_xp = 50
xp_per_exercise = 5

# thresholds[0] is the XP needed to leave level 1, thresholds[1] level 2, ...
# Levels past the end of the list use default_threshold.
[progression.levels]
thresholds = [100, 150, 200, 250, 300, 400, 500, 600, 750, 1000]
default_threshold = 1000

# ============================================================================
# CATALOG - Exercises, quests and badges
# ============================================================================
#
# Point `path` at a directory holding exercises.json, quests.json and
# badges.json. Relative paths resolve against this file's directory.
# Missing files keep the built-in data.

[catalog]
# path = "data"

# ============================================================================
# PLANNER - Workout suggestions
# ============================================================================

[planner]
workout_size = 5
strength_goal = "Build Strength"
strength_focus_groups = ["Chest", "Back", "Legs"]
default_equipment = ["None"]
"#;

/// Write a commented default config and create the profile if needed
pub async fn init_command(
    work_dir: &Path,
    config_path: Option<PathBuf>,
    profile_path: &Path,
    name: Option<String>,
    force: bool,
) -> Result<()> {
    let config_path = config_path.unwrap_or_else(|| work_dir.join(LOCAL_CONFIG_PATH));

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    write_atomic(&config_path, DEFAULT_CONFIG.as_bytes())?;
    println!("Created: {}", config_path.display());

    let profile_path = if profile_path.is_absolute() {
        profile_path.to_path_buf()
    } else {
        work_dir.join(profile_path)
    };

    if profile_path.exists() {
        info!("Keeping existing profile {}", profile_path.display());
    } else {
        let name = name.unwrap_or_else(profile::default_username);
        profile::save(&profile_path, &UserProfile::new(1, &name))?;
        println!("Created: {} ({})", profile_path.display(), name);
    }

    Ok(())
}
