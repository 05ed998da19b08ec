//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::MuscleGroup;

/// Where reference data comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Directory with `exercises.json`, `quests.json` and `badges.json`.
    /// Relative paths resolve against the config file's directory.
    /// When unset the built-in catalog is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Workout generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerSettings {
    /// Number of exercises in a generated workout
    #[serde(default = "default_workout_size")]
    pub workout_size: usize,

    /// Goal that triggers the focus-group pass
    #[serde(default = "default_strength_goal")]
    pub strength_goal: String,

    /// Groups that get one exercise each for the strength goal
    #[serde(default = "default_strength_focus_groups")]
    pub strength_focus_groups: Vec<MuscleGroup>,

    /// Equipment assumed when the user lists none
    #[serde(default = "default_equipment")]
    pub default_equipment: Vec<String>,
}

fn default_workout_size() -> usize {
    5
}

fn default_strength_goal() -> String {
    "Build Strength".to_string()
}

fn default_strength_focus_groups() -> Vec<MuscleGroup> {
    vec![MuscleGroup::Chest, MuscleGroup::Back, MuscleGroup::Legs]
}

fn default_equipment() -> Vec<String> {
    vec!["None".to_string()]
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            workout_size: default_workout_size(),
            strength_goal: default_strength_goal(),
            strength_focus_groups: default_strength_focus_groups(),
            default_equipment: default_equipment(),
        }
    }
}
