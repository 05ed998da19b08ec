use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user's progression state between two workout completions
///
/// Invariant: `xp` is always below the threshold of `level`. Only the
/// rewards orchestrator produces new values of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgressState {
    #[serde(default = "first_level")]
    pub level: u32,
    #[serde(default)]
    pub xp: u32,
    #[serde(default)]
    pub streak_count: u32,
    #[serde(default)]
    pub last_workout_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed_quest_ids: BTreeSet<String>,
    #[serde(default, rename = "unlocked_badges")]
    pub unlocked_badge_ids: BTreeSet<String>,
}

fn first_level() -> u32 {
    1
}

impl Default for UserProgressState {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            streak_count: 0,
            last_workout_date: None,
            completed_quest_ids: BTreeSet::new(),
            unlocked_badge_ids: BTreeSet::new(),
        }
    }
}

impl UserProgressState {
    /// State of a freshly registered user
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_completed_quest(&self, id: &str) -> bool {
        self.completed_quest_ids.contains(id)
    }

    pub fn has_badge(&self, id: &str) -> bool {
        self.unlocked_badge_ids.contains(id)
    }

    pub fn quests_completed(&self) -> usize {
        self.completed_quest_ids.len()
    }
}
