//! A user's progression record: state plus workout history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Catalog;
use crate::domain::{Exercise, UserId, UserProgressState, WorkoutLogEntry};
use crate::rewards::{
    apply_workout_completion, is_active, BadgeDefinition, ProgressionRules, QuestBoard,
    RewardsResult,
};

/// Default number of entries in a recent-history view
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub state: UserProgressState,
    /// Completed workouts, oldest first
    #[serde(default)]
    pub history: Vec<WorkoutLogEntry>,
}

impl UserProfile {
    /// Profile of a freshly registered user
    pub fn new(id: UserId, username: &str) -> Self {
        Self {
            id,
            username: username.to_string(),
            state: UserProgressState::new(),
            history: Vec::new(),
        }
    }

    /// Record a finished workout and apply its rewards.
    ///
    /// The new entry is appended to history before the rewards run, and its
    /// `xp_gained` is filled in with the final total afterwards.
    pub fn complete_workout(
        &mut self,
        exercises: Vec<Exercise>,
        completed_at: DateTime<Utc>,
        catalog: &Catalog,
        rules: &ProgressionRules,
    ) -> RewardsResult {
        self.history
            .push(WorkoutLogEntry::new(self.id, completed_at, exercises));

        let result = {
            let history = self.history.as_slice();
            let latest = &history[history.len() - 1];
            apply_workout_completion(&self.state, latest, history, catalog, rules)
        };

        if let Some(entry) = self.history.last_mut() {
            entry.xp_gained = result.xp_gained;
        }
        self.state = result.state.clone();
        result
    }

    pub fn total_workouts(&self) -> usize {
        self.history.len()
    }

    /// Newest first, at most `limit` entries
    pub fn recent_history(&self, limit: usize) -> Vec<&WorkoutLogEntry> {
        self.history.iter().rev().take(limit).collect()
    }

    pub fn snapshot(&self, catalog: &Catalog, rules: &ProgressionRules) -> ProgressSnapshot {
        let progress = rules.levels.progress(self.state.level, self.state.xp);
        let today = Utc::now().date_naive();
        ProgressSnapshot {
            user_id: self.id,
            username: self.username.clone(),
            level: progress.level,
            xp: progress.xp,
            xp_needed_for_next_level: progress.xp_needed_for_next_level,
            streak_count: self.state.streak_count,
            streak_active: is_active(self.state.last_workout_date, today),
            total_workouts: self.history.len(),
            unlocked_badges: catalog
                .badges
                .iter()
                .filter(|b| self.state.has_badge(&b.id))
                .cloned()
                .collect(),
        }
    }

    pub fn quest_board(&self, catalog: &Catalog) -> QuestBoard {
        QuestBoard::build(&self.state, &catalog.quests)
    }
}

/// Stats view of a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub user_id: UserId,
    pub username: String,
    pub level: u32,
    pub xp: u32,
    pub xp_needed_for_next_level: u32,
    pub streak_count: u32,
    /// Last workout was today or yesterday
    pub streak_active: bool,
    pub total_workouts: usize,
    /// Unlocked badges in catalog order; ids no longer in the catalog are left out
    pub unlocked_badges: Vec<BadgeDefinition>,
}
