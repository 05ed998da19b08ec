//! Progression calculator
//!
//! Turns one completed workout into XP, level-ups and a streak update.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::levels::{LevelThresholdTable, XpRewards};
use super::streaks::{update_streak, StreakChange};
use crate::domain::{Exercise, UserProgressState};

/// Immutable rules the progression step runs against
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionRules {
    #[serde(flatten)]
    pub xp: XpRewards,
    #[serde(default)]
    pub levels: LevelThresholdTable,
}

/// Output of [`compute_progression`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progression {
    pub state: UserProgressState,
    /// XP from the workout itself, before any quest bonus
    pub xp_gained_before_bonus: u32,
    pub leveled_up: bool,
    pub streak_change: StreakChange,
}

/// Apply the workout's XP and the streak rule to `state`.
///
/// Quest and badge sets are carried over untouched.
pub fn compute_progression(
    state: &UserProgressState,
    exercises: &[Exercise],
    today: NaiveDate,
    rules: &ProgressionRules,
) -> Progression {
    let gained = rules.xp.workout_xp(exercises.len());
    let outcome = rules.levels.apply_xp(state.level, state.xp, gained);
    if outcome.leveled_up() {
        trace!(
            from = state.level,
            to = outcome.level,
            "workout XP crossed level threshold"
        );
    }

    let streak = update_streak(state.streak_count, state.last_workout_date, today);

    let mut next = state.clone();
    next.level = outcome.level;
    next.xp = outcome.xp;
    next.streak_count = streak.streak_count;
    next.last_workout_date = Some(streak.last_workout_date);

    Progression {
        state: next,
        xp_gained_before_bonus: gained,
        leveled_up: outcome.leveled_up(),
        streak_change: streak.change,
    }
}
