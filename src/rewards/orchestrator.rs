//! Rewards orchestrator - core gamification flow
//!
//! Runs progression, quests, quest-XP re-leveling and badges in that order
//! and folds the results into one value. Nothing here touches storage; the
//! caller owns reading the prior state and writing the new one.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::badges::{evaluate_badges, BadgeDefinition};
use super::progression::{compute_progression, ProgressionRules};
use super::quests::{evaluate_quests, QuestDefinition};
use super::streaks::StreakChange;
use crate::config::Catalog;
use crate::domain::{UserProgressState, WorkoutLogEntry};

/// Everything one workout completion changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardsResult {
    /// State to persist in place of the prior one
    pub state: UserProgressState,
    /// Workout XP plus quest bonus XP
    pub xp_gained: u32,
    pub leveled_up: bool,
    pub previous_level: u32,
    pub streak_change: StreakChange,
    pub newly_completed_quests: Vec<QuestDefinition>,
    pub newly_earned_badges: Vec<BadgeDefinition>,
}

/// Events that can happen during a workout completion, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewardEvent {
    XpAwarded { amount: u32 },
    LevelUp { old_level: u32, new_level: u32 },
    StreakExtended { count: u32 },
    QuestCompleted(QuestDefinition),
    BadgeUnlocked(BadgeDefinition),
}

impl RewardsResult {
    /// Notifications for the client: XP first, quests before badges
    pub fn events(&self) -> Vec<RewardEvent> {
        let mut events = vec![RewardEvent::XpAwarded {
            amount: self.xp_gained,
        }];

        if self.leveled_up {
            events.push(RewardEvent::LevelUp {
                old_level: self.previous_level,
                new_level: self.state.level,
            });
        }

        if matches!(
            self.streak_change,
            StreakChange::Started | StreakChange::Extended
        ) {
            events.push(RewardEvent::StreakExtended {
                count: self.state.streak_count,
            });
        }

        events.extend(
            self.newly_completed_quests
                .iter()
                .cloned()
                .map(RewardEvent::QuestCompleted),
        );
        events.extend(
            self.newly_earned_badges
                .iter()
                .cloned()
                .map(RewardEvent::BadgeUnlocked),
        );
        events
    }

    pub fn quest_bonus_xp(&self) -> u32 {
        self.newly_completed_quests.iter().map(|q| q.reward_xp).sum()
    }
}

/// Apply one completed workout to `prior`.
///
/// `latest` is the entry just appended for this workout; `history` is the
/// user's full log and already contains it. The day of `latest` is the
/// streak's "today".
pub fn apply_workout_completion(
    prior: &UserProgressState,
    latest: &WorkoutLogEntry,
    history: &[WorkoutLogEntry],
    catalog: &Catalog,
    rules: &ProgressionRules,
) -> RewardsResult {
    // 1. Workout XP, level-ups and streak
    let progression = compute_progression(prior, &latest.exercise_list, latest.day(), rules);
    let mut state = progression.state;

    // 2. Quests against the latest workout only
    let quests = evaluate_quests(&state, latest, &catalog.quests);
    state.completed_quest_ids = quests.completed_quest_ids;

    // 3. Quest bonus XP through the same level-up loop
    let bonus = rules.levels.apply_xp(state.level, state.xp, quests.bonus_xp);
    state.level = bonus.level;
    state.xp = bonus.xp;
    let leveled_up = progression.leveled_up || bonus.leveled_up();

    // 4. Badges against the final stats
    let total_workouts = (history.len() as u64).max(1);
    let badges = evaluate_badges(&state, total_workouts, &catalog.badges);
    state.unlocked_badge_ids = badges.unlocked_badge_ids;

    let xp_gained = progression
        .xp_gained_before_bonus
        .saturating_add(quests.bonus_xp);

    debug!(
        user_id = latest.user_id,
        xp_gained,
        quest_bonus = quests.bonus_xp,
        level = state.level,
        streak = state.streak_count,
        "workout rewards computed"
    );
    if leveled_up {
        info!(
            user_id = latest.user_id,
            from = prior.level,
            to = state.level,
            "level up"
        );
    }
    for quest in &quests.newly_completed {
        info!(user_id = latest.user_id, quest = %quest.id, "quest completed");
    }
    for badge in &badges.newly_unlocked {
        info!(user_id = latest.user_id, badge = %badge.id, "badge unlocked");
    }

    RewardsResult {
        state,
        xp_gained,
        leveled_up,
        previous_level: prior.level,
        streak_change: progression.streak_change,
        newly_completed_quests: quests.newly_completed,
        newly_earned_badges: badges.newly_unlocked,
    }
}
