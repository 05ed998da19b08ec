//! Gamification engine: XP, Levels, Streaks, Quests and Badges
//!
//! Pure, synchronous computation. One call to
//! [`apply_workout_completion`] handles one workout for one user; callers
//! must serialize calls per user (see [`crate::store::ProgressStore`]).

mod badges;
mod levels;
mod orchestrator;
mod progression;
mod quests;
mod streaks;

pub use badges::{evaluate_badges, BadgeCriterion, BadgeDefinition, BadgeEvaluation, BadgeStats};
pub use levels::{
    LevelOutcome, LevelProgress, LevelThresholdTable, XpRewards, DEFAULT_LEVEL_THRESHOLD,
    DEFAULT_THRESHOLDS,
};
pub use orchestrator::{apply_workout_completion, RewardEvent, RewardsResult};
pub use progression::{compute_progression, Progression, ProgressionRules};
pub use quests::{
    evaluate_quests, QuestBoard, QuestCriterion, QuestDefinition, QuestEvaluation, QuestKind,
    QuestStatus,
};
pub use streaks::{is_active, update_streak, StreakChange, StreakUpdate};
