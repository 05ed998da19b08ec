//! Badge definitions and the badge evaluator
//!
//! Every badge is a threshold on one aggregate stat. Badges are checked after
//! quests and after quest XP has been applied, since the level and
//! quest-count criteria read those results.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::UserProgressState;

/// Aggregate stat a badge checks, with its threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCriterion", into = "RawCriterion")]
pub enum BadgeCriterion {
    TotalWorkouts(u64),
    LevelReached(u64),
    Streak(u64),
    QuestsCompleted(u64),
    /// Criterion type this build does not know; never met
    Unsupported(String),
}

impl BadgeCriterion {
    pub fn is_met_by(&self, stats: &BadgeStats) -> bool {
        match self {
            Self::TotalWorkouts(n) => stats.total_workouts >= *n,
            Self::LevelReached(n) => u64::from(stats.level) >= *n,
            Self::Streak(n) => u64::from(stats.streak) >= *n,
            Self::QuestsCompleted(n) => stats.quests_completed >= *n,
            Self::Unsupported(_) => false,
        }
    }
}

/// Wire shape: `{"type": "...", "value": N}`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawCriterion {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    value: serde_json::Value,
}

impl From<RawCriterion> for BadgeCriterion {
    fn from(raw: RawCriterion) -> Self {
        let Some(n) = raw.value.as_u64() else {
            return Self::Unsupported(raw.kind);
        };
        match raw.kind.as_str() {
            "total_workouts" => Self::TotalWorkouts(n),
            "level_reached" => Self::LevelReached(n),
            "streak" => Self::Streak(n),
            "quests_completed" => Self::QuestsCompleted(n),
            _ => Self::Unsupported(raw.kind),
        }
    }
}

impl From<BadgeCriterion> for RawCriterion {
    fn from(criterion: BadgeCriterion) -> Self {
        let (kind, value) = match criterion {
            BadgeCriterion::TotalWorkouts(n) => ("total_workouts".to_string(), n.into()),
            BadgeCriterion::LevelReached(n) => ("level_reached".to_string(), n.into()),
            BadgeCriterion::Streak(n) => ("streak".to_string(), n.into()),
            BadgeCriterion::QuestsCompleted(n) => ("quests_completed".to_string(), n.into()),
            BadgeCriterion::Unsupported(kind) => (kind, serde_json::Value::Null),
        };
        RawCriterion { kind, value }
    }
}

/// Badge reference data, as stored in `badges.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeDefinition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub criterion: BadgeCriterion,
}

impl BadgeDefinition {
    pub fn new(id: &str, criterion: BadgeCriterion) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            image_url: String::new(),
            criterion,
        }
    }

    pub fn with_text(mut self, name: &str, description: &str) -> Self {
        self.name = name.to_string();
        self.description = description.to_string();
        self
    }

    pub fn with_image(mut self, image_url: &str) -> Self {
        self.image_url = image_url.to_string();
        self
    }
}

/// The aggregate stats badges are checked against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BadgeStats {
    pub total_workouts: u64,
    pub level: u32,
    pub streak: u32,
    pub quests_completed: u64,
}

impl BadgeStats {
    pub fn from_state(state: &UserProgressState, total_workouts: u64) -> Self {
        Self {
            total_workouts,
            level: state.level,
            streak: state.streak_count,
            quests_completed: state.quests_completed() as u64,
        }
    }
}

/// Output of [`evaluate_badges`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeEvaluation {
    /// Newly unlocked badges, in catalog order
    pub newly_unlocked: Vec<BadgeDefinition>,
    /// Unlocked set with the new ids added
    pub unlocked_badge_ids: BTreeSet<String>,
}

impl BadgeEvaluation {
    pub fn new_badge_ids(&self) -> Vec<&str> {
        self.newly_unlocked.iter().map(|b| b.id.as_str()).collect()
    }
}

/// Find the badges the user's final stats unlock.
pub fn evaluate_badges(
    state: &UserProgressState,
    total_workouts: u64,
    catalog: &[BadgeDefinition],
) -> BadgeEvaluation {
    let stats = BadgeStats::from_state(state, total_workouts);
    let mut unlocked = state.unlocked_badge_ids.clone();
    let mut newly_unlocked = Vec::new();

    for badge in catalog {
        if unlocked.contains(&badge.id) {
            continue;
        }
        if badge.criterion.is_met_by(&stats) {
            unlocked.insert(badge.id.clone());
            newly_unlocked.push(badge.clone());
        }
    }

    BadgeEvaluation {
        newly_unlocked,
        unlocked_badge_ids: unlocked,
    }
}
