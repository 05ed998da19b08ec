//! Quest definitions and the quest evaluator
//!
//! Quests are one-time goals checked against the workout that was just
//! completed. Once a quest id is in the completed set it is never checked
//! again, for daily and weekly quests alike.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{MuscleGroup, UserProgressState, WorkoutLogEntry};

/// Recurrence label shown to the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestKind {
    #[default]
    Daily,
    Weekly,
}

impl QuestKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily Quests",
            Self::Weekly => "Weekly Quests",
        }
    }
}

/// Condition a workout must meet to complete a quest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCriterion", into = "RawCriterion")]
pub enum QuestCriterion {
    /// Met by any completed workout
    FirstWorkoutOfDay,
    /// Met when the workout has an exercise for one of these groups
    MuscleGroupInWorkout(BTreeSet<MuscleGroup>),
    /// Criterion type this build does not know; never met
    Unsupported(String),
}

impl QuestCriterion {
    pub fn muscle_groups<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = MuscleGroup>,
    {
        Self::MuscleGroupInWorkout(groups.into_iter().collect())
    }

    /// Check the criterion against the latest workout only
    pub fn is_met_by(&self, entry: &WorkoutLogEntry) -> bool {
        match self {
            Self::FirstWorkoutOfDay => true,
            Self::MuscleGroupInWorkout(targets) => entry
                .exercise_list
                .iter()
                .any(|ex| ex.muscle_group.is_known() && targets.contains(&ex.muscle_group)),
            Self::Unsupported(_) => false,
        }
    }
}

/// Wire shape: `{"type": "...", "value": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawCriterion {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    value: serde_json::Value,
}

impl From<RawCriterion> for QuestCriterion {
    fn from(raw: RawCriterion) -> Self {
        match raw.kind.as_str() {
            "first_workout_of_day" => Self::FirstWorkoutOfDay,
            "muscle_group_in_workout" => {
                let names: Vec<&str> = match &raw.value {
                    serde_json::Value::String(s) => vec![s.as_str()],
                    serde_json::Value::Array(items) => {
                        items.iter().filter_map(|v| v.as_str()).collect()
                    }
                    _ => Vec::new(),
                };
                Self::muscle_groups(names.into_iter().map(MuscleGroup::from_name))
            }
            other => Self::Unsupported(other.to_string()),
        }
    }
}

impl From<QuestCriterion> for RawCriterion {
    fn from(criterion: QuestCriterion) -> Self {
        match criterion {
            QuestCriterion::FirstWorkoutOfDay => RawCriterion {
                kind: "first_workout_of_day".to_string(),
                value: serde_json::Value::Null,
            },
            QuestCriterion::MuscleGroupInWorkout(groups) => RawCriterion {
                kind: "muscle_group_in_workout".to_string(),
                value: groups.iter().map(|g| g.as_str()).collect(),
            },
            QuestCriterion::Unsupported(kind) => RawCriterion {
                kind,
                value: serde_json::Value::Null,
            },
        }
    }
}

/// Quest reference data, as stored in `quests.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestDefinition {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: QuestKind,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub criterion: QuestCriterion,
    #[serde(default)]
    pub reward_xp: u32,
}

impl QuestDefinition {
    pub fn new(id: &str, kind: QuestKind, criterion: QuestCriterion, reward_xp: u32) -> Self {
        Self {
            id: id.to_string(),
            kind,
            title: id.to_string(),
            description: String::new(),
            criterion,
            reward_xp,
        }
    }

    pub fn with_text(mut self, title: &str, description: &str) -> Self {
        self.title = title.to_string();
        self.description = description.to_string();
        self
    }
}

/// Output of [`evaluate_quests`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestEvaluation {
    /// Newly satisfied quests, in catalog order
    pub newly_completed: Vec<QuestDefinition>,
    /// Sum of `reward_xp` over `newly_completed`
    pub bonus_xp: u32,
    /// Completed set with the new ids added
    pub completed_quest_ids: BTreeSet<String>,
}

impl QuestEvaluation {
    pub fn new_quest_ids(&self) -> Vec<&str> {
        self.newly_completed.iter().map(|q| q.id.as_str()).collect()
    }
}

/// Find the quests the latest workout completes.
///
/// Quests already in `state.completed_quest_ids` are skipped, so the set
/// only ever grows.
pub fn evaluate_quests(
    state: &UserProgressState,
    latest: &WorkoutLogEntry,
    catalog: &[QuestDefinition],
) -> QuestEvaluation {
    let mut completed = state.completed_quest_ids.clone();
    let mut newly_completed = Vec::new();
    let mut bonus_xp = 0u32;

    for quest in catalog {
        if completed.contains(&quest.id) {
            continue;
        }
        if quest.criterion.is_met_by(latest) {
            completed.insert(quest.id.clone());
            bonus_xp = bonus_xp.saturating_add(quest.reward_xp);
            newly_completed.push(quest.clone());
        }
    }

    QuestEvaluation {
        newly_completed,
        bonus_xp,
        completed_quest_ids: completed,
    }
}

/// A quest together with the user's completion flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestStatus {
    #[serde(flatten)]
    pub quest: QuestDefinition,
    pub completed: bool,
}

/// Quest list split by recurrence, catalog order kept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestBoard {
    pub daily: Vec<QuestStatus>,
    pub weekly: Vec<QuestStatus>,
}

impl QuestBoard {
    pub fn build(state: &UserProgressState, catalog: &[QuestDefinition]) -> Self {
        let mut board = Self::default();
        for quest in catalog {
            let status = QuestStatus {
                quest: quest.clone(),
                completed: state.has_completed_quest(&quest.id),
            };
            match quest.kind {
                QuestKind::Daily => board.daily.push(status),
                QuestKind::Weekly => board.weekly.push(status),
            }
        }
        board
    }

    pub fn completed_count(&self) -> usize {
        self.daily
            .iter()
            .chain(self.weekly.iter())
            .filter(|s| s.completed)
            .count()
    }
}
