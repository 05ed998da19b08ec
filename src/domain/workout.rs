use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::Exercise;

/// Numeric user identifier assigned at registration
pub type UserId = u64;

/// One completed workout, appended to a user's history and never edited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutLogEntry {
    pub user_id: UserId,
    #[serde(rename = "date")]
    pub timestamp_utc: DateTime<Utc>,
    /// Exercises performed, in the order they were done
    #[serde(rename = "workout", default, deserialize_with = "lenient_exercises")]
    pub exercise_list: Vec<Exercise>,
    /// Total XP this workout earned, quest bonus included
    #[serde(default)]
    pub xp_gained: u32,
}

impl WorkoutLogEntry {
    pub fn new(user_id: UserId, timestamp_utc: DateTime<Utc>, exercise_list: Vec<Exercise>) -> Self {
        Self {
            user_id,
            timestamp_utc,
            exercise_list,
            xp_gained: 0,
        }
    }

    /// Calendar day (UTC) the workout was completed on
    pub fn day(&self) -> NaiveDate {
        self.timestamp_utc.date_naive()
    }

    pub fn exercise_count(&self) -> usize {
        self.exercise_list.len()
    }

    pub fn exercise_names(&self) -> Vec<&str> {
        self.exercise_list.iter().map(|e| e.name.as_str()).collect()
    }
}

/// Payload a client submits when a workout is finished
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    #[serde(rename = "userId", alias = "user_id")]
    pub user_id: UserId,
    #[serde(default, deserialize_with = "lenient_exercises")]
    pub workout: Vec<Exercise>,
}

/// Accept anything where an exercise list is expected.
///
/// A missing or non-list value yields an empty list and items that are not
/// exercise objects are dropped, so a malformed workout still counts as a
/// completed (empty) one.
fn lenient_exercises<'de, D>(deserializer: D) -> Result<Vec<Exercise>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(serde_json::Value::Array(items)) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter(|item| item.is_object())
        .filter_map(|item| serde_json::from_value::<Exercise>(item).ok())
        .collect())
}
