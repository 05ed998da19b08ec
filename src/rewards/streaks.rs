//! Streak tracking system
//!
//! Tracks consecutive calendar days with at least one completed workout.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// What a workout did to the daily streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakChange {
    /// First workout ever
    Started,
    /// Workout on the day after the previous one
    Extended,
    /// Gap of two or more days
    Reset,
    /// Another workout on the same day (or a date before the last one)
    Unchanged,
}

impl StreakChange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::Extended => "extended",
            Self::Reset => "reset",
            Self::Unchanged => "unchanged",
        }
    }
}

/// New streak values after one workout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakUpdate {
    pub streak_count: u32,
    pub last_workout_date: NaiveDate,
    pub change: StreakChange,
}

/// Apply one workout completed on `today` to the streak.
///
/// Only the date branches touch the count: a second workout on the same day
/// leaves it as is. The last-workout date always becomes `today`.
pub fn update_streak(
    streak_count: u32,
    last_workout_date: Option<NaiveDate>,
    today: NaiveDate,
) -> StreakUpdate {
    let (streak_count, change) = match last_workout_date {
        None => (1, StreakChange::Started),
        Some(last) if last.checked_add_days(Days::new(1)) == Some(today) => {
            (streak_count.saturating_add(1), StreakChange::Extended)
        }
        Some(last) if today > last => (1, StreakChange::Reset),
        Some(_) => (streak_count, StreakChange::Unchanged),
    };

    StreakUpdate {
        streak_count,
        last_workout_date: today,
        change,
    }
}

/// Whether a streak is still alive on `today` (activity today or yesterday)
pub fn is_active(last_workout_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    let Some(last) = last_workout_date else {
        return false;
    };
    let days_since = (today - last).num_days();
    (0..=1).contains(&days_since)
}
