//! Streak rules through the full completion flow

use chrono::{Duration, NaiveDate};

use fitquest::config::Catalog;
use fitquest::domain::{UserProgressState, WorkoutLogEntry};
use fitquest::rewards::{
    apply_workout_completion, is_active, update_streak, ProgressionRules, StreakChange,
};
use fitquest::store::UserProfile;

use crate::common::{exercises, may};

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, n).unwrap()
}

#[test]
fn test_same_day_second_workout_keeps_streak() {
    let catalog = Catalog::builtin();
    let rules = ProgressionRules::default();
    let mut profile = UserProfile::new(1, "sam");

    let first = profile.complete_workout(exercises(&["Squat"]), may(1), &catalog, &rules);
    let second = profile.complete_workout(
        exercises(&["Plank"]),
        may(1) + Duration::hours(9),
        &catalog,
        &rules,
    );

    assert_eq!(first.state.streak_count, 1);
    assert_eq!(second.state.streak_count, 1);
    assert_eq!(second.streak_change, StreakChange::Unchanged);
    assert_eq!(second.state.last_workout_date, Some(day(1)));
}

#[test]
fn test_consecutive_days_increment_by_one() {
    let catalog = Catalog::builtin();
    let rules = ProgressionRules::default();
    let mut profile = UserProfile::new(1, "sam");

    for n in 1..=7 {
        let result = profile.complete_workout(exercises(&["Push-up"]), may(n), &catalog, &rules);
        assert_eq!(result.state.streak_count, n);
    }
    assert!(profile.state.has_badge("streak_7"));
}

#[test]
fn test_gap_resets_to_one() {
    let catalog = Catalog::builtin();
    let rules = ProgressionRules::default();
    let prior = UserProgressState {
        streak_count: 12,
        last_workout_date: Some(day(1)),
        ..UserProgressState::new()
    };
    let entry = WorkoutLogEntry::new(1, may(4), vec![]);
    let history = vec![entry.clone()];

    let result = apply_workout_completion(&prior, &entry, &history, &catalog, &rules);

    assert_eq!(result.state.streak_count, 1);
    assert_eq!(result.streak_change, StreakChange::Reset);
    assert_eq!(result.state.last_workout_date, Some(day(4)));
}

#[test]
fn test_month_boundary_is_consecutive() {
    let last = NaiveDate::from_ymd_opt(2024, 4, 30).unwrap();
    let update = update_streak(3, Some(last), day(1));
    assert_eq!(update.streak_count, 4);
    assert_eq!(update.change, StreakChange::Extended);
}

#[test]
fn test_earlier_day_leaves_count_but_moves_date() {
    let update = update_streak(5, Some(day(10)), day(8));
    assert_eq!(update.streak_count, 5);
    assert_eq!(update.change, StreakChange::Unchanged);
    assert_eq!(update.last_workout_date, day(8));
}

#[test]
fn test_streak_activity_window() {
    assert!(is_active(Some(day(9)), day(10)));
    assert!(is_active(Some(day(10)), day(10)));
    assert!(!is_active(Some(day(7)), day(10)));
    assert!(!is_active(None, day(10)));
}
