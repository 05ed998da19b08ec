//! Whole completion flow against the built-in catalog

use fitquest::config::Catalog;
use fitquest::domain::{UserProgressState, WorkoutLogEntry};
use fitquest::rewards::{
    apply_workout_completion, ProgressionRules, QuestCriterion, QuestDefinition, QuestKind,
    RewardEvent, StreakChange,
};

use crate::common::{catalog_with, exercises, may};

#[test]
fn test_new_user_five_exercise_workout() {
    // Only the first-workout quest, no badges
    let catalog = catalog_with(
        vec![QuestDefinition::new(
            "daily_first_workout",
            QuestKind::Daily,
            QuestCriterion::FirstWorkoutOfDay,
            20,
        )],
        vec![],
    );
    let rules = ProgressionRules::default();
    let entry = WorkoutLogEntry::new(
        1,
        may(1),
        exercises(&["Push-up", "Squat", "Plank", "Lunge", "Running (Treadmill)"]),
    );
    let history = vec![entry.clone()];

    let result = apply_workout_completion(
        &UserProgressState::new(),
        &entry,
        &history,
        &catalog,
        &rules,
    );

    // 50 + 5 * 5 = 75, then +20 from the quest
    assert_eq!(result.xp_gained, 95);
    assert_eq!(result.state.level, 1);
    assert_eq!(result.state.xp, 95);
    assert_eq!(result.state.streak_count, 1);
    assert_eq!(result.streak_change, StreakChange::Started);
    assert!(result.state.has_completed_quest("daily_first_workout"));
    assert!(!result.leveled_up);
}

#[test]
fn test_new_user_builtin_catalog() {
    let catalog = Catalog::builtin();
    let rules = ProgressionRules::default();
    let entry = WorkoutLogEntry::new(
        1,
        may(1),
        exercises(&["Push-up", "Squat", "Plank", "Lunge", "Running (Treadmill)"]),
    );
    let history = vec![entry.clone()];

    let result = apply_workout_completion(
        &UserProgressState::new(),
        &entry,
        &history,
        &catalog,
        &rules,
    );

    // Every built-in quest is satisfied: 75 + 20 + 30 + 50 + 40 + 40 = 255
    assert_eq!(result.newly_completed_quests.len(), 5);
    assert_eq!(result.quest_bonus_xp(), 180);
    assert_eq!(result.xp_gained, 255);
    // 255 - 100 (level 1) - 150 (level 2)
    assert_eq!(result.state.level, 3);
    assert_eq!(result.state.xp, 5);
    assert!(result.leveled_up);

    let badge_ids: Vec<_> = result
        .newly_earned_badges
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(badge_ids, vec!["first_step", "quest"]);

    let events = result.events();
    assert_eq!(events[0], RewardEvent::XpAwarded { amount: 255 });
    assert_eq!(
        events[1],
        RewardEvent::LevelUp {
            old_level: 1,
            new_level: 3
        }
    );
    assert_eq!(events[2], RewardEvent::StreakExtended { count: 1 });
    assert_eq!(events.len(), 3 + 5 + 2);
    assert!(matches!(events.last(), Some(RewardEvent::BadgeUnlocked(b)) if b.id == "quest"));
}

#[test]
fn test_empty_workout_still_counts() {
    let catalog = Catalog::builtin();
    let rules = ProgressionRules::default();
    let entry = WorkoutLogEntry::new(1, may(2), vec![]);
    let history = vec![entry.clone()];

    let result = apply_workout_completion(
        &UserProgressState::new(),
        &entry,
        &history,
        &catalog,
        &rules,
    );

    // Base XP plus the first-workout quest; no muscle group quests
    assert_eq!(result.xp_gained, 70);
    assert_eq!(result.newly_completed_quests.len(), 1);
    assert_eq!(result.state.streak_count, 1);
    assert!(result.state.has_badge("first_step"));
}

#[test]
fn test_completion_payload_shape() {
    let catalog = Catalog::builtin();
    let rules = ProgressionRules::default();
    let entry = WorkoutLogEntry::new(1, may(3), exercises(&["Squat"]));
    let history = vec![entry.clone()];
    let result =
        apply_workout_completion(&UserProgressState::new(), &entry, &history, &catalog, &rules);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["xp_gained"], 125);
    assert_eq!(json["leveled_up"], true);
    assert!(json["newly_completed_quests"].is_array());
    assert!(json["newly_earned_badges"].is_array());
    assert_eq!(json["state"]["unlocked_badges"], serde_json::json!(["first_step"]));
}
