//! Quest and badge sets only grow, and each unlock fires once

use fitquest::config::Catalog;
use fitquest::domain::{MuscleGroup, UserProgressState, WorkoutLogEntry};
use fitquest::rewards::{
    evaluate_badges, evaluate_quests, BadgeCriterion, BadgeDefinition, QuestCriterion,
    QuestDefinition, QuestKind,
};
use fitquest::store::UserProfile;

use crate::common::{exercises, may};

#[test]
fn test_quests_complete_once_ever() {
    let catalog = Catalog::builtin();
    let rules = Default::default();
    let mut profile = UserProfile::new(1, "sam");

    let first = profile.complete_workout(exercises(&["Squat"]), may(1), &catalog, &rules);
    let second = profile.complete_workout(exercises(&["Lunge"]), may(2), &catalog, &rules);

    let first_ids: Vec<_> = first.newly_completed_quests.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(first_ids, vec!["daily_first_workout", "weekly_leg_day"]);
    // Same criteria met again, nothing new
    assert!(second.newly_completed_quests.is_empty());
    assert_eq!(second.xp_gained, 55);
}

#[test]
fn test_completed_quests_survive_any_workout() {
    let quests = Catalog::builtin().quests;
    let mut state = UserProgressState::new();
    state.completed_quest_ids.insert("weekly_core".to_string());
    state.completed_quest_ids.insert("retired_quest".to_string());

    for names in [vec![], vec!["Push-up"], vec!["Plank", "Squat"]] {
        let entry = WorkoutLogEntry::new(1, may(5), exercises(&names));
        let eval = evaluate_quests(&state, &entry, &quests);
        assert!(eval.completed_quest_ids.is_superset(&state.completed_quest_ids));
        assert!(!eval.new_quest_ids().contains(&"weekly_core"));
        state.completed_quest_ids = eval.completed_quest_ids;
    }
    assert!(state.has_completed_quest("retired_quest"));
}

#[test]
fn test_unknown_muscle_group_never_matches() {
    let quest: QuestDefinition = serde_json::from_str(
        r#"{"id": "tail", "type": "weekly", "reward_xp": 10,
            "criterion": {"type": "muscle_group_in_workout", "value": "Tail"}}"#,
    )
    .unwrap();
    let mut odd = exercises(&["Squat"]);
    odd[0].muscle_group = MuscleGroup::Unknown;
    let entry = WorkoutLogEntry::new(1, may(1), odd);

    let eval = evaluate_quests(&UserProgressState::new(), &entry, &[quest]);
    assert!(eval.newly_completed.is_empty());
    assert_eq!(eval.bonus_xp, 0);
}

#[test]
fn test_unknown_criterion_types_are_ignored() {
    let quest: QuestDefinition = serde_json::from_str(
        r#"{"id": "moon", "type": "daily", "reward_xp": 10,
            "criterion": {"type": "run_on_the_moon"}}"#,
    )
    .unwrap();
    assert_eq!(
        quest.criterion,
        QuestCriterion::Unsupported("run_on_the_moon".to_string())
    );

    let badge: BadgeDefinition = serde_json::from_str(
        r#"{"id": "b", "criterion": {"type": "total_workouts", "value": "ten"}}"#,
    )
    .unwrap();
    assert_eq!(
        badge.criterion,
        BadgeCriterion::Unsupported("total_workouts".to_string())
    );
    let eval = evaluate_badges(&UserProgressState::new(), 1_000, &[badge]);
    assert!(eval.newly_unlocked.is_empty());
}

#[test]
fn test_badges_idempotent() {
    let badges = vec![
        BadgeDefinition::new("first", BadgeCriterion::TotalWorkouts(1)),
        BadgeDefinition::new("level_3", BadgeCriterion::LevelReached(3)),
    ];
    let state = UserProgressState {
        level: 3,
        ..UserProgressState::new()
    };

    let once = evaluate_badges(&state, 4, &badges);
    assert_eq!(once.new_badge_ids(), vec!["first", "level_3"]);

    let again_state = UserProgressState {
        unlocked_badge_ids: once.unlocked_badge_ids.clone(),
        ..state
    };
    let twice = evaluate_badges(&again_state, 4, &badges);
    assert!(twice.newly_unlocked.is_empty());
    assert_eq!(twice.unlocked_badge_ids, once.unlocked_badge_ids);
}

#[test]
fn test_badges_not_revoked() {
    let badges = vec![BadgeDefinition::new("streak_5", BadgeCriterion::Streak(5))];
    let mut state = UserProgressState::new();
    state.unlocked_badge_ids.insert("streak_5".to_string());
    state.streak_count = 1;

    let eval = evaluate_badges(&state, 1, &badges);
    assert!(eval.unlocked_badge_ids.contains("streak_5"));
}

#[test]
fn test_duplicate_quest_ids_pay_once() {
    let quests = vec![
        QuestDefinition::new("dup", QuestKind::Daily, QuestCriterion::FirstWorkoutOfDay, 20),
        QuestDefinition::new("dup", QuestKind::Weekly, QuestCriterion::FirstWorkoutOfDay, 50),
    ];
    let entry = WorkoutLogEntry::new(1, may(1), vec![]);
    let eval = evaluate_quests(&UserProgressState::new(), &entry, &quests);
    assert_eq!(eval.bonus_xp, 20);
    assert_eq!(eval.newly_completed.len(), 1);
}
