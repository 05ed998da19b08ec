//! Level-up carry and quest bonus re-leveling

use fitquest::domain::{Exercise, MuscleGroup, UserProgressState, WorkoutLogEntry};
use fitquest::rewards::{
    apply_workout_completion, compute_progression, LevelThresholdTable, ProgressionRules,
    QuestCriterion, QuestDefinition, QuestKind,
};

use crate::common::{catalog_with, may};

fn workout(count: usize) -> Vec<Exercise> {
    vec![Exercise::new(4, "Plank", MuscleGroup::Core, "None"); count]
}

#[test]
fn test_xp_stays_below_threshold_after_progression() {
    let rules = ProgressionRules::default();
    for level in 1..=12 {
        for xp in [0, 50, 99, 740, 999] {
            let state = UserProgressState {
                level,
                xp: xp.min(rules.levels.threshold(level) - 1),
                ..UserProgressState::new()
            };
            for count in [0, 1, 5, 20, 200] {
                let out = compute_progression(&state, &workout(count), may(1).date_naive(), &rules);
                assert!(
                    out.state.xp < rules.levels.threshold(out.state.level),
                    "level {level} xp {xp} count {count}"
                );
                assert!(out.state.level >= level);
            }
        }
    }
}

#[test]
fn test_multi_level_jump_from_level_nine() {
    let rules = ProgressionRules::default();
    let state = UserProgressState {
        level: 9,
        xp: 740,
        ..UserProgressState::new()
    };

    // 50 + 20 * 5 = 150 -> 890, threshold(9) = 750
    let out = compute_progression(&state, &workout(20), may(1).date_naive(), &rules);
    assert_eq!(out.xp_gained_before_bonus, 150);
    assert_eq!(out.state.level, 10);
    assert_eq!(out.state.xp, 140);
    assert!(out.leveled_up);
}

#[test]
fn test_large_gain_crosses_several_levels() {
    let rules = ProgressionRules::default();
    let state = UserProgressState::new();

    // 50 + 100 * 5 = 550 = 100 + 150 + 200 + 100
    let out = compute_progression(&state, &workout(100), may(1).date_naive(), &rules);
    assert_eq!(out.state.level, 4);
    assert_eq!(out.state.xp, 100);
}

#[test]
fn test_quest_bonus_triggers_level_up() {
    let catalog = catalog_with(
        vec![QuestDefinition::new(
            "bonus",
            QuestKind::Daily,
            QuestCriterion::FirstWorkoutOfDay,
            20,
        )],
        vec![],
    );
    let rules = ProgressionRules {
        levels: LevelThresholdTable::new(vec![100, 150], 1000),
        ..ProgressionRules::default()
    };
    let prior = UserProgressState {
        xp: 40,
        ..UserProgressState::new()
    };
    // Base gain alone: 40 + 50 = 90, still level 1
    let entry = WorkoutLogEntry::new(1, may(1), vec![]);
    let history = vec![entry.clone()];

    let result = apply_workout_completion(&prior, &entry, &history, &catalog, &rules);

    assert_eq!(result.state.level, 2);
    assert_eq!(result.state.xp, 10);
    assert_eq!(result.xp_gained, 70);
    assert!(result.leveled_up);
}

#[test]
fn test_quest_bonus_from_ninety_xp() {
    let catalog = catalog_with(
        vec![QuestDefinition::new(
            "bonus",
            QuestKind::Daily,
            QuestCriterion::FirstWorkoutOfDay,
            20,
        )],
        vec![],
    );
    let rules = ProgressionRules::default();
    let prior = UserProgressState {
        xp: 90,
        ..UserProgressState::new()
    };
    let entry = WorkoutLogEntry::new(1, may(1), workout(1));
    let history = vec![entry.clone()];

    let result = apply_workout_completion(&prior, &entry, &history, &catalog, &rules);

    // 90 + 55 = 145 -> level 2 xp 45, bonus 20 -> xp 65
    assert_eq!(result.state.level, 2);
    assert_eq!(result.state.xp, 65);
    assert!(result.state.xp < rules.levels.threshold(result.state.level));
}

#[test]
fn test_custom_xp_formula() {
    let rules: ProgressionRules = toml::from_str(
        r#"
        base_xp = 10
        xp_per_exercise = 1
        "#,
    )
    .unwrap();
    let out = compute_progression(
        &UserProgressState::new(),
        &workout(3),
        may(1).date_naive(),
        &rules,
    );
    assert_eq!(out.xp_gained_before_bonus, 13);
    assert_eq!(rules.levels, LevelThresholdTable::default());
}
