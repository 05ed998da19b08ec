//! Reference data: exercises, quests and badges
//!
//! The catalog is read-only for the engine. It is loaded once and passed
//! explicitly to every evaluator.

use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{Difficulty, Exercise, MuscleGroup};
use crate::rewards::{BadgeCriterion, BadgeDefinition, QuestCriterion, QuestDefinition, QuestKind};

pub const EXERCISES_FILE: &str = "exercises.json";
pub const QUESTS_FILE: &str = "quests.json";
pub const BADGES_FILE: &str = "badges.json";

/// Built-in catalog used when no data directory is configured
pub static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(Catalog::builtin);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    pub quests: Vec<QuestDefinition>,
    #[serde(default)]
    pub badges: Vec<BadgeDefinition>,
}

impl Catalog {
    /// Load `exercises.json`, `quests.json` and `badges.json` from `dir`.
    ///
    /// A missing file keeps the built-in data for that part. A file that
    /// exists but does not parse is an error.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let builtin = Self::builtin();
        let catalog = Self {
            exercises: load_part(dir, EXERCISES_FILE)?.unwrap_or(builtin.exercises),
            quests: load_part(dir, QUESTS_FILE)?.unwrap_or(builtin.quests),
            badges: load_part(dir, BADGES_FILE)?.unwrap_or(builtin.badges),
        };
        debug!(
            exercises = catalog.exercises.len(),
            quests = catalog.quests.len(),
            badges = catalog.badges.len(),
            "catalog loaded from {}",
            dir.display()
        );
        Ok(catalog)
    }

    /// Like [`Catalog::from_dir`], but falls back to the built-in catalog on
    /// any error.
    pub fn from_dir_or_builtin(dir: &Path) -> Self {
        match Self::from_dir(dir) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("Failed to load catalog, using built-in data: {:#}", e);
                Self::builtin()
            }
        }
    }

    /// Exercises usable with the given equipment (case-insensitive).
    /// `None` returns the whole list.
    pub fn exercises_for_equipment(&self, equipment: Option<&str>) -> Vec<&Exercise> {
        match equipment {
            Some(filter) => self
                .exercises
                .iter()
                .filter(|ex| ex.uses_equipment(filter))
                .collect(),
            None => self.exercises.iter().collect(),
        }
    }

    /// Look up an exercise by name (case-insensitive)
    pub fn exercise_by_name(&self, name: &str) -> Option<&Exercise> {
        let name = name.trim();
        self.exercises
            .iter()
            .find(|ex| ex.name.eq_ignore_ascii_case(name))
    }

    pub fn builtin() -> Self {
        Self {
            exercises: builtin_exercises(),
            quests: builtin_quests(),
            badges: builtin_badges(),
        }
    }
}

fn load_part<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Option<T>> {
    let path = dir.join(file);
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    let parsed = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;
    Ok(Some(parsed))
}

fn builtin_exercises() -> Vec<Exercise> {
    use Difficulty::*;
    use MuscleGroup::*;

    vec![
        Exercise::new(1, "Push-up", Chest, "None").with_description(
            "A classic bodyweight exercise that builds strength in the chest, shoulders, and triceps.",
        ),
        Exercise::new(2, "Squat", Legs, "None").with_description(
            "A fundamental lower body exercise that targets the quadriceps, hamstrings, and glutes.",
        ),
        Exercise::new(3, "Pull-up", Back, "Pull-up Bar")
            .with_difficulty(Intermediate)
            .with_description("An upper body exercise for building a wide, strong back and biceps."),
        Exercise::new(4, "Plank", Core, "None").with_description(
            "An isometric core exercise holding a push-up position for as long as possible.",
        ),
        Exercise::new(5, "Dumbbell Bicep Curl", Arms, "Dumbbells")
            .with_description("An isolation exercise that targets the biceps."),
        Exercise::new(6, "Dumbbell Shoulder Press", Shoulders, "Dumbbells")
            .with_difficulty(Intermediate)
            .with_description("A compound exercise for building shoulder strength and size."),
        Exercise::new(7, "Lunge", Legs, "None").with_description(
            "A single-leg bodyweight exercise that works the quadriceps, glutes, and hamstrings.",
        ),
        Exercise::new(8, "Barbell Deadlift", Back, "Barbell")
            .with_difficulty(Advanced)
            .with_description("A full-body compound lift for the back, legs, and grip."),
        Exercise::new(9, "Running (Treadmill)", Cardio, "None")
            .with_description("Steady cardio for endurance and heart health."),
    ]
}

fn builtin_quests() -> Vec<QuestDefinition> {
    vec![
        QuestDefinition::new(
            "daily_first_workout",
            QuestKind::Daily,
            QuestCriterion::FirstWorkoutOfDay,
            20,
        )
        .with_text("Show Up", "Complete any workout today."),
        QuestDefinition::new(
            "daily_upper_body",
            QuestKind::Daily,
            QuestCriterion::muscle_groups([
                MuscleGroup::Chest,
                MuscleGroup::Back,
                MuscleGroup::Shoulders,
                MuscleGroup::Arms,
            ]),
            30,
        )
        .with_text("Upper Body Push", "Include an upper body exercise in a workout."),
        QuestDefinition::new(
            "weekly_leg_day",
            QuestKind::Weekly,
            QuestCriterion::muscle_groups([MuscleGroup::Legs]),
            50,
        )
        .with_text("Never Skip Leg Day", "Include a leg exercise in a workout."),
        QuestDefinition::new(
            "weekly_core",
            QuestKind::Weekly,
            QuestCriterion::muscle_groups([MuscleGroup::Core]),
            40,
        )
        .with_text("Core Strength", "Include a core exercise in a workout."),
        QuestDefinition::new(
            "weekly_cardio",
            QuestKind::Weekly,
            QuestCriterion::muscle_groups([MuscleGroup::Cardio]),
            40,
        )
        .with_text("Heart Pumper", "Include a cardio exercise in a workout."),
    ]
}

fn builtin_badges() -> Vec<BadgeDefinition> {
    let img = |file: &str| format!("assets/images/badges/{file}");
    vec![
        BadgeDefinition::new("first_step", BadgeCriterion::TotalWorkouts(1))
            .with_text("First Step", "Complete your first workout.")
            .with_image(&img("first_step.png")),
        BadgeDefinition::new("warrior", BadgeCriterion::TotalWorkouts(10))
            .with_text("Warrior", "Complete 10 workouts.")
            .with_image(&img("warrior.png")),
        BadgeDefinition::new("veteran", BadgeCriterion::TotalWorkouts(50))
            .with_text("Veteran", "Complete 50 workouts.")
            .with_image(&img("veteran.png")),
        BadgeDefinition::new("level_5", BadgeCriterion::LevelReached(5))
            .with_text("Level 5", "Reach level 5.")
            .with_image(&img("level_5.png")),
        BadgeDefinition::new("level_10", BadgeCriterion::LevelReached(10))
            .with_text("Level 10", "Reach level 10.")
            .with_image(&img("level_10.png")),
        BadgeDefinition::new("streak_7", BadgeCriterion::Streak(7))
            .with_text("Week Warrior", "Work out 7 days in a row.")
            .with_image(&img("streak_7.png")),
        BadgeDefinition::new("streak_30", BadgeCriterion::Streak(30))
            .with_text("Monthly Master", "Work out 30 days in a row.")
            .with_image(&img("streak_30.png")),
        BadgeDefinition::new("quest", BadgeCriterion::QuestsCompleted(3))
            .with_text("Quest Seeker", "Complete 3 quests.")
            .with_image(&img("quest.png")),
    ]
}
