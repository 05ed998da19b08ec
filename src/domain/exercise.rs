use std::fmt;

use serde::{Deserialize, Serialize};

/// Muscle group an exercise trains
///
/// Names outside the canonical set deserialize to `Unknown`, which never
/// satisfies a muscle-group quest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Core,
    Arms,
    Shoulders,
    Cardio,
    #[default]
    #[serde(other)]
    Unknown,
}

impl MuscleGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "Chest",
            Self::Back => "Back",
            Self::Legs => "Legs",
            Self::Core => "Core",
            Self::Arms => "Arms",
            Self::Shoulders => "Shoulders",
            Self::Cardio => "Cardio",
            Self::Unknown => "Unknown",
        }
    }

    /// Parse a catalog name (case-insensitive)
    pub fn from_name(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "chest" => Self::Chest,
            "back" => Self::Back,
            "legs" => Self::Legs,
            "core" => Self::Core,
            "arms" => Self::Arms,
            "shoulders" => Self::Shoulders,
            "cardio" => Self::Cardio,
            _ => Self::Unknown,
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

/// Exercise reference data, as stored in `exercises.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub muscle_group: MuscleGroup,
    /// Equipment needed, "None" for bodyweight exercises
    #[serde(default = "default_equipment")]
    pub equipment: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub description: String,
}

fn default_equipment() -> String {
    "None".to_string()
}

impl Exercise {
    pub fn new(id: u32, name: &str, muscle_group: MuscleGroup, equipment: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            muscle_group,
            equipment: equipment.to_string(),
            difficulty: Difficulty::Beginner,
            description: String::new(),
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Case-insensitive equipment match
    pub fn uses_equipment(&self, equipment: &str) -> bool {
        self.equipment.eq_ignore_ascii_case(equipment.trim())
    }
}
