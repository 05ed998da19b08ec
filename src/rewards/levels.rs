//! XP and Level system
//!
//! Defines level thresholds and the level-up loop shared by the base
//! progression step and the quest bonus step.

use serde::{Deserialize, Serialize};

/// XP required to advance past levels 1..=10
pub const DEFAULT_THRESHOLDS: [u32; 10] = [100, 150, 200, 250, 300, 400, 500, 600, 750, 1000];

/// Threshold for every level beyond the table
pub const DEFAULT_LEVEL_THRESHOLD: u32 = 1000;

/// Level -> XP needed to advance from that level.
///
/// Entry `i` of `thresholds` belongs to level `i + 1`; levels past the end
/// use `default_threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelThresholdTable {
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<u32>,
    #[serde(default = "default_level_threshold")]
    pub default_threshold: u32,
}

fn default_thresholds() -> Vec<u32> {
    DEFAULT_THRESHOLDS.to_vec()
}

fn default_level_threshold() -> u32 {
    DEFAULT_LEVEL_THRESHOLD
}

impl Default for LevelThresholdTable {
    fn default() -> Self {
        Self {
            thresholds: default_thresholds(),
            default_threshold: DEFAULT_LEVEL_THRESHOLD,
        }
    }
}

impl LevelThresholdTable {
    pub fn new(thresholds: Vec<u32>, default_threshold: u32) -> Self {
        Self {
            thresholds,
            default_threshold,
        }
    }

    /// XP needed to advance past `level`. Never zero.
    pub fn threshold(&self, level: u32) -> u32 {
        let raw = match level.checked_sub(1) {
            Some(idx) => self
                .thresholds
                .get(idx as usize)
                .copied()
                .unwrap_or(self.default_threshold),
            None => self.thresholds.first().copied().unwrap_or(self.default_threshold),
        };
        raw.max(1)
    }

    /// Add `gained` XP to (`level`, `xp`) and resolve every level-up it causes.
    ///
    /// The threshold is re-read after each increment, so one large gain can
    /// cross several levels.
    pub fn apply_xp(&self, level: u32, xp: u32, gained: u32) -> LevelOutcome {
        let mut level = level.max(1);
        let mut xp = xp.saturating_add(gained);
        let mut levels_gained = 0;

        let mut needed = self.threshold(level);
        while xp >= needed {
            xp -= needed;
            level += 1;
            levels_gained += 1;
            needed = self.threshold(level);
        }

        LevelOutcome {
            level,
            xp,
            levels_gained,
        }
    }

    /// HUD view of a (level, xp) pair
    pub fn progress(&self, level: u32, xp: u32) -> LevelProgress {
        LevelProgress {
            level,
            xp,
            xp_needed_for_next_level: self.threshold(level),
        }
    }
}

/// Result of running the level-up loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelOutcome {
    pub level: u32,
    pub xp: u32,
    pub levels_gained: u32,
}

impl LevelOutcome {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Progress inside the current level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub level: u32,
    pub xp: u32,
    pub xp_needed_for_next_level: u32,
}

impl LevelProgress {
    /// Calculate progress to next level (0.0 - 1.0)
    pub fn fraction(&self) -> f32 {
        if self.xp_needed_for_next_level == 0 {
            1.0
        } else {
            (self.xp as f32 / self.xp_needed_for_next_level as f32).min(1.0)
        }
    }
}

/// XP rewards for completing a workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpRewards {
    /// Flat XP for any completed workout
    #[serde(default = "XpRewards::default_base")]
    pub base_xp: u32,
    #[serde(default = "XpRewards::default_per_exercise")]
    pub xp_per_exercise: u32,
}

impl XpRewards {
    pub const BASE_XP: u32 = 50;
    pub const XP_PER_EXERCISE: u32 = 5;

    fn default_base() -> u32 {
        Self::BASE_XP
    }

    fn default_per_exercise() -> u32 {
        Self::XP_PER_EXERCISE
    }

    /// Pre-bonus XP for a workout with `exercise_count` exercises
    pub fn workout_xp(&self, exercise_count: usize) -> u32 {
        let count = u32::try_from(exercise_count).unwrap_or(u32::MAX);
        self.base_xp
            .saturating_add(self.xp_per_exercise.saturating_mul(count))
    }
}

impl Default for XpRewards {
    fn default() -> Self {
        Self {
            base_xp: Self::BASE_XP,
            xp_per_exercise: Self::XP_PER_EXERCISE,
        }
    }
}
