//! Core domain types for fitquest

mod exercise;
mod state;
mod workout;

pub use exercise::{Difficulty, Exercise, MuscleGroup};
pub use state::UserProgressState;
pub use workout::{CompletionRequest, UserId, WorkoutLogEntry};
