//! Workout generation from the exercise catalog

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::config::{Catalog, PlannerSettings};
use crate::domain::Exercise;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("No exercises found for your available equipment: {0}")]
    NoExercisesForEquipment(String),
}

/// Pick a workout of up to `settings.workout_size` distinct exercises.
///
/// Only exercises whose equipment is in `equipment` are eligible; an empty
/// list falls back to `settings.default_equipment`. When `goal` matches
/// `settings.strength_goal`, one exercise from each focus group is chosen
/// first. The rest is filled at random until the size is reached or the
/// pool runs out.
pub fn generate_workout<R: Rng + ?Sized>(
    catalog: &Catalog,
    equipment: &[String],
    goal: Option<&str>,
    settings: &PlannerSettings,
    rng: &mut R,
) -> Result<Vec<Exercise>, PlanError> {
    let equipment = if equipment.is_empty() {
        settings.default_equipment.as_slice()
    } else {
        equipment
    };

    let pool: Vec<&Exercise> = catalog
        .exercises
        .iter()
        .filter(|ex| equipment.iter().any(|e| ex.uses_equipment(e)))
        .collect();

    if pool.is_empty() {
        return Err(PlanError::NoExercisesForEquipment(equipment.join(", ")));
    }

    let mut plan: Vec<&Exercise> = Vec::with_capacity(settings.workout_size);

    let strength = goal.is_some_and(|g| g.trim().eq_ignore_ascii_case(&settings.strength_goal));
    if strength {
        for group in &settings.strength_focus_groups {
            if plan.len() >= settings.workout_size {
                break;
            }
            let candidates: Vec<&Exercise> = pool
                .iter()
                .copied()
                .filter(|ex| ex.muscle_group == *group)
                .collect();
            if let Some(pick) = candidates.choose(rng) {
                if !plan.iter().any(|p| p.id == pick.id) {
                    plan.push(*pick);
                }
            }
        }
    }

    let mut rest: Vec<&Exercise> = pool
        .iter()
        .copied()
        .filter(|ex| !plan.iter().any(|p| p.id == ex.id))
        .collect();
    rest.shuffle(rng);

    let missing = settings.workout_size.saturating_sub(plan.len());
    plan.extend(rest.into_iter().take(missing));

    debug!(
        pool = pool.len(),
        picked = plan.len(),
        strength,
        "generated workout"
    );
    Ok(plan.into_iter().cloned().collect())
}
