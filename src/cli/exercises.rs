//! Exercises command implementation

use anyhow::Result;

use super::Context;

/// List catalog exercises, optionally filtered by equipment
pub fn exercises_command(ctx: &Context, equipment: Option<&str>) -> Result<()> {
    let exercises = ctx.catalog.exercises_for_equipment(equipment);

    if exercises.is_empty() {
        println!("No exercises found.");
        return Ok(());
    }

    println!("Exercises ({}):\n", exercises.len());
    for exercise in exercises {
        println!(
            "  {:<28} {:<10} {:<12} {}",
            exercise.name,
            exercise.muscle_group,
            exercise.equipment,
            exercise.difficulty.as_str()
        );
    }

    Ok(())
}
