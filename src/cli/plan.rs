//! Plan command implementation

use anyhow::Result;

use fitquest::planner::generate_workout;

use super::Context;

/// Suggest a workout for the available equipment
pub fn plan_command(ctx: &Context, equipment: &[String], goal: Option<&str>) -> Result<()> {
    let mut rng = rand::thread_rng();
    let plan = generate_workout(&ctx.catalog, equipment, goal, &ctx.config.planner, &mut rng)?;

    println!("Workout ({} exercises):\n", plan.len());
    for (i, exercise) in plan.iter().enumerate() {
        println!(
            "  {}. {} ({}, {})",
            i + 1,
            exercise.name,
            exercise.muscle_group,
            exercise.equipment
        );
    }
    println!(
        "\nLog it with: fitquest complete {}",
        plan.iter()
            .map(|e| format!("-e \"{}\"", e.name))
            .collect::<Vec<_>>()
            .join(" ")
    );

    Ok(())
}
