//! History command implementation

use anyhow::Result;

use super::{profile, Context};

/// Show the most recent workouts, newest first
pub async fn history_command(ctx: &Context, limit: usize, json: bool) -> Result<()> {
    let user = profile::load_or_new(&ctx.profile_path)?;
    let user_id = user.id;
    let entries = ctx.store(user).history(user_id, limit).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No workouts logged yet.");
        return Ok(());
    }

    for entry in &entries {
        let names = entry.exercise_names();
        println!(
            "  {}  +{} XP  {}",
            entry.timestamp_utc.format("%Y-%m-%d %H:%M"),
            entry.xp_gained,
            if names.is_empty() {
                "(no exercises)".to_string()
            } else {
                names.join(", ")
            }
        );
    }

    Ok(())
}
