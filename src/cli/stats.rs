//! Stats command implementation

use anyhow::Result;

use super::{display_name, profile, Context};

/// Show level, XP, streak and badges
pub async fn stats_command(ctx: &Context, json: bool) -> Result<()> {
    let user = profile::load_or_new(&ctx.profile_path)?;
    let user_id = user.id;
    let snapshot = ctx.store(user).snapshot(user_id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("{} - Level {}", snapshot.username, snapshot.level);
    println!(
        "  XP: {}/{}",
        snapshot.xp, snapshot.xp_needed_for_next_level
    );
    println!(
        "  Streak: {} day(s){}",
        snapshot.streak_count,
        if snapshot.streak_active { "" } else { " (inactive)" }
    );
    println!("  Workouts: {}", snapshot.total_workouts);

    if snapshot.unlocked_badges.is_empty() {
        println!("  Badges: none yet");
    } else {
        println!("  Badges ({}):", snapshot.unlocked_badges.len());
        for badge in &snapshot.unlocked_badges {
            println!("    {} - {}", display_name(&badge.name, &badge.id), badge.description);
        }
    }

    Ok(())
}
