//! Complete command implementation

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use tracing::{debug, warn};

use fitquest::domain::{CompletionRequest, Exercise};
use fitquest::rewards::RewardEvent;

use super::{display_name, profile, Context};

/// Record a finished workout and print what it earned
pub async fn complete_command(
    ctx: &Context,
    exercise_names: &[String],
    date: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let workout = resolve_exercises(ctx, exercise_names);
    let completed_at = completion_time(date);

    let user = profile::load_or_new(&ctx.profile_path)?;
    let user_id = user.id;
    let store = ctx.store(user);

    let result = store
        .complete_workout(CompletionRequest { user_id, workout }, completed_at)
        .await?;

    let updated = store.profile(user_id).await?;
    profile::save(&ctx.profile_path, &updated)?;
    debug!(
        streak = result.streak_change.as_str(),
        workouts = updated.total_workouts(),
        "profile updated"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for event in result.events() {
        match event {
            RewardEvent::XpAwarded { amount } => println!("+{} XP", amount),
            RewardEvent::LevelUp {
                old_level,
                new_level,
            } => println!("Level up! {} -> {}", old_level, new_level),
            RewardEvent::StreakExtended { count } => {
                println!("Streak: {} day{}", count, if count == 1 { "" } else { "s" })
            }
            RewardEvent::QuestCompleted(quest) => println!(
                "Quest complete: {} (+{} XP)",
                display_name(&quest.title, &quest.id),
                quest.reward_xp
            ),
            RewardEvent::BadgeUnlocked(badge) => {
                println!("Badge unlocked: {}", display_name(&badge.name, &badge.id))
            }
        }
    }

    Ok(())
}

/// Catalog entries for the given names; unknown names are skipped
fn resolve_exercises(ctx: &Context, names: &[String]) -> Vec<Exercise> {
    let mut workout = Vec::with_capacity(names.len());
    for name in names {
        match ctx.catalog.exercise_by_name(name) {
            Some(exercise) => workout.push(exercise.clone()),
            None => warn!("Unknown exercise '{}', skipping", name),
        }
    }
    workout
}

/// Start of the given day in UTC, or now
fn completion_time(date: Option<NaiveDate>) -> DateTime<Utc> {
    match date {
        Some(day) => Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN)),
        None => Utc::now(),
    }
}
