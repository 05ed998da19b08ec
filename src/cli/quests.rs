//! Quests command implementation

use anyhow::Result;

use fitquest::rewards::{QuestKind, QuestStatus};

use super::{display_name, profile, Context};

/// Show the quest board with completion flags
pub async fn quests_command(ctx: &Context, json: bool) -> Result<()> {
    let user = profile::load_or_new(&ctx.profile_path)?;
    let user_id = user.id;
    let board = ctx.store(user).quest_board(user_id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    print_section(QuestKind::Daily, &board.daily);
    println!();
    print_section(QuestKind::Weekly, &board.weekly);
    Ok(())
}

fn print_section(kind: QuestKind, quests: &[QuestStatus]) {
    println!("{}:", kind.label());
    if quests.is_empty() {
        println!("  (none)");
        return;
    }
    for status in quests {
        let quest = &status.quest;
        println!(
            "  [{}] {} (+{} XP)",
            if status.completed { "x" } else { " " },
            display_name(&quest.title, &quest.id),
            quest.reward_xp
        );
        if !quest.description.is_empty() {
            println!("      {}", quest.description);
        }
    }
}
