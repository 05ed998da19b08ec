use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fitquest::store::DEFAULT_HISTORY_LIMIT;

mod cli;

#[derive(Parser)]
#[command(name = "fitquest")]
#[command(about = "Workout progression with XP, levels, streaks, quests and badges")]
#[command(version)]
struct Cli {
    /// Working directory (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to .fitquest/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Profile file holding your progress
    #[arg(long, global = true, default_value = "fitquest-profile.json")]
    profile: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a finished workout and collect its rewards
    Complete {
        /// Exercise name from the catalog (repeatable)
        #[arg(short, long = "exercise")]
        exercises: Vec<String>,

        /// Day the workout was done (YYYY-MM-DD, defaults to now)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show level, XP, streak and badges
    Stats {
        #[arg(long)]
        json: bool,
    },

    /// Show daily and weekly quests
    Quests {
        #[arg(long)]
        json: bool,
    },

    /// Show recent workouts
    History {
        /// Number of entries to show
        #[arg(short, long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: usize,

        #[arg(long)]
        json: bool,
    },

    /// List exercises in the catalog
    Exercises {
        /// Only exercises using this equipment
        #[arg(short, long)]
        equipment: Option<String>,
    },

    /// Suggest a workout
    Plan {
        /// Available equipment (repeatable, defaults to bodyweight)
        #[arg(short, long)]
        equipment: Vec<String>,

        /// Training goal, e.g. "Build Strength"
        #[arg(short, long)]
        goal: Option<String>,
    },

    /// Initialize a new .fitquest/config.toml and profile
    Init {
        /// Name for a new profile
        #[arg(long)]
        name: Option<String>,

        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Determine the working directory
    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    // No subcommand shows stats
    let command = cli.command.unwrap_or(Commands::Stats { json: false });
    let context = || cli::Context::load(&work_dir, cli.config.as_deref(), &cli.profile);

    match command {
        Commands::Complete {
            exercises,
            date,
            json,
        } => {
            cli::complete::complete_command(&context()?, &exercises, date, json).await?;
        }
        Commands::Stats { json } => {
            cli::stats::stats_command(&context()?, json).await?;
        }
        Commands::Quests { json } => {
            cli::quests::quests_command(&context()?, json).await?;
        }
        Commands::History { limit, json } => {
            cli::history::history_command(&context()?, limit, json).await?;
        }
        Commands::Exercises { equipment } => {
            cli::exercises::exercises_command(&context()?, equipment.as_deref())?;
        }
        Commands::Plan { equipment, goal } => {
            cli::plan::plan_command(&context()?, &equipment, goal.as_deref())?;
        }
        Commands::Init { name, force } => {
            // Runs before a config exists
            cli::init::init_command(&work_dir, cli.config.clone(), &cli.profile, name, force)
                .await?;
        }
    }

    Ok(())
}
