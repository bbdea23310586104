mod commands;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use daypie_core::config::DayPieConfig;
use daypie_core::{DayKey, ScheduleFile};

#[derive(Parser)]
#[command(name = "daypie")]
#[command(about = "See a day's schedule as an ordered, gapless 24-hour timeline")]
struct Cli {
    /// Schedule file to use instead of the one from config.toml
    #[arg(long, global = true)]
    schedule: Option<PathBuf>,

    /// More log output (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a day as a timeline plus a task list
    Show {
        /// Day to show (defaults to today, e.g. "2025-09-21")
        date: Option<String>,

        /// Print the partition and task list as JSON
        #[arg(long)]
        json: bool,
    },
    /// List days that have tasks
    Days,
    /// Add a task to a day
    Add {
        title: String,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: String,

        /// End time (HH:MM, "24:00" for midnight)
        #[arg(short, long)]
        end: String,

        /// Display color, e.g. "#FF0000" or "red"
        #[arg(short, long)]
        color: String,

        /// Day to add to (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Remove every task from a day
    Clear { date: String },
    /// Decode a "START-END" minute range key into clock times
    Decode { key: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Show { date, json } => {
            let config = DayPieConfig::load()?;
            let schedule = load_schedule(cli.schedule, &config)?;
            commands::show::run(&schedule, day_or_today(date), &config.uncovered_color, json)
        }
        Commands::Days => {
            let config = DayPieConfig::load()?;
            let schedule = load_schedule(cli.schedule, &config)?;
            commands::days::run(&schedule)
        }
        Commands::Add {
            title,
            start,
            end,
            color,
            date,
        } => {
            let config = DayPieConfig::load()?;
            let mut schedule = load_schedule(cli.schedule, &config)?;
            commands::add::run(&mut schedule, day_or_today(date), title, start, end, color)
        }
        Commands::Clear { date } => {
            let config = DayPieConfig::load()?;
            let mut schedule = load_schedule(cli.schedule, &config)?;
            commands::clear::run(&mut schedule, DayKey::new(date))
        }
        Commands::Decode { key } => commands::decode::run(&key),
    }
}

/// Log level from -v count, unless RUST_LOG says otherwise.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_schedule(override_path: Option<PathBuf>, config: &DayPieConfig) -> Result<ScheduleFile> {
    let path = override_path.unwrap_or_else(|| config.schedule_path());
    ScheduleFile::load(&path).with_context(|| format!("Could not load schedule {}", path.display()))
}

fn day_or_today(date: Option<String>) -> DayKey {
    date.map(DayKey::new)
        .unwrap_or_else(|| DayKey::new(chrono::Local::now().format("%Y-%m-%d").to_string()))
}
