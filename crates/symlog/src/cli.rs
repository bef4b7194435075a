use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use symlog_store::Mood;

#[derive(Parser)]
#[command(name = "symlog")]
#[command(version)]
#[command(about = "Local-first daily symptom journal")]
pub struct Cli {
    /// Journal file override (defaults to ~/.symlog/entries.json)
    #[arg(long, global = true)]
    pub journal: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record symptoms, mood, or notes for a day
    Log(LogArgs),

    /// Show journal summary: totals, most common symptom, streak
    Status,

    /// Show 7-day symptom and wellness trends
    Trends,

    /// List recorded entries
    History {
        /// Show statistics summary
        #[arg(long)]
        stats: bool,
    },

    /// Export the journal as CSV or JSON
    Export {
        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file (defaults to symptom-journal-<today>.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete all journal data
    Clear {
        /// Confirm the irreversible deletion
        #[arg(long)]
        yes: bool,
    },

    /// Print version information
    Version,
}

#[derive(Args)]
pub struct LogArgs {
    /// Day to log (ISO yyyy-mm-dd, defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Fever intensity (0=none, 1=mild, 2=moderate, 3=severe)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub fever: Option<u8>,

    /// Headache intensity
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub headache: Option<u8>,

    /// Fatigue intensity
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub fatigue: Option<u8>,

    /// Nausea intensity
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub nausea: Option<u8>,

    /// Cough intensity
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub cough: Option<u8>,

    /// Sore throat intensity
    #[arg(long = "sore-throat", value_parser = clap::value_parser!(u8).range(0..=3))]
    pub sore_throat: Option<u8>,

    /// Mood: happy, neutral, or sad
    #[arg(long)]
    pub mood: Option<Mood>,

    /// Free-text notes for the day
    #[arg(long)]
    pub notes: Option<String>,

    /// Quick log: no symptoms, happy mood
    #[arg(long)]
    pub good: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}
