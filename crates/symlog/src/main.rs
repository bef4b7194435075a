mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let journal = cli.journal.as_deref();

    match cli.command {
        Commands::Log(args) => commands::log::run(journal, &args),
        Commands::Status => commands::status::run(journal),
        Commands::Trends => commands::trends::run(journal),
        Commands::History { stats } => commands::history::run(journal, stats),
        Commands::Export { format, output } => {
            commands::export::run(journal, format, output.as_deref())
        }
        Commands::Clear { yes } => commands::clear::run(journal, yes),
        Commands::Version => commands::version::run(),
    }
}
