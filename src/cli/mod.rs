use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Grok Tweet Archive Analyser
#[derive(Parser)]
#[command(name = "tweet-analyser")]
#[command(about = "Author, flag and engagement statistics for a grok tweet archive")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Count tweets per author and export the author CSV
    Authors(commands::authors::AuthorsCommand),
    /// Report reply / grok-reply / parent-id flag statistics
    Flags(commands::flags::FlagsCommand),
    /// Compute engagement metric distributions and export the values CSV
    Engagement(commands::engagement::EngagementCommand),
    /// Run authors, flags and engagement in sequence
    All(commands::all::AllCommand),
}

pub fn run() -> AppResult<()> {
    // Uses RUST_LOG environment variable (defaults to "warn" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Authors(command) => command.run(),
        Commands::Flags(command) => command.run(),
        Commands::Engagement(command) => command.run(),
        Commands::All(command) => command.run(),
    }
}
