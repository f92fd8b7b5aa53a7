//! Octaver CLI - run the octave-up effect over WAV files.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "octaver")]
#[command(author, version, about = "Half-wave replicating octave-up effect", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process an audio file through the octaver
    Process(commands::process::ProcessArgs),

    /// Generate test signals
    Generate(commands::generate::GenerateArgs),

    /// Analyze an audio file
    Analyze(commands::analyze::AnalyzeArgs),

    /// Show the plugin URI, parameters and fixed constants
    Info,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Info => commands::info::run(),
    }
}
