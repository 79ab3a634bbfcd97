//! noughts CLI - play tic-tac-toe against a perfect minimax agent
//!
//! This CLI provides:
//! - An interactive game against the agent
//! - Matches between the agent and a random or minimax opponent
//! - Move-by-move minimax scores for any position

use anyhow::Result;
use clap::{Parser, Subcommand};
use noughts::cli::{commands, config::CommonConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Perfect-play tic-tac-toe via minimax", long_about = None)]
struct Cli {
    /// Log search and game events (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Hide progress bars
    #[arg(long, global = true)]
    no_progress: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the minimax agent
    Play(commands::play::PlayArgs),

    /// Run the minimax agent against an opponent
    #[command(name = "match")]
    Match(commands::play_match::PlayMatchArgs),

    /// Score every legal move of a position
    Analyze(commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let common = CommonConfig {
        progress: !cli.no_progress,
        verbose: cli.verbose,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(common.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Play(args) => commands::play::execute(args, &common),
        Commands::Match(args) => commands::play_match::execute(args, &common),
        Commands::Analyze(args) => commands::analyze::execute(args, &common),
    }
}
