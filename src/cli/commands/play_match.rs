//! Match command - The minimax agent against another agent over many games

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use super::parse_player_token;
use crate::{
    cli::{config::CommonConfig, output},
    pipeline::{
        Agent, BoardPrinter, JsonlObserver, MatchConfig, MatchPipeline, MinimaxAgent,
        ProgressObserver, RandomAgent,
    },
};

/// Opponents the minimax agent can face
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OpponentKind {
    /// Another perfect player
    Minimax,
    /// Uniformly random legal moves
    Random,
}

#[derive(Parser, Debug)]
#[command(about = "Run the minimax agent against an opponent")]
pub struct PlayMatchArgs {
    /// Opponent to play against
    #[arg(long, short = 'o', value_enum, default_value_t = OpponentKind::Random)]
    pub opponent: OpponentKind,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which mark the minimax agent plays (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub agent_player: String,

    /// Render every board as the games are played
    #[arg(long)]
    pub show_boards: bool,

    /// Write a JSONL transcript of every game
    #[arg(long)]
    pub transcript: Option<PathBuf>,

    /// Export the match summary as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

fn build_opponent(kind: OpponentKind) -> Box<dyn Agent> {
    match kind {
        OpponentKind::Minimax => Box::new(MinimaxAgent::new("Minimax-Opponent".to_string())),
        OpponentKind::Random => Box::new(RandomAgent::new("Random".to_string())),
    }
}

pub fn execute(args: PlayMatchArgs, common: &CommonConfig) -> Result<()> {
    let agent_player = parse_player_token(&args.agent_player, "--agent-player")?;

    let config = MatchConfig {
        num_games: args.games,
        seed: args.seed,
        agent_player,
    };

    let mut pipeline = MatchPipeline::new(config);
    if args.show_boards {
        pipeline = pipeline.with_observer(Box::new(BoardPrinter::stdout()));
    } else if common.progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.transcript {
        pipeline = pipeline.with_observer(Box::new(JsonlObserver::new(path)?));
    }

    let mut agent = MinimaxAgent::new("Minimax".to_string());
    let mut opponent = build_opponent(args.opponent);

    let agent_plays = agent_player.to_string();
    let games = args.games.to_string();
    output::print_section("Match Configuration");
    output::print_stats_table(&[
        ("Agent", agent.name()),
        ("Opponent", opponent.name()),
        ("Agent plays", agent_plays.as_str()),
        ("Games", games.as_str()),
    ]);
    if let Some(seed) = args.seed {
        output::print_kv("Seed", &seed.to_string());
    }

    let result = pipeline.run(&mut agent, opponent.as_mut())?;

    let total = result.total_games.to_string();
    let wins = format!("{} ({})", result.wins, output::format_percent(result.win_rate));
    let draws = format!("{} ({})", result.draws, output::format_percent(result.draw_rate));
    let losses = format!("{} ({})", result.losses, output::format_percent(result.loss_rate));
    output::print_section("Match Result");
    output::print_stats_table(&[
        ("Games", total.as_str()),
        ("Wins", wins.as_str()),
        ("Draws", draws.as_str()),
        ("Losses", losses.as_str()),
    ]);

    if let Some(path) = &args.export {
        result.save(path)?;
        println!("\nSummary written to {}", path.display());
    }
    if let Some(path) = &args.transcript {
        println!("Transcript written to {}", path.display());
    }

    Ok(())
}
