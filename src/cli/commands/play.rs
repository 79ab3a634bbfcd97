//! Play command - A human at the terminal against the minimax agent

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use super::parse_player_token;
use crate::{
    cli::config::CommonConfig,
    pipeline::{BoardPrinter, HumanAgent, MatchConfig, MatchPipeline, MinimaxAgent},
};

#[derive(Parser, Debug)]
#[command(about = "Play a game against the minimax agent")]
pub struct PlayArgs {
    /// Which mark the human plays (`x` moves first)
    #[arg(long, default_value = "x")]
    pub human: String,

    /// Show the option menu before the game starts
    #[arg(long)]
    pub menu: bool,
}

/// Menu shown by `--menu`
pub const MENU: &str = "1. Play against the AI";

/// Read the menu choice; `true` when the player picked the game.
pub fn menu_choice<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    writeln!(output, "{MENU}")?;
    write!(output, "Choose an option (1): ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    if line.trim() == "1" {
        Ok(true)
    } else {
        writeln!(output, "Invalid choice.")?;
        Ok(false)
    }
}

pub fn execute(args: PlayArgs, _common: &CommonConfig) -> Result<()> {
    let human_player = parse_player_token(&args.human, "--human")?;

    if args.menu {
        let chosen = menu_choice(&mut io::stdin().lock(), &mut io::stdout())?;
        if !chosen {
            return Ok(());
        }
    }

    info!(human = %human_player, "starting interactive game");

    let config = MatchConfig {
        num_games: 1,
        seed: None,
        agent_player: human_player,
    };
    let mut pipeline = MatchPipeline::new(config).with_observer(Box::new(BoardPrinter::stdout()));
    let mut human = HumanAgent::stdio("Human".to_string());
    let mut ai = MinimaxAgent::new("Minimax".to_string());

    pipeline.play_game(0, &mut human, &mut ai)?;
    Ok(())
}
