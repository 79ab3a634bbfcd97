//! Analyze command - Minimax score of every legal move in a position

use anyhow::{Result, anyhow};
use clap::Parser;

use super::parse_player_token;
use crate::{
    cli::{config::CommonConfig, output},
    search::{choose_scored_action, evaluate_moves},
    tictactoe::{Board, GameOutcome},
};

#[derive(Parser, Debug)]
#[command(about = "Score every legal move of a board")]
pub struct AnalyzeArgs {
    /// Board as 9 cells, e.g. "XX.OO...." (`.` or `_` for empty)
    pub board: String,

    /// Player to move; inferred from the mark counts when omitted
    #[arg(long)]
    pub player: Option<String>,
}

pub fn execute(args: AnalyzeArgs, _common: &CommonConfig) -> Result<()> {
    let mut board = Board::from_string(&args.board)?;

    output::print_section("Position");
    println!("{}", board.render());

    if let Some(outcome) = board.outcome() {
        match outcome {
            GameOutcome::Win(player) => println!("\nTerminal: player {player} has won"),
            GameOutcome::Draw => println!("\nTerminal: draw"),
        }
        return Ok(());
    }

    let player = match &args.player {
        Some(token) => parse_player_token(token, "--player")?,
        None => board.next_player()?,
    };
    let opponent = player.opponent();

    output::print_subsection(&format!("Moves for {player}"));
    for scored in evaluate_moves(&mut board, player, opponent) {
        output::print_kv(
            &format!("cell {}", scored.position + 1),
            output::describe_score(scored.score),
        );
    }

    let best = choose_scored_action(&mut board, player, opponent)
        .map_err(|e| anyhow!("cannot choose a move: {e}"))?;
    println!(
        "\nBest move: cell {} ({})",
        best.position + 1,
        output::describe_score(best.score)
    );

    Ok(())
}
