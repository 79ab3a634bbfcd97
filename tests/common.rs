//! Common test utilities for the noughts test suite.
//!
//! Board fixtures and exhaustive enumeration of reachable positions.

#![allow(dead_code)]

use std::collections::HashSet;

use noughts::{
    pipeline::Agent,
    tictactoe::{Board, Game, GameOutcome},
};

/// Parse a board fixture, panicking on malformed input.
pub fn board(s: &str) -> Board {
    Board::from_string(s).unwrap_or_else(|e| panic!("bad fixture '{s}': {e}"))
}

/// Every board reachable from the empty board under alternating play, X first.
///
/// Terminal boards are included but not expanded.
pub fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];

    while let Some(current) = stack.pop() {
        if !seen.insert(current) {
            continue;
        }
        if current.is_terminal() {
            continue;
        }
        let mover = current
            .next_player()
            .expect("reachable boards have balanced counts");
        for position in current.legal_moves() {
            let mut next = current;
            next.place(position, mover).expect("legal move");
            stack.push(next);
        }
    }

    seen
}

/// Play `game` to the end, X moves from `x_agent`, O moves from `o_agent`.
pub fn play_out(mut game: Game, x_agent: &mut dyn Agent, o_agent: &mut dyn Agent) -> Game {
    while game.outcome.is_none() {
        let mover = game.to_move();
        let agent: &mut dyn Agent = match mover {
            noughts::Player::X => &mut *x_agent,
            noughts::Player::O => &mut *o_agent,
        };
        let position = agent
            .select_move(game.board(), mover)
            .expect("agent should move on a non-terminal board");
        game.play(position).expect("agent should choose a legal move");
    }
    game
}

/// Final outcome of a finished game.
pub fn outcome(game: &Game) -> GameOutcome {
    game.outcome.expect("game should be finished")
}
