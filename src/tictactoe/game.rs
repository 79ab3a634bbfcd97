//! High-level game management

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::board::{Board, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// Where a game stands: somebody's turn, or finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Turn(Player),
    Terminal(GameOutcome),
}

/// A single game from the empty board, X to move, with its history.
///
/// After each placement the mover is checked for a win, then the board for a
/// draw. Once terminal, further moves are rejected with
/// [`crate::Error::GameOver`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game with X to move
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            to_move: Player::X,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is (meaningless once terminal)
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn state(&self) -> GameState {
        match self.outcome {
            Some(outcome) => GameState::Terminal(outcome),
            None => GameState::Turn(self.to_move),
        }
    }

    /// Play a move for the player on turn
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] after a terminal state, or the
    /// board's placement error for an occupied or out-of-range cell. A
    /// rejected move leaves the game unchanged.
    pub fn play(&mut self, position: usize) -> Result<GameState, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let mover = self.to_move;
        self.board.place(position, mover)?;
        self.moves.push(Move {
            position,
            player: mover,
        });
        debug!(player = %mover, position, "move played");

        if self.board.has_won(mover) {
            self.outcome = Some(GameOutcome::Win(mover));
        } else if self.board.is_draw() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.to_move = mover.opponent();
        }

        Ok(self.state())
    }

    /// Replay a game from a list of positions
    pub fn from_moves(positions: &[usize]) -> Result<Self, crate::Error> {
        let mut game = Game::new();
        for &position in positions {
            game.play(position)?;
        }
        Ok(game)
    }

    /// Position sequence of the moves played so far
    pub fn positions(&self) -> Vec<usize> {
        self.moves.iter().map(|m| m.position).collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
