//! Tic-Tac-Toe board model and game state machine

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, PieceCount, Placement, Player};
pub use game::{Game, GameOutcome, GameState, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
