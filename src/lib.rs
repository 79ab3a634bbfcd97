//! Perfect-play tic-tac-toe
//!
//! This crate provides:
//! - A 3x3 board model with win/draw detection and scoped placement
//! - Exhaustive minimax search that never loses
//! - Agents (minimax, random, human) and a match pipeline to drive games
//! - The `noughts` command-line interface
//!
//! # Example
//!
//! ```
//! use noughts::{search::choose_action, tictactoe::{Board, Player}};
//!
//! let mut board = Board::from_string("X.X .O. ...").unwrap();
//! // O has to block the top row.
//! assert_eq!(choose_action(&mut board, Player::O, Player::X).unwrap(), 1);
//! ```

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{choose_action, minimax};
pub use tictactoe::{Board, GameOutcome, Player};
