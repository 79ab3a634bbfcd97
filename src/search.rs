//! Exhaustive minimax search over the tic-tac-toe game tree
//!
//! Scores are from the searching player's point of view and take only three
//! values: [`WIN_SCORE`], [`DRAW_SCORE`] and [`LOSS_SCORE`]. There is no depth
//! discount, so a win in five plies scores the same as a win in one.
//!
//! The search walks the tree depth-first over a single board, placing a mark
//! with [`Board::scoped_place`] before each recursive call. The guard retracts
//! the mark before the next sibling is tried, so callers get their board back
//! unchanged.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, Result,
    tictactoe::{Board, Player},
};

/// The searching player has won
pub const WIN_SCORE: i32 = 1;
/// Nobody won
pub const DRAW_SCORE: i32 = 0;
/// The opposing player has won
pub const LOSS_SCORE: i32 = -1;

/// Minimax value of playing `position` for the searching player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    pub position: usize,
    pub score: i32,
}

/// Value of `board` for `ai_player` under optimal play from both sides.
///
/// `maximizing` is true when `ai_player` is the one to move. Terminal boards
/// are classified before any move is generated: a win for `ai_player`, then a
/// win for `opponent_player`, then a full board. Both win checks always run
/// before the draw check, so a full board that contains a line is never scored
/// as a draw.
pub fn minimax(
    board: &mut Board,
    maximizing: bool,
    ai_player: Player,
    opponent_player: Player,
) -> i32 {
    if board.has_won(ai_player) {
        return WIN_SCORE;
    }
    if board.has_won(opponent_player) {
        return LOSS_SCORE;
    }
    if board.is_draw() {
        return DRAW_SCORE;
    }

    let mover = if maximizing { ai_player } else { opponent_player };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for position in board.legal_moves() {
        let mut placed = board.scoped_place(position, mover);
        let score = minimax(&mut placed, !maximizing, ai_player, opponent_player);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Score every legal move of `ai_player`, in ascending cell order.
///
/// Each move is placed and the opponent's reply is searched in minimizing
/// mode. Returns an empty vector on a full board.
pub fn evaluate_moves(board: &mut Board, ai_player: Player, opponent_player: Player) -> Vec<MoveScore> {
    board
        .legal_moves()
        .into_iter()
        .map(|position| {
            let mut placed = board.scoped_place(position, ai_player);
            let score = minimax(&mut placed, false, ai_player, opponent_player);
            MoveScore { position, score }
        })
        .collect()
}

/// Best move for `ai_player` together with its score.
///
/// The first move whose score is strictly greater than every earlier one
/// wins, so ties go to the lowest cell index.
///
/// # Errors
///
/// Returns [`Error::NoLegalMoves`] when the board is full. Drivers are
/// expected to check for a terminal board before asking for a move.
pub fn choose_scored_action(
    board: &mut Board,
    ai_player: Player,
    opponent_player: Player,
) -> Result<MoveScore> {
    let mut best: Option<MoveScore> = None;
    for candidate in evaluate_moves(board, ai_player, opponent_player) {
        if best.is_none_or(|current| candidate.score > current.score) {
            best = Some(candidate);
        }
    }

    let best = best.ok_or(Error::NoLegalMoves)?;
    debug!(
        player = %ai_player,
        position = best.position,
        score = best.score,
        "minimax selected move"
    );
    Ok(best)
}

/// Cell index `ai_player` should play next.
///
/// See [`choose_scored_action`] for tie-breaking and errors.
///
/// # Examples
///
/// ```
/// use noughts::{search::choose_action, tictactoe::{Board, Player}};
///
/// let mut board = Board::from_string("XX. OO. ...").unwrap();
/// assert_eq!(choose_action(&mut board, Player::X, Player::O).unwrap(), 2);
/// ```
pub fn choose_action(board: &mut Board, ai_player: Player, opponent_player: Player) -> Result<usize> {
    choose_scored_action(board, ai_player, opponent_player).map(|best| best.position)
}
