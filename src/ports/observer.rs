//! Observer port - abstraction for watching games as they are played
//!
//! This port lets the match pipeline report progress, render boards, or
//! record transcripts without coupling game logic to any output format.

use crate::{
    Result,
    tictactoe::{Board, GameOutcome, Player},
};

/// Observer trait for monitoring matches
///
/// # Event Sequence
///
/// The observer methods are called in the following order:
/// 1. `on_match_start(total_games)` - Once at the beginning
/// 2. For each game:
///    - `on_game_start(game_num)`
///    - `on_move(...)` - For each move in the game
///    - `on_game_end(game_num, board, outcome)`
/// 3. `on_match_end()` - Once at the end
///
/// # Examples
///
/// ```no_run
/// use noughts::{
///     ports::Observer,
///     tictactoe::{Board, GameOutcome},
/// };
///
/// struct DrawCounter {
///     draws: usize,
/// }
///
/// impl Observer for DrawCounter {
///     fn on_game_end(
///         &mut self,
///         _game_num: usize,
///         _board: &Board,
///         outcome: GameOutcome,
///     ) -> noughts::Result<()> {
///         if outcome == GameOutcome::Draw {
///             self.draws += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer {
    /// Called once before the first game.
    fn on_match_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a game starts.
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called for each move, after it has been placed.
    ///
    /// # Parameters
    ///
    /// * `game_num` - Index of the current game
    /// * `step_num` - Ply within the game (0-based)
    /// * `board` - Board after the move
    /// * `player` - Player who moved
    /// * `position` - Cell (0-8) that was played
    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _board: &Board,
        _player: Player,
        _position: usize,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when a game reaches a terminal state.
    fn on_game_end(&mut self, _game_num: usize, _board: &Board, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    /// Called once after the last game.
    fn on_match_end(&mut self) -> Result<()> {
        Ok(())
    }
}
