//! Agent port - abstraction for anything that picks a move
//!
//! This port defines the interface every move source implements, allowing the
//! match pipeline to drive:
//! - The minimax searcher
//! - A uniformly random baseline
//! - A human typing cell numbers at a terminal

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// Agent trait - Unified interface for all move sources
///
/// # Design Philosophy
///
/// This trait represents a **port** in hexagonal architecture - a boundary
/// between the game driver and the strategies that play it. The minimax
/// engine, the random baseline and the terminal prompt are **adapters** that
/// implement this port.
///
/// # Examples
///
/// ```no_run
/// use noughts::{
///     ports::Agent,
///     tictactoe::{Board, Player},
/// };
///
/// fn opening_move<A: Agent>(agent: &mut A) -> noughts::Result<usize> {
///     agent.select_move(&Board::new(), Player::X)
/// }
/// ```
pub trait Agent {
    /// Select a move for the given board.
    ///
    /// `me` is the mark this agent places; the opponent is `me.opponent()`.
    /// The returned position (0-8) must be empty on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if no legal moves are available, or if the agent's
    /// input source fails.
    fn select_move(&mut self, board: &Board, me: Player) -> Result<usize>;

    /// Get the agent's name.
    ///
    /// Used for identification in match summaries and logging.
    fn name(&self) -> &str;

    /// Seed the agent's internal random number generator.
    ///
    /// Match pipelines call this method when supplied with a deterministic
    /// seed to ensure reproducible results.
    ///
    /// # Default Implementation
    ///
    /// Does nothing and returns `Ok(())`, suitable for deterministic agents.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
