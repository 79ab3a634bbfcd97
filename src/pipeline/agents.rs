//! Move sources that plug into the match pipeline
//!
//! - [`MinimaxAgent`] - perfect play via exhaustive search
//! - [`RandomAgent`] - uniform choice over the empty cells
//! - [`HumanAgent`] - cell numbers typed at a prompt

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use tracing::debug;

use crate::{
    Error, Result,
    ports::Agent,
    search::choose_action,
    tictactoe::{Board, Player},
};

/// Optimal agent backed by [`choose_action`]
pub struct MinimaxAgent {
    name: String,
}

impl MinimaxAgent {
    /// Create a new minimax agent
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board, me: Player) -> Result<usize> {
        // One scratch copy per decision; the search mutates it in place.
        let mut scratch = *board;
        choose_action(&mut scratch, me, me.opponent())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Random policy agent (baseline)
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _me: Player) -> Result<usize> {
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Err(Error::NoLegalMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

/// Prompt shown before every human move
pub const MOVE_PROMPT: &str = "Enter your move (1-9): ";
/// Reply to unreadable, out-of-range or occupied input
pub const INVALID_MOVE_MESSAGE: &str = "Invalid move. Try again.";

/// Human player reading 1-based cell numbers from a line-oriented input.
///
/// Cells are numbered 1-9 left to right, top to bottom, and mapped to
/// positions 0-8. Anything that is not an empty cell on the current board is
/// rejected and the prompt repeats.
pub struct HumanAgent<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(name: String, input: R, output: W) -> Self {
        Self {
            name,
            input,
            output,
        }
    }

    /// Give back the output sink, e.g. to inspect what was written in tests
    pub fn into_output(self) -> W {
        self.output
    }

    fn parse_cell(line: &str) -> Option<usize> {
        let number: usize = line.trim().parse().ok()?;
        (1..=9).contains(&number).then(|| number - 1)
    }
}

impl HumanAgent<StdinLock<'static>, Stdout> {
    /// Human agent on the process's stdin and stdout
    pub fn stdio(name: String) -> Self {
        Self::new(name, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn select_move(&mut self, board: &Board, me: Player) -> Result<usize> {
        if board.legal_moves().is_empty() {
            return Err(Error::NoLegalMoves);
        }

        loop {
            write!(self.output, "{MOVE_PROMPT}")?;
            self.output.flush()?;

            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                return Err(Error::InputClosed);
            }
            let line = String::from_utf8_lossy(&raw);

            match Self::parse_cell(&line) {
                Some(position) if board.is_empty(position) => {
                    debug!(player = %me, position, "human move accepted");
                    return Ok(position);
                }
                _ => {
                    debug!(input = line.trim(), "human move rejected");
                    writeln!(self.output, "{INVALID_MOVE_MESSAGE}")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
