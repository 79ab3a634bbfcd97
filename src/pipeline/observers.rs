//! Observer adapters for match pipelines
//!
//! Observers allow composable output during a match without coupling game
//! logic to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{Board, GameOutcome, Player},
};

/// One move of a recorded game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepObservation {
    /// Ply within the game
    pub step_num: usize,
    /// Player who moved
    pub player: Player,
    /// Cell played
    pub position: usize,
    /// Board after the move, in `X.O/...` text form
    pub board: String,
}

/// Complete transcript of a game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    /// Game number
    pub game_num: usize,
    /// Final outcome
    pub outcome: GameOutcome,
    /// Steps in the game
    pub steps: Vec<StepObservation>,
    /// Total moves in game
    pub total_moves: usize,
}

/// Progress bar observer - Shows match progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    x_wins: usize,
    draws: usize,
    o_wins: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            x_wins: 0,
            draws: 0,
            o_wins: 0,
        }
    }

    fn tally(&self) -> String {
        format!("X:{} D:{} O:{}", self.x_wins, self.draws, self.o_wins)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, _board: &Board, outcome: GameOutcome) -> Result<()> {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

/// Renders the board after every move and announces the result
pub struct BoardPrinter<W> {
    out: W,
}

impl<W: Write> BoardPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl BoardPrinter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Observer for BoardPrinter<W> {
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        writeln!(self.out, "\n{}\n", Board::new().render())?;
        Ok(())
    }

    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        board: &Board,
        player: Player,
        position: usize,
    ) -> Result<()> {
        writeln!(self.out, "{player} plays {}", position + 1)?;
        writeln!(self.out, "\n{}\n", board.render())?;
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, _board: &Board, outcome: GameOutcome) -> Result<()> {
        match outcome {
            GameOutcome::Win(player) => writeln!(self.out, "Player {player} wins!")?,
            GameOutcome::Draw => writeln!(self.out, "It's a draw!")?,
        }
        self.out.flush()?;
        Ok(())
    }
}

/// JSONL observer - Writes one transcript per game
pub struct JsonlObserver<W: Write = BufWriter<File>> {
    writer: W,
    current_game_steps: Vec<StepObservation>,
}

impl JsonlObserver {
    /// Create a new JSONL observer writing to a file
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create transcript {}", path.display()),
            source,
        })?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> JsonlObserver<W> {
    /// Create a JSONL observer on any writer
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer,
            current_game_steps: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Observer for JsonlObserver<W> {
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        self.current_game_steps.clear();
        Ok(())
    }

    fn on_move(
        &mut self,
        _game_num: usize,
        step_num: usize,
        board: &Board,
        player: Player,
        position: usize,
    ) -> Result<()> {
        self.current_game_steps.push(StepObservation {
            step_num,
            player,
            position,
            board: board.to_string().replace('\n', "/"),
        });
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, _board: &Board, outcome: GameOutcome) -> Result<()> {
        let observation = Observation {
            game_num,
            outcome,
            total_moves: self.current_game_steps.len(),
            steps: std::mem::take(&mut self.current_game_steps),
        };

        serde_json::to_writer(&mut self.writer, &observation)?;
        writeln!(&mut self.writer)?;
        self.writer.flush()?;

        Ok(())
    }
}
