//! Match pipeline: plays games between two agents

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    ports::{Agent, Observer},
    tictactoe::{Board, Game, GameOutcome, Player},
};

/// Match configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: usize,

    /// Random seed
    pub seed: Option<u64>,

    /// Whether the agent plays as X or O (X always moves first)
    pub agent_player: Player,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 100,
            seed: None,
            agent_player: Player::X,
        }
    }
}

/// Result of a match, counted from the agent's perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Total games played
    pub total_games: usize,

    /// Number of wins
    pub wins: usize,

    /// Number of draws
    pub draws: usize,

    /// Number of losses
    pub losses: usize,

    /// Win rate
    pub win_rate: f64,

    /// Draw rate
    pub draw_rate: f64,

    /// Loss rate
    pub loss_rate: f64,
}

impl MatchResult {
    /// Create a new match result
    pub fn new(total_games: usize, wins: usize, draws: usize, losses: usize) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {}", path.display()),
            source,
        })?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Drives games between an agent and an opponent
pub struct MatchPipeline {
    config: MatchConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl MatchPipeline {
    /// Create a new match pipeline
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Play `num_games` games and tally them for the agent
    pub fn run(&mut self, agent: &mut dyn Agent, opponent: &mut dyn Agent) -> Result<MatchResult> {
        if let Some(seed) = self.config.seed {
            agent.set_rng_seed(seed)?;
            opponent.set_rng_seed(seed.wrapping_add(1))?;
        }

        info!(
            agent = agent.name(),
            opponent = opponent.name(),
            games = self.config.num_games,
            agent_player = %self.config.agent_player,
            "match started"
        );

        for observer in &mut self.observers {
            observer.on_match_start(self.config.num_games)?;
        }

        let mut wins = 0;
        let mut draws = 0;
        let mut losses = 0;

        for game_num in 0..self.config.num_games {
            let game = self.play_game(game_num, agent, opponent)?;
            match game.outcome {
                Some(GameOutcome::Win(winner)) if winner == self.config.agent_player => wins += 1,
                Some(GameOutcome::Win(_)) => losses += 1,
                Some(GameOutcome::Draw) | None => draws += 1,
            }
        }

        for observer in &mut self.observers {
            observer.on_match_end()?;
        }

        let result = MatchResult::new(self.config.num_games, wins, draws, losses);
        info!(wins, draws, losses, "match finished");
        Ok(result)
    }

    /// Play one game to completion and return it with its history.
    ///
    /// The agent places `config.agent_player`; X always opens.
    pub fn play_game(
        &mut self,
        game_num: usize,
        agent: &mut dyn Agent,
        opponent: &mut dyn Agent,
    ) -> Result<Game> {
        for observer in &mut self.observers {
            observer.on_game_start(game_num)?;
        }

        let mut game = Game::new();
        let mut step_num = 0;

        while game.outcome.is_none() {
            let mover = game.to_move();
            let current: &mut dyn Agent = if mover == self.config.agent_player {
                &mut *agent
            } else {
                &mut *opponent
            };

            let position = current.select_move(game.board(), mover)?;
            game.play(position)?;
            debug!(game_num, step_num, agent = current.name(), position, "placed");

            for observer in &mut self.observers {
                observer.on_move(game_num, step_num, game.board(), mover, position)?;
            }
            step_num += 1;
        }

        let board: Board = *game.board();
        if let Some(outcome) = game.outcome {
            for observer in &mut self.observers {
                observer.on_game_end(game_num, &board, outcome)?;
            }
        }

        Ok(game)
    }
}
