//! Game driving pipeline
//!
//! This module provides:
//! - Agents that pick moves (minimax, random, human)
//! - A match pipeline that plays games between two agents
//! - Observers that report progress, render boards, and record transcripts

pub mod agents;
pub mod matches;
pub mod observers;

pub use agents::{HumanAgent, MinimaxAgent, RandomAgent};
pub use matches::{MatchConfig, MatchPipeline, MatchResult};
pub use observers::{BoardPrinter, JsonlObserver, Observation, ProgressObserver, StepObservation};

pub use crate::ports::{Agent, Observer};
