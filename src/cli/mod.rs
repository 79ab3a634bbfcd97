//! CLI infrastructure for the noughts binary
//!
//! This module provides the command-line interface for playing against the
//! minimax agent, running matches between agents, and scoring positions.

pub mod commands;
pub mod config;
pub mod output;
