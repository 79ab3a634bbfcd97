//! Ports (trait boundaries) between the game driver and its collaborators.
//!
//! The pipeline owns these traits; move sources and observers implement them.

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::Observer;
