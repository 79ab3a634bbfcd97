//! Shared configuration types for CLI commands

use serde::{Deserialize, Serialize};

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Whether to show progress bars
    pub progress: bool,

    /// Verbose output
    pub verbose: bool,
}

impl CommonConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "noughts=debug" } else { "warn" }
    }
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            progress: true,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_follows_verbosity() {
        let quiet = CommonConfig::default();
        assert_eq!(quiet.log_filter(), "warn");

        let verbose = CommonConfig {
            verbose: true,
            ..CommonConfig::default()
        };
        assert_eq!(verbose.log_filter(), "noughts=debug");
    }
}
