//! Search configuration for the route planner.

use chrono::Duration;

/// Configuration parameters for route search and evaluation.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of candidate paths to collect (`k`).
    pub max_results: usize,

    /// Longest path prefix, in stations, that is still expanded.
    /// Longer partial paths are discarded when dequeued.
    pub max_path_length: usize,

    /// Time added to a path for each change of line (seconds).
    pub transfer_penalty_secs: i64,

    /// Dwell time at each stop before the final one (seconds).
    pub dwell_secs: i64,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_results: usize,
        max_path_length: usize,
        transfer_penalty_secs: i64,
        dwell_secs: i64,
    ) -> Self {
        Self {
            max_results,
            max_path_length,
            transfer_penalty_secs,
            dwell_secs,
        }
    }

    /// Default configuration with a different result count and length bound.
    pub fn bounded(max_results: usize, max_path_length: usize) -> Self {
        Self {
            max_results,
            max_path_length,
            ..Self::default()
        }
    }

    /// Returns the transfer penalty as a Duration.
    pub fn transfer_penalty(&self) -> Duration {
        Duration::seconds(self.transfer_penalty_secs)
    }

    /// Returns the per-stop dwell time as a Duration.
    pub fn dwell(&self) -> Duration {
        Duration::seconds(self.dwell_secs)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 20,
            max_path_length: 40,
            transfer_penalty_secs: 300, // 5 minutes
            dwell_secs: 60,
        }
    }
}
