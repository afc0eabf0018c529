//! Circuit breaker state and statistics types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Circuit breaker state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CircuitState {
    /// Circuit is closed, operations proceed normally
    Closed,
    /// Circuit is half-open, trial operations probe recovery
    HalfOpen,
    /// Circuit is open, operations should fail fast
    Open,
}

impl fmt::Display for CircuitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Closed => "Closed",
            Self::HalfOpen => "HalfOpen",
            Self::Open => "Open",
        };
        f.write_str(name)
    }
}

/// Point-in-time snapshot of a circuit breaker
///
/// All fields are read under the same lock acquisition, so they are
/// consistent with each other.
#[derive(Debug, Clone)]
pub struct CircuitBreakerStats {
    pub state: CircuitState,
    /// Failures currently held in the sliding window
    pub failures: usize,
    pub window_size: usize,
    /// Consecutive successes in the current half-open period
    pub trial_count: u32,
    /// Every `record_success` call, in any state
    pub total_successes: u64,
    /// Every `record_failure` call, in any state
    pub total_failures: u64,
    /// Number of transitions into `Open`
    pub times_opened: u64,
    /// When the current open period began, if open
    pub opened_at: Option<Instant>,
}

impl CircuitBreakerStats {
    /// Fraction of the window holding failures (0.0 - 1.0)
    pub fn failure_ratio(&self) -> f64 {
        self.failures as f64 / self.window_size as f64
    }

    /// Total outcomes reported to the breaker
    pub fn total_calls(&self) -> u64 {
        self.total_successes + self.total_failures
    }
}
