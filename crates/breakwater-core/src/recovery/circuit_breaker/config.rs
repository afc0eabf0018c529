//! Circuit breaker configuration and validation

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{BreakwaterError, BreakwaterResult};

/// Configuration for circuit breaker behavior
///
/// Durations use human-readable strings when (de)serialized:
///
/// ```toml
/// window_size = 8
/// failure_rate = 0.5
/// open_duration = "200ms"
/// success_threshold = 4
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitBreakerConfig {
    /// Number of recent outcomes tracked by the sliding window
    pub window_size: usize,
    /// Failure ratio (0.0 - 1.0) at or above which the circuit opens
    pub failure_rate: f64,
    /// Time the circuit stays open before probing recovery
    #[serde(with = "humantime_serde")]
    pub open_duration: Duration,
    /// Consecutive half-open successes needed to close the circuit
    pub success_threshold: u32,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            window_size: 20,
            failure_rate: 0.5,
            open_duration: Duration::from_secs(30),
            success_threshold: 3,
        }
    }
}

impl CircuitBreakerConfig {
    /// Create a config for aggressive circuit breaking
    pub fn aggressive() -> Self {
        Self {
            window_size: 10,
            failure_rate: 0.3,
            open_duration: Duration::from_secs(15),
            success_threshold: 2,
        }
    }

    /// Create a config for lenient circuit breaking
    pub fn lenient() -> Self {
        Self {
            window_size: 50,
            failure_rate: 0.7,
            open_duration: Duration::from_secs(60),
            success_threshold: 5,
        }
    }

    /// Set the sliding window size
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the failure rate threshold
    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = failure_rate;
        self
    }

    /// Set the open duration
    pub fn with_open_duration(mut self, open_duration: Duration) -> Self {
        self.open_duration = open_duration;
        self
    }

    /// Set the half-open success threshold
    pub fn with_success_threshold(mut self, success_threshold: u32) -> Self {
        self.success_threshold = success_threshold;
        self
    }

    /// Parse a TOML document and validate the result
    pub fn from_toml_str(source: &str) -> BreakwaterResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every option against its constraint
    pub fn validate(&self) -> BreakwaterResult<()> {
        if self.window_size == 0 {
            return Err(BreakwaterError::config(
                "window_size",
                "must be greater than 0",
            ));
        }

        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(BreakwaterError::config(
                "failure_rate",
                format!("must be between 0.0 and 1.0, got {}", self.failure_rate),
            ));
        }

        if self.open_duration.is_zero() {
            return Err(BreakwaterError::config(
                "open_duration",
                "must be greater than 0",
            ));
        }

        if self.success_threshold == 0 {
            return Err(BreakwaterError::config(
                "success_threshold",
                "must be greater than 0",
            ));
        }

        Ok(())
    }
}
