//! Breakwater Core Library
//!
//! A concurrency-safe circuit breaker: it tracks recent outcomes of a guarded
//! operation in a fixed-size sliding window, opens once the failure ratio
//! reaches a threshold, and probes recovery after a cooldown.

pub mod error;
pub mod recovery;

pub use error::{BreakwaterError, BreakwaterResult};
pub use recovery::{
    BreakerHooks, CircuitBreaker, CircuitBreakerBuilder, CircuitBreakerConfig,
    CircuitBreakerStats, CircuitState,
};
