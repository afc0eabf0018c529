//! Failure isolation for calls to unreliable dependencies

pub mod circuit_breaker;

pub use circuit_breaker::{
    BreakerHooks, CircuitBreaker, CircuitBreakerBuilder, CircuitBreakerConfig,
    CircuitBreakerStats, CircuitState,
};
