//! Circuit breaker pattern for fault tolerance
//!
//! Prevents cascading failures by temporarily disabling failing operations.
//!
//! # States
//! ```text
//! Closed   -> Open:     failure ratio over the sliding window reaches the threshold
//! Open     -> HalfOpen: cooldown timer fires after `open_duration`
//! HalfOpen -> Closed:   `success_threshold` consecutive successes
//! HalfOpen -> Open:     any single failure
//! ```

mod breaker;
mod builder;
mod config;
mod cooldown;
mod hooks;
mod types;
mod window;


pub use breaker::CircuitBreaker;
pub use builder::CircuitBreakerBuilder;
pub use config::CircuitBreakerConfig;
pub use hooks::{BreakerHooks, StateHook};
pub use types::{CircuitBreakerStats, CircuitState};
