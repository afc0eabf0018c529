//! Breakwater
//!
//! A concurrency-safe circuit breaker for calls to an unreliable dependency.
//!
//! ```ignore
//! use breakwater::{CircuitBreaker, CircuitBreakerConfig};
//!
//! let breaker = CircuitBreaker::with_config("inventory", CircuitBreakerConfig::default())?;
//!
//! if breaker.is_open() {
//!     return Err(Unavailable);
//! }
//! match inventory.fetch().await {
//!     Ok(items) => {
//!         breaker.record_success();
//!         Ok(items)
//!     }
//!     Err(e) => {
//!         breaker.record_failure();
//!         Err(e.into())
//!     }
//! }
//! ```

pub use breakwater_core::error::{BreakwaterError, BreakwaterResult};
pub use breakwater_core::recovery::circuit_breaker::{
    BreakerHooks, CircuitBreaker, CircuitBreakerBuilder, CircuitBreakerConfig,
    CircuitBreakerStats, CircuitState, StateHook,
};
