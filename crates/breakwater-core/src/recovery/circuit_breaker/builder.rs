//! Builder for circuit breakers with hooks or an explicit runtime

use tokio::runtime::Handle;

use super::breaker::CircuitBreaker;
use super::config::CircuitBreakerConfig;
use super::hooks::BreakerHooks;
use super::types::CircuitState;
use crate::error::BreakwaterResult;

/// Builder for [`CircuitBreaker`]
///
/// ```ignore
/// let breaker = CircuitBreaker::builder("payments")
///     .config(CircuitBreakerConfig::aggressive())
///     .on_state_change(|state| tracing::info!(%state, "payments breaker"))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct CircuitBreakerBuilder {
    name: String,
    config: CircuitBreakerConfig,
    hooks: BreakerHooks,
    runtime: Option<Handle>,
}

impl CircuitBreakerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: CircuitBreakerConfig::default(),
            hooks: BreakerHooks::default(),
            runtime: None,
        }
    }

    /// Set the configuration
    pub fn config(mut self, config: CircuitBreakerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace all hooks at once
    pub fn hooks(mut self, hooks: BreakerHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Called with the new state after every transition
    pub fn on_state_change<F>(mut self, hook: F) -> Self
    where
        F: Fn(CircuitState) + Send + Sync + 'static,
    {
        self.hooks = self.hooks.on_state_change(hook);
        self
    }

    /// Called with the pre-event state on every recorded success
    pub fn on_success<F>(mut self, hook: F) -> Self
    where
        F: Fn(CircuitState) + Send + Sync + 'static,
    {
        self.hooks = self.hooks.on_success(hook);
        self
    }

    /// Called with the pre-event state on every recorded failure
    pub fn on_failure<F>(mut self, hook: F) -> Self
    where
        F: Fn(CircuitState) + Send + Sync + 'static,
    {
        self.hooks = self.hooks.on_failure(hook);
        self
    }

    /// Runtime used for cooldown timers. Defaults to the runtime the
    /// breaker is built in.
    pub fn runtime(mut self, handle: Handle) -> Self {
        self.runtime = Some(handle);
        self
    }

    /// Validate the configuration and create the breaker
    pub fn build(self) -> BreakwaterResult<CircuitBreaker> {
        CircuitBreaker::from_parts(self.name, self.config, self.hooks, self.runtime)
    }
}
