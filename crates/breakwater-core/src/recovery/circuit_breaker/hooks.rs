//! Optional callbacks invoked by the circuit breaker
//!
//! Every hook runs synchronously while the breaker lock is held. Hooks must
//! be quick and must never call back into the same breaker, which would
//! deadlock.

use std::fmt;
use std::sync::Arc;

use super::types::CircuitState;

/// Shared callback receiving a circuit state
pub type StateHook = Arc<dyn Fn(CircuitState) + Send + Sync>;

/// Independent, optional handlers for breaker events
#[derive(Clone, Default)]
pub struct BreakerHooks {
    state_change: Option<StateHook>,
    success: Option<StateHook>,
    failure: Option<StateHook>,
}

impl BreakerHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the new state after every transition
    pub fn on_state_change<F>(mut self, hook: F) -> Self
    where
        F: Fn(CircuitState) + Send + Sync + 'static,
    {
        self.state_change = Some(Arc::new(hook));
        self
    }

    /// Called with the state observed before each recorded success
    pub fn on_success<F>(mut self, hook: F) -> Self
    where
        F: Fn(CircuitState) + Send + Sync + 'static,
    {
        self.success = Some(Arc::new(hook));
        self
    }

    /// Called with the state observed before each recorded failure
    pub fn on_failure<F>(mut self, hook: F) -> Self
    where
        F: Fn(CircuitState) + Send + Sync + 'static,
    {
        self.failure = Some(Arc::new(hook));
        self
    }

    pub(super) fn state_changed(&self, state: CircuitState) {
        if let Some(hook) = &self.state_change {
            hook(state);
        }
    }

    pub(super) fn succeeded(&self, state: CircuitState) {
        if let Some(hook) = &self.success {
            hook(state);
        }
    }

    pub(super) fn failed(&self, state: CircuitState) {
        if let Some(hook) = &self.failure {
            hook(state);
        }
    }
}

impl fmt::Debug for BreakerHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreakerHooks")
            .field("state_change", &self.state_change.is_some())
            .field("success", &self.success.is_some())
            .field("failure", &self.failure.is_some())
            .finish()
    }
}
