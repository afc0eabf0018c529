//! Circuit breaker implementation

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Handle;

use super::builder::CircuitBreakerBuilder;
use super::config::CircuitBreakerConfig;
use super::cooldown::CooldownTimer;
use super::hooks::BreakerHooks;
use super::types::{CircuitBreakerStats, CircuitState};
use super::window::SlidingWindow;
use crate::error::{BreakwaterError, BreakwaterResult};

/// Circuit breaker for protecting against a failing dependency
///
/// Cloning is cheap and every clone drives the same breaker. Callers check
/// [`is_open`](Self::is_open) before attempting the guarded operation and
/// report its outcome with [`record_success`](Self::record_success) or
/// [`record_failure`](Self::record_failure). The breaker tolerates calls in
/// any order and any state.
#[derive(Clone, Debug)]
pub struct CircuitBreaker {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    /// Component name (for logging)
    name: String,
    config: CircuitBreakerConfig,
    hooks: BreakerHooks,
    /// Runtime that drives cooldown timers
    runtime: Handle,
    core: Mutex<BreakerCore>,
}

/// Everything mutable, guarded by one lock
#[derive(Debug)]
struct BreakerCore {
    state: CircuitState,
    window: SlidingWindow,
    /// Consecutive successes while half-open
    trial_count: u32,
    /// At most one pending cooldown
    cooldown: Option<CooldownTimer>,
    /// Bumped on every trip; identifies the live cooldown
    generation: u64,
    opened_at: Option<Instant>,
    total_successes: u64,
    total_failures: u64,
    times_opened: u64,
}

impl CircuitBreaker {
    /// Create a new circuit breaker with default config
    pub fn new(name: impl Into<String>) -> BreakwaterResult<Self> {
        Self::with_config(name, CircuitBreakerConfig::default())
    }

    /// Create a new circuit breaker with custom config
    pub fn with_config(
        name: impl Into<String>,
        config: CircuitBreakerConfig,
    ) -> BreakwaterResult<Self> {
        Self::builder(name).config(config).build()
    }

    /// Start building a circuit breaker with hooks or an explicit runtime
    pub fn builder(name: impl Into<String>) -> CircuitBreakerBuilder {
        CircuitBreakerBuilder::new(name)
    }

    pub(super) fn from_parts(
        name: String,
        config: CircuitBreakerConfig,
        hooks: BreakerHooks,
        runtime: Option<Handle>,
    ) -> BreakwaterResult<Self> {
        config
            .validate()
            .map_err(|e| e.with_context(format!("building circuit breaker '{}'", name)))?;

        let runtime = match runtime {
            Some(handle) => handle,
            None => Handle::try_current().map_err(|_| {
                BreakwaterError::runtime(
                    "circuit breaker must be built inside a Tokio runtime or given a runtime handle",
                )
                .with_context(format!("building circuit breaker '{}'", name))
            })?,
        };

        let core = BreakerCore {
            state: CircuitState::Closed,
            window: SlidingWindow::new(config.window_size),
            trial_count: 0,
            cooldown: None,
            generation: 0,
            opened_at: None,
            total_successes: 0,
            total_failures: 0,
            times_opened: 0,
        };

        tracing::debug!(
            circuit = %name,
            window_size = config.window_size,
            failure_rate = config.failure_rate,
            "Circuit breaker created"
        );

        Ok(Self {
            shared: Arc::new(Shared {
                name,
                config,
                hooks,
                runtime,
                core: Mutex::new(core),
            }),
        })
    }

    /// Get the component name
    pub fn name(&self) -> &str {
        &self.shared.name
    }

    /// Get the configuration
    pub fn config(&self) -> &CircuitBreakerConfig {
        &self.shared.config
    }

    /// Get the current state
    pub fn state(&self) -> CircuitState {
        let shared = &*self.shared;
        let mut core = shared.core.lock();
        shared.expire_cooldown(&mut core);
        core.state
    }

    /// Whether the guarded operation should be skipped
    pub fn is_open(&self) -> bool {
        self.state() == CircuitState::Open
    }

    /// Record a successful operation
    pub fn record_success(&self) {
        let shared = &*self.shared;
        let mut core = shared.core.lock();
        shared.expire_cooldown(&mut core);
        core.total_successes += 1;

        let state = core.state;
        shared.hooks.succeeded(state);

        match state {
            CircuitState::Closed => core.window.record(true),
            CircuitState::HalfOpen => {
                core.trial_count += 1;
                if core.trial_count >= shared.config.success_threshold {
                    shared.reset(&mut core);
                }
            }
            CircuitState::Open => {
                // Callers should not get here while open
            }
        }
    }

    /// Record a failed operation
    pub fn record_failure(&self) {
        let shared = &*self.shared;
        let mut core = shared.core.lock();
        shared.expire_cooldown(&mut core);
        core.total_failures += 1;

        let state = core.state;
        shared.hooks.failed(state);

        match state {
            CircuitState::Closed => {
                core.window.record(false);
                if core.window.failure_ratio() >= shared.config.failure_rate {
                    self.trip(&mut core);
                }
            }
            CircuitState::HalfOpen => {
                // No tolerance while probing
                core.trial_count = 0;
                self.trip(&mut core);
            }
            CircuitState::Open => {}
        }
    }

    /// Close the circuit immediately with a clean window, cancelling any
    /// pending cooldown
    ///
    /// The state-change hook fires only when the breaker was not already
    /// closed; resetting a closed breaker just clears its window.
    pub fn force_reset(&self) {
        let shared = &*self.shared;
        let mut core = shared.core.lock();

        tracing::debug!(
            circuit = %shared.name,
            from = %core.state,
            "Circuit breaker force reset"
        );
        shared.reset(&mut core);
    }

    /// Get circuit breaker statistics
    pub fn stats(&self) -> CircuitBreakerStats {
        let shared = &*self.shared;
        let mut core = shared.core.lock();
        shared.expire_cooldown(&mut core);
        CircuitBreakerStats {
            state: core.state,
            failures: core.window.failures(),
            window_size: core.window.len(),
            trial_count: core.trial_count,
            total_successes: core.total_successes,
            total_failures: core.total_failures,
            times_opened: core.times_opened,
            opened_at: core.opened_at,
        }
    }

    fn trip(&self, core: &mut BreakerCore) {
        if core.state == CircuitState::Open {
            return;
        }
        let shared = &*self.shared;

        // Replacing the slot cancels the previous timer
        core.cooldown = None;
        core.generation += 1;
        let generation = core.generation;

        let weak = Arc::downgrade(&self.shared);
        core.cooldown = Some(CooldownTimer::start(
            &shared.runtime,
            generation,
            shared.config.open_duration,
            move || {
                if let Some(shared) = weak.upgrade() {
                    shared.cooldown_elapsed(generation);
                }
            },
        ));
        core.opened_at = Some(Instant::now());
        core.times_opened += 1;

        tracing::warn!(
            circuit = %shared.name,
            failures = core.window.failures(),
            window_size = core.window.len(),
            "Circuit breaker opened"
        );
        shared.set_state(core, CircuitState::Open);
    }

    #[cfg(test)]
    pub(super) fn assert_invariants(&self) {
        let core = self.shared.core.lock();
        assert!(core.window.failures() <= core.window.len());
        assert_eq!(core.window.failures(), core.window.count_failures());
        if core.state != CircuitState::HalfOpen {
            assert_eq!(core.trial_count, 0);
        }
        assert_eq!(core.state == CircuitState::Open, core.cooldown.is_some());
    }
}

impl Shared {
    fn cooldown_elapsed(&self, generation: u64) {
        let mut core = self.core.lock();

        let current = core.cooldown.as_ref().map(CooldownTimer::generation);
        if core.state != CircuitState::Open || current != Some(generation) {
            tracing::debug!(
                circuit = %self.name,
                generation,
                "Ignoring stale cooldown"
            );
            return;
        }

        self.enter_half_open(&mut core);
    }

    /// Move to half-open if the open period has run out, even when the
    /// cooldown task never got to run (runtime shut down or starved).
    fn expire_cooldown(&self, core: &mut BreakerCore) {
        if core.state != CircuitState::Open {
            return;
        }
        let expired = core
            .opened_at
            .is_some_and(|opened_at| opened_at.elapsed() >= self.config.open_duration);
        if expired {
            tracing::debug!(circuit = %self.name, "Cooldown expired before its timer fired");
            self.enter_half_open(core);
        }
    }

    fn enter_half_open(&self, core: &mut BreakerCore) {
        core.cooldown = None;
        core.trial_count = 0;
        core.opened_at = None;

        tracing::info!(
            circuit = %self.name,
            "Circuit breaker transitioning to half-open"
        );
        self.set_state(core, CircuitState::HalfOpen);
    }

    fn reset(&self, core: &mut BreakerCore) {
        core.cooldown = None;
        core.window.reset();
        core.trial_count = 0;
        core.opened_at = None;

        if core.state != CircuitState::Closed {
            tracing::info!(circuit = %self.name, "Circuit breaker closed");
            self.set_state(core, CircuitState::Closed);
        }
    }

    /// Apply the transition, then notify
    fn set_state(&self, core: &mut BreakerCore, state: CircuitState) {
        core.state = state;
        self.hooks.state_changed(state);
    }
}
