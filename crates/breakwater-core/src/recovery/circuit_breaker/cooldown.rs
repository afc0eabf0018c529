//! Cancellable one-shot cooldown timer

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A pending Open -> HalfOpen transition.
///
/// The timer is cancelled when dropped, so replacing or clearing the
/// breaker's slot is enough to stop it. `generation` identifies which open
/// period scheduled it; a firing whose generation no longer matches the
/// breaker's is stale and must be ignored by the callback.
#[derive(Debug)]
pub(super) struct CooldownTimer {
    generation: u64,
    cancel: CancellationToken,
    _task: JoinHandle<()>,
}

impl CooldownTimer {
    /// Run `on_elapsed` on `runtime` after `delay`, unless cancelled first.
    pub(super) fn start<F>(runtime: &Handle, generation: u64, delay: Duration, on_elapsed: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let task = runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::trace!(generation, "Cooldown timer cancelled");
                }
                _ = tokio::time::sleep(delay) => on_elapsed(),
            }
        });

        Self {
            generation,
            cancel,
            _task: task,
        }
    }

    pub(super) fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for CooldownTimer {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
