//! Fixed-size sliding window of call outcomes

/// Ring buffer of recent outcomes with an incrementally maintained
/// failure count.
///
/// `true` marks a success and `false` a failure. A fresh window is full of
/// successes, so the failure ratio denominator is always `len()`.
#[derive(Debug, Clone)]
pub(super) struct SlidingWindow {
    slots: Vec<bool>,
    index: usize,
    failures: usize,
}

impl SlidingWindow {
    /// Panics if `size` is zero; callers validate the config first.
    pub(super) fn new(size: usize) -> Self {
        assert!(size > 0, "sliding window size must be greater than 0");
        Self {
            slots: vec![true; size],
            index: 0,
            failures: 0,
        }
    }

    /// Overwrite the oldest slot with `success` and advance.
    pub(super) fn record(&mut self, success: bool) {
        let evicted = self.slots[self.index];
        if evicted != success {
            if success {
                self.failures -= 1;
            } else {
                self.failures += 1;
            }
            self.slots[self.index] = success;
        }
        self.index = (self.index + 1) % self.slots.len();
    }

    pub(super) fn failures(&self) -> usize {
        self.failures
    }

    pub(super) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(super) fn failure_ratio(&self) -> f64 {
        self.failures as f64 / self.slots.len() as f64
    }

    /// Back to a full run of successes.
    pub(super) fn reset(&mut self) {
        self.slots.fill(true);
        self.index = 0;
        self.failures = 0;
    }

    #[cfg(test)]
    pub(super) fn index(&self) -> usize {
        self.index
    }

    /// Full scan, only used to check the cached count.
    #[cfg(test)]
    pub(super) fn count_failures(&self) -> usize {
        self.slots.iter().filter(|ok| !**ok).count()
    }
}
