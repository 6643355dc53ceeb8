//! Cancellable one-shot timers
//!
//! Delays are frame-driven like everything else in this crate. Scheduling a
//! delay while one is already pending replaces it, so repeated triggers of
//! the same action never stack up multiple firings.

/// A cancellable delayed action
#[derive(Clone, Copy, Debug, Default)]
pub struct DelayedAction {
    remaining: Option<f32>,
    generation: u64,
}

impl DelayedAction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the action to fire after `delay` seconds, cancelling any
    /// pending one
    pub fn schedule(&mut self, delay: f32) {
        if self.remaining.is_some() {
            tracing::trace!("DelayedAction: replacing pending delay");
        }
        self.generation += 1;
        self.remaining = Some(delay.max(0.0));
    }

    /// Cancel the pending action. Returns true if something was pending.
    pub fn cancel(&mut self) -> bool {
        self.remaining.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Seconds left before firing
    pub fn remaining(&self) -> Option<f32> {
        self.remaining
    }

    /// How many times the action has been scheduled; identifies the current
    /// schedule so callers can tell a fresh delay from a stale one
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance by `dt` seconds. Returns true exactly once, on the tick where
    /// the delay elapses.
    pub fn tick(&mut self, dt: f32) -> bool {
        match self.remaining {
            Some(left) if left - dt <= 0.0 => {
                self.remaining = None;
                true
            }
            Some(left) => {
                self.remaining = Some(left - dt);
                false
            }
            None => false,
        }
    }
}
