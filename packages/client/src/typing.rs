//! Typing indicator debounce.
//!
//! The portal UI emits `typing: true` on the first keystroke of a burst and
//! `typing: false` once the composer has been idle for two seconds. The
//! tracker reproduces that cadence: callers feed it input events and poll the
//! idle deadline; it says when an indicator event is actually due.

use std::time::{Duration, Instant};

/// Idle window after which the typing indicator is withdrawn.
pub const TYPING_IDLE_WINDOW: Duration = Duration::from_secs(2);

/// Debounces composer activity into start/stop indicator events.
#[derive(Debug)]
pub struct TypingTracker {
    window: Duration,
    deadline: Option<Instant>,
}

impl TypingTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Record composer input at `now`.
    ///
    /// Returns `true` when this input starts a new burst, meaning a
    /// `typing: true` event should be sent. Inputs inside an active burst
    /// only push the idle deadline forward.
    pub fn on_input(&mut self, now: Instant) -> bool {
        let starts_burst = self.deadline.is_none();
        self.deadline = Some(now + self.window);
        starts_burst
    }

    /// The instant at which the current burst expires, if one is active.
    pub fn idle_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Check the idle deadline at `now`.
    ///
    /// Returns `true` when the burst has just expired, meaning a
    /// `typing: false` event should be sent.
    pub fn on_deadline(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Cancel the current burst without waiting for the deadline.
    ///
    /// Returns `true` when a burst was active, meaning a `typing: false`
    /// event should be sent. Used when the composed message is submitted.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }
}

impl Default for TypingTracker {
    fn default() -> Self {
        Self::new(TYPING_IDLE_WINDOW)
    }
}
