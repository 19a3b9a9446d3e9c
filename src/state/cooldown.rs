// Cool-down timer - one-shot deadline polled from the UI loop
use std::time::{Duration, Instant};

/// A single deferred action, delivered by polling on the UI thread.
#[derive(Clone, Debug, Default)]
pub struct CoolDownTimer {
    deadline: Option<Instant>,
}

impl CoolDownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, duration: Duration) {
        self.deadline = Some(now + duration);
    }

    /// Returns `true` once when the deadline has been reached, then disarms.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Disarms without firing. Returns whether a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
