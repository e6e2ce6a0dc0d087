//! Debounced geometry regeneration
//!
//! Dragging a quality slider produces a burst of changes. Each request
//! pushes the deadline back, so the shape is rebuilt once, after the
//! input has been quiet for the debounce window.

use std::time::{Duration, Instant};

/// Trailing-edge debouncer for regeneration requests
#[derive(Clone, Debug)]
pub struct RegenerationScheduler {
    delay: Duration,
    deadline: Option<Instant>,
}

impl RegenerationScheduler {
    pub fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Ask for a regeneration, restarting the quiet period at `now`
    pub fn request(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drop any pending request
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True once per request, when the quiet period has elapsed at `now`
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// True if a request was pending, clearing it regardless of the deadline
    pub fn flush(&mut self) -> bool {
        self.deadline.take().is_some()
    }
}

impl Default for RegenerationScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}
