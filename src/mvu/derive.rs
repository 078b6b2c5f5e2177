//! Derived-view stages applied between the published state stream and the
//! widgets.
//!
//! Change suppression and input debouncing are explicit, separately
//! testable steps here rather than implicit subscription behavior. Both are
//! driven by the caller (the view loop), so neither owns a timer or a task.

use std::time::{Duration, Instant};

/// Passes a value through only when it differs from the previous one.
pub struct Distinct<T> {
    last: Option<T>,
}

impl<T: Clone + PartialEq> Distinct<T> {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Start with a known value, so the first observation only passes if it
    /// actually changed.
    pub fn seeded(value: T) -> Self {
        Self { last: Some(value) }
    }

    pub fn filter(&mut self, value: T) -> Option<T> {
        if self.last.as_ref() == Some(&value) {
            return None;
        }
        self.last = Some(value.clone());
        Some(value)
    }
}

impl<T: Clone + PartialEq> Default for Distinct<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds the latest value until a quiet period has elapsed.
///
/// Timestamps are passed in explicitly so tests control time; the view loop
/// feeds `poll` from its tick events, which bounds the emit granularity to
/// the tick rate.
pub struct Debounce<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debounce<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Replace the pending value and restart the quiet period.
    pub fn feed(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Take the pending value once the quiet period has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, since)) if now.duration_since(*since) >= self.quiet => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }
}
