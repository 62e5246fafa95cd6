// Copyright 2026 the Keywell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic caller-pumped timer primitives.
//!
//! There is no ambient clock anywhere in this workspace: timestamps are plain
//! `u64` milliseconds supplied by the caller, and "timers" are deadlines the
//! caller pumps by calling [`Timer::fire`] or [`Debounce::poll`] with the
//! current time. Cancellation is handled with generation tokens: cancelling
//! (or rescheduling) bumps the generation, so a token issued earlier can
//! never fire again. This closes the classic race where a tick scheduled
//! just before a fast release would land after the release was processed.

/// Proof that a deadline was scheduled; stale after any cancel/reschedule.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimerToken(u64);

/// A single cancellable deadline.
///
/// ## Usage
///
/// - [`Timer::schedule`] sets the deadline and returns a fresh token.
/// - [`Timer::fire`] consumes the deadline once `now` reaches it, but only
///   for the token of the *current* schedule; stale tokens never fire.
/// - [`Timer::cancel`] is idempotent and invalidates every outstanding
///   token. A caller holding a fired tick must still re-check its own
///   activation flag before acting.
#[derive(Clone, Debug, Default)]
pub struct Timer {
    deadline: Option<u64>,
    generation: u64,
}

impl Timer {
    /// Create an unscheduled timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deadline, invalidating any outstanding token.
    pub fn schedule(&mut self, deadline: u64) -> TimerToken {
        self.generation += 1;
        self.deadline = Some(deadline);
        TimerToken(self.generation)
    }

    /// Drop the deadline and invalidate every outstanding token. Idempotent.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.deadline = None;
    }

    /// The pending deadline, if scheduled.
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Whether a deadline is pending.
    pub fn is_scheduled(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if `token` is current and `now` has reached it.
    ///
    /// Returns `false` for a stale token, an unscheduled timer, or a
    /// deadline still in the future.
    pub fn fire(&mut self, token: TimerToken, now: u64) -> bool {
        if token.0 != self.generation {
            return false;
        }
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Coalescing last-value cache with a quiet window.
///
/// Each [`Debounce::push`] replaces the pending value and restarts the
/// window; [`Debounce::poll`] yields the value once the window has elapsed
/// with no further pushes. Models the settle-before-react pattern for
/// rapidly changing inputs (text-context rechecks after edits).
#[derive(Clone, Debug)]
pub struct Debounce<T> {
    window: u64,
    pending: Option<(T, u64)>,
}

impl<T> Debounce<T> {
    /// The default quiet window in milliseconds.
    pub const DEFAULT_WINDOW_MS: u64 = 150;

    /// Create a debounce with the default window.
    pub fn new() -> Self {
        Self::with_window(Self::DEFAULT_WINDOW_MS)
    }

    /// Create a debounce with a custom quiet window in milliseconds.
    pub fn with_window(window: u64) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Replace the pending value and restart the quiet window.
    pub fn push(&mut self, value: T, now: u64) {
        self.pending = Some((value, now + self.window));
    }

    /// Yield the pending value once the quiet window has elapsed.
    pub fn poll(&mut self, now: u64) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// Drop the pending value and deadline. Idempotent.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a value is waiting out its quiet window.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_fires_once_at_the_deadline() {
        let mut timer = Timer::new();
        let token = timer.schedule(1000);
        assert!(!timer.fire(token, 999));
        assert!(timer.fire(token, 1000));
        // The deadline was consumed.
        assert!(!timer.fire(token, 1001));
        assert!(!timer.is_scheduled());
    }

    #[test]
    fn stale_tokens_never_fire() {
        let mut timer = Timer::new();
        let old = timer.schedule(1000);
        timer.cancel();
        assert!(!timer.fire(old, 2000));
        // A reschedule also invalidates the old token.
        let old = timer.schedule(1000);
        let new = timer.schedule(1500);
        assert!(!timer.fire(old, 2000));
        assert!(timer.fire(new, 2000));
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut timer = Timer::new();
        timer.cancel();
        let token = timer.schedule(100);
        timer.cancel();
        timer.cancel();
        assert!(!timer.fire(token, 100));
    }

    #[test]
    fn debounce_waits_out_the_quiet_window() {
        let mut debounce: Debounce<u32> = Debounce::with_window(150);
        debounce.push(1, 1000);
        assert_eq!(debounce.poll(1100), None);
        assert_eq!(debounce.poll(1150), Some(1));
        // Consumed.
        assert_eq!(debounce.poll(1200), None);
    }

    #[test]
    fn debounce_coalesces_to_the_last_value() {
        let mut debounce: Debounce<u32> = Debounce::with_window(150);
        debounce.push(1, 1000);
        debounce.push(2, 1100);
        debounce.push(3, 1140);
        // The window restarted at each push.
        assert_eq!(debounce.poll(1150), None);
        assert_eq!(debounce.poll(1290), Some(3));
    }

    #[test]
    fn debounce_cancel_drops_the_pending_value() {
        let mut debounce: Debounce<u32> = Debounce::new();
        debounce.push(1, 1000);
        debounce.cancel();
        assert!(!debounce.is_pending());
        assert_eq!(debounce.poll(5000), None);
    }
}
