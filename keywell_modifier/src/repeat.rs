// Copyright 2026 the Keywell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-repeat controller for hold-to-repeat keys (backspace).
//!
//! Activation performs the key action once immediately; repeats begin after
//! an initial delay (500 ms) and then recur at a fixed interval (150 ms)
//! for as long as the key stays active. Deactivation cancels through the
//! timer's generation token, so a tick that was already due when the key
//! was released never fires — releasing before the delay elapses yields
//! exactly one action total.

use crate::timer::{Timer, TimerToken};

/// Hold-to-repeat controller over a deterministic [`Timer`].
///
/// ## Usage
///
/// - [`AutoRepeat::set_active`]`(true, now)` on key press; a `true` return
///   means perform the action immediately.
/// - [`AutoRepeat::set_active`]`(false, now)` on release or cancel.
/// - Pump [`AutoRepeat::poll`]`(now)` from the host's tick; it returns the
///   number of repeats due, re-checking the activation flag per tick.
#[derive(Clone, Debug)]
pub struct AutoRepeat {
    active: bool,
    delay: u64,
    interval: u64,
    timer: Timer,
    token: Option<TimerToken>,
}

impl AutoRepeat {
    /// The default delay before the first repeat, in milliseconds.
    pub const DELAY_MS: u64 = 500;
    /// The default interval between repeats, in milliseconds.
    pub const INTERVAL_MS: u64 = 150;

    /// Create an inactive controller with the default timing.
    pub fn new() -> Self {
        Self::with_timing(Self::DELAY_MS, Self::INTERVAL_MS)
    }

    /// Create an inactive controller with custom timing in milliseconds.
    ///
    /// `interval` must be nonzero.
    pub fn with_timing(delay: u64, interval: u64) -> Self {
        debug_assert!(interval > 0, "a zero interval would repeat forever");
        Self {
            active: false,
            delay,
            interval: interval.max(1),
            timer: Timer::new(),
            token: None,
        }
    }

    /// Whether the key is currently held active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activate or deactivate the repeat.
    ///
    /// Returns `true` exactly once per activation — on the inactive→active
    /// edge — meaning the caller should perform the action immediately.
    /// Deactivation cancels the pending deadline and is idempotent.
    pub fn set_active(&mut self, active: bool, now: u64) -> bool {
        if active == self.active {
            return false;
        }
        self.active = active;
        if active {
            self.token = Some(self.timer.schedule(now + self.delay));
            true
        } else {
            self.timer.cancel();
            self.token = None;
            false
        }
    }

    /// The number of repeats due at `now`.
    ///
    /// Each tick re-checks the activation flag first, so a deadline that
    /// was due before a release was processed contributes nothing. A late
    /// pump yields every elapsed tick, keeping repeat cadence independent
    /// of pump jitter.
    pub fn poll(&mut self, now: u64) -> u32 {
        let mut ticks = 0;
        while self.active {
            let Some(token) = self.token else { break };
            let Some(due) = self.timer.deadline() else {
                break;
            };
            if !self.timer.fire(token, now) {
                break;
            }
            ticks += 1;
            self.token = Some(self.timer.schedule(due + self.interval));
        }
        ticks
    }
}

impl Default for AutoRepeat {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_fires_the_immediate_action_once() {
        let mut repeat = AutoRepeat::new();
        assert!(repeat.set_active(true, 1000));
        // Already active: no second immediate action.
        assert!(!repeat.set_active(true, 1001));
        assert!(!repeat.set_active(false, 1002));
        // Idempotent deactivation.
        assert!(!repeat.set_active(false, 1003));
    }

    #[test]
    fn first_repeat_comes_after_the_delay_then_the_interval() {
        let mut repeat = AutoRepeat::new();
        repeat.set_active(true, 1000);
        assert_eq!(repeat.poll(1499), 0);
        assert_eq!(repeat.poll(1500), 1);
        assert_eq!(repeat.poll(1649), 0);
        assert_eq!(repeat.poll(1650), 1);
    }

    #[test]
    fn release_before_the_delay_yields_no_repeats() {
        let mut repeat = AutoRepeat::new();
        repeat.set_active(true, 1000);
        repeat.set_active(false, 1200);
        assert_eq!(repeat.poll(5000), 0);
    }

    #[test]
    fn release_after_a_due_tick_suppresses_it() {
        let mut repeat = AutoRepeat::new();
        repeat.set_active(true, 1000);
        // The deadline at 1500 is already due, but the release is processed
        // before the pump: the tick must not fire.
        repeat.set_active(false, 1600);
        assert_eq!(repeat.poll(1600), 0);
    }

    #[test]
    fn late_pump_yields_every_elapsed_tick() {
        let mut repeat = AutoRepeat::new();
        repeat.set_active(true, 1000);
        // Due at 1500, 1650, 1800; pump at 1800.
        assert_eq!(repeat.poll(1800), 3);
        assert_eq!(repeat.poll(1949), 0);
        assert_eq!(repeat.poll(1950), 1);
    }

    #[test]
    fn reactivation_restarts_the_delay() {
        let mut repeat = AutoRepeat::new();
        repeat.set_active(true, 1000);
        repeat.set_active(false, 1100);
        assert!(repeat.set_active(true, 2000));
        assert_eq!(repeat.poll(2499), 0);
        assert_eq!(repeat.poll(2500), 1);
    }
}
