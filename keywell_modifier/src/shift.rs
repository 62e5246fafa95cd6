// Copyright 2026 the Keywell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shift/caps modifier state machine.
//!
//! Three states — `Disabled`, `Enabled`, `Locked` — driven by the press
//! lifecycle of the shift key:
//!
//! - A press enables shift; releasing after a press that *found* shift
//!   already engaged disables it. A press that itself enabled shift leaves
//!   it latched for the next character.
//! - Two presses within the lock throttle (300 ms) engage caps lock; a
//!   press while locked drops back to `Enabled`.
//! - Dragging off the shift key while it is enabled arms a pending flag:
//!   the next character commits uppercase and shift then force-disables,
//!   regardless of whether a release was observed on the key itself.
//!
//! The transition table is closed: `Disabled → {Enabled, Locked}`,
//! `Enabled → {Disabled, Locked}`, `Locked → {Enabled}`. An out-of-table
//! transition is a `debug_assert!` failure; release builds fall back to
//! `Disabled`.

/// The shift modifier state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ShiftState {
    /// Lowercase.
    #[default]
    Disabled,
    /// Uppercase for the next character.
    Enabled,
    /// Caps lock: uppercase until explicitly released.
    Locked,
}

impl ShiftState {
    /// Whether characters commit uppercase in this state.
    pub fn is_uppercase(self) -> bool {
        matches!(self, Self::Enabled | Self::Locked)
    }
}

/// Press-lifecycle state machine for the shift key.
///
/// Every operation returns `Some(new_state)` on an actual state change and
/// `None` otherwise; the caller refreshes shift-dependent key caps on a
/// change.
#[derive(Clone, Debug)]
pub struct ShiftMachine {
    state: ShiftState,
    /// State observed at the start of the current press cycle; gates the
    /// release commit so a press that enabled shift stays latched.
    state_at_down: ShiftState,
    /// Time of the previous shift press; `None` until a press or reset.
    last_down_time: Option<u64>,
    /// Two presses closer than this lock caps (milliseconds).
    throttle: u64,
    drag_exit_pending: bool,
}

impl ShiftMachine {
    /// The default rapid-double-press lock throttle in milliseconds.
    pub const LOCK_THROTTLE_MS: u64 = 300;

    /// Create a machine in `Disabled` with the default lock throttle.
    pub fn new() -> Self {
        Self {
            state: ShiftState::Disabled,
            state_at_down: ShiftState::Disabled,
            last_down_time: None,
            throttle: Self::LOCK_THROTTLE_MS,
            drag_exit_pending: false,
        }
    }

    /// Create a machine with a custom lock throttle in milliseconds.
    pub fn with_throttle(throttle: u64) -> Self {
        Self {
            throttle,
            ..Self::new()
        }
    }

    /// The current state.
    pub fn state(&self) -> ShiftState {
        self.state
    }

    /// Whether characters currently commit uppercase.
    pub fn is_uppercase(&self) -> bool {
        self.state.is_uppercase()
    }

    /// Whether a drag off the enabled shift key is pending commitment.
    pub fn drag_exit_pending(&self) -> bool {
        self.drag_exit_pending
    }

    /// The shift key was pressed at `now`.
    ///
    /// A second press within the throttle (unless already locked) engages
    /// caps lock. Otherwise `Disabled` and `Locked` move to `Enabled`; a
    /// press while already `Enabled` changes nothing here — its effect is
    /// decided at [`ShiftMachine::up`].
    pub fn down(&mut self, now: u64) -> Option<ShiftState> {
        let was_rapid = self.state != ShiftState::Locked
            && self
                .last_down_time
                .is_some_and(|last| now.saturating_sub(last) < self.throttle);
        self.state_at_down = self.state;
        self.last_down_time = Some(now);
        if was_rapid {
            return self.enter(ShiftState::Locked);
        }
        match self.state {
            ShiftState::Disabled | ShiftState::Locked => self.enter(ShiftState::Enabled),
            ShiftState::Enabled => None,
        }
    }

    /// The shift key was released on itself.
    ///
    /// Disables shift only when the press cycle began with shift already
    /// engaged; a press that itself enabled shift stays latched for the
    /// next character. No-op in `Disabled` and `Locked`.
    pub fn up(&mut self) -> Option<ShiftState> {
        if self.state == ShiftState::Enabled && self.state_at_down != ShiftState::Disabled {
            return self.enter(ShiftState::Disabled);
        }
        None
    }

    /// The touch dragged off the shift key; arms the pending flag while
    /// shift is enabled. Never a state change by itself.
    pub fn drag_exit(&mut self) {
        if self.state == ShiftState::Enabled {
            self.drag_exit_pending = true;
        }
    }

    /// Engage shift without a key press (auto-capitalization). No-op
    /// unless currently `Disabled`; never touches the press clock.
    pub fn engage(&mut self) -> Option<ShiftState> {
        if self.state == ShiftState::Disabled {
            return self.enter(ShiftState::Enabled);
        }
        None
    }

    /// Resolve a pending drag-exit: force `Disabled` if the flag was armed,
    /// whether or not a release was observed on the key. Always clears the
    /// flag.
    pub fn drag_exit_off(&mut self) -> Option<ShiftState> {
        if !self.drag_exit_pending {
            return None;
        }
        self.drag_exit_pending = false;
        if self.state == ShiftState::Disabled {
            return None;
        }
        self.enter(ShiftState::Disabled)
    }

    /// Hard reset to `Disabled` at `now` (page change, host takeover).
    ///
    /// Clears the pending flag and stamps the press clock, so a shift press
    /// immediately after the reset still counts toward the lock throttle.
    pub fn reset(&mut self, now: u64) -> Option<ShiftState> {
        self.drag_exit_pending = false;
        self.state_at_down = ShiftState::Disabled;
        self.last_down_time = Some(now);
        if self.state == ShiftState::Disabled {
            return None;
        }
        self.state = ShiftState::Disabled;
        Some(self.state)
    }

    /// Apply a table-checked transition.
    fn enter(&mut self, target: ShiftState) -> Option<ShiftState> {
        use ShiftState::{Disabled, Enabled, Locked};
        let valid = matches!(
            (self.state, target),
            (Disabled, Enabled | Locked) | (Enabled, Disabled | Locked) | (Locked, Enabled)
        );
        debug_assert!(
            valid,
            "shift transition {:?} -> {target:?} is out of table",
            self.state
        );
        let next = if valid { target } else { Disabled };
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }
}

impl Default for ShiftMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_tap_latches_shift_for_the_next_character() {
        let mut shift = ShiftMachine::new();
        assert_eq!(shift.down(1000), Some(ShiftState::Enabled));
        // The press itself enabled shift, so the release keeps the latch.
        assert_eq!(shift.up(), None);
        assert!(shift.is_uppercase());
    }

    #[test]
    fn tap_while_enabled_disables_on_release() {
        let mut shift = ShiftMachine::new();
        shift.down(1000);
        shift.up();
        // Second tap, outside the lock throttle: began with shift engaged.
        assert_eq!(shift.down(2000), None);
        assert_eq!(shift.up(), Some(ShiftState::Disabled));
        assert!(!shift.is_uppercase());
    }

    #[test]
    fn rapid_double_press_locks() {
        let mut shift = ShiftMachine::new();
        shift.down(1000);
        shift.up();
        assert_eq!(shift.down(1200), Some(ShiftState::Locked));
        assert!(shift.is_uppercase());
        // Release while locked is a no-op.
        assert_eq!(shift.up(), None);
        assert_eq!(shift.state(), ShiftState::Locked);
    }

    #[test]
    fn press_at_the_throttle_boundary_does_not_lock() {
        let mut shift = ShiftMachine::new();
        shift.down(1000);
        shift.up();
        // Exactly 300 ms later: not rapid.
        assert_eq!(shift.down(1300), None);
        assert_eq!(shift.state(), ShiftState::Enabled);
    }

    #[test]
    fn press_while_locked_drops_to_enabled() {
        let mut shift = ShiftMachine::new();
        shift.down(1000);
        shift.down(1100);
        assert_eq!(shift.state(), ShiftState::Locked);
        // Locked is excluded from the rapid check even for a fast press.
        assert_eq!(shift.down(1150), Some(ShiftState::Enabled));
    }

    #[test]
    fn drag_exit_commits_uppercase_then_disables() {
        let mut shift = ShiftMachine::new();
        shift.down(1000);
        shift.drag_exit();
        assert!(shift.drag_exit_pending());
        // Still uppercase until the pending drag resolves.
        assert!(shift.is_uppercase());
        assert_eq!(shift.drag_exit_off(), Some(ShiftState::Disabled));
        assert!(!shift.drag_exit_pending());
    }

    #[test]
    fn drag_exit_is_armed_only_while_enabled() {
        let mut shift = ShiftMachine::new();
        shift.drag_exit();
        assert!(!shift.drag_exit_pending());
        assert_eq!(shift.drag_exit_off(), None);

        shift.down(1000);
        shift.down(1100);
        assert_eq!(shift.state(), ShiftState::Locked);
        shift.drag_exit();
        assert!(!shift.drag_exit_pending());
    }

    #[test]
    fn drag_exit_off_without_pending_is_a_no_op() {
        let mut shift = ShiftMachine::new();
        shift.down(1000);
        assert_eq!(shift.drag_exit_off(), None);
        assert_eq!(shift.state(), ShiftState::Enabled);
    }

    #[test]
    fn reset_returns_to_disabled_and_stamps_the_clock() {
        let mut shift = ShiftMachine::new();
        shift.down(1000);
        shift.down(1100);
        assert_eq!(shift.reset(5000), Some(ShiftState::Disabled));
        assert_eq!(shift.reset(5000), None);
        // A press right after the reset counts toward the lock throttle.
        assert_eq!(shift.down(5100), Some(ShiftState::Locked));
    }

    #[test]
    fn first_press_ever_is_never_rapid() {
        let mut shift = ShiftMachine::new();
        // Small timestamps must not read as "rapid since time zero".
        assert_eq!(shift.down(10), Some(ShiftState::Enabled));
    }

    #[test]
    fn engage_enables_without_touching_the_press_clock() {
        let mut shift = ShiftMachine::new();
        assert_eq!(shift.engage(), Some(ShiftState::Enabled));
        assert_eq!(shift.engage(), None);
        // An engage is not a press: the next real press is not rapid.
        assert_eq!(shift.down(100), None);
        assert_eq!(shift.state(), ShiftState::Enabled);

        let mut locked = ShiftMachine::new();
        locked.down(1000);
        locked.down(1100);
        assert_eq!(locked.engage(), None);
        assert_eq!(locked.state(), ShiftState::Locked);
    }

    #[test]
    fn change_notifications_fire_only_on_actual_changes() {
        let mut shift = ShiftMachine::new();
        assert!(shift.down(1000).is_some());
        assert!(shift.down(2000).is_none());
        assert!(shift.up().is_some());
        assert!(shift.up().is_none());
    }
}
