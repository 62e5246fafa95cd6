// Copyright 2026 the Keywell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keywell Modifier: deterministic, `no_std` state machines for the
//! stateful keys of a touch keyboard.
//!
//! ## Overview
//!
//! The keys that do something other than insert a character — shift,
//! backspace, page switches — each carry a small state machine driven by
//! the control events the surface router synthesizes:
//!
//! - [`ShiftMachine`](crate::shift::ShiftMachine): shift/caps with
//!   single-tap latch, rapid-double-press caps lock, and drag-off-the-key
//!   commitment.
//! - [`AutoRepeat`](crate::repeat::AutoRepeat): hold-to-repeat with an
//!   initial delay, a fixed interval, and race-free cancellation.
//! - [`DragAlternate`](crate::alternate::DragAlternate): the armed/consumed
//!   flag behind "press a page key, drag onto a letter, type it from the
//!   original page".
//!
//! ## Time
//!
//! There is no ambient clock: every operation takes `u64` millisecond
//! timestamps from the caller, and the timer primitives in
//! [`timer`](crate::timer) are deadlines the caller pumps. Generation
//! tokens make cancellation race-free — a tick that was due before a
//! release was processed never fires.
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

pub mod alternate;
pub mod repeat;
pub mod shift;
pub mod timer;

pub use alternate::DragAlternate;
pub use repeat::AutoRepeat;
pub use shift::{ShiftMachine, ShiftState};
pub use timer::{Debounce, Timer, TimerToken};
