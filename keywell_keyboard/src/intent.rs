// Copyright 2026 the Keywell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The outward-facing intents the keyboard asks its host to perform.

use keywell_keymap::PageKind;
use keywell_modifier::ShiftState;

/// One effect for the host, produced by routing a touch batch or pumping
/// [`KeyboardSurface::tick`](crate::surface::KeyboardSurface::tick).
///
/// Intents are queued in the order they were decided and drained by the
/// host after each batch; the keyboard itself never touches the document.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Insert one character at the caret.
    Insert(char),
    /// Delete one unit backward from the caret.
    DeleteBackward,
    /// The visible page changed; the host re-renders key caps.
    PageChanged(PageKind),
    /// The shift state changed; the host refreshes letter caps.
    ShiftChanged(ShiftState),
    /// Hand control to the next input mode (the globe key).
    SwitchInputMode,
}
