// Copyright 2026 the Keywell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-alternate flag for dual-purpose keys.
//!
//! A page-switch key pressed and dragged onto a letter means "type this
//! letter from the page I was on, then put the page back" rather than
//! "switch pages". The controller is a single armed/consumed flag: the
//! drag-exit handler arms it while the key's primary effect is engaged,
//! and the release handler consumes it to decide between the primary and
//! alternate action.

/// One armed/consumed flag per dual-purpose key class.
#[derive(Copy, Clone, Debug, Default)]
pub struct DragAlternate {
    pending: bool,
}

impl DragAlternate {
    /// Create a disarmed flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// The touch dragged off the key; arm only while the key's primary
    /// effect is currently engaged.
    pub fn on_drag_exit(&mut self, engaged: bool) {
        if engaged {
            self.pending = true;
        }
    }

    /// Consult and clear the flag; `true` means commit the alternate action.
    pub fn on_drag_exit_off(&mut self) -> bool {
        core::mem::take(&mut self.pending)
    }

    /// Whether the alternate action is armed.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Disarm without consuming (page unload).
    pub fn reset(&mut self) {
        self.pending = false;
    }
}
