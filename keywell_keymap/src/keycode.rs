// Copyright 2026 the Keywell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key codes: what a key *is*, independent of where it sits.

use alloc::format;
use alloc::string::String;

/// The non-inserting keys of the keyboard.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FunctionKey {
    /// The shift/caps modifier key.
    Shift,
    /// Delete backward; repeats while held.
    Backspace,
    /// Toggles between the character and number pages.
    Page,
    /// Switches to the number page (the `123` key on the symbol page).
    ShiftToNumber,
    /// Switches to the symbol page (the `#+=` key on the number page).
    ShiftToSymbol,
    /// Hands off to the next input mode; hit-tested always-hit.
    Globe,
    /// The space bar.
    Space,
    /// The return key.
    Return,
}

impl FunctionKey {
    fn label(self) -> &'static str {
        match self {
            Self::Shift => "shift",
            Self::Backspace => "backspace",
            Self::Page => "page",
            Self::ShiftToNumber => "shift-number",
            Self::ShiftToSymbol => "shift-symbol",
            Self::Globe => "globe",
            Self::Space => "space",
            Self::Return => "return",
        }
    }
}

/// One key's identity: an inserting character class or a function key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A letter key; case is decided by the shift state at commit time.
    Letter(char),
    /// A digit key.
    Digit(char),
    /// A punctuation or symbol key.
    Symbol(char),
    /// A non-inserting key.
    Function(FunctionKey),
}

impl KeyCode {
    /// The character this key inserts, or `None` for a non-inserting key.
    ///
    /// Space and return do insert (`' '` and `'\n'`); letters honor
    /// `uppercase`.
    pub fn output(self, uppercase: bool) -> Option<char> {
        match self {
            Self::Letter(c) => Some(if uppercase { c.to_ascii_uppercase() } else { c }),
            Self::Digit(c) | Self::Symbol(c) => Some(c),
            Self::Function(FunctionKey::Space) => Some(' '),
            Self::Function(FunctionKey::Return) => Some('\n'),
            Self::Function(_) => None,
        }
    }

    /// A stable label for diagnostics and host-side key identification.
    pub fn code(self) -> String {
        match self {
            Self::Letter(c) => format!("letter.{c}"),
            Self::Digit(c) => format!("digit.{c}"),
            Self::Symbol(c) => format!("symbol.{c}"),
            Self::Function(f) => format!("function.{}", f.label()),
        }
    }

    /// Whether this key inserts a character when tapped.
    pub fn is_input(self) -> bool {
        matches!(
            self,
            Self::Letter(_)
                | Self::Digit(_)
                | Self::Symbol(_)
                | Self::Function(FunctionKey::Space | FunctionKey::Return)
        )
    }
}
