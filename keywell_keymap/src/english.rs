// Copyright 2026 the Keywell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The English layout tables.
//!
//! Three pages:
//!
//! ```text
//! character        number            symbol
//! qwertyuiop       1234567890        []{}#%^*+=
//! asdfghjkl        -/:;()$&@"        _\|~<>€£¥•
//! ⇧ zxcvbnm ⌫      #+= .,?!' ⌫       123 .,?!' ⌫
//! 123 🌐 ␣ ⏎       ABC 🌐 ␣ ⏎        ABC 🌐 ␣ ⏎
//! ```

use alloc::vec::Vec;

use crate::keycode::{FunctionKey, KeyCode};
use crate::page::{Keyboard, Page, PageKind};

fn letters(row: &str) -> Vec<KeyCode> {
    row.chars().map(KeyCode::Letter).collect()
}

fn symbols(row: &str) -> Vec<KeyCode> {
    row.chars().map(KeyCode::Symbol).collect()
}

fn bottom_row() -> Vec<KeyCode> {
    [
        FunctionKey::Page,
        FunctionKey::Globe,
        FunctionKey::Space,
        FunctionKey::Return,
    ]
    .into_iter()
    .map(KeyCode::Function)
    .collect()
}

fn punctuation_row(switch: FunctionKey) -> Vec<KeyCode> {
    let mut row = Vec::with_capacity(7);
    row.push(KeyCode::Function(switch));
    row.extend(symbols(".,?!'"));
    row.push(KeyCode::Function(FunctionKey::Backspace));
    row
}

fn character_page() -> Page {
    let mut third = Vec::with_capacity(9);
    third.push(KeyCode::Function(FunctionKey::Shift));
    third.extend(letters("zxcvbnm"));
    third.push(KeyCode::Function(FunctionKey::Backspace));
    Page::new(
        PageKind::Character,
        [letters("qwertyuiop"), letters("asdfghjkl"), third, bottom_row()].into(),
    )
}

fn number_page() -> Page {
    Page::new(
        PageKind::Number,
        [
            "1234567890".chars().map(KeyCode::Digit).collect(),
            symbols("-/:;()$&@\""),
            punctuation_row(FunctionKey::ShiftToSymbol),
            bottom_row(),
        ]
        .into(),
    )
}

fn symbol_page() -> Page {
    Page::new(
        PageKind::Symbol,
        [
            symbols("[]{}#%^*+="),
            symbols("_\\|~<>€£¥•"),
            punctuation_row(FunctionKey::ShiftToNumber),
            bottom_row(),
        ]
        .into(),
    )
}

impl Keyboard {
    /// The English keyboard: character, number, and symbol pages.
    pub fn english() -> Self {
        Self::new([character_page(), number_page(), symbol_page()].into())
    }
}
