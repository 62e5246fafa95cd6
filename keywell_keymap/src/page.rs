// Copyright 2026 the Keywell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pages and the page-switching keyboard model.

use alloc::vec::Vec;

use crate::keycode::{FunctionKey, KeyCode};

/// Which page of the keyboard is showing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// The letter page (QWERTY); the default.
    #[default]
    Character,
    /// Digits and common punctuation.
    Number,
    /// The remaining symbols.
    Symbol,
}

/// One page: rows of key codes, top to bottom, left to right.
#[derive(Clone, Debug)]
pub struct Page {
    kind: PageKind,
    rows: Vec<Vec<KeyCode>>,
}

impl Page {
    pub(crate) fn new(kind: PageKind, rows: Vec<Vec<KeyCode>>) -> Self {
        Self { kind, rows }
    }

    /// Which page this is.
    pub fn kind(&self) -> PageKind {
        self.kind
    }

    /// The rows of the page, top to bottom.
    pub fn rows(&self) -> &[Vec<KeyCode>] {
        &self.rows
    }

    /// The key at `(row, index)`, if present.
    pub fn key_at(&self, row: usize, index: usize) -> Option<KeyCode> {
        self.rows.get(row)?.get(index).copied()
    }

    /// Total number of keys on the page.
    pub fn key_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Iterate keys in row-major order with their `(row, index)` position.
    pub fn keys(&self) -> impl Iterator<Item = ((usize, usize), KeyCode)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(i, key)| ((r, i), *key)))
    }

    /// The `(row, index)` of a function key, if this page carries it.
    pub fn function_key_position(&self, key: FunctionKey) -> Option<(usize, usize)> {
        self.keys()
            .find(|(_, k)| *k == KeyCode::Function(key))
            .map(|(pos, _)| pos)
    }
}

/// The full keyboard: one page per [`PageKind`] plus the switch rules.
#[derive(Clone, Debug)]
pub struct Keyboard {
    pages: Vec<Page>,
}

impl Keyboard {
    pub(crate) fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// The page for `kind`.
    pub fn page(&self, kind: PageKind) -> &Page {
        // Constructors register exactly one page per kind.
        self.pages
            .iter()
            .find(|p| p.kind == kind)
            .unwrap_or(&self.pages[0])
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The page a switch key leads to from `from`.
    ///
    /// `Page` toggles character↔number and returns to character from the
    /// symbol page; `ShiftToSymbol` and `ShiftToNumber` go directly. Any
    /// other key leaves the page unchanged.
    pub fn next_page(&self, key: FunctionKey, from: PageKind) -> PageKind {
        match key {
            FunctionKey::Page => match from {
                PageKind::Character => PageKind::Number,
                PageKind::Number | PageKind::Symbol => PageKind::Character,
            },
            FunctionKey::ShiftToSymbol => PageKind::Symbol,
            FunctionKey::ShiftToNumber => PageKind::Number,
            _ => from,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_key_toggles_character_and_number() {
        let keyboard = Keyboard::english();
        assert_eq!(
            keyboard.next_page(FunctionKey::Page, PageKind::Character),
            PageKind::Number
        );
        assert_eq!(
            keyboard.next_page(FunctionKey::Page, PageKind::Number),
            PageKind::Character
        );
        // From the symbol page, back to character.
        assert_eq!(
            keyboard.next_page(FunctionKey::Page, PageKind::Symbol),
            PageKind::Character
        );
    }

    #[test]
    fn shift_keys_switch_between_number_and_symbol() {
        let keyboard = Keyboard::english();
        assert_eq!(
            keyboard.next_page(FunctionKey::ShiftToSymbol, PageKind::Number),
            PageKind::Symbol
        );
        assert_eq!(
            keyboard.next_page(FunctionKey::ShiftToNumber, PageKind::Symbol),
            PageKind::Number
        );
    }

    #[test]
    fn non_switch_keys_leave_the_page_alone() {
        let keyboard = Keyboard::english();
        assert_eq!(
            keyboard.next_page(FunctionKey::Space, PageKind::Number),
            PageKind::Number
        );
    }
}
