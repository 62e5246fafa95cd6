// Copyright 2026 the Keywell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full typing session: layout + routing + modifiers + text heuristics.
//!
//! This example shows how a host wires the pieces together:
//! - `keywell_keymap` for the English page layouts,
//! - `keywell_keyboard` for touch routing and the intent queue,
//! - a `String`-backed [`Document`] plus [`TextAssist`] for auto-period,
//!   smart quotes, and auto-capitalization.
//!
//! Run:
//! - `cargo run -p keywell_demos --example typing_session`

use keywell_keyboard::{Document, Intent, KeyboardSurface, TextAssist};
use keywell_keymap::{FunctionKey, KeyCode, Keyboard, PageKind};
use keywell_surface::{Touch, TouchId};
use kurbo::{Point, Rect};

const KEY: f64 = 40.0;
const GAP: f64 = 4.0;

/// The host's text store: a string with the caret at the end.
#[derive(Default)]
struct Doc {
    text: String,
}

impl Document for Doc {
    fn context_before(&self) -> &str {
        &self.text
    }

    fn insert(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn delete_backward(&mut self) {
        self.text.pop();
    }
}

struct Host {
    surface: KeyboardSurface,
    assist: TextAssist,
    doc: Doc,
    keyboard: Keyboard,
    next_touch: u64,
}

impl Host {
    fn new() -> Self {
        let keyboard = Keyboard::english();
        let mut surface =
            KeyboardSurface::new(keyboard.clone(), Rect::new(0.0, 0.0, 460.0, 180.0));
        for kind in [PageKind::Character, PageKind::Number, PageKind::Symbol] {
            let rects: Vec<Rect> = keyboard
                .page(kind)
                .keys()
                .map(|((row, index), _)| {
                    let x = index as f64 * (KEY + GAP);
                    let y = row as f64 * (KEY + GAP);
                    Rect::new(x, y, x + KEY, y + KEY)
                })
                .collect();
            surface.load_page(kind, &rects);
        }
        surface.show_page(PageKind::Character);
        surface.drain_intents();
        Self {
            surface,
            assist: TextAssist::new(),
            doc: Doc::default(),
            keyboard,
            next_touch: 0,
        }
    }

    /// The center of `key` on the currently shown page.
    fn center_of(&self, key: KeyCode) -> Point {
        let page = self.keyboard.page(self.surface.current_page());
        let ((row, index), _) = page
            .keys()
            .find(|(_, k)| *k == key)
            .unwrap_or_else(|| panic!("{} is not on the current page", key.code()));
        Point::new(
            index as f64 * (KEY + GAP) + KEY / 2.0,
            row as f64 * (KEY + GAP) + KEY / 2.0,
        )
    }

    /// One press-release on `key` at `t`, followed by intent application.
    fn tap(&mut self, key: KeyCode, t: u64) {
        let at = self.center_of(key);
        self.next_touch += 1;
        let id = TouchId(self.next_touch);
        self.surface.touches_began(&[Touch::new(id, at, t)]);
        self.surface.touches_ended(&[Touch::new(id, at, t + 40)]);
        self.apply(t + 40);
    }

    /// Drain the intent queue into the document and run the heuristics.
    fn apply(&mut self, now: u64) {
        for intent in self.surface.drain_intents() {
            match intent {
                Intent::Insert(c) => {
                    let mut buf = [0_u8; 4];
                    self.doc.insert(c.encode_utf8(&mut buf));
                    if let Some(cap) = self.assist.after_insert(&mut self.doc, c, now) {
                        self.surface.apply_capitalization(cap);
                    }
                }
                Intent::DeleteBackward => {
                    self.doc.delete_backward();
                    if let Some(cap) = self.assist.after_delete(&self.doc) {
                        self.surface.apply_capitalization(cap);
                    }
                }
                Intent::PageChanged(kind) => println!("  [page -> {kind:?}]"),
                Intent::ShiftChanged(state) => println!("  [shift -> {state:?}]"),
                Intent::SwitchInputMode => println!("  [switch input mode]"),
            }
        }
    }
}

fn main() {
    let mut host = Host::new();

    // A fresh document starts a sentence; the recheck debounce settles
    // 150 ms after the host reports the (empty) document.
    host.assist.document_changed(0);
    if let Some(cap) = host.assist.poll(&host.doc, 150) {
        host.surface.apply_capitalization(cap);
    }
    host.apply(150);

    // "Hello" — the engaged shift uppercases exactly the first letter.
    let mut t = 1000;
    for c in ['h', 'e', 'l', 'l', 'o'] {
        host.tap(KeyCode::Letter(c), t);
        t += 400;
    }

    // A quick double space becomes ". " and re-engages shift.
    host.tap(KeyCode::Function(FunctionKey::Space), t);
    host.tap(KeyCode::Function(FunctionKey::Space), t + 120);
    t += 600;

    // "It" with the auto-engaged shift.
    host.tap(KeyCode::Letter('i'), t);
    host.tap(KeyCode::Letter('t'), t + 400);
    t += 800;

    // The apostrophe lives on the number page; typing it curls the quote
    // and hops straight back to the letters.
    host.tap(KeyCode::Function(FunctionKey::Page), t);
    host.tap(KeyCode::Symbol('\''), t + 400);
    host.tap(KeyCode::Letter('s'), t + 800);
    t += 1200;

    // Hold backspace past the repeat delay: one delete per 150 ms tick.
    let backspace = host.center_of(KeyCode::Function(FunctionKey::Backspace));
    host.next_touch += 1;
    let id = TouchId(host.next_touch);
    host.surface.touches_began(&[Touch::new(id, backspace, t)]);
    host.apply(t);
    for tick in [t + 500, t + 650, t + 800] {
        host.surface.tick(tick);
        host.apply(tick);
    }
    host.surface
        .touches_ended(&[Touch::new(id, backspace, t + 850)]);
    host.apply(t + 850);

    println!("document: {:?}", host.doc.text);
    assert_eq!(host.doc.text, "Hello. ");
}
