// Copyright 2026 the Keywell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composition root: pages bound to the touch surface.
//!
//! [`KeyboardSurface`] owns the region registry, the touch router, the
//! binding table, and the modifier state machines, and wires them together
//! according to a fixed per-key binding table:
//!
//! - shift: press drives the shift machine; dragging off the key arms the
//!   uppercase-then-disable commitment.
//! - backspace: press deletes once and starts auto-repeat; any exit or
//!   release stops it.
//! - page switches: press switches immediately; dragging off arms the
//!   type-one-key-then-restore alternate.
//! - globe: release on the key asks the host to switch input modes.
//! - input keys (letters, digits, symbols, space, return): release inside
//!   commits the character.
//!
//! Routing produces intents, never document edits: the host drains
//! [`Intent`]s after each batch and applies them to its own text store.
//!
//! ## Page switches mid-gesture
//!
//! A page switch rebuilds regions and bindings, but a live gesture keeps
//! routing to the keys it has already visited (the press that caused the
//! switch is still down). The old page's regions are therefore retired —
//! hidden from hit testing but kept with their bindings — until the
//! gesture ends, then dropped. This is what makes press-a-page-key,
//! drag-onto-a-key, release behave as one continuous gesture.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;

use keywell_keymap::{FunctionKey, KeyCode, Keyboard, PageKind};
use keywell_modifier::{AutoRepeat, DragAlternate, ShiftMachine, ShiftState};
use keywell_surface::{
    Bindings, ControlEvents, Region, RegionId, Registry, Router, Touch,
};

use crate::intent::Intent;

/// Mutable state shared by every bound handler during a dispatch run.
#[derive(Debug)]
pub(crate) struct Session {
    shift: ShiftMachine,
    repeat: AutoRepeat,
    page_drag: DragAlternate,
    page: PageKind,
    previous_page: Option<PageKind>,
    /// Page switch decided mid-dispatch; applied after the run completes
    /// (handlers cannot rebuild the binding table they run inside).
    pending_page: Option<PageKind>,
    now: u64,
    intents: Vec<Intent>,
}

impl Session {
    fn new() -> Self {
        Self {
            shift: ShiftMachine::new(),
            repeat: AutoRepeat::new(),
            page_drag: DragAlternate::new(),
            page: PageKind::Character,
            previous_page: None,
            pending_page: None,
            now: 0,
            intents: Vec::new(),
        }
    }

    fn push_shift(&mut self, change: Option<ShiftState>) {
        if let Some(state) = change {
            self.intents.push(Intent::ShiftChanged(state));
        }
    }

    /// The page the next commit will observe, counting an undispatched
    /// switch from earlier in the same run.
    fn effective_page(&self) -> PageKind {
        self.pending_page.unwrap_or(self.page)
    }

    /// Commit one character, applying the page and shift side effects of
    /// an input.
    fn commit(&mut self, c: char) {
        // A pending page drag types this key from the page the gesture
        // started on, then puts that page back.
        if self.page_drag.is_pending() {
            if let Some(previous) = self.previous_page {
                let change = self.shift.reset(self.now);
                self.push_shift(change);
                self.pending_page = Some(previous);
            }
        }
        // A space on a non-default page returns to the letters.
        if c == ' ' && self.effective_page() != PageKind::Character {
            self.pending_page = Some(PageKind::Character);
        }
        // An apostrophe returns to the page it interrupted.
        if c == '\'' {
            if let Some(previous) = self.previous_page {
                self.pending_page = Some(previous);
            }
        }
        // One-shot shift is spent by any committed input.
        if self.shift.state() == ShiftState::Enabled {
            let change = self.shift.reset(self.now);
            self.push_shift(change);
        }
        self.intents.push(Intent::Insert(c));
    }
}

/// A complete software-keyboard input surface.
///
/// ## Usage
///
/// - Supply per-page geometry with [`KeyboardSurface::load_page`] (one
///   rectangle per key, row-major; the host's layout owns the numbers).
/// - Feed platform touch batches to the `touches_*` entry points and pump
///   [`KeyboardSurface::tick`] for auto-repeat.
/// - Drain [`Intent`]s with [`KeyboardSurface::drain_intents`] after each
///   call and apply them to the document.
#[derive(Debug)]
pub struct KeyboardSurface {
    registry: Registry,
    router: Router,
    bindings: Bindings<Session>,
    keyboard: Keyboard,
    geometry: HashMap<PageKind, Vec<Rect>>,
    keys: HashMap<RegionId, KeyCode>,
    /// Retired regions from a mid-gesture page switch are still registered.
    stale_regions: bool,
    session: Session,
}

impl KeyboardSurface {
    /// Create a surface for `keyboard` covering `bounds`.
    pub fn new(keyboard: Keyboard, bounds: Rect) -> Self {
        Self {
            registry: Registry::new(),
            router: Router::new(bounds),
            bindings: Bindings::new(),
            keyboard,
            geometry: HashMap::new(),
            keys: HashMap::new(),
            stale_regions: false,
            session: Session::new(),
        }
    }

    /// Update the surface bounds (host layout changes).
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.router.set_bounds(bounds);
    }

    /// The currently shown page.
    pub fn current_page(&self) -> PageKind {
        self.session.page
    }

    /// The current shift state.
    pub fn shift_state(&self) -> ShiftState {
        self.session.shift.state()
    }

    /// The key a region belongs to, if registered.
    pub fn key_for_region(&self, region: RegionId) -> Option<KeyCode> {
        self.keys.get(&region).copied()
    }

    /// Store the rectangles for `kind` (row-major, one per key) and show
    /// that page. Rectangles are in the router's coordinate space.
    pub fn load_page(&mut self, kind: PageKind, rects: &[Rect]) {
        self.geometry.insert(kind, rects.to_vec());
        self.show_page(kind);
    }

    /// Show `kind`, rebuilding regions and bindings from stored geometry.
    ///
    /// No-op when no geometry was loaded for the page. Emits
    /// [`Intent::PageChanged`] when the page actually changes.
    pub fn show_page(&mut self, kind: PageKind) {
        if !self.geometry.contains_key(&kind) {
            return;
        }
        if self.router.tracked().is_some() {
            self.retire_regions();
        } else {
            self.clear_regions();
        }
        self.populate(kind);
        if self.session.page != kind {
            self.session.page = kind;
            self.session.intents.push(Intent::PageChanged(kind));
        }
    }

    /// Route a `began` batch.
    pub fn touches_began(&mut self, touches: &[Touch]) {
        self.compact();
        self.stamp(touches);
        let seq = self.router.on_began(&self.registry, touches);
        self.bindings.run(&seq, &mut self.session);
        self.apply_pending_page();
    }

    /// Route a `moved` batch.
    pub fn touches_moved(&mut self, touches: &[Touch]) {
        self.stamp(touches);
        let seq = self.router.on_moved(&self.registry, touches);
        self.bindings.run(&seq, &mut self.session);
        self.apply_pending_page();
    }

    /// Route an `ended` batch.
    pub fn touches_ended(&mut self, touches: &[Touch]) {
        self.stamp(touches);
        let seq = self.router.on_ended(&self.registry, touches);
        self.bindings.run(&seq, &mut self.session);
        self.apply_pending_page();
        self.compact();
    }

    /// Route a `cancelled` batch.
    pub fn touches_cancelled(&mut self, touches: &[Touch]) {
        self.stamp(touches);
        let seq = self.router.on_cancelled(&self.registry, touches);
        self.bindings.run(&seq, &mut self.session);
        self.apply_pending_page();
        self.compact();
    }

    /// Pump time-driven behavior; emits one [`Intent::DeleteBackward`]
    /// per due auto-repeat tick.
    pub fn tick(&mut self, now: u64) {
        self.session.now = now;
        for _ in 0..self.session.repeat.poll(now) {
            self.session.intents.push(Intent::DeleteBackward);
        }
    }

    /// Engage or spend shift on behalf of auto-capitalization.
    ///
    /// Caps lock is never overridden.
    pub fn apply_capitalization(&mut self, capitalize: bool) {
        if self.session.shift.state() == ShiftState::Locked {
            return;
        }
        let change = if capitalize {
            self.session.shift.engage()
        } else {
            self.session.shift.reset(self.session.now)
        };
        self.session.push_shift(change);
    }

    /// Take the intents queued since the last drain, in decision order.
    pub fn drain_intents(&mut self) -> Vec<Intent> {
        core::mem::take(&mut self.session.intents)
    }

    /// Abandon any gesture and return the modifiers to their defaults.
    pub fn reset(&mut self, now: u64) {
        self.router.reset();
        self.session.now = now;
        self.session.repeat.set_active(false, now);
        self.session.page_drag.reset();
        self.session.pending_page = None;
        self.session.previous_page = None;
        let change = self.session.shift.reset(now);
        self.session.push_shift(change);
        self.compact();
    }

    fn stamp(&mut self, touches: &[Touch]) {
        if let Some(now) = touches.iter().map(|t| t.timestamp).max() {
            self.session.now = now;
        }
    }

    fn apply_pending_page(&mut self) {
        if let Some(kind) = self.session.pending_page.take() {
            if kind != self.session.page {
                self.show_page(kind);
            }
        }
    }

    /// Drop retired regions once no gesture references them.
    fn compact(&mut self) {
        if self.stale_regions && self.router.tracked().is_none() {
            let kind = self.session.page;
            self.clear_regions();
            self.populate(kind);
        }
    }

    fn clear_regions(&mut self) {
        self.registry.clear();
        self.bindings.clear();
        self.keys.clear();
        self.stale_regions = false;
    }

    /// Hide the current regions from hit testing but keep their rectangles
    /// and bindings for the gesture that is still touching them.
    fn retire_regions(&mut self) {
        let ids: Vec<RegionId> = self.registry.iter().map(|(id, _)| id).collect();
        for id in ids {
            self.registry.set_visible(id, false);
            self.registry.set_enabled(id, false);
        }
        self.stale_regions = true;
    }

    /// Register and bind every key of `kind` from stored geometry.
    fn populate(&mut self, kind: PageKind) {
        let Some(rects) = self.geometry.get(&kind).cloned() else {
            return;
        };
        let page = self.keyboard.page(kind).clone();
        for (slot, (_, key)) in page.keys().enumerate() {
            let Some(&rect) = rects.get(slot) else {
                break;
            };
            let region = if key == KeyCode::Function(FunctionKey::Globe) {
                self.registry.insert(Region::always_hit(rect))
            } else {
                self.registry.insert(Region::new(rect))
            };
            self.keys.insert(region, key);
            self.bind_key(region, key, kind);
        }
    }

    /// The per-key binding table.
    fn bind_key(&mut self, region: RegionId, key: KeyCode, kind: PageKind) {
        match key {
            KeyCode::Function(FunctionKey::Shift) => {
                self.bindings.bind(region, ControlEvents::DOWN, |_, s: &mut Session| {
                    let change = s.shift.down(s.now);
                    s.push_shift(change);
                });
                self.bindings
                    .bind(region, ControlEvents::UP_INSIDE, |_, s: &mut Session| {
                        let change = s.shift.up();
                        s.push_shift(change);
                    });
                self.bindings
                    .bind(region, ControlEvents::DRAG_EXIT, |_, s: &mut Session| {
                        s.shift.drag_exit();
                    });
                self.bindings.bind(
                    region,
                    ControlEvents::UP_OUTSIDE | ControlEvents::CANCEL,
                    |_, s: &mut Session| {
                        let change = s.shift.drag_exit_off();
                        s.push_shift(change);
                    },
                );
            }
            KeyCode::Function(FunctionKey::Backspace) => {
                self.bindings.bind(region, ControlEvents::DOWN, |_, s: &mut Session| {
                    if s.repeat.set_active(true, s.now) {
                        s.intents.push(Intent::DeleteBackward);
                    }
                });
                self.bindings.bind(
                    region,
                    ControlEvents::UP_INSIDE
                        | ControlEvents::UP_OUTSIDE
                        | ControlEvents::DRAG_EXIT
                        | ControlEvents::DRAG_OUTSIDE
                        | ControlEvents::CANCEL,
                    |_, s: &mut Session| {
                        s.repeat.set_active(false, s.now);
                    },
                );
            }
            KeyCode::Function(
                switch @ (FunctionKey::Page
                | FunctionKey::ShiftToNumber
                | FunctionKey::ShiftToSymbol),
            ) => {
                let next = self.keyboard.next_page(switch, kind);
                self.bindings.bind(region, ControlEvents::DOWN, move |_, s: &mut Session| {
                    s.previous_page = Some(s.page);
                    let change = s.shift.reset(s.now);
                    s.push_shift(change);
                    s.pending_page = Some(next);
                });
                self.bindings
                    .bind(region, ControlEvents::DRAG_EXIT, |_, s: &mut Session| {
                        s.page_drag.on_drag_exit(true);
                    });
                self.bindings.bind(
                    region,
                    ControlEvents::DRAG_ENTER
                        | ControlEvents::UP_INSIDE
                        | ControlEvents::UP_OUTSIDE
                        | ControlEvents::CANCEL,
                    |_, s: &mut Session| {
                        s.page_drag.on_drag_exit_off();
                    },
                );
            }
            KeyCode::Function(FunctionKey::Globe) => {
                self.bindings
                    .bind(region, ControlEvents::UP_INSIDE, |_, s: &mut Session| {
                        s.intents.push(Intent::SwitchInputMode);
                    });
            }
            _ => {
                // Letters, digits, symbols, space, return: commit on a
                // release inside. The uppercase decision happens at commit
                // time, while a pending shift drag is still armed.
                self.bindings
                    .bind(region, ControlEvents::UP_INSIDE, move |_, s: &mut Session| {
                        let uppercase = s.shift.drag_exit_pending() || s.shift.is_uppercase();
                        if let Some(c) = key.output(uppercase) {
                            s.commit(c);
                        }
                    });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use keywell_surface::TouchId;
    use kurbo::Point;

    const KEY: f64 = 10.0;
    const GAP: f64 = 2.0;

    /// Row-major grid geometry: 10-wide keys with 2-unit gutters.
    fn grid(keyboard: &Keyboard, kind: PageKind) -> Vec<Rect> {
        keyboard
            .page(kind)
            .keys()
            .map(|((row, index), _)| {
                let x = index as f64 * (KEY + GAP);
                let y = row as f64 * (KEY + GAP);
                Rect::new(x, y, x + KEY, y + KEY)
            })
            .collect()
    }

    fn center(keyboard: &Keyboard, kind: PageKind, key: KeyCode) -> Point {
        let ((row, index), _) = keyboard
            .page(kind)
            .keys()
            .find(|(_, k)| *k == key)
            .expect("key exists on the page");
        Point::new(
            index as f64 * (KEY + GAP) + KEY / 2.0,
            row as f64 * (KEY + GAP) + KEY / 2.0,
        )
    }

    fn surface() -> KeyboardSurface {
        let keyboard = Keyboard::english();
        let mut surface =
            KeyboardSurface::new(keyboard.clone(), Rect::new(0.0, 0.0, 120.0, 48.0));
        for kind in [PageKind::Character, PageKind::Number, PageKind::Symbol] {
            let rects = grid(&keyboard, kind);
            surface.geometry.insert(kind, rects);
        }
        surface.show_page(PageKind::Character);
        surface.drain_intents();
        surface
    }

    fn tap(surface: &mut KeyboardSurface, at: Point, t: u64) {
        surface.touches_began(&[Touch::new(TouchId(t), at, t)]);
        surface.touches_ended(&[Touch::new(TouchId(t), at, t + 50)]);
    }

    fn keyboard() -> Keyboard {
        Keyboard::english()
    }

    #[test]
    fn tapping_a_letter_inserts_it_lowercase() {
        let mut surface = surface();
        let q = center(&keyboard(), PageKind::Character, KeyCode::Letter('q'));
        tap(&mut surface, q, 1000);
        assert_eq!(surface.drain_intents(), vec![Intent::Insert('q')]);
    }

    #[test]
    fn a_gutter_press_commits_the_nearest_key() {
        let mut surface = surface();
        let q = center(&keyboard(), PageKind::Character, KeyCode::Letter('q'));
        // Just right of the q key, in the gutter before w.
        tap(&mut surface, Point::new(q.x + KEY / 2.0 + 0.5, q.y), 1000);
        assert_eq!(surface.drain_intents(), vec![Intent::Insert('q')]);
    }

    #[test]
    fn shift_tap_uppercases_exactly_one_letter() {
        let mut surface = surface();
        let kb = keyboard();
        let shift = center(&kb, PageKind::Character, KeyCode::Function(FunctionKey::Shift));
        let a = center(&kb, PageKind::Character, KeyCode::Letter('a'));
        tap(&mut surface, shift, 1000);
        tap(&mut surface, a, 2000);
        tap(&mut surface, a, 3000);
        assert_eq!(
            surface.drain_intents(),
            vec![
                Intent::ShiftChanged(ShiftState::Enabled),
                Intent::ShiftChanged(ShiftState::Disabled),
                Intent::Insert('A'),
                Intent::Insert('a'),
            ]
        );
    }

    #[test]
    fn rapid_double_shift_locks_caps() {
        let mut surface = surface();
        let kb = keyboard();
        let shift = center(&kb, PageKind::Character, KeyCode::Function(FunctionKey::Shift));
        let a = center(&kb, PageKind::Character, KeyCode::Letter('a'));
        tap(&mut surface, shift, 1000);
        tap(&mut surface, shift, 1150);
        tap(&mut surface, a, 2000);
        tap(&mut surface, a, 3000);
        assert_eq!(
            surface.drain_intents(),
            vec![
                Intent::ShiftChanged(ShiftState::Enabled),
                Intent::ShiftChanged(ShiftState::Locked),
                Intent::Insert('A'),
                Intent::Insert('A'),
            ]
        );
        assert_eq!(surface.shift_state(), ShiftState::Locked);
    }

    #[test]
    fn shift_drag_onto_a_letter_commits_uppercase_then_disables() {
        let mut surface = surface();
        let kb = keyboard();
        let shift = center(&kb, PageKind::Character, KeyCode::Function(FunctionKey::Shift));
        let b = center(&kb, PageKind::Character, KeyCode::Letter('b'));
        surface.touches_began(&[Touch::new(TouchId(1), shift, 1000)]);
        surface.touches_moved(&[Touch::new(TouchId(1), b, 1100)]);
        surface.touches_ended(&[Touch::new(TouchId(1), b, 1200)]);
        assert_eq!(
            surface.drain_intents(),
            vec![
                Intent::ShiftChanged(ShiftState::Enabled),
                Intent::ShiftChanged(ShiftState::Disabled),
                Intent::Insert('B'),
            ]
        );
        assert_eq!(surface.shift_state(), ShiftState::Disabled);
    }

    #[test]
    fn backspace_deletes_once_then_repeats_while_held() {
        let mut surface = surface();
        let kb = keyboard();
        let backspace = center(
            &kb,
            PageKind::Character,
            KeyCode::Function(FunctionKey::Backspace),
        );
        surface.touches_began(&[Touch::new(TouchId(1), backspace, 1000)]);
        assert_eq!(surface.drain_intents(), vec![Intent::DeleteBackward]);
        // Nothing before the initial delay.
        surface.tick(1400);
        assert!(surface.drain_intents().is_empty());
        // First repeat after 500 ms, second 150 ms later.
        surface.tick(1650);
        assert_eq!(
            surface.drain_intents(),
            vec![Intent::DeleteBackward, Intent::DeleteBackward]
        );
        surface.touches_ended(&[Touch::new(TouchId(1), backspace, 1700)]);
        surface.tick(5000);
        assert!(surface.drain_intents().is_empty());
    }

    #[test]
    fn quick_backspace_tap_deletes_exactly_once() {
        let mut surface = surface();
        let kb = keyboard();
        let backspace = center(
            &kb,
            PageKind::Character,
            KeyCode::Function(FunctionKey::Backspace),
        );
        tap(&mut surface, backspace, 1000);
        surface.tick(10_000);
        assert_eq!(surface.drain_intents(), vec![Intent::DeleteBackward]);
    }

    #[test]
    fn page_key_switches_to_the_number_page() {
        let mut surface = surface();
        let kb = keyboard();
        let page = center(&kb, PageKind::Character, KeyCode::Function(FunctionKey::Page));
        tap(&mut surface, page, 1000);
        assert_eq!(
            surface.drain_intents(),
            vec![Intent::PageChanged(PageKind::Number)]
        );
        assert_eq!(surface.current_page(), PageKind::Number);
        let five = center(&kb, PageKind::Number, KeyCode::Digit('5'));
        tap(&mut surface, five, 2000);
        assert_eq!(surface.drain_intents(), vec![Intent::Insert('5')]);
    }

    #[test]
    fn page_drag_types_one_key_and_restores_the_page() {
        let mut surface = surface();
        let kb = keyboard();
        let page = center(&kb, PageKind::Character, KeyCode::Function(FunctionKey::Page));
        let five = center(&kb, PageKind::Number, KeyCode::Digit('5'));
        surface.touches_began(&[Touch::new(TouchId(1), page, 1000)]);
        assert_eq!(surface.current_page(), PageKind::Number);
        surface.touches_moved(&[Touch::new(TouchId(1), five, 1100)]);
        surface.touches_ended(&[Touch::new(TouchId(1), five, 1200)]);
        assert_eq!(
            surface.drain_intents(),
            vec![
                Intent::PageChanged(PageKind::Number),
                Intent::Insert('5'),
                Intent::PageChanged(PageKind::Character),
            ]
        );
        assert_eq!(surface.current_page(), PageKind::Character);
    }

    #[test]
    fn page_tap_without_a_drag_stays_on_the_new_page() {
        let mut surface = surface();
        let kb = keyboard();
        let page = center(&kb, PageKind::Character, KeyCode::Function(FunctionKey::Page));
        surface.touches_began(&[Touch::new(TouchId(1), page, 1000)]);
        surface.touches_ended(&[Touch::new(TouchId(1), page, 1100)]);
        surface.drain_intents();
        let three = center(&kb, PageKind::Number, KeyCode::Digit('3'));
        tap(&mut surface, three, 2000);
        assert_eq!(surface.drain_intents(), vec![Intent::Insert('3')]);
        assert_eq!(surface.current_page(), PageKind::Number);
    }

    #[test]
    fn space_on_the_number_page_restores_letters() {
        let mut surface = surface();
        let kb = keyboard();
        let page = center(&kb, PageKind::Character, KeyCode::Function(FunctionKey::Page));
        tap(&mut surface, page, 1000);
        let space = center(&kb, PageKind::Number, KeyCode::Function(FunctionKey::Space));
        tap(&mut surface, space, 2000);
        assert_eq!(
            surface.drain_intents(),
            vec![
                Intent::PageChanged(PageKind::Number),
                Intent::Insert(' '),
                Intent::PageChanged(PageKind::Character),
            ]
        );
    }

    #[test]
    fn apostrophe_restores_the_interrupted_page() {
        let mut surface = surface();
        let kb = keyboard();
        let page = center(&kb, PageKind::Character, KeyCode::Function(FunctionKey::Page));
        tap(&mut surface, page, 1000);
        surface.drain_intents();
        let apostrophe = center(&kb, PageKind::Number, KeyCode::Symbol('\''));
        tap(&mut surface, apostrophe, 2000);
        assert_eq!(
            surface.drain_intents(),
            vec![
                Intent::Insert('\''),
                Intent::PageChanged(PageKind::Character),
            ]
        );
    }

    #[test]
    fn globe_release_requests_an_input_mode_switch() {
        let mut surface = surface();
        let kb = keyboard();
        let globe = center(&kb, PageKind::Character, KeyCode::Function(FunctionKey::Globe));
        tap(&mut surface, globe, 1000);
        assert_eq!(surface.drain_intents(), vec![Intent::SwitchInputMode]);
    }

    #[test]
    fn return_inserts_a_newline_only_on_release_inside() {
        let mut surface = surface();
        let kb = keyboard();
        let ret = center(&kb, PageKind::Character, KeyCode::Function(FunctionKey::Return));
        let space = center(&kb, PageKind::Character, KeyCode::Function(FunctionKey::Space));
        tap(&mut surface, ret, 1000);
        assert_eq!(surface.drain_intents(), vec![Intent::Insert('\n')]);
        // Press return, drag away, release elsewhere: no newline.
        surface.touches_began(&[Touch::new(TouchId(2), ret, 2000)]);
        surface.touches_moved(&[Touch::new(TouchId(2), space, 2100)]);
        surface.touches_ended(&[Touch::new(TouchId(2), space, 2200)]);
        assert_eq!(surface.drain_intents(), vec![Intent::Insert(' ')]);
    }

    #[test]
    fn cancelled_gesture_commits_nothing_and_stops_repeat() {
        let mut surface = surface();
        let kb = keyboard();
        let backspace = center(
            &kb,
            PageKind::Character,
            KeyCode::Function(FunctionKey::Backspace),
        );
        surface.touches_began(&[Touch::new(TouchId(1), backspace, 1000)]);
        surface.drain_intents();
        surface.touches_cancelled(&[Touch::new(TouchId(1), backspace, 1100)]);
        surface.tick(10_000);
        assert!(surface.drain_intents().is_empty());
    }

    #[test]
    fn capitalization_engages_and_spends_shift_but_never_caps_lock() {
        let mut surface = surface();
        surface.apply_capitalization(true);
        assert_eq!(surface.shift_state(), ShiftState::Enabled);
        surface.apply_capitalization(false);
        assert_eq!(surface.shift_state(), ShiftState::Disabled);

        let kb = keyboard();
        let shift = center(&kb, PageKind::Character, KeyCode::Function(FunctionKey::Shift));
        tap(&mut surface, shift, 1000);
        tap(&mut surface, shift, 1100);
        assert_eq!(surface.shift_state(), ShiftState::Locked);
        surface.apply_capitalization(false);
        assert_eq!(surface.shift_state(), ShiftState::Locked);
    }

    #[test]
    fn reset_abandons_the_gesture_and_modifiers() {
        let mut surface = surface();
        let kb = keyboard();
        let shift = center(&kb, PageKind::Character, KeyCode::Function(FunctionKey::Shift));
        tap(&mut surface, shift, 1000);
        surface.drain_intents();
        surface.reset(2000);
        assert_eq!(
            surface.drain_intents(),
            vec![Intent::ShiftChanged(ShiftState::Disabled)]
        );
        let a = center(&kb, PageKind::Character, KeyCode::Letter('a'));
        tap(&mut surface, a, 3000);
        assert_eq!(surface.drain_intents(), vec![Intent::Insert('a')]);
    }
}
