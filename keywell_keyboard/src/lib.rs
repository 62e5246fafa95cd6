// Copyright 2026 the Keywell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keywell Keyboard: the composition root that turns touch batches into
//! text.
//!
//! ## Overview
//!
//! [`KeyboardSurface`](crate::surface::KeyboardSurface) wires the layout
//! pages of `keywell_keymap` onto the touch router of `keywell_surface`,
//! drives the shift, auto-repeat, and page-drag state machines of
//! `keywell_modifier`, and queues [`Intent`](crate::intent::Intent)s for
//! the host: insert a character, delete backward, a page or shift change
//! to re-render, or a hand-off to the next input mode.
//!
//! The keyboard never owns the text. The host applies each intent to its
//! own document and can then run [`TextAssist`](crate::text::TextAssist)
//! over the result for the auto-period, smart-quote, and
//! auto-capitalization rewrites, feeding any capitalization suggestion
//! back through
//! [`KeyboardSurface::apply_capitalization`](crate::surface::KeyboardSurface::apply_capitalization).
//!
//! ## Usage
//!
//! ```
//! use keywell_keyboard::{Intent, KeyboardSurface};
//! use keywell_keymap::{Keyboard, PageKind};
//! use keywell_surface::{Touch, TouchId};
//! use kurbo::{Point, Rect};
//!
//! // A grid of 10pt keys, one rectangle per key, row-major; real hosts
//! // derive this from their view geometry.
//! let keyboard = Keyboard::english();
//! let rects: Vec<Rect> = keyboard
//!     .page(PageKind::Character)
//!     .keys()
//!     .map(|((row, index), _)| {
//!         let x = index as f64 * 10.0;
//!         let y = row as f64 * 10.0;
//!         Rect::new(x, y, x + 10.0, y + 10.0)
//!     })
//!     .collect();
//! let mut surface = KeyboardSurface::new(keyboard, Rect::new(0.0, 0.0, 100.0, 40.0));
//! surface.load_page(PageKind::Character, &rects);
//!
//! // Tap the top-left key ('q').
//! let touch = Touch::new(TouchId(1), Point::new(5.0, 5.0), 0);
//! surface.touches_began(&[touch]);
//! surface.touches_ended(&[touch]);
//! assert_eq!(surface.drain_intents(), vec![Intent::Insert('q')]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod intent;
pub mod surface;
pub mod text;

pub use intent::Intent;
pub use surface::KeyboardSurface;
pub use text::{Document, TextAssist, TextRules};
