// Copyright 2026 the Keywell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keywell Keymap: static key-code and page-layout tables.
//!
//! ## Overview
//!
//! A [`Keyboard`](crate::page::Keyboard) is a set of
//! [`Page`](crate::page::Page)s — rows of [`KeyCode`](crate::keycode::KeyCode)s —
//! plus the rules for moving between them. The tables carry identity only:
//! what each key is and where it sits in its row. Geometry (rectangles) is
//! supplied by the host's layout; behavior (what a press does) lives in the
//! composition root.
//!
//! Only the English layout ships: the QWERTY character page, the number
//! page, and the symbol page, with the standard `123`/`ABC`/`#+=` switch
//! keys.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod english;
pub mod keycode;
pub mod page;

pub use keycode::{FunctionKey, KeyCode};
pub use page::{Keyboard, Page, PageKind};
