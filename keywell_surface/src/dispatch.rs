// Copyright 2026 the Keywell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding table: run handlers over the event sequences the router emits.
//!
//! The router synthesizes [`RegionEvent`] sequences; the binding table maps
//! them onto application handlers. It is deliberately minimal:
//!
//! - A binding pairs a region with a [`ControlEvents`] mask and a handler.
//! - One region may carry several bindings; one binding may cover several
//!   event kinds via its mask.
//! - Handlers receive the event plus a mutable session payload `E` carried
//!   across calls; you own its shape. Higher-level semantics (committed
//!   text, pending page switches) live on the payload, not here.
//! - An event with no matching binding is dropped silently.
//!
//! ## Minimal example
//!
//! ```
//! use keywell_surface::{Bindings, ControlEvent, ControlEvents, RegionEvent, RegionId};
//!
//! #[derive(Default)]
//! struct Session {
//!     committed: Vec<u32>,
//! }
//!
//! let mut bindings: Bindings<Session> = Bindings::new();
//! let key = RegionId(0);
//! bindings.bind(key, ControlEvents::UP_INSIDE, |ev, session: &mut Session| {
//!     session.committed.push(ev.region.0);
//! });
//!
//! let seq = vec![
//!     RegionEvent::new(key, ControlEvent::Down),
//!     RegionEvent::new(key, ControlEvent::UpInside),
//! ];
//! let mut session = Session::default();
//! bindings.run(&seq, &mut session);
//! assert_eq!(session.committed, vec![0]);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::registry::RegionId;
use crate::types::{ControlEvents, RegionEvent};

/// A bound event handler; receives the event and the session payload.
pub type Handler<E> = Box<dyn FnMut(RegionEvent, &mut E)>;

struct Binding<E> {
    mask: ControlEvents,
    handler: Handler<E>,
}

/// Maps region events onto handlers.
///
/// ## Usage
///
/// - [`Bindings::bind`] attaches a handler to one region for the event kinds
///   in a mask; bind the same region again to layer handlers.
/// - [`Bindings::run`] executes a router-produced sequence in order; for
///   each event, every matching binding fires in binding order.
/// - [`Bindings::unbind`] drops all of a region's bindings (page unload
///   rebuilds the table alongside the registry).
pub struct Bindings<E> {
    table: HashMap<RegionId, Vec<Binding<E>>>,
}

impl<E> Bindings<E> {
    /// Create an empty binding table.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Bind `handler` to `region` for the event kinds in `mask`.
    pub fn bind(
        &mut self,
        region: RegionId,
        mask: ControlEvents,
        handler: impl FnMut(RegionEvent, &mut E) + 'static,
    ) {
        self.table.entry(region).or_default().push(Binding {
            mask,
            handler: Box::new(handler),
        });
    }

    /// Drop every binding attached to `region`.
    pub fn unbind(&mut self, region: RegionId) {
        self.table.remove(&region);
    }

    /// Drop every binding (page unload).
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Number of regions with at least one binding.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no bindings are registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Deliver one event to every matching binding, in binding order.
    pub fn emit(&mut self, event: RegionEvent, session: &mut E) {
        let Some(bindings) = self.table.get_mut(&event.region) else {
            return;
        };
        let flag = event.event.flag();
        for binding in bindings {
            if binding.mask.contains(flag) {
                (binding.handler)(event, session);
            }
        }
    }

    /// Run a router-produced sequence in order over the binding table.
    pub fn run(&mut self, seq: &[RegionEvent], session: &mut E) {
        for event in seq {
            self.emit(*event, session);
        }
    }
}

impl<E> Default for Bindings<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Bindings<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bindings")
            .field("regions", &self.table.len())
            .finish_non_exhaustive()
    }
}
