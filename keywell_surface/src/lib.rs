// Copyright 2026 the Keywell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keywell Surface: a deterministic, `no_std` touch router for densely
//! packed key regions.
//!
//! ## Overview
//!
//! On a software keyboard every pixel of the surface should commit some key:
//! gutters between keys must route to the nearest key, not to dead space.
//! This crate owns that routing. Feed platform touch batches to a
//! [`Router`](crate::router::Router) over a [`Registry`](crate::registry::Registry)
//! of key rectangles and it emits per-region [`ControlEvent`](crate::types::ControlEvent)
//! sequences — down, drag enter/exit, up inside/outside, cancel — which a
//! [`Bindings`](crate::dispatch::Bindings) table maps onto your handlers.
//!
//! ## Hit testing
//!
//! A touch resolves to the nearest visible, enabled region (Euclidean
//! distance to the rectangle, zero when contained), with exact ties going to
//! the first-registered region. Regions marked always-hit win outright
//! whenever the point falls within their own rectangle, independent of the
//! contest. Points outside the router bounds route to nothing.
//!
//! ## Gesture bookkeeping
//!
//! One touch drives the gesture: the latest-starting touch of a `began`
//! batch. The router remembers every region the gesture visits (the
//! passthrough set) with a per-region inside flag, so each region observes
//! a coherent pressed-key lifecycle even as the finger slides across keys.
//! A member that remains the nearest hit keeps the touch past its literal
//! edge, so keys stay responsive at their borders.
//!
//! ## Workflow
//!
//! 1) Register key rectangles with [`Registry`](crate::registry::Registry)
//!    at page load; the layout collaborator owns the geometry.
//! 2) Bind handlers with [`Bindings`](crate::dispatch::Bindings), masked by
//!    [`ControlEvents`](crate::types::ControlEvents).
//! 3) Feed each platform batch to the matching [`Router`](crate::router::Router)
//!    entry point and run the returned sequence through the bindings.
//!
//! ```
//! use keywell_surface::{
//!     Bindings, ControlEvents, Region, Registry, Router, Touch, TouchId,
//! };
//! use kurbo::{Point, Rect};
//!
//! let mut registry = Registry::new();
//! let key = registry.insert(Region::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
//! let mut router = Router::new(Rect::new(0.0, 0.0, 100.0, 10.0));
//!
//! let mut bindings: Bindings<Vec<&str>> = Bindings::new();
//! bindings.bind(key, ControlEvents::UP_INSIDE, |_, out: &mut Vec<&str>| {
//!     out.push("q");
//! });
//!
//! let mut out = Vec::new();
//! let touch = Touch::new(TouchId(1), Point::new(5.0, 5.0), 0);
//! bindings.run(&router.on_began(&registry, &[touch]), &mut out);
//! bindings.run(&router.on_ended(&registry, &[touch]), &mut out);
//! assert_eq!(out, vec!["q"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dispatch;
pub mod registry;
pub mod router;
pub mod types;

pub use dispatch::{Bindings, Handler};
pub use registry::{Region, RegionId, Registry};
pub use router::Router;
pub use types::{ControlEvent, ControlEvents, RegionEvent, Touch, TouchId};
