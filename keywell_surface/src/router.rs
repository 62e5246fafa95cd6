// Copyright 2026 the Keywell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch router: nearest-region hit testing and per-gesture event synthesis.
//!
//! ## Overview
//!
//! The router consumes raw touch batches and synthesizes the per-region
//! [`ControlEvent`] sequence for each callback. It owns all gesture state:
//! the single tracked touch, the passthrough set of regions the gesture has
//! visited, and each member's inside flag. Regions themselves live in the
//! [`Registry`]; the router only reads them.
//!
//! ## Target selection
//!
//! - Exactly one touch drives the gesture: the latest-starting touch of a
//!   `began` batch. Any other touch in the batch is resolved immediately
//!   with a synthetic down + cancel and never tracked.
//! - Hit testing is continuous, not exact-bounds: the nearest visible,
//!   enabled region wins even when the point is between keys, with ties
//!   broken by registration order. An always-hit region short-circuits the
//!   contest whenever the point falls within its own rectangle.
//! - While dragging, a member region that is the nearest hit keeps the
//!   touch focus even when the point strays just past its edge ("sticky
//!   focus"), so a key stays responsive at its border.
//!
//! ## Edge policy
//!
//! A hidden or disabled router, an empty registry, or a point outside the
//! router bounds routes to nothing; the batch is dropped silently, never an
//! error.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::registry::{RegionId, Registry};
use crate::types::{ControlEvent, RegionEvent, Touch, TouchId};

/// One passthrough-set member with its inside flag.
///
/// The inside flag is meaningful only while the region is a member; both
/// are dropped together when the gesture ends or is cancelled.
#[derive(Copy, Clone, Debug)]
struct PassEntry {
    region: RegionId,
    inside: bool,
}

/// Routes raw touch batches over a [`Registry`] of key regions.
///
/// ## Usage
///
/// - Feed each platform batch to the matching entry point
///   ([`Router::on_began`], [`Router::on_moved`], [`Router::on_ended`],
///   [`Router::on_cancelled`]) together with the current registry.
/// - Each call returns the ordered [`RegionEvent`] sequence for that
///   callback; execute it with
///   [`Bindings::run`](crate::dispatch::Bindings::run).
/// - Events for a gesture are emitted in strict temporal order; a region
///   receives at most one event of a given kind per callback.
#[derive(Clone, Debug)]
pub struct Router {
    bounds: Rect,
    hidden: bool,
    enabled: bool,
    tracked: Option<TouchId>,
    passthrough: SmallVec<[PassEntry; 8]>,
}

impl Router {
    /// Create a router covering `bounds` in its own coordinate space.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            hidden: false,
            enabled: true,
            tracked: None,
            passthrough: SmallVec::new(),
        }
    }

    /// Update the router bounds (layout changes).
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Hide or show the router; a hidden router routes to nothing.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Enable or disable the router; a disabled router routes to nothing.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The touch currently driving gesture bookkeeping, if any.
    pub fn tracked(&self) -> Option<TouchId> {
        self.tracked
    }

    /// The regions visited by the current gesture, in visit order.
    pub fn passthrough(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.passthrough.iter().map(|e| e.region)
    }

    /// Drop all gesture state without emitting events (page unload).
    pub fn reset(&mut self) {
        self.passthrough.clear();
        self.tracked = None;
    }

    /// Resolve `point` to a region.
    ///
    /// An always-hit region containing the point is returned directly.
    /// Otherwise the nearest visible, enabled region wins, with exact ties
    /// resolved to the first-registered region. Returns `None` when the
    /// router is hidden or disabled, or when the point lies outside the
    /// router bounds and no always-hit region claims it.
    pub fn hit_test(&self, registry: &Registry, point: Point) -> Option<RegionId> {
        if self.hidden || !self.enabled {
            return None;
        }
        for (id, region) in registry.iter() {
            if region.always_hit && region.visible && region.enabled && region.rect.contains(point)
            {
                return Some(id);
            }
        }
        if !self.bounds.contains(point) {
            return None;
        }
        registry.nearest(point)
    }

    /// Route a `began` batch.
    ///
    /// The latest-starting touch becomes the tracked touch. Every other
    /// touch in the batch resolves immediately — `Down` (and `DownRepeat`
    /// for a multi-tap) followed by `Cancel` — and is never added to the
    /// passthrough set. Stale members of a previous gesture are cancelled
    /// before the new gesture's `Down` (and multi-tap `DownRepeat`) is
    /// emitted.
    pub fn on_began(&mut self, registry: &Registry, touches: &[Touch]) -> Vec<RegionEvent> {
        let mut out = Vec::new();
        let mut sorted: SmallVec<[Touch; 4]> = touches.iter().copied().collect();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        let Some((latest, rest)) = sorted.split_first() else {
            return out;
        };

        // Simultaneous extra fingers: resolve in ascending timestamp order.
        for touch in rest.iter().rev() {
            let Some(region) = self.hit_test(registry, touch.position) else {
                continue;
            };
            out.push(RegionEvent::new(region, ControlEvent::Down));
            if touch.tap_count > 1 {
                out.push(RegionEvent::new(region, ControlEvent::DownRepeat));
            }
            out.push(RegionEvent::new(region, ControlEvent::Cancel));
        }

        // A non-empty passthrough set here is a stale gesture.
        for entry in self.passthrough.drain(..) {
            out.push(RegionEvent::new(entry.region, ControlEvent::Cancel));
        }

        self.tracked = Some(latest.id);
        if let Some(region) = self.hit_test(registry, latest.position) {
            self.passthrough.push(PassEntry {
                region,
                inside: true,
            });
            out.push(RegionEvent::new(region, ControlEvent::Down));
            if latest.tap_count > 1 {
                out.push(RegionEvent::new(region, ControlEvent::DownRepeat));
            }
        }
        out
    }

    /// Route a `moved` batch; no-op unless it contains the tracked touch.
    pub fn on_moved(&mut self, registry: &Registry, touches: &[Touch]) -> Vec<RegionEvent> {
        let mut out = Vec::new();
        let Some(touch) = self.tracked_touch(touches) else {
            return out;
        };
        let point = touch.position;

        // A region entered for the first time joins the passthrough set with
        // a DragEnter. A hit on an existing member becomes the cycle's
        // focus and keeps the touch even while geometrically outside.
        let mut focus = None;
        if let Some(region) = self.hit_test(registry, point) {
            if self.is_member(region) {
                focus = Some(region);
            } else {
                self.passthrough.push(PassEntry {
                    region,
                    inside: true,
                });
                out.push(RegionEvent::new(region, ControlEvent::DragEnter));
            }
        }

        // Partition members by literal containment; contained members first.
        for entry in &mut self.passthrough {
            let contained = registry
                .rect(entry.region)
                .is_some_and(|r| r.contains(point));
            if !contained {
                continue;
            }
            let event = if entry.inside {
                ControlEvent::DragInside
            } else {
                ControlEvent::DragEnter
            };
            out.push(RegionEvent::new(entry.region, event));
            entry.inside = true;
        }
        for entry in &mut self.passthrough {
            let contained = registry
                .rect(entry.region)
                .is_some_and(|r| r.contains(point));
            if contained {
                continue;
            }
            if focus == Some(entry.region) {
                // Sticky focus: still functionally entered.
                let event = if entry.inside {
                    ControlEvent::DragInside
                } else {
                    ControlEvent::DragEnter
                };
                out.push(RegionEvent::new(entry.region, event));
                entry.inside = true;
            } else {
                let event = if entry.inside {
                    ControlEvent::DragExit
                } else {
                    ControlEvent::DragOutside
                };
                out.push(RegionEvent::new(entry.region, event));
                entry.inside = false;
            }
        }
        out
    }

    /// Route an `ended` batch; no-op unless it contains the tracked touch.
    ///
    /// Contained members and the focus member receive `UpInside` — before
    /// any `UpOutside`, so release handlers observe still-armed drag state —
    /// and every other member receives `UpOutside`. All gesture state is
    /// cleared afterward.
    pub fn on_ended(&mut self, registry: &Registry, touches: &[Touch]) -> Vec<RegionEvent> {
        let mut out = Vec::new();
        let Some(touch) = self.tracked_touch(touches) else {
            return out;
        };
        let point = touch.position;

        // Same focus computation as a move, but a region first hit at
        // release joins silently and counts as the focus: it takes the
        // UpInside without a DragEnter.
        let mut focus = None;
        if let Some(region) = self.hit_test(registry, point) {
            if !self.is_member(region) {
                self.passthrough.push(PassEntry {
                    region,
                    inside: true,
                });
            }
            focus = Some(region);
        }

        for entry in &self.passthrough {
            let contained = registry
                .rect(entry.region)
                .is_some_and(|r| r.contains(point));
            if contained || focus == Some(entry.region) {
                out.push(RegionEvent::new(entry.region, ControlEvent::UpInside));
            }
        }
        for entry in &self.passthrough {
            let contained = registry
                .rect(entry.region)
                .is_some_and(|r| r.contains(point));
            if !contained && focus != Some(entry.region) {
                out.push(RegionEvent::new(entry.region, ControlEvent::UpOutside));
            }
        }
        self.reset();
        out
    }

    /// Route a `cancelled` batch; no-op unless it contains the tracked
    /// touch. Every member receives `Cancel`; gesture state is cleared.
    pub fn on_cancelled(&mut self, _registry: &Registry, touches: &[Touch]) -> Vec<RegionEvent> {
        let mut out = Vec::new();
        if self.tracked_touch(touches).is_none() {
            return out;
        }
        for entry in &self.passthrough {
            out.push(RegionEvent::new(entry.region, ControlEvent::Cancel));
        }
        self.reset();
        out
    }

    fn tracked_touch<'t>(&self, touches: &'t [Touch]) -> Option<&'t Touch> {
        let id = self.tracked?;
        touches.iter().find(|t| t.id == id)
    }

    fn is_member(&self, region: RegionId) -> bool {
        self.passthrough.iter().any(|e| e.region == region)
    }
}
