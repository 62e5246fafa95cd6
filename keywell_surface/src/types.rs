// Copyright 2026 the Keywell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch and event types shared across the surface.

use bitflags::bitflags;
use kurbo::Point;

use crate::registry::RegionId;

/// Identity of one platform touch (finger) across its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TouchId(pub u64);

/// One contact point in a platform touch batch.
///
/// The phase (began/moved/ended/cancelled) is carried by which
/// [`Router`](crate::router::Router) entry point receives the batch, not by
/// the touch itself. Timestamps are plain milliseconds supplied by the
/// caller; their ordering decides which touch of a batch becomes tracked.
#[derive(Copy, Clone, Debug)]
pub struct Touch {
    /// Platform identity of this touch.
    pub id: TouchId,
    /// Position in the router's coordinate space.
    pub position: Point,
    /// Event timestamp in milliseconds.
    pub timestamp: u64,
    /// Consecutive tap count reported by the platform; `> 1` marks a multi-tap.
    pub tap_count: u32,
}

impl Touch {
    /// Create a single-tap touch.
    pub fn new(id: TouchId, position: Point, timestamp: u64) -> Self {
        Self {
            id,
            position,
            timestamp,
            tap_count: 1,
        }
    }

    /// Set the platform-reported tap count.
    pub fn with_tap_count(mut self, tap_count: u32) -> Self {
        self.tap_count = tap_count;
        self
    }
}

/// A synthesized per-region interaction event.
///
/// These mirror the classic touch control events of a pressable key:
///
/// 1. `Down` → `[DragInside]` → `UpInside`
/// 2. `Down` → `[DragInside]` → `DragExit` → `[DragOutside]` → `UpOutside`
/// 3. `Down` → `DragExit` → `[DragOutside]` → `DragEnter` → `[DragInside]` → `UpInside`
/// 4. `DragEnter` → `[DragInside]` → `UpInside` (gesture began on a neighbor)
/// 5. `DragEnter` → `DragExit` → `[DragOutside]` → `UpOutside`
///
/// `Down` fires for the region nearest the touch when the gesture begins;
/// `DragEnter`/`DragExit` fire on outside→inside / inside→outside
/// transitions; `DragInside`/`DragOutside` fire on every move while the
/// state is unchanged; `Cancel` terminates a gesture without a release.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ControlEvent {
    /// The gesture began with this region as the nearest target.
    Down,
    /// As [`Self::Down`], for a multi-tap (platform tap count above one).
    DownRepeat,
    /// The tracked touch entered this region.
    DragEnter,
    /// The tracked touch moved while inside this region.
    DragInside,
    /// The tracked touch left this region.
    DragExit,
    /// The tracked touch moved while outside this region (already visited).
    DragOutside,
    /// The tracked touch lifted while this region was the effective target.
    UpInside,
    /// The tracked touch lifted away from this visited region.
    UpOutside,
    /// The gesture was abandoned; no release will follow.
    Cancel,
}

impl ControlEvent {
    /// The bitflag corresponding to this event kind, for binding lookups.
    pub const fn flag(self) -> ControlEvents {
        match self {
            Self::Down => ControlEvents::DOWN,
            Self::DownRepeat => ControlEvents::DOWN_REPEAT,
            Self::DragEnter => ControlEvents::DRAG_ENTER,
            Self::DragInside => ControlEvents::DRAG_INSIDE,
            Self::DragExit => ControlEvents::DRAG_EXIT,
            Self::DragOutside => ControlEvents::DRAG_OUTSIDE,
            Self::UpInside => ControlEvents::UP_INSIDE,
            Self::UpOutside => ControlEvents::UP_OUTSIDE,
            Self::Cancel => ControlEvents::CANCEL,
        }
    }
}

bitflags! {
    /// A set of [`ControlEvent`] kinds, for binding one handler to several.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct ControlEvents: u16 {
        /// [`ControlEvent::Down`]
        const DOWN = 1 << 0;
        /// [`ControlEvent::DownRepeat`]
        const DOWN_REPEAT = 1 << 1;
        /// [`ControlEvent::DragEnter`]
        const DRAG_ENTER = 1 << 2;
        /// [`ControlEvent::DragInside`]
        const DRAG_INSIDE = 1 << 3;
        /// [`ControlEvent::DragExit`]
        const DRAG_EXIT = 1 << 4;
        /// [`ControlEvent::DragOutside`]
        const DRAG_OUTSIDE = 1 << 5;
        /// [`ControlEvent::UpInside`]
        const UP_INSIDE = 1 << 6;
        /// [`ControlEvent::UpOutside`]
        const UP_OUTSIDE = 1 << 7;
        /// [`ControlEvent::Cancel`]
        const CANCEL = 1 << 8;
    }
}

/// One synthesized event addressed to one region.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RegionEvent {
    /// The region the event is addressed to.
    pub region: RegionId,
    /// The synthesized event kind.
    pub event: ControlEvent,
}

impl RegionEvent {
    /// Create a region event.
    pub const fn new(region: RegionId, event: ControlEvent) -> Self {
        Self { region, event }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_event_kind_maps_to_a_distinct_flag() {
        let kinds = [
            ControlEvent::Down,
            ControlEvent::DownRepeat,
            ControlEvent::DragEnter,
            ControlEvent::DragInside,
            ControlEvent::DragExit,
            ControlEvent::DragOutside,
            ControlEvent::UpInside,
            ControlEvent::UpOutside,
            ControlEvent::Cancel,
        ];
        let mut seen = ControlEvents::empty();
        for kind in kinds {
            assert!(!seen.intersects(kind.flag()), "flags must not overlap");
            seen |= kind.flag();
        }
        assert_eq!(seen, ControlEvents::all());
    }

    #[test]
    fn touch_defaults_to_single_tap() {
        let touch = Touch::new(TouchId(1), Point::new(1.0, 2.0), 100);
        assert_eq!(touch.tap_count, 1);
        assert_eq!(touch.with_tap_count(2).tap_count, 2);
    }
}
