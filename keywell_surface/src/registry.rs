// Copyright 2026 the Keywell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region registry: passive hit-area data for one loaded keyboard page.
//!
//! The registry owns the rectangles and flags of every interactive key
//! region. Rectangles are written by the layout collaborator (the geometry
//! provider) and only read here; the surface never computes them. Entries
//! live from page load to page unload — [`Registry::clear`] drops them
//! wholesale when a page is replaced.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

/// Identifier of one registered region.
///
/// Registration order is index order; hit-test ties resolve to the lower id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u32);

impl RegionId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// One rectangular interactive hit-area corresponding to a key.
#[derive(Copy, Clone, Debug)]
pub struct Region {
    /// Hit rectangle in the router's coordinate space.
    pub rect: Rect,
    /// Whenever the point falls within this region's own rectangle, hit
    /// testing returns it directly, bypassing the nearest-region contest.
    /// Used for keys the host must intercept independent of neighboring key
    /// density (the input-mode-switch key).
    pub always_hit: bool,
    /// Hidden regions never win hit testing.
    pub visible: bool,
    /// Disabled regions never win hit testing.
    pub enabled: bool,
}

impl Region {
    /// A visible, enabled region with ordinary hit testing.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            always_hit: false,
            visible: true,
            enabled: true,
        }
    }

    /// A visible, enabled region that bypasses the nearest-region contest
    /// whenever the point falls within its own rectangle.
    pub fn always_hit(rect: Rect) -> Self {
        Self {
            always_hit: true,
            ..Self::new(rect)
        }
    }
}

/// Passive store of the regions for the currently loaded page.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    regions: Vec<Region>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region; the returned id reflects registration order.
    pub fn insert(&mut self, region: Region) -> RegionId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "a page registers at most a few dozen regions"
        )]
        let id = RegionId(self.regions.len() as u32);
        self.regions.push(region);
        id
    }

    /// The region for `id`, if registered.
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.index())
    }

    /// The rectangle for `id`, if registered.
    pub fn rect(&self, id: RegionId) -> Option<Rect> {
        self.regions.get(id.index()).map(|r| r.rect)
    }

    /// Update a region's rectangle (the geometry provider writes these).
    pub fn set_rect(&mut self, id: RegionId, rect: Rect) {
        if let Some(region) = self.regions.get_mut(id.index()) {
            region.rect = rect;
        }
    }

    /// Show or hide a region.
    pub fn set_visible(&mut self, id: RegionId, visible: bool) {
        if let Some(region) = self.regions.get_mut(id.index()) {
            region.visible = visible;
        }
    }

    /// Enable or disable a region.
    pub fn set_enabled(&mut self, id: RegionId, enabled: bool) {
        if let Some(region) = self.regions.get_mut(id.index()) {
            region.enabled = enabled;
        }
    }

    /// Number of registered regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether no regions are registered.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Iterate regions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (RegionId, &Region)> {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ids were produced by insert, which already bounds the count"
        )]
        self.regions
            .iter()
            .enumerate()
            .map(|(i, r)| (RegionId(i as u32), r))
    }

    /// Drop every region (page unload).
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// The visible, enabled region nearest to `point`.
    ///
    /// Distance is zero when the point is contained, otherwise the Euclidean
    /// distance to the rectangle. Strict `<` comparison keeps the
    /// first-registered region on exact ties.
    pub(crate) fn nearest(&self, point: Point) -> Option<RegionId> {
        let mut closest: Option<(RegionId, f64)> = None;
        for (id, region) in self.iter() {
            if !region.visible || !region.enabled {
                continue;
            }
            let distance = distance_to_rect(&region.rect, point);
            match closest {
                Some((_, best)) if distance >= best => {}
                _ => closest = Some((id, distance)),
            }
        }
        closest.map(|(id, _)| id)
    }
}

/// Euclidean distance from `point` to `rect`; zero when contained.
///
/// Clamps the point onto the rectangle and measures to the clamped point.
pub(crate) fn distance_to_rect(rect: &Rect, point: Point) -> f64 {
    if rect.contains(point) {
        return 0.0;
    }
    let clamped = Point::new(
        point.x.clamp(rect.x0, rect.x1),
        point.y.clamp(rect.y0, rect.y1),
    );
    point.distance(clamped)
}
