// Copyright 2026 the Pegboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pegboard Collision: proximity probing against placed items.
//!
//! A dragged item overlaps a placed one when their pixel distance is within a
//! caller-chosen radius. [`detect`] reports the nearest such item so the
//! caller can offer a swap, a merge, or a reject preview; what happens on
//! overlap is entirely the caller's policy, this crate only answers *whether*
//! and *with whom*.
//!
//! The probe is a pure function over a read-only snapshot, cheap enough to
//! run on every pointer move. Distances are measured between projected cell
//! centers, the same convention magnetism uses, so the two queries agree
//! about geometry.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use pegboard_grid::{Grid, GridDims, GridPos, PlacedItem};
//! use pegboard_collision::detect;
//!
//! let grid = Grid::new(Size::new(1200.0, 800.0), GridDims::new(24, 16)).unwrap();
//! let items = [PlacedItem::new(3_u32, GridPos::new(1, 1))]; // center (25, 25)
//!
//! // 59 px away: colliding at radius 60. 61 px away: not.
//! assert!(detect(Point::new(84.0, 25.0), &items, None, 60.0, &grid).is_some());
//! assert!(detect(Point::new(86.0, 25.0), &items, None, 60.0, &grid).is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Point;
use pegboard_grid::{Grid, PlacedItem};

/// The nearest placed item within collision radius of a probed position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collision<K> {
    /// Identifier of the overlapped item.
    pub id: K,
    /// Euclidean distance from the probed position to the item's projected
    /// cell center, at most the probe radius.
    pub distance: f64,
}

/// Probes for the placed item nearest to `position` within `radius` pixels
/// (inclusive), measured to each item's projected cell center.
///
/// `exclude` skips the item currently being dragged. The boundary is
/// inclusive, so a radius of zero still reports an item whose center is
/// exactly under `position`. Equal distances resolve to the lowest id, so the
/// result is deterministic regardless of snapshot order.
#[must_use]
pub fn detect<K: Copy + Ord>(
    position: Point,
    items: &[PlacedItem<K>],
    exclude: Option<K>,
    radius: f64,
    grid: &Grid,
) -> Option<Collision<K>> {
    let mut best: Option<Collision<K>> = None;
    for item in items {
        if exclude == Some(item.id) {
            continue;
        }
        let distance = position.distance(grid.to_pixel(item.grid));
        if distance > radius {
            continue;
        }
        let better = match &best {
            None => true,
            Some(b) => distance < b.distance || (distance == b.distance && item.id < b.id),
        };
        if better {
            best = Some(Collision {
                id: item.id,
                distance,
            });
        }
    }
    best
}
