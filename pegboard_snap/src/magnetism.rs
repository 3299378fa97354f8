// Copyright 2026 the Pegboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Magnetic alignment against already-placed items.
//!
//! While an item is dragged, nearby placed items attract it: the drag layer
//! asks [`nearest_magnet`] for the closest candidate within a pixel threshold
//! and, depending on the returned [`MagnetSnap::strength`], previews or
//! commits the candidate's position instead of the raw pointer position.
//!
//! Attraction falls off linearly with distance. At the threshold it is
//! exactly zero, which is why candidates *at* the threshold are not reported:
//! a zero-strength magnet would never influence placement.

use kurbo::Point;
use pegboard_grid::{Grid, PlacedItem};

/// The nearest placed item attracting a dragged position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnetSnap<K> {
    /// Identifier of the attracting item.
    pub id: K,
    /// The attracting item's projected pixel position (its cell center).
    pub at: Point,
    /// Euclidean distance from the queried position to [`MagnetSnap::at`],
    /// strictly less than the query threshold.
    pub distance: f64,
    /// Attraction strength in `[0, 1]`; see [`strength`].
    pub strength: f64,
}

/// Linear attraction falloff: `1 − distance/threshold`, clamped to `[0, 1]`.
///
/// Zero at and beyond the threshold, and for non-positive thresholds.
#[must_use]
pub fn strength(distance: f64, threshold: f64) -> f64 {
    if threshold <= 0.0 {
        return 0.0;
    }
    (1.0 - distance / threshold).clamp(0.0, 1.0)
}

/// Finds the placed item nearest to `position` strictly within `threshold`
/// pixels, measured to each item's projected cell center.
///
/// `exclude` skips the item currently being dragged so it never attracts
/// itself. Candidates exactly at the threshold are not reported (their
/// strength would be zero). Equally near candidates resolve to the lowest id,
/// so the result is deterministic regardless of snapshot order.
#[must_use]
pub fn nearest_magnet<K: Copy + Ord>(
    position: Point,
    items: &[PlacedItem<K>],
    exclude: Option<K>,
    threshold: f64,
    grid: &Grid,
) -> Option<MagnetSnap<K>> {
    if threshold <= 0.0 {
        return None;
    }
    let mut best: Option<MagnetSnap<K>> = None;
    for item in items {
        if exclude == Some(item.id) {
            continue;
        }
        let at = grid.to_pixel(item.grid);
        let distance = position.distance(at);
        if distance >= threshold {
            continue;
        }
        let better = match &best {
            None => true,
            Some(b) => distance < b.distance || (distance == b.distance && item.id < b.id),
        };
        if better {
            best = Some(MagnetSnap {
                id: item.id,
                at,
                distance,
                strength: strength(distance, threshold),
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;
    use pegboard_grid::{GridDims, GridPos};

    // 50x50 pixel cells; cell (c, r) centers at (50c - 25, 50r - 25).
    fn grid() -> Grid {
        Grid::new(Size::new(1200.0, 800.0), GridDims::new(24, 16)).unwrap()
    }

    #[test]
    fn picks_the_nearest_candidate() {
        let grid = grid();
        let items = [
            PlacedItem::new(1_u32, GridPos::new(1, 1)), // center (25, 25)
            PlacedItem::new(2, GridPos::new(3, 1)),     // center (125, 25)
        ];
        let snap = nearest_magnet(Point::new(100.0, 25.0), &items, None, 80.0, &grid)
            .expect("both candidates are in range");
        assert_eq!(snap.id, 2);
        assert_eq!(snap.at, Point::new(125.0, 25.0));
        assert_eq!(snap.distance, 25.0);
    }

    #[test]
    fn threshold_is_strict() {
        let grid = grid();
        let items = [PlacedItem::new(1_u32, GridPos::new(1, 1))];
        // Cell center is (25, 25); probe from exactly 40 px away.
        let position = Point::new(65.0, 25.0);
        assert_eq!(nearest_magnet(position, &items, None, 40.0, &grid), None);
        let snap = nearest_magnet(position, &items, None, 40.1, &grid)
            .expect("just inside the threshold");
        assert_eq!(snap.id, 1);
    }

    #[test]
    fn strength_falls_off_linearly() {
        assert_eq!(strength(0.0, 100.0), 1.0);
        assert_eq!(strength(25.0, 100.0), 0.75);
        assert_eq!(strength(50.0, 100.0), 0.5);
        assert_eq!(strength(100.0, 100.0), 0.0);
        assert_eq!(strength(250.0, 100.0), 0.0);
        assert_eq!(strength(10.0, 0.0), 0.0);
    }

    #[test]
    fn reported_strength_matches_distance() {
        let grid = grid();
        let items = [PlacedItem::new(7_u32, GridPos::new(1, 1))];
        let snap = nearest_magnet(Point::new(55.0, 25.0), &items, None, 60.0, &grid)
            .expect("in range");
        assert_eq!(snap.distance, 30.0);
        assert_eq!(snap.strength, 0.5);
    }

    #[test]
    fn excludes_the_dragged_item() {
        let grid = grid();
        let items = [
            PlacedItem::new(1_u32, GridPos::new(1, 1)),
            PlacedItem::new(2, GridPos::new(2, 1)), // center (75, 25)
        ];
        // Right on top of item 1: without the exclusion it would win outright.
        let snap = nearest_magnet(Point::new(25.0, 25.0), &items, Some(1), 80.0, &grid)
            .expect("item 2 is still in range");
        assert_eq!(snap.id, 2);
        assert_eq!(snap.distance, 50.0);
    }

    #[test]
    fn equidistant_candidates_resolve_to_lowest_id() {
        let grid = grid();
        // Centers (25, 25) and (125, 25); (75, 25) is exactly between them.
        let items = [
            PlacedItem::new(9_u32, GridPos::new(3, 1)),
            PlacedItem::new(4, GridPos::new(1, 1)),
        ];
        let snap = nearest_magnet(Point::new(75.0, 25.0), &items, None, 80.0, &grid)
            .expect("both in range");
        assert_eq!(snap.id, 4);
    }

    #[test]
    fn empty_snapshot_yields_none() {
        let grid = grid();
        let items: [PlacedItem<u32>; 0] = [];
        assert_eq!(nearest_magnet(Point::new(25.0, 25.0), &items, None, 80.0, &grid), None);
    }

    #[test]
    fn non_positive_threshold_yields_none() {
        let grid = grid();
        let items = [PlacedItem::new(1_u32, GridPos::new(1, 1))];
        assert_eq!(nearest_magnet(Point::new(25.0, 25.0), &items, None, 0.0, &grid), None);
        assert_eq!(nearest_magnet(Point::new(25.0, 25.0), &items, None, -5.0, &grid), None);
    }
}
