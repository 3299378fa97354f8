// Copyright 2026 the Pegboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pegboard Snap: snap target resolution for direct-manipulation placement.
//!
//! While an item is dragged across a placement surface, two kinds of snap
//! target compete for it:
//!
//! - [`magnetism`]: already-placed items attract the dragged position within
//!   a pixel threshold, with linearly decaying strength.
//! - [`zones`]: nine named regions of the viewport (rows of thirds, half
//!   bands, maximize) that place the item into chrome-aware bounds.
//!
//! Both resolvers are pure functions over a read-only snapshot: they never
//! mutate placements and hold no state between queries, so a drag layer can
//! call them every pointer move without bookkeeping.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use pegboard_grid::{Grid, GridDims, GridPos, PlacedItem};
//! use pegboard_snap::magnetism::nearest_magnet;
//! use pegboard_snap::zones::{Chrome, SnapZone, ZoneLayout};
//!
//! let grid = Grid::new(Size::new(1200.0, 800.0), GridDims::new(24, 16)).unwrap();
//!
//! // A placed item at cell (3, 1) attracts a nearby drag position.
//! let items = [PlacedItem::new(7_u32, GridPos::new(3, 1))];
//! let snap = nearest_magnet(Point::new(100.0, 25.0), &items, None, 80.0, &grid).unwrap();
//! assert_eq!(snap.id, 7);
//!
//! // Dropping in the top-left trigger cell places into the usable quadrant.
//! let layout = ZoneLayout::from_grid(&grid);
//! assert_eq!(layout.zone_for_point(Point::new(50.0, 50.0)), Some(SnapZone::TopLeft));
//! let bounds = layout.bounds(SnapZone::TopLeft, Chrome::new(48.0, 48.0));
//! assert_eq!(bounds.y0, 48.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod magnetism;
pub mod zones;
