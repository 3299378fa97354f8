// Copyright 2026 the Pegboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pegboard Gesture: drag tracking and placement resolution.
//!
//! This crate turns a stream of pointer samples into grid placements. A
//! [`DragTracker`] folds `{id, position, timestamp}` samples into per-gesture
//! [`DragSession`] state — position, velocity, acceleration, bounded sample
//! history — and resolves snap and collision feedback against a read-only
//! snapshot of placed items on every move. On release it produces a
//! [`Placement`]: the grid cell to occupy, plus whichever snap target
//! overrode the drop, plus any residual momentum for the caller to animate.
//!
//! ## The lifecycle
//!
//! 1) [`DragTracker::start`] creates a session for an item id. One session
//!    per id; a second `start` is an error, not a restart.
//! 2) [`DragTracker::update`] per pointer move: kinematics from the time
//!    delta, then magnetism, zone previews, and collision per the
//!    [`GestureConfig`] flags. The returned session drives visual feedback.
//! 3) [`DragTracker::end`] resolves the placement and removes the session;
//!    [`DragTracker::cancel`] just removes it.
//!
//! Sessions live in a caller-owned [`SessionRegistry`] passed into every
//! call. The tracker itself is a stateless strategy: two surfaces, two
//! registries, one tracker is a perfectly fine arrangement, and tests get
//! isolation for free.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use pegboard_gesture::{
//!     Chrome, DragTracker, GestureConfig, GridDims, GridPos, PlacedItem, SessionRegistry,
//!     Surface,
//! };
//!
//! let tracker = DragTracker::new(GestureConfig::default());
//! let mut registry = SessionRegistry::new();
//! let surface = Surface::from_viewport(
//!     Size::new(1200.0, 800.0),
//!     GridDims::new(24, 16),
//!     Chrome::new(48.0, 48.0),
//! )
//! .unwrap();
//!
//! // The placed-item snapshot comes from the caller's layout state.
//! let items = [PlacedItem::new(2_u32, GridPos::new(5, 5))]; // center (225, 225)
//!
//! // Drag item 1 toward item 2, feeding samples as they arrive.
//! tracker.start(&mut registry, 1, Point::new(400.0, 400.0), 0).unwrap();
//! let session = tracker
//!     .update(&mut registry, 1, Point::new(260.0, 250.0), 16, &surface, &items)
//!     .unwrap();
//! assert!(session.speed() > 0.0);
//!
//! // Release 18 px from item 2's center: magnetism is strong enough to
//! // override the raw drop position, so the placement lands on its cell.
//! tracker
//!     .update(&mut registry, 1, Point::new(240.0, 235.0), 32, &surface, &items)
//!     .unwrap();
//! let placement = tracker
//!     .end(&mut registry, 1, Point::new(240.0, 235.0), &surface)
//!     .unwrap();
//! assert_eq!(placement.grid, GridPos::new(5, 5));
//! assert!(placement.snap.is_some());
//! assert!(registry.is_empty());
//! ```
//!
//! ## Predictable by default
//!
//! Momentum is fully modeled — velocity decays into
//! [`Placement::residual_momentum`] — but disabled by default and never
//! applied to the placement itself: an item lands where it was dropped (or
//! where a strong snap target pulled it), not where a fling would have
//! carried it. Degenerate timestamps (reordered or repeated events) zero the
//! kinematics for that tick and log a warning instead of erroring; the
//! session's position is never lost.
//!
//! ## Integration
//!
//! The tracker composes the sibling crates and re-exports their vocabulary:
//!
//! - `pegboard_grid` maps between pixels and logical cells and defines the
//!   [`PlacedItem`] snapshot contract.
//! - `pegboard_snap` resolves magnetism and the nine named zones.
//! - `pegboard_collision` probes for overlapped items.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod registry;
mod session;
mod tracker;

pub use registry::SessionRegistry;
pub use session::{DragSession, Sample, SnapTarget};
pub use tracker::{DragTracker, GestureConfig, GestureError, Placement, Surface};

pub use pegboard_collision::Collision;
pub use pegboard_grid::{Grid, GridDims, GridPos, PlacedItem, ViewportError};
pub use pegboard_snap::zones::{Chrome, SnapZone};
