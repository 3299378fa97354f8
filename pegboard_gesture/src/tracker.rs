// Copyright 2026 the Pegboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag tracker: session lifecycle, feedback queries, and placement.

use core::fmt;
use core::hash::Hash;

use kurbo::{Point, Size, Vec2};
use pegboard_collision::detect;
use pegboard_grid::{Grid, GridDims, GridPos, PlacedItem, ViewportError};
use pegboard_snap::magnetism::nearest_magnet;
use pegboard_snap::zones::{Chrome, SnapZone, ZoneLayout};

use crate::registry::SessionRegistry;
use crate::session::{DragSession, SnapTarget};

/// Error returned by tracker session operations.
#[derive(Clone, Copy, PartialEq)]
pub enum GestureError<K> {
    /// `start` was called for an id that already has a live session.
    DuplicateSession(K),
    /// `update` or `end` was called for an id with no live session.
    NoActiveSession(K),
    /// A surface was built over a degenerate viewport.
    Viewport(ViewportError),
}

impl<K: fmt::Debug> fmt::Debug for GestureError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSession(id) => write!(f, "DuplicateSession({id:?})"),
            Self::NoActiveSession(id) => write!(f, "NoActiveSession({id:?})"),
            Self::Viewport(err) => write!(f, "Viewport({err:?})"),
        }
    }
}

impl<K: fmt::Debug> fmt::Display for GestureError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSession(id) => {
                write!(f, "a drag session is already live for item {id:?}")
            }
            Self::NoActiveSession(id) => write!(f, "no live drag session for item {id:?}"),
            Self::Viewport(err) => write!(f, "invalid surface: {err}"),
        }
    }
}

impl<K: fmt::Debug> core::error::Error for GestureError<K> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::DuplicateSession(_) | Self::NoActiveSession(_) => None,
        }
    }
}

impl<K> From<ViewportError> for GestureError<K> {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

/// Tuning for a [`DragTracker`].
///
/// Plain data: adjust the fields and build a tracker from it. The defaults
/// track a conventional desktop surface with 50 px cells in mind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Carry decayed velocity through to [`Placement::residual_momentum`].
    ///
    /// Off by default: released items land where they were dropped, never
    /// where a fling would have carried them.
    pub enable_momentum: bool,
    /// Query magnetism and zone previews on every update.
    pub enable_snap_zones: bool,
    /// Probe for overlapped items on every update.
    pub enable_collision: bool,
    /// Share of velocity lost to decay, in `[0, 1]`; momentum retains the
    /// rest.
    pub momentum_decay: f64,
    /// Samples retained per session, at least 1.
    pub history_cap: usize,
    /// Magnetic attraction radius in pixels (exclusive).
    pub magnet_threshold: f64,
    /// Collision radius in pixels (inclusive).
    pub collision_radius: f64,
    /// Distance from a viewport edge that previews a zone, in pixels.
    pub edge_threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            enable_momentum: false,
            enable_snap_zones: true,
            enable_collision: true,
            momentum_decay: 0.9,
            history_cap: 32,
            magnet_threshold: 80.0,
            collision_radius: 60.0,
            edge_threshold: 16.0,
        }
    }
}

/// The layout snapshot a tracker call operates against: the validated grid
/// mapping plus reserved chrome heights.
///
/// Built fresh by the caller whenever the viewport or chrome changes; the
/// tracker never caches layout state between calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    /// Pixel-to-grid mapping for the current viewport.
    pub grid: Grid,
    /// Reserved vertical chrome, honored by zone placement bounds.
    pub chrome: Chrome,
}

impl Surface {
    /// Bundles an already-validated grid with chrome reservations.
    #[must_use]
    pub const fn new(grid: Grid, chrome: Chrome) -> Self {
        Self { grid, chrome }
    }

    /// Builds the bundle from raw layout inputs, validating the viewport.
    pub fn from_viewport(
        viewport: Size,
        dims: GridDims,
        chrome: Chrome,
    ) -> Result<Self, ViewportError> {
        Ok(Self {
            grid: Grid::new(viewport, dims)?,
            chrome,
        })
    }

    /// The nine-region partition of this surface's viewport.
    #[must_use]
    pub fn layout(&self) -> ZoneLayout {
        ZoneLayout::from_grid(&self.grid)
    }
}

/// Where a released item ended up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement<K> {
    /// The cell the item should occupy.
    pub grid: GridPos,
    /// The snap target that overrode the release position, when one did.
    ///
    /// `None` means the item landed on the cell nearest the raw release
    /// position, including when a weak target was visible but below the
    /// override strength.
    pub snap: Option<SnapTarget<K>>,
    /// Decayed release velocity, in px/ms.
    ///
    /// Zero unless momentum is enabled. Never folded into `grid`; callers
    /// animating a fling apply it themselves.
    pub residual_momentum: Vec2,
}

/// Drives drag gestures from pointer samples to grid placements.
///
/// The tracker is a stateless strategy over a caller-owned
/// [`SessionRegistry`]: every call takes the registry, the id, and whatever
/// snapshot data the operation needs, and either mutates one session or
/// resolves one placement. See the crate docs for the full lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    config: GestureConfig,
}

impl DragTracker {
    /// Snap strength above which release position is overridden by the
    /// target. Strictly greater-than: a coin-flip 0.5 target stays put.
    pub const SNAP_OVERRIDE: f64 = 0.5;

    /// Creates a tracker with the given tuning.
    #[must_use]
    pub const fn new(config: GestureConfig) -> Self {
        Self { config }
    }

    /// The tracker's tuning.
    #[must_use]
    pub const fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Begins a drag session for `id` at `position`.
    ///
    /// The caller supplies the clock; timestamps are milliseconds and only
    /// ever compared between samples of the same session. Fails with
    /// [`GestureError::DuplicateSession`] while a session for `id` is live.
    pub fn start<'r, K: Copy + Ord + Hash>(
        &self,
        registry: &'r mut SessionRegistry<K>,
        id: K,
        position: Point,
        timestamp: u64,
    ) -> Result<&'r DragSession<K>, GestureError<K>> {
        if registry.contains(id) {
            return Err(GestureError::DuplicateSession(id));
        }
        tracing::debug!(timestamp, "drag session started");
        Ok(registry.insert(id, DragSession::new(id, position, timestamp)))
    }

    /// Folds a pointer sample into the live session for `id` and refreshes
    /// its snap and collision feedback.
    ///
    /// Kinematics derive from the time delta to the previous sample; a
    /// non-increasing timestamp zeroes them for the tick (and logs a warning)
    /// rather than failing, since event reordering is recoverable. Snap and
    /// collision are re-queried against `items`, with the dragged item
    /// excluded from both.
    pub fn update<'r, K: Copy + Ord + Hash>(
        &self,
        registry: &'r mut SessionRegistry<K>,
        id: K,
        position: Point,
        timestamp: u64,
        surface: &Surface,
        items: &[PlacedItem<K>],
    ) -> Result<&'r DragSession<K>, GestureError<K>> {
        let session = registry
            .get_mut(id)
            .ok_or(GestureError::NoActiveSession(id))?;
        let retain = if self.config.enable_momentum {
            (1.0 - self.config.momentum_decay).clamp(0.0, 1.0)
        } else {
            0.0
        };
        if !session.advance(position, timestamp, self.config.history_cap, retain) {
            tracing::warn!(
                timestamp,
                "drag sample timestamp did not advance; kinematics zeroed for this tick"
            );
        }
        session.snap = self.resolve_snap(position, items, id, surface);
        session.collision = if self.config.enable_collision {
            detect(
                position,
                items,
                Some(id),
                self.config.collision_radius,
                &surface.grid,
            )
        } else {
            None
        };
        Ok(session)
    }

    /// Ends the session for `id`, resolving the final grid placement.
    ///
    /// If the session's last snap target is stronger than
    /// [`Self::SNAP_OVERRIDE`], the target's position replaces the raw
    /// release position before grid conversion. Momentum is reported in the
    /// placement but never moves it: the cell is derived purely from where
    /// the pointer (or the snap target) actually was.
    pub fn end<K: Copy + Ord + Hash>(
        &self,
        registry: &mut SessionRegistry<K>,
        id: K,
        position: Point,
        surface: &Surface,
    ) -> Result<Placement<K>, GestureError<K>> {
        let session = registry
            .remove(id)
            .ok_or(GestureError::NoActiveSession(id))?;
        let snap = session
            .snap
            .filter(|target| target.strength() > Self::SNAP_OVERRIDE);
        let resolved = snap.map_or(position, |target| target.at());
        tracing::debug!("drag session ended");
        Ok(Placement {
            grid: surface.grid.to_grid(resolved),
            snap,
            residual_momentum: session.momentum,
        })
    }

    /// Discards the session for `id` without producing a placement.
    ///
    /// Returns whether a session existed; calling again is a no-op.
    pub fn cancel<K: Copy + Ord + Hash>(
        &self,
        registry: &mut SessionRegistry<K>,
        id: K,
    ) -> bool {
        let cancelled = registry.remove(id).is_some();
        if cancelled {
            tracing::debug!("drag session cancelled");
        }
        cancelled
    }

    /// Resolves the strongest snap target for a drag position, if any.
    ///
    /// Item magnetism and zone edge previews compete on strength; ties go to
    /// the item, which is the more local intent.
    fn resolve_snap<K: Copy + Ord>(
        &self,
        position: Point,
        items: &[PlacedItem<K>],
        dragged: K,
        surface: &Surface,
    ) -> Option<SnapTarget<K>> {
        if !self.config.enable_snap_zones {
            return None;
        }
        let magnet = nearest_magnet(
            position,
            items,
            Some(dragged),
            self.config.magnet_threshold,
            &surface.grid,
        )
        .map(|m| SnapTarget::Item {
            id: m.id,
            at: m.at,
            strength: m.strength,
        });
        let layout = surface.layout();
        let zone = layout
            .edge_proximity(position, self.config.edge_threshold)
            .map(|edge| {
                let zone = SnapZone::for_edge(edge);
                SnapTarget::Zone {
                    zone,
                    at: layout.bounds(zone, surface.chrome).center(),
                    strength: 1.0,
                }
            });
        match (magnet, zone) {
            (Some(m), Some(z)) => Some(if z.strength() > m.strength() { z } else { m }),
            (m, z) => m.or(z),
        }
    }
}
