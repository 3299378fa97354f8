// Copyright 2026 the Pegboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named snap regions of a placement surface.
//!
//! The surface is partitioned into nine named regions: a top and a bottom row
//! of three trigger cells each (25% of the viewport height, thirds of its
//! width), and a middle band (the remaining 50%) split into a left and a
//! right half, with [`SnapZone::Maximize`] spanning the whole band behind
//! them. Dropping an item inside a region's trigger rectangle snaps it to
//! that region's placement [`bounds`](ZoneLayout::bounds), which are computed
//! against the *usable* area: the viewport minus reserved [`Chrome`] heights.
//!
//! Trigger rectangles are recomputed from the current viewport on every
//! query, so a resize never leaves stale zone geometry behind.

use core::fmt;

use kurbo::{Point, Rect, Size};
use pegboard_grid::{Grid, ViewportError};

/// The nine named snap regions, in trigger-priority order.
///
/// [`ZoneLayout::zone_for_point`] tests regions in declaration order and
/// returns the first hit. The two half zones tile the middle band completely,
/// so `Maximize` never wins a point query; it is reached through edge
/// proximity instead (see [`SnapZone::for_edge`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SnapZone {
    /// Top row, left third.
    TopLeft,
    /// Top row, middle third.
    TopCenter,
    /// Top row, right third.
    TopRight,
    /// Bottom row, left third.
    BottomLeft,
    /// Bottom row, middle third.
    BottomCenter,
    /// Bottom row, right third.
    BottomRight,
    /// Left half of the middle band.
    LeftHalf,
    /// Right half of the middle band.
    RightHalf,
    /// The whole middle band; places across the full usable area.
    Maximize,
}

impl SnapZone {
    /// All nine regions, in trigger-priority order.
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
        Self::LeftHalf,
        Self::RightHalf,
        Self::Maximize,
    ];

    /// A stable lowercase name, usable as a settings key or log field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
            Self::LeftHalf => "left-half",
            Self::RightHalf => "right-half",
            Self::Maximize => "maximize",
        }
    }

    /// The zone previewed when the pointer approaches an edge or corner.
    ///
    /// Corners preview their corner zones; the left and right edges preview
    /// the half zones; the top edge previews `Maximize` (this is how the
    /// maximize region, shadowed in point queries, is actually reached) and
    /// the bottom edge previews `BottomCenter`.
    #[must_use]
    pub const fn for_edge(edge: EdgeProximity) -> Self {
        match edge {
            EdgeProximity::TopLeft => Self::TopLeft,
            EdgeProximity::TopRight => Self::TopRight,
            EdgeProximity::BottomLeft => Self::BottomLeft,
            EdgeProximity::BottomRight => Self::BottomRight,
            EdgeProximity::Left => Self::LeftHalf,
            EdgeProximity::Right => Self::RightHalf,
            EdgeProximity::Top => Self::Maximize,
            EdgeProximity::Bottom => Self::BottomCenter,
        }
    }
}

impl fmt::Display for SnapZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which viewport edge or corner a position is near.
///
/// Corner variants are reported in preference to their constituent edges, so
/// a position near both the top and the left edge classifies as `TopLeft`,
/// never as `Top` or `Left`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeProximity {
    /// Near the top-left corner.
    TopLeft,
    /// Near the top-right corner.
    TopRight,
    /// Near the bottom-left corner.
    BottomLeft,
    /// Near the bottom-right corner.
    BottomRight,
    /// Near the left edge only.
    Left,
    /// Near the right edge only.
    Right,
    /// Near the top edge only.
    Top,
    /// Near the bottom edge only.
    Bottom,
}

/// Vertical space reserved by surface chrome, in pixels.
///
/// The toolbar is pinned to the top of the viewport and the taskbar to the
/// bottom; zone placement bounds never overlap either.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Chrome {
    /// Height reserved at the top of the viewport.
    pub toolbar_height: f64,
    /// Height reserved at the bottom of the viewport.
    pub taskbar_height: f64,
}

impl Chrome {
    /// Creates a chrome reservation.
    #[must_use]
    pub const fn new(toolbar_height: f64, taskbar_height: f64) -> Self {
        Self {
            toolbar_height,
            taskbar_height,
        }
    }

    /// The usable vertical band of `viewport`: top offset and height.
    ///
    /// The height is clamped to zero when the reservations exceed the
    /// viewport, so degenerate chrome yields empty bounds rather than
    /// inverted rectangles.
    #[must_use]
    pub fn usable_band(self, viewport: Size) -> (f64, f64) {
        let height = (viewport.height - self.toolbar_height - self.taskbar_height).max(0.0);
        (self.toolbar_height, height)
    }
}

/// The nine-region partition of a validated viewport.
///
/// A small `Copy` value like [`Grid`]: construct one per query batch from the
/// current viewport and ask it for trigger rectangles, point classification,
/// and placement bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneLayout {
    viewport: Size,
}

impl ZoneLayout {
    /// Creates a layout over `viewport`.
    ///
    /// Returns [`ViewportError`] if either dimension is not strictly
    /// positive.
    pub fn new(viewport: Size) -> Result<Self, ViewportError> {
        if viewport.width > 0.0 && viewport.height > 0.0 {
            Ok(Self { viewport })
        } else {
            Err(ViewportError {
                width: viewport.width,
                height: viewport.height,
            })
        }
    }

    /// Creates a layout over a [`Grid`]'s viewport.
    ///
    /// Infallible: grid construction already validated the viewport.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            viewport: grid.viewport(),
        }
    }

    /// The viewport this layout partitions, in pixels.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// The trigger rectangle of one region.
    ///
    /// Row cells share their boundary ordinates (thirds and quarter lines are
    /// computed once), so the nine rectangles tile the viewport exactly.
    #[must_use]
    pub fn trigger_rect(&self, zone: SnapZone) -> Rect {
        let Size { width, height } = self.viewport;
        let third = width / 3.0;
        let half = width / 2.0;
        let quarter = height / 4.0;
        let band_end = 3.0 * quarter;
        match zone {
            SnapZone::TopLeft => Rect::new(0.0, 0.0, third, quarter),
            SnapZone::TopCenter => Rect::new(third, 0.0, 2.0 * third, quarter),
            SnapZone::TopRight => Rect::new(2.0 * third, 0.0, width, quarter),
            SnapZone::BottomLeft => Rect::new(0.0, band_end, third, height),
            SnapZone::BottomCenter => Rect::new(third, band_end, 2.0 * third, height),
            SnapZone::BottomRight => Rect::new(2.0 * third, band_end, width, height),
            SnapZone::LeftHalf => Rect::new(0.0, quarter, half, band_end),
            SnapZone::RightHalf => Rect::new(half, quarter, width, band_end),
            SnapZone::Maximize => Rect::new(0.0, quarter, width, band_end),
        }
    }

    /// All nine regions with their trigger rectangles, in priority order.
    #[must_use]
    pub fn zones(&self) -> [(SnapZone, Rect); 9] {
        SnapZone::ALL.map(|zone| (zone, self.trigger_rect(zone)))
    }

    /// Classifies a position into the first region containing it.
    ///
    /// Returns `None` for positions outside the viewport. `Maximize` is never
    /// returned here; the half zones cover its trigger band (see
    /// [`SnapZone::for_edge`] for how maximize is reached).
    #[must_use]
    pub fn zone_for_point(&self, position: Point) -> Option<SnapZone> {
        SnapZone::ALL
            .into_iter()
            .find(|&zone| self.trigger_rect(zone).contains(position))
    }

    /// The placement rectangle of a region within the usable area.
    ///
    /// Corners place into usable quadrants, `TopCenter`/`BottomCenter` into
    /// full-width halves, the half zones into half-width full-height bands,
    /// and `Maximize` across the whole usable area. With a 1200×800 viewport
    /// and 48 px of toolbar and taskbar each, maximize bounds are
    /// `(0, 48)` to `(1200, 752)`.
    #[must_use]
    pub fn bounds(&self, zone: SnapZone, chrome: Chrome) -> Rect {
        let width = self.viewport.width;
        let (top, usable) = chrome.usable_band(self.viewport);
        let half_w = width / 2.0;
        let mid_y = top + usable / 2.0;
        let bottom = top + usable;
        match zone {
            SnapZone::TopLeft => Rect::new(0.0, top, half_w, mid_y),
            SnapZone::TopCenter => Rect::new(0.0, top, width, mid_y),
            SnapZone::TopRight => Rect::new(half_w, top, width, mid_y),
            SnapZone::BottomLeft => Rect::new(0.0, mid_y, half_w, bottom),
            SnapZone::BottomCenter => Rect::new(0.0, mid_y, width, bottom),
            SnapZone::BottomRight => Rect::new(half_w, mid_y, width, bottom),
            SnapZone::LeftHalf => Rect::new(0.0, top, half_w, bottom),
            SnapZone::RightHalf => Rect::new(half_w, top, width, bottom),
            SnapZone::Maximize => Rect::new(0.0, top, width, bottom),
        }
    }

    /// Classifies a position near a viewport edge or corner.
    ///
    /// A position within `threshold` pixels of two orthogonal edges reports
    /// the corner; otherwise the single edge; `None` in the interior.
    /// Positions beyond an edge (a drag can leave the window) still count as
    /// near it.
    #[must_use]
    pub fn edge_proximity(&self, position: Point, threshold: f64) -> Option<EdgeProximity> {
        let near_left = position.x <= threshold;
        let near_right = position.x >= self.viewport.width - threshold;
        let near_top = position.y <= threshold;
        let near_bottom = position.y >= self.viewport.height - threshold;
        match (near_top, near_bottom, near_left, near_right) {
            (true, _, true, _) => Some(EdgeProximity::TopLeft),
            (true, _, _, true) => Some(EdgeProximity::TopRight),
            (_, true, true, _) => Some(EdgeProximity::BottomLeft),
            (_, true, _, true) => Some(EdgeProximity::BottomRight),
            (_, _, true, _) => Some(EdgeProximity::Left),
            (_, _, _, true) => Some(EdgeProximity::Right),
            (true, _, _, _) => Some(EdgeProximity::Top),
            (_, true, _, _) => Some(EdgeProximity::Bottom),
            _ => None,
        }
    }
}
