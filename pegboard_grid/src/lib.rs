// Copyright 2026 the Pegboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pegboard Grid: logical grid coordinates for placement surfaces.
//!
//! A placement surface persists item layout as integer cells on a fixed
//! logical grid, while pointer input arrives in continuous pixel coordinates.
//! This crate provides the conversion between the two:
//!
//! - [`GridDims`] and [`GridPos`]: the grid extent and a 1-based cell
//!   coordinate, the unit in which layouts are persisted.
//! - [`Grid`]: a validated viewport-to-grid mapping with [`Grid::to_grid`]
//!   and [`Grid::to_pixel`] plus cell geometry helpers.
//! - [`PlacedItem`]: the minimal read-only snapshot contract `{id, grid}`
//!   that higher layers (magnetism, collision probing, gesture tracking)
//!   consume without knowing anything else about the caller's domain objects.
//!
//! ## The cell-center convention
//!
//! Both conversion directions use **cell centers**, not cell origins:
//! [`Grid::to_pixel`] returns the center of a cell, and [`Grid::to_grid`]
//! rounds a pixel position to the cell whose center is nearest. This is what
//! makes the round-trip law hold exactly for every valid cell:
//!
//! ```rust
//! use kurbo::Size;
//! use pegboard_grid::{Grid, GridDims, GridPos};
//!
//! let grid = Grid::new(Size::new(1200.0, 800.0), GridDims::new(24, 16)).unwrap();
//! for col in 1..=24 {
//!     for row in 1..=16 {
//!         let cell = GridPos::new(col, row);
//!         assert_eq!(grid.to_grid(grid.to_pixel(cell)), cell);
//!     }
//! }
//! ```
//!
//! Mixing conventions (origin one way, center the other) silently shifts
//! placements by half a cell; keeping both directions on centers is load
//! bearing for every layer above this one.
//!
//! ## Clamping
//!
//! Grid coordinates are always clamped to `1..=N` per axis. Pointer positions
//! outside the viewport (a drag can leave the window) still map to the nearest
//! valid cell rather than failing.
//!
//! This crate is `no_std`.

#![no_std]

use core::fmt;

use kurbo::{Point, Rect, Size};

/// Error returned when a viewport has a non-positive dimension.
///
/// Layout collaborators occasionally report zero-sized viewports before the
/// first real layout pass; constructing a [`Grid`] (or a zone layout) at that
/// point is a caller bug, surfaced as this error rather than as NaN geometry
/// later on.
#[derive(Clone, Copy, PartialEq)]
pub struct ViewportError {
    /// The offending viewport width in pixels.
    pub width: f64,
    /// The offending viewport height in pixels.
    pub height: f64,
}

impl fmt::Debug for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ViewportError {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid viewport {}x{}; both dimensions must be positive",
            self.width, self.height
        )
    }
}

impl core::error::Error for ViewportError {}

/// Grid extent: how many columns and rows the logical grid has.
///
/// Construction clamps both axes to at least 1, so a `GridDims` can never
/// describe an empty grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
    cols: u32,
    rows: u32,
}

impl GridDims {
    /// Creates a grid extent, clamping both axes to at least 1.
    #[must_use]
    pub const fn new(cols: u32, rows: u32) -> Self {
        Self {
            cols: if cols == 0 { 1 } else { cols },
            rows: if rows == 0 { 1 } else { rows },
        }
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(self) -> u32 {
        self.cols
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(self) -> u32 {
        self.rows
    }
}

/// A 1-based logical cell coordinate: column then row.
///
/// Valid coordinates lie in `1..=cols` / `1..=rows` for the grid they refer
/// to; every conversion in this crate clamps into that range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPos {
    /// Column index, starting at 1 for the leftmost column.
    pub col: u32,
    /// Row index, starting at 1 for the topmost row.
    pub row: u32,
}

impl GridPos {
    /// Creates a cell coordinate.
    #[must_use]
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// The minimal read-only contract for an item occupying a grid cell.
///
/// Higher layers receive a snapshot slice of these each tick. The engine only
/// ever reads it; ownership and mutation stay with the caller's layout
/// manager, and no other fields of the caller's domain objects are visible
/// here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedItem<K> {
    /// The caller's item identifier.
    pub id: K,
    /// The cell the item currently occupies.
    pub grid: GridPos,
}

impl<K> PlacedItem<K> {
    /// Creates a snapshot entry.
    #[must_use]
    pub const fn new(id: K, grid: GridPos) -> Self {
        Self { id, grid }
    }
}

/// A validated mapping between a pixel viewport and a logical grid.
///
/// `Grid` is a small `Copy` value: construct one per tick from the layout
/// collaborator's current viewport and pass it by reference. Construction is
/// the single place viewport validity is checked; every conversion method is
/// total after that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    viewport: Size,
    dims: GridDims,
}

impl Grid {
    /// Creates a grid mapping over `viewport`.
    ///
    /// Returns [`ViewportError`] if either viewport dimension is not strictly
    /// positive. Inputs are assumed finite (no NaNs), like elsewhere in this
    /// workspace; a NaN dimension fails the positivity check and is rejected
    /// here too.
    pub fn new(viewport: Size, dims: GridDims) -> Result<Self, ViewportError> {
        if viewport.width > 0.0 && viewport.height > 0.0 {
            Ok(Self { viewport, dims })
        } else {
            Err(ViewportError {
                width: viewport.width,
                height: viewport.height,
            })
        }
    }

    /// The viewport this grid maps, in pixels.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// The logical grid extent.
    #[must_use]
    pub const fn dims(&self) -> GridDims {
        self.dims
    }

    /// Size of one cell in pixels.
    #[must_use]
    pub fn cell_size(&self) -> Size {
        Size::new(
            self.viewport.width / f64::from(self.dims.cols),
            self.viewport.height / f64::from(self.dims.rows),
        )
    }

    /// Converts a pixel position to the cell whose center is nearest.
    ///
    /// Positions outside the viewport clamp to the nearest edge cell, so a
    /// pointer that leaves the window still resolves to a valid placement.
    #[must_use]
    pub fn to_grid(&self, position: Point) -> GridPos {
        let cell = self.cell_size();
        GridPos {
            col: axis_to_cell(position.x, cell.width, self.dims.cols),
            row: axis_to_cell(position.y, cell.height, self.dims.rows),
        }
    }

    /// Converts a cell coordinate to its center in pixels.
    ///
    /// Out-of-range coordinates clamp into `1..=N` first, preserving the
    /// grid-coordinate invariant even for stale or hand-built positions.
    #[must_use]
    pub fn to_pixel(&self, position: GridPos) -> Point {
        let cell = self.cell_size();
        let col = position.col.clamp(1, self.dims.cols);
        let row = position.row.clamp(1, self.dims.rows);
        Point::new(
            (f64::from(col) - 0.5) * cell.width,
            (f64::from(row) - 0.5) * cell.height,
        )
    }

    /// The full pixel rectangle covered by a cell.
    ///
    /// Useful for drawing placement previews and for sizing items that fill
    /// their cell. The coordinate clamps like [`Grid::to_pixel`].
    #[must_use]
    pub fn cell_rect(&self, position: GridPos) -> Rect {
        let cell = self.cell_size();
        let col = position.col.clamp(1, self.dims.cols);
        let row = position.row.clamp(1, self.dims.rows);
        Rect::from_origin_size(
            Point::new(
                f64::from(col - 1) * cell.width,
                f64::from(row - 1) * cell.height,
            ),
            cell,
        )
    }
}

/// Maps one pixel axis to a 1-based cell index, rounding to the nearest cell
/// center and clamping into `1..=max`.
fn axis_to_cell(coord: f64, cell: f64, max: u32) -> u32 {
    // For positive `u`, `u as i64` truncation equals `floor(u)`, so adding
    // 1.0 to `coord / cell` rounds to the nearest center. Negative or NaN
    // inputs saturate low and land on the clamp below.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "saturating cast; the clamp below bounds the result"
    )]
    let raw = (coord / cell + 1.0) as i64;
    u32::try_from(raw.clamp(1, i64::from(max))).unwrap_or(max)
}
