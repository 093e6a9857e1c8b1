//! The bounded 2D grid agents live on.
//!
//! Cells are addressed by integer `(x, y)` with `0 <= x < width` and
//! `0 <= y < height`; `(0, 0)` is the bottom-left corner.  Trip length is the
//! straight-line distance between cell coordinates, scaled from grid units to
//! miles.  No path-finding happens anywhere in the simulator.

use std::fmt;

use crate::{AgentRng, CoreError, CoreResult};

/// Grid units per mile.  Four cells span one mile.
pub const CELLS_PER_MILE: f64 = 4.0;

/// One grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other` in miles.
    pub fn distance_miles(self, other: Cell) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        dx.hypot(dy) / CELLS_PER_MILE
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Immutable grid dimensions.
///
/// A `Grid` always has at least two cells, so every cell has at least one
/// distinct destination.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    width:  u32,
    height: u32,
}

impl Grid {
    /// Validate and build a grid.
    ///
    /// Fails with [`CoreError::Config`] if either dimension is zero or the
    /// area is a single cell (no destination distinct from the origin).
    pub fn new(width: u32, height: u32) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::Config(format!(
                "grid dimensions must be positive, got {width}x{height}"
            )));
        }
        if (width as u64) * (height as u64) <= 1 {
            return Err(CoreError::Config(
                "grid must contain at least two cells".into(),
            ));
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Row-major linear index of `cell`.
    #[inline]
    pub fn index_of(&self, cell: Cell) -> u64 {
        cell.y as u64 * self.width as u64 + cell.x as u64
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn cell_at(&self, index: u64) -> Cell {
        let w = self.width as u64;
        Cell::new((index % w) as u32, (index / w) as u32)
    }

    /// A cell drawn uniformly from the whole grid.
    pub fn random_cell(&self, rng: &mut AgentRng) -> Cell {
        Cell::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    /// A cell drawn uniformly from every cell except `from`.
    ///
    /// Draws an index in `0..cell_count - 1` and skips over `from`'s own
    /// index, which keeps the distribution uniform over the remaining cells.
    pub fn random_destination(&self, from: Cell, rng: &mut AgentRng) -> Cell {
        let origin = self.index_of(from);
        let mut pick = rng.gen_range(0..self.cell_count() - 1);
        if pick >= origin {
            pick += 1;
        }
        self.cell_at(pick)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
