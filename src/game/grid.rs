use crate::consts;
use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

/// The pixel position of the bottom-left corner of a grid cell.  Always a
/// multiple of the cell size for cells on the board, but may lie outside the
/// board when a snake steps off of it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }
}

/// The geometry of the play area: a viewport of `width` × `height` pixels
/// divided into square cells of `cell_size` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Grid {
    cell_size: i32,
    width: f64,
    height: f64,
}

impl Grid {
    /// Lay out a grid over a viewport, deriving the cell size from the width.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either dimension is zero, negative, or not finite.
    pub(crate) fn for_viewport(width: f64, height: f64) -> Result<Grid, LayoutError> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(width) || !usable(height) {
            return Err(LayoutError::NonPositive { width, height });
        }
        Ok(Grid {
            cell_size: Grid::cell_size_for(width),
            width,
            height,
        })
    }

    /// `clamp(floor(width / 30), GRID_MIN, GRID_MAX)`
    pub(crate) fn cell_size_for(width: f64) -> i32 {
        let raw = (width / f64::from(consts::CELLS_ACROSS)).floor();
        floor_i32(raw.clamp(f64::from(consts::GRID_MIN), f64::from(consts::GRID_MAX)))
    }

    pub(crate) fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Number of whole cells that fit across the viewport
    pub(crate) fn cols(&self) -> i32 {
        floor_i32(self.width / f64::from(self.cell_size))
    }

    /// Number of whole cells that fit up the viewport
    pub(crate) fn rows(&self) -> i32 {
        floor_i32(self.height / f64::from(self.cell_size))
    }

    /// Is the entire `cell_size` × `cell_size` extent of `cell` inside the
    /// viewport?
    pub(crate) fn in_bounds(&self, cell: Cell) -> bool {
        let g = f64::from(self.cell_size);
        let (x, y) = (f64::from(cell.x), f64::from(cell.y));
        x >= 0.0 && y >= 0.0 && x + g <= self.width && y + g <= self.height
    }

    /// The cell-aligned position nearest the middle of the viewport, rounding
    /// down
    pub(crate) fn center(&self) -> Cell {
        let cx = floor_i32(self.width / 2.0) / self.cell_size * self.cell_size;
        let cy = floor_i32(self.height / 2.0) / self.cell_size * self.cell_size;
        Cell::new(cx, cy)
    }

    /// Total number of cells on the board
    pub(crate) fn capacity(&self) -> u64 {
        u64::from(self.cols().unsigned_abs()) * u64::from(self.rows().unsigned_abs())
    }

    /// Pick a cell uniformly at random from those on the board that are not
    /// in `occupied`, by sampling until a free one turns up.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `occupied` covers every cell on the board.
    pub(crate) fn random_free_cell<R: Rng>(
        &self,
        rng: &mut R,
        occupied: &HashSet<Cell>,
    ) -> Result<Cell, GridFull> {
        let taken = occupied.iter().filter(|&&c| self.in_bounds(c)).count();
        if u64::try_from(taken).unwrap_or(u64::MAX) >= self.capacity() {
            return Err(GridFull);
        }
        loop {
            let cell = Cell::new(
                rng.random_range(0..self.cols()) * self.cell_size,
                rng.random_range(0..self.rows()) * self.cell_size,
            );
            if !occupied.contains(&cell) {
                return Ok(cell);
            }
        }
    }
}

/// Convert a non-negative pixel extent to an `i32`, rounding down and
/// saturating
#[allow(clippy::cast_possible_truncation)]
fn floor_i32(v: f64) -> i32 {
    v.floor().clamp(0.0, f64::from(i32::MAX)) as i32
}

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub(crate) enum LayoutError {
    #[error("viewport has no area: {width}×{height}")]
    NonPositive { width: f64, height: f64 },
    #[error("viewport of {cols}×{rows} cells cannot hold the starting snake and a food item")]
    TooSmall { cols: i32, rows: i32 },
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("no free cell left on the board")]
pub(crate) struct GridFull;
