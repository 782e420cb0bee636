//! Offset-addressed dense storage over the bounding square of a diamond
//!
//! A diamond of order `n` lives in `[-n, n)²`. The grid stores one value per
//! cell of that square in an `ndarray` matrix indexed `[y + n, x + n]`, and
//! grows in place when the diamond grows, padding the new border with zero.

use crate::spatial::geometry::Cell;
use ndarray::Array2;
use num_traits::Zero;

/// Square grid of values addressed by diamond cells
#[derive(Debug, Clone)]
pub struct CellGrid<T> {
    data: Array2<T>,
    half_extent: i32,
}

impl<T: Clone + Zero> CellGrid<T> {
    /// Create a zeroed grid covering the diamond of the given order
    pub fn for_order(order: u32) -> Self {
        let side = 2 * order as usize;
        Self {
            data: Array2::zeros((side, side)),
            half_extent: order as i32,
        }
    }

    /// Half the side length; the grid covers `[-half_extent, half_extent)²`
    pub const fn half_extent(&self) -> i32 {
        self.half_extent
    }

    /// Side length in cells
    pub fn side(&self) -> usize {
        self.data.nrows()
    }

    /// Value at a cell, `None` outside the grid
    pub fn get(&self, cell: Cell) -> Option<&T> {
        self.index(cell).and_then(|index| self.data.get(index))
    }

    /// Mutable value at a cell, `None` outside the grid
    pub fn get_mut(&mut self, cell: Cell) -> Option<&mut T> {
        self.index(cell).and_then(|index| self.data.get_mut(index))
    }

    /// Overwrite the value at a cell
    ///
    /// Returns `false` and leaves the grid untouched when the cell is outside.
    pub fn set(&mut self, cell: Cell, value: T) -> bool {
        self.get_mut(cell).map(|slot| *slot = value).is_some()
    }

    /// Grow the grid to cover the diamond of the given order
    ///
    /// Existing values keep their cells. Returns whether the grid grew;
    /// a grid is never shrunk.
    pub fn extend_to(&mut self, order: u32) -> bool {
        let new_half = order as i32;
        if new_half <= self.half_extent {
            return false;
        }

        let pad = (new_half - self.half_extent) as usize;
        let old_side = self.side();
        let new_side = 2 * order as usize;
        let mut extended = Array2::zeros((new_side, new_side));

        // Row-by-row copy keeps every value at the same world cell
        for row in 0..old_side {
            for col in 0..old_side {
                if let (Some(src), Some(dst)) = (
                    self.data.get([row, col]),
                    extended.get_mut([row + pad, col + pad]),
                ) {
                    *dst = src.clone();
                }
            }
        }

        self.data = extended;
        self.half_extent = new_half;
        true
    }

    fn index(&self, cell: Cell) -> Option<[usize; 2]> {
        let row = cell.y.checked_add(self.half_extent)?;
        let col = cell.x.checked_add(self.half_extent)?;
        let side = self.side();

        (row >= 0 && col >= 0 && (row as usize) < side && (col as usize) < side)
            .then(|| [row as usize, col as usize])
    }
}
