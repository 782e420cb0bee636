use crate::spatial::geometry::Cell;
use bitvec::prelude::*;
use std::fmt;

/// Fixed-size set of cells over the bounding square of a diamond
///
/// One bit per cell of `[-n, n)²`, row-major. Cells outside the square are
/// never members: inserting one is ignored and testing one returns `false`.
#[derive(Clone, Debug)]
pub struct CellMask {
    bits: BitVec,
    half_extent: i32,
}

impl CellMask {
    /// Create an empty mask covering the diamond of the given order
    pub fn for_order(order: u32) -> Self {
        let side = 2 * order as usize;
        Self {
            bits: bitvec![0; side * side],
            half_extent: order as i32,
        }
    }

    /// Add a cell
    pub fn insert(&mut self, cell: Cell) {
        if let Some(index) = self.index(cell) {
            self.bits.set(index, true);
        }
    }

    /// Test cell membership
    pub fn contains(&self, cell: Cell) -> bool {
        self.index(cell)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Number of cells in the mask
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let side = 2 * self.half_extent;
        let row = cell.y + self.half_extent;
        let col = cell.x + self.half_extent;

        (row >= 0 && col >= 0 && row < side && col < side)
            .then(|| row as usize * side as usize + col as usize)
    }
}

impl fmt::Display for CellMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CellMask({} of {} cells)",
            self.count(),
            self.bits.len()
        )
    }
}
