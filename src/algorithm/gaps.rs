//! Detection of uncovered 2×2 blocks after dominoes have advanced
//!
//! Once opposed pairs are gone and survivors have moved outward, the
//! uncovered part of the grown diamond splits into disjoint 2×2 blocks. A
//! raster scan finds each block once, at its top-left cell.

use crate::io::error::{Result, invariant_violation};
use crate::spatial::domino::{Facing, Orientation};
use crate::spatial::geometry::{Cell, diamond_cells, in_diamond, row_span};
use crate::spatial::mask::CellMask;
use crate::spatial::store::DominoStore;

/// A 2×2 void identified by its top-left cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Gap {
    /// Top-left cell of the block
    pub anchor: Cell,
}

impl Gap {
    /// Create a gap at the given top-left cell
    pub const fn new(anchor: Cell) -> Self {
        Self { anchor }
    }

    /// The four cells of the block, row-major
    pub const fn cells(&self) -> [Cell; 4] {
        [
            self.anchor,
            self.anchor.offset(1, 0),
            self.anchor.offset(0, 1),
            self.anchor.offset(1, 1),
        ]
    }

    /// Anchors and facings of the two dominoes filling this block
    pub const fn placements(&self, orientation: Orientation) -> [(Cell, Facing); 2] {
        let [((dx1, dy1), f1), ((dx2, dy2), f2)] = orientation.placements();
        [
            (self.anchor.offset(dx1, dy1), f1),
            (self.anchor.offset(dx2, dy2), f2),
        ]
    }
}

/// Scan the diamond of the given order for uncovered 2×2 blocks
///
/// Rows are scanned top to bottom and left to right. An uncovered cell opens
/// a block; the two cells below it are claimed on the spot and the cell to
/// its right is skipped, so each block is reported exactly once. Gaps are
/// returned in scan order, which is also the order they get filled in.
///
/// # Errors
///
/// Returns `InvariantViolation` if an uncovered cell does not start a fully
/// uncovered 2×2 block inside the diamond.
pub fn find_gaps(store: &DominoStore, order: u32) -> Result<Vec<Gap>> {
    let n = order as i32;
    let mut covered = CellMask::for_order(order);
    for domino in store.iter() {
        for cell in domino.cells() {
            covered.insert(cell);
        }
    }

    let mut gaps = Vec::new();
    for y in -n..n {
        let columns = row_span(order, y);
        let mut x = columns.start;

        while x < columns.end {
            let cell = Cell::new(x, y);
            if covered.contains(cell) {
                x += 1;
                continue;
            }

            let gap = Gap::new(cell);
            if let Some(blocked) = gap
                .cells()
                .into_iter()
                .skip(1)
                .find(|&part| !in_diamond(order, part) || covered.contains(part))
            {
                return Err(invariant_violation(
                    "gap detection",
                    &format!(
                        "uncovered cell {cell} does not open a 2x2 void ({blocked} is unavailable)"
                    ),
                ));
            }

            covered.insert(cell.offset(0, 1));
            covered.insert(cell.offset(1, 1));
            gaps.push(gap);
            x += 2;
        }
    }

    Ok(gaps)
}

/// Count the cells of the diamond that no domino covers
pub fn uncovered_cells(store: &DominoStore, order: u32) -> usize {
    diamond_cells(order)
        .filter(|&cell| !store.is_occupied(cell))
        .count()
}
