//! Aztec diamond geometry
//!
//! Cells use screen orientation: `x` grows to the right and `y` grows downward.
//! A diamond of order `n` is the set of cells `(x, y)` with
//! `⌊|x + 0.5|⌋ + ⌊|y + 0.5|⌋ < n`, which places it inside the square `[-n, n)²`
//! centred on the lattice point between the four seed cells.

use std::fmt;
use std::ops::Range;

/// Integer cell coordinate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column, growing to the right
    pub x: i32,
    /// Row, growing downward
    pub y: i32,
}

impl Cell {
    /// Create a cell from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate the cell by the given deltas
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Distance of a coordinate from the diamond's central axis
///
/// Integer form of `⌊|v + 0.5|⌋`: the two cells either side of the axis both
/// sit at distance zero.
pub const fn fold(v: i32) -> i32 {
    if v >= 0 { v } else { -1 - v }
}

/// Test whether a cell belongs to the diamond of the given order
pub const fn in_diamond(order: u32, cell: Cell) -> bool {
    (fold(cell.x) as i64) + (fold(cell.y) as i64) < order as i64
}

/// Number of cells in the diamond of the given order, `2n(n + 1)`
pub const fn cell_count(order: u32) -> usize {
    let n = order as usize;
    2 * n * (n + 1)
}

/// Columns of row `y` that lie inside the diamond
///
/// Empty when the row misses the diamond entirely.
pub const fn row_span(order: u32, y: i32) -> Range<i32> {
    let half = order as i32 - fold(y);
    if half <= 0 { 0..0 } else { -half..half }
}

/// Enumerate every cell of the diamond in row-major order
///
/// Rows ascend in `y`, and cells within a row ascend in `x`. This is the scan
/// order of gap detection.
pub fn diamond_cells(order: u32) -> impl Iterator<Item = Cell> {
    let n = order as i32;
    (-n..n).flat_map(move |y| row_span(order, y).map(move |x| Cell::new(x, y)))
}

/// Cells added when the diamond grows to `order`
///
/// Walks the half-diagonal index `i` from `0` to `order - 1` and yields the
/// four mirror images of `(i, order - 1 - i)` for each. For order 1 this is
/// the four seed cells.
pub fn grow_ring(order: u32) -> Vec<Cell> {
    let n = order as i32;
    let mut ring = Vec::with_capacity(4 * order as usize);

    for i in 0..n {
        let j = n - 1 - i;
        ring.push(Cell::new(i, j));
        ring.push(Cell::new(-1 - i, j));
        ring.push(Cell::new(i, -1 - j));
        ring.push(Cell::new(-1 - i, -1 - j));
    }

    ring
}
