//! Domino records and the directions they travel in
//!
//! A domino is anchored at its top-left cell. Up and Down dominoes lie
//! horizontally and travel vertically; Left and Right dominoes lie vertically
//! and travel horizontally. A domino therefore always moves across its long
//! side, which is what lets a whole ring of survivors slide outward at once.

use crate::spatial::geometry::Cell;
use std::fmt;

/// Direction a domino is pushed when the diamond grows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facing {
    /// Horizontal domino travelling toward negative `y`
    Up,
    /// Horizontal domino travelling toward positive `y`
    Down,
    /// Vertical domino travelling toward negative `x`
    Left,
    /// Vertical domino travelling toward positive `x`
    Right,
}

impl Facing {
    /// The facing pointing the other way
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit step `(dx, dy)` in this direction
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// The cell one step from `cell` in this direction
    pub const fn step(self, cell: Cell) -> Cell {
        let (dx, dy) = self.delta();
        cell.offset(dx, dy)
    }

    /// Whether a domino with this facing lies horizontally
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// Identifier handed out by the domino store, never reused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DominoId(u64);

impl DominoId {
    /// Wrap a raw identifier
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DominoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A placed domino
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Domino {
    /// Store-assigned identifier
    pub id: DominoId,
    /// Top-left cell
    pub anchor: Cell,
    /// Travel direction, which also fixes the shape
    pub facing: Facing,
}

impl Domino {
    /// Create a domino record
    pub const fn new(id: DominoId, anchor: Cell, facing: Facing) -> Self {
        Self { id, anchor, facing }
    }

    /// Cells a domino with this anchor and facing would cover, anchor first
    pub const fn footprint(anchor: Cell, facing: Facing) -> [Cell; 2] {
        if facing.is_horizontal() {
            [anchor, anchor.offset(1, 0)]
        } else {
            [anchor, anchor.offset(0, 1)]
        }
    }

    /// The two cells covered by this domino, anchor first
    pub const fn cells(&self) -> [Cell; 2] {
        Self::footprint(self.anchor, self.facing)
    }

    /// The anchor one step ahead in the facing direction
    ///
    /// An opposed partner, if any, is anchored here with the opposite facing.
    pub const fn facing_neighbour(&self) -> Cell {
        self.facing.step(self.anchor)
    }

    /// This domino after one growth step
    #[must_use]
    pub const fn advanced(&self) -> Self {
        Self {
            id: self.id,
            anchor: self.facing_neighbour(),
            facing: self.facing,
        }
    }
}

/// The two ways of tiling a 2×2 block
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Two vertical dominoes side by side, facing Left and Right
    Horizontal,
    /// Two horizontal dominoes stacked, facing Up and Down
    Vertical,
}

impl Orientation {
    /// Anchor offsets and facings of the two dominoes filling a block
    pub const fn placements(self) -> [((i32, i32), Facing); 2] {
        match self {
            Self::Horizontal => [((0, 0), Facing::Left), ((1, 0), Facing::Right)],
            Self::Vertical => [((0, 0), Facing::Up), ((0, 1), Facing::Down)],
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}
