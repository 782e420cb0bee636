//! Detection of domino pairs that would collide on the next growth step
//!
//! Two dominoes are opposed when each one's facing neighbour is the other's
//! anchor and their facings point at each other. Advancing both would swap
//! them into each other's cells, so the pair is destroyed instead.

use crate::spatial::domino::{Domino, DominoId, Facing};
use crate::spatial::geometry::Cell;
use std::collections::HashMap;
use std::fmt;

/// Two dominoes slated for removal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpposedPair {
    /// The domino whose visit completed the pair
    pub first: Domino,
    /// The earlier-seen partner, anchored at `first`'s facing neighbour
    pub second: Domino,
}

impl OpposedPair {
    /// Identifiers of both dominoes
    pub const fn ids(&self) -> [DominoId; 2] {
        [self.first.id, self.second.id]
    }

    /// Anchor cells of both dominoes
    pub const fn anchors(&self) -> [Cell; 2] {
        [self.first.anchor, self.second.anchor]
    }

    /// Both dominoes
    pub const fn dominoes(&self) -> [Domino; 2] {
        [self.first, self.second]
    }

    /// Test whether a domino belongs to this pair
    pub fn contains(&self, id: DominoId) -> bool {
        self.first.id == id || self.second.id == id
    }
}

impl fmt::Display for OpposedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at {} / {} {} at {}",
            self.first.facing,
            self.first.id,
            self.first.anchor,
            self.second.facing,
            self.second.id,
            self.second.anchor
        )
    }
}

/// Find every opposed pair in a single pass
///
/// Dominoes are visited in the given order. Each unmatched domino is recorded
/// under its own `(anchor, facing)` key; a later domino whose facing
/// neighbour and opposite facing hit a recorded key completes a pair, and the
/// key is released so no domino joins two pairs.
pub fn find_opposed<'a, I>(dominoes: I) -> Vec<OpposedPair>
where
    I: IntoIterator<Item = &'a Domino>,
{
    let mut waiting: HashMap<(Cell, Facing), Domino> = HashMap::new();
    let mut pairs = Vec::new();

    for domino in dominoes {
        let partner_key = (domino.facing_neighbour(), domino.facing.opposite());

        if let Some(partner) = waiting.remove(&partner_key) {
            pairs.push(OpposedPair {
                first: *domino,
                second: partner,
            });
        } else {
            waiting.insert((domino.anchor, domino.facing), *domino);
        }
    }

    pairs
}
