//! Ownership and occupancy tracking for placed dominoes
//!
//! The store keeps dominoes in insertion order, which is the order both
//! detectors scan them in. Removal leaves a tombstone so it stays O(1);
//! tombstones are compacted away on the next advance, which visits every
//! domino anyway. Occupancy is a dense [`CellGrid`] holding `id + 1` per
//! covered cell and zero for free cells.

use crate::io::error::{AlgorithmError, Result, invariant_violation};
use crate::spatial::domino::{Domino, DominoId, Facing};
use crate::spatial::geometry::Cell;
use crate::spatial::grid::CellGrid;
use std::collections::HashMap;
use tracing::trace;

/// One domino's move during a growth step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advance {
    /// Domino that moved
    pub id: DominoId,
    /// Anchor before the move
    pub from: Cell,
    /// Anchor after the move
    pub to: Cell,
    /// Direction of travel
    pub facing: Facing,
}

/// Owner of every placed domino
#[derive(Debug, Clone)]
pub struct DominoStore {
    slots: Vec<Option<Domino>>,
    positions: HashMap<DominoId, usize>,
    occupancy: CellGrid<u64>,
    next_id: u64,
}

impl Default for DominoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DominoStore {
    /// Create an empty store tracking the order 1 diamond
    pub fn new() -> Self {
        Self::with_order(1)
    }

    /// Create an empty store tracking the diamond of the given order
    pub fn with_order(order: u32) -> Self {
        Self {
            slots: Vec::new(),
            positions: HashMap::new(),
            occupancy: CellGrid::for_order(order),
            next_id: 0,
        }
    }

    /// Grow the tracked region to cover the diamond of the given order
    pub fn reserve_order(&mut self, order: u32) {
        self.occupancy.extend_to(order);
    }

    /// Order of the largest diamond the store can hold
    pub const fn tracked_order(&self) -> u32 {
        self.occupancy.half_extent() as u32
    }

    /// Number of dominoes
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Test if the store holds no dominoes
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Place a domino with a fresh identifier
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if either cell is already covered, or
    /// `InvariantViolation` if either cell is outside the tracked region.
    /// The store is unchanged on error.
    pub fn insert(&mut self, anchor: Cell, facing: Facing) -> Result<DominoId> {
        let id = DominoId::new(self.next_id);
        let domino = Domino::new(id, anchor, facing);

        for cell in domino.cells() {
            match self.occupancy.get(cell) {
                None => {
                    return Err(invariant_violation(
                        "domino insertion",
                        &format!(
                            "cell {cell} is outside the order {} region",
                            self.tracked_order()
                        ),
                    ));
                }
                Some(&0) => {}
                Some(&slot) => {
                    return Err(AlgorithmError::Conflict {
                        cell,
                        occupant: DominoId::new(slot - 1),
                        facing,
                    });
                }
            }
        }

        for cell in domino.cells() {
            self.occupancy.set(cell, id.get() + 1);
        }
        self.positions.insert(id, self.slots.len());
        self.slots.push(Some(domino));
        self.next_id += 1;

        Ok(id)
    }

    /// Remove a set of dominoes
    ///
    /// Removal is strict: every identifier must name a domino currently in
    /// the store, each at most once. The removed dominoes are returned in the
    /// order requested.
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` for an unknown or repeated identifier,
    /// in which case nothing is removed.
    pub fn remove(&mut self, ids: &[DominoId]) -> Result<Vec<Domino>> {
        for (i, id) in ids.iter().enumerate() {
            if !self.positions.contains_key(id) {
                return Err(invariant_violation(
                    "domino removal",
                    &format!("domino {id} is not in the store"),
                ));
            }
            if ids.iter().take(i).any(|earlier| earlier == id) {
                return Err(invariant_violation(
                    "domino removal",
                    &format!("domino {id} was listed twice"),
                ));
            }
        }

        let mut removed = Vec::with_capacity(ids.len());
        for id in ids {
            let Some(domino) = self
                .positions
                .remove(id)
                .and_then(|slot| self.slots.get_mut(slot))
                .and_then(Option::take)
            else {
                continue;
            };

            for cell in domino.cells() {
                self.occupancy.set(cell, 0);
            }
            removed.push(domino);
        }

        Ok(removed)
    }

    /// Move every domino one step in its facing direction
    ///
    /// Each domino advances exactly once. All moves are validated against a
    /// fresh occupancy grid before any of them is committed.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if two advanced dominoes would overlap, or
    /// `InvariantViolation` if a domino would leave the tracked region.
    /// The store is unchanged on error.
    pub fn advance_all(&mut self) -> Result<Vec<Advance>> {
        let mut occupancy = CellGrid::for_order(self.tracked_order());
        let mut moved = Vec::with_capacity(self.len());

        for domino in self.iter() {
            let next = domino.advanced();
            for cell in next.cells() {
                match occupancy.get(cell) {
                    None => {
                        return Err(invariant_violation(
                            "domino advance",
                            &format!(
                                "domino {} would leave the order {} region at {cell}",
                                domino.id,
                                self.tracked_order()
                            ),
                        ));
                    }
                    Some(&0) => {}
                    Some(&slot) => {
                        return Err(AlgorithmError::Conflict {
                            cell,
                            occupant: DominoId::new(slot - 1),
                            facing: next.facing,
                        });
                    }
                }
                occupancy.set(cell, next.id.get() + 1);
            }
            moved.push(next);
        }

        let advances = self
            .iter()
            .zip(&moved)
            .map(|(before, after)| Advance {
                id: before.id,
                from: before.anchor,
                to: after.anchor,
                facing: before.facing,
            })
            .collect::<Vec<_>>();

        for advance in &advances {
            trace!(id = %advance.id, from = %advance.from, to = %advance.to, "advanced domino");
        }

        self.positions = moved
            .iter()
            .enumerate()
            .map(|(slot, domino)| (domino.id, slot))
            .collect();
        self.slots = moved.into_iter().map(Some).collect();
        self.occupancy = occupancy;

        Ok(advances)
    }

    /// Iterate over dominoes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Domino> {
        self.slots.iter().flatten()
    }

    /// Copy of every domino in insertion order
    pub fn snapshot(&self) -> Vec<Domino> {
        self.iter().copied().collect()
    }

    /// Look up a domino by identifier
    pub fn get(&self, id: DominoId) -> Option<&Domino> {
        self.positions
            .get(&id)
            .and_then(|&slot| self.slots.get(slot))
            .and_then(Option::as_ref)
    }

    /// Test whether a domino is in the store
    pub fn contains(&self, id: DominoId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Identifier of the domino covering a cell
    pub fn occupant(&self, cell: Cell) -> Option<DominoId> {
        match self.occupancy.get(cell) {
            Some(&slot) if slot > 0 => Some(DominoId::new(slot - 1)),
            _ => None,
        }
    }

    /// Test whether any domino covers a cell
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupant(cell).is_some()
    }
}
