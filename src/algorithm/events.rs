//! Notifications emitted by the shuffle engine after each transition
//!
//! The engine never waits on a consumer. Each atomic transition produces one
//! [`ShuffleEvent`]; batch operations hand every event to a
//! [`ShuffleObserver`] together with a read-only view of the tiling, so a
//! renderer can animate at its own pace between transitions.

use crate::algorithm::gaps::Gap;
use crate::algorithm::opposed::OpposedPair;
use crate::spatial::domino::{Domino, Orientation};
use crate::spatial::geometry::Cell;
use crate::spatial::store::{Advance, DominoStore};

/// What the engine is doing, or will do on its next step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Both queues are drained; the next step grows the diamond
    Idle,
    /// Filling a 2×2 void with two new dominoes
    FillingGaps,
    /// Destroying a pair of colliding dominoes
    RemovingOpposed,
    /// Growing the diamond and advancing the survivors
    Expanding,
}

/// Result of one atomic engine transition
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShuffleEvent {
    /// A void was filled with two new dominoes
    GapFilled {
        /// The block that was filled
        gap: Gap,
        /// The orientation drawn for it
        orientation: Orientation,
        /// The two inserted dominoes
        dominoes: [Domino; 2],
    },
    /// An opposed pair was destroyed
    PairRemoved {
        /// The removed pair
        pair: OpposedPair,
    },
    /// The diamond grew by one order
    Grown {
        /// The new order
        order: u32,
        /// Cells added by the growth
        ring: Vec<Cell>,
        /// Every survivor's move
        advanced: Vec<Advance>,
        /// Number of voids found in the grown diamond
        gaps: usize,
    },
}

impl ShuffleEvent {
    /// The phase that produced this event
    pub const fn phase(&self) -> Phase {
        match self {
            Self::GapFilled { .. } => Phase::FillingGaps,
            Self::PairRemoved { .. } => Phase::RemovingOpposed,
            Self::Grown { .. } => Phase::Expanding,
        }
    }
}

/// Receiver of engine events during batch operations
pub trait ShuffleObserver {
    /// Called after each transition with the tiling as it now stands
    fn on_event(&mut self, event: &ShuffleEvent, store: &DominoStore, order: u32);
}

/// Observer that ignores every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl ShuffleObserver for NullObserver {
    fn on_event(&mut self, _event: &ShuffleEvent, _store: &DominoStore, _order: u32) {}
}

/// Observer that keeps every event in order
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    /// Events received so far
    pub events: Vec<ShuffleEvent>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events of the given phase
    pub fn count(&self, phase: Phase) -> usize {
        self.events
            .iter()
            .filter(|event| event.phase() == phase)
            .count()
    }
}

impl ShuffleObserver for EventLog {
    fn on_event(&mut self, event: &ShuffleEvent, _store: &DominoStore, _order: u32) {
        self.events.push(event.clone());
    }
}
