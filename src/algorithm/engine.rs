use crate::{
    algorithm::events::{Phase, ShuffleEvent, ShuffleObserver},
    algorithm::gaps::{Gap, find_gaps},
    algorithm::opposed::{OpposedPair, find_opposed},
    io::error::{AlgorithmError, Result, invalid_parameter, invariant_violation},
    spatial::domino::{Domino, Orientation},
    spatial::geometry::{Cell, cell_count, grow_ring},
    spatial::store::DominoStore,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::VecDeque;
use tracing::{debug, error, info};

/// Running counters over an engine's lifetime
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShuffleStats {
    /// Voids filled
    pub gaps_filled: usize,
    /// Fills drawn as a Left + Right pair
    pub horizontal_fills: usize,
    /// Fills drawn as an Up + Down pair
    pub vertical_fills: usize,
    /// Opposed pairs destroyed
    pub pairs_removed: usize,
    /// Growth steps taken
    pub growth_cycles: usize,
}

/// Domino-shuffling state machine
///
/// Owns the domino store, the pending gap and opposed-pair queues, the
/// current diamond order and the random source. Every transition is a single
/// synchronous call through `&mut self`, so at most one is ever in flight.
///
/// A conflict or invariant violation stops the engine for good: the tiling
/// can no longer be trusted to be uniform, and every later call reports the
/// original failure without touching the state.
pub struct ShuffleEngine<R = StdRng> {
    store: DominoStore,
    gaps: VecDeque<Gap>,
    opposed: VecDeque<OpposedPair>,
    order: u32,
    rng: R,
    stats: ShuffleStats,
    failure: Option<String>,
}

impl ShuffleEngine<StdRng> {
    /// Create an engine with a seeded random source
    ///
    /// The same seed always produces the same sequence of tilings.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ShuffleEngine<R> {
    /// Create an engine drawing orientations from the given source
    ///
    /// Starts at order 1 with an empty store and the single seed void at
    /// `(-1, -1)` queued.
    pub fn with_rng(rng: R) -> Self {
        Self {
            store: DominoStore::with_order(1),
            gaps: VecDeque::from([Gap::new(Cell::new(-1, -1))]),
            opposed: VecDeque::new(),
            order: 1,
            rng,
            stats: ShuffleStats::default(),
            failure: None,
        }
    }

    /// Current diamond order
    pub const fn order(&self) -> u32 {
        self.order
    }

    /// The domino store
    pub const fn store(&self) -> &DominoStore {
        &self.store
    }

    /// Iterate over the current dominoes in insertion order
    pub fn dominoes(&self) -> impl Iterator<Item = &Domino> {
        self.store.iter()
    }

    /// Voids waiting to be filled, in fill order
    pub fn pending_gaps(&self) -> impl Iterator<Item = &Gap> {
        self.gaps.iter()
    }

    /// Opposed pairs waiting to be removed, in removal order
    pub fn pending_opposed(&self) -> impl Iterator<Item = &OpposedPair> {
        self.opposed.iter()
    }

    /// Running counters
    pub const fn stats(&self) -> &ShuffleStats {
        &self.stats
    }

    /// The transition the next [`step`](Self::step) performs
    ///
    /// [`Phase::Idle`] means both queues are drained and the next step grows.
    pub fn next_phase(&self) -> Phase {
        if !self.gaps.is_empty() {
            Phase::FillingGaps
        } else if !self.opposed.is_empty() {
            Phase::RemovingOpposed
        } else {
            Phase::Idle
        }
    }

    /// Whether an earlier failure has stopped the engine
    pub const fn is_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Whether the dominoes currently tile the whole diamond
    pub fn is_complete(&self) -> bool {
        self.gaps.is_empty() && 2 * self.store.len() == cell_count(self.order)
    }

    /// Perform one atomic transition
    ///
    /// Fills the next void if any are pending, otherwise removes the next
    /// opposed pair, otherwise grows the diamond by one order. Opposed pairs
    /// are recomputed over the whole store after every fill.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` or `InvariantViolation` if the tiling is found to be
    /// inconsistent; the engine refuses all further work afterwards.
    pub fn step(&mut self) -> Result<ShuffleEvent> {
        self.guarded(|engine| engine.transition(true))
    }

    /// Fill every pending void
    ///
    /// Opposed pairs are detected once after the last fill. Nothing reads
    /// the opposed queue between fills, so the queue ends up exactly as
    /// repeated [`step`](Self::step) calls would leave it.
    ///
    /// Returns the number of voids filled.
    ///
    /// # Errors
    ///
    /// Same as [`step`](Self::step).
    pub fn fill_gaps<O>(&mut self, observer: &mut O) -> Result<usize>
    where
        O: ShuffleObserver + ?Sized,
    {
        self.ensure_running()?;

        let mut filled = 0;
        while !self.gaps.is_empty() {
            let event = self.guarded(|engine| engine.transition(false))?;
            observer.on_event(&event, &self.store, self.order);
            filled += 1;
        }

        if filled > 0 {
            self.detect_opposed();
        }

        Ok(filled)
    }

    /// Fill every pending void, then destroy every opposed pair
    ///
    /// Returns the number of pairs removed.
    ///
    /// # Errors
    ///
    /// Same as [`step`](Self::step).
    pub fn clear_opposing<O>(&mut self, observer: &mut O) -> Result<usize>
    where
        O: ShuffleObserver + ?Sized,
    {
        self.fill_gaps(observer)?;

        let mut removed = 0;
        while !self.opposed.is_empty() {
            let event = self.step()?;
            observer.on_event(&event, &self.store, self.order);
            removed += 1;
        }

        Ok(removed)
    }

    /// Run one full growth cycle: fill, destroy, then grow and advance
    ///
    /// Afterwards the diamond is one order larger and its voids are queued.
    ///
    /// # Errors
    ///
    /// Same as [`step`](Self::step).
    pub fn expand<O>(&mut self, observer: &mut O) -> Result<()>
    where
        O: ShuffleObserver + ?Sized,
    {
        self.clear_opposing(observer)?;
        let event = self.step()?;
        observer.on_event(&event, &self.store, self.order);
        Ok(())
    }

    /// Grow to the target order and fill it completely
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the target is below the current order,
    /// otherwise the same as [`step`](Self::step).
    pub fn run_to_order<O>(&mut self, target: u32, observer: &mut O) -> Result<()>
    where
        O: ShuffleObserver + ?Sized,
    {
        if target < self.order {
            return Err(invalid_parameter(
                "order",
                &target,
                &format!("the diamond is already at order {}", self.order),
            ));
        }

        while self.order < target {
            self.expand(observer)?;
        }
        self.fill_gaps(observer)?;

        Ok(())
    }

    fn ensure_running(&self) -> Result<()> {
        self.failure.as_ref().map_or(Ok(()), |reason| {
            Err(invariant_violation(
                "shuffle step",
                &format!("engine stopped after an earlier failure: {reason}"),
            ))
        })
    }

    fn guarded<T>(&mut self, operation: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.ensure_running()?;

        let result = operation(self);
        if let Err(err) = &result
            && err.is_internal()
        {
            error!(order = self.order, error = %err, "shuffle engine stopped");
            self.failure = Some(err.to_string());
        }
        result
    }

    fn transition(&mut self, detect_after_fill: bool) -> Result<ShuffleEvent> {
        if let Some(gap) = self.gaps.pop_front() {
            let event = self.fill_gap(gap)?;
            if detect_after_fill {
                self.detect_opposed();
            }
            Ok(event)
        } else if let Some(pair) = self.opposed.pop_front() {
            self.remove_pair(pair)
        } else {
            self.grow()
        }
    }

    fn fill_gap(&mut self, gap: Gap) -> Result<ShuffleEvent> {
        let orientation = if self.rng.random_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let placements = gap.placements(orientation);

        // Both halves are checked before either is inserted
        for (anchor, facing) in placements {
            for cell in Domino::footprint(anchor, facing) {
                if let Some(occupant) = self.store.occupant(cell) {
                    return Err(AlgorithmError::Conflict {
                        cell,
                        occupant,
                        facing,
                    });
                }
            }
        }

        let [(first_anchor, first_facing), (second_anchor, second_facing)] = placements;
        let first = self.store.insert(first_anchor, first_facing)?;
        let second = self.store.insert(second_anchor, second_facing)?;

        self.stats.gaps_filled += 1;
        match orientation {
            Orientation::Horizontal => self.stats.horizontal_fills += 1,
            Orientation::Vertical => self.stats.vertical_fills += 1,
        }
        debug!(order = self.order, gap = %gap.anchor, %orientation, "filled gap");

        Ok(ShuffleEvent::GapFilled {
            gap,
            orientation,
            dominoes: [
                Domino::new(first, first_anchor, first_facing),
                Domino::new(second, second_anchor, second_facing),
            ],
        })
    }

    fn remove_pair(&mut self, pair: OpposedPair) -> Result<ShuffleEvent> {
        for expected in pair.dominoes() {
            if self.store.get(expected.id) != Some(&expected) {
                return Err(invariant_violation(
                    "opposed removal",
                    &format!("domino {} no longer matches the queued pair {pair}", expected.id),
                ));
            }
        }

        self.store.remove(&pair.ids())?;
        self.stats.pairs_removed += 1;
        debug!(order = self.order, %pair, "removed opposed pair");

        Ok(ShuffleEvent::PairRemoved { pair })
    }

    fn grow(&mut self) -> Result<ShuffleEvent> {
        let order = self.order + 1;
        self.store.reserve_order(order);
        let advanced = self.store.advance_all()?;
        let gaps = find_gaps(&self.store, order)?;

        self.order = order;
        self.stats.growth_cycles += 1;
        let gap_count = gaps.len();
        self.gaps.extend(gaps);

        info!(
            order,
            dominoes = self.store.len(),
            gaps = gap_count,
            "diamond grown"
        );

        Ok(ShuffleEvent::Grown {
            order,
            ring: grow_ring(order),
            advanced,
            gaps: gap_count,
        })
    }

    fn detect_opposed(&mut self) {
        self.opposed = find_opposed(self.store.iter()).into();
    }
}
