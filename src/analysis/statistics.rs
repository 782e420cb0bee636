//! Summary statistics of finished tilings and of the orientation draws
//!
//! Large uniform tilings freeze outside the inscribed "arctic circle": each
//! of the four corners fills with dominoes of a single facing, the one
//! pointing toward that corner. Inside the circle the facings mix. The
//! classification here works in doubled coordinates, where cell centres and
//! domino centres are both integral, so no floating point is involved until
//! the final ratios.

use crate::algorithm::engine::ShuffleStats;
use crate::spatial::domino::{Domino, Facing};
use crate::spatial::store::DominoStore;
use std::fmt;

/// Number of dominoes of each facing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FacingCounts {
    /// Up-facing dominoes
    pub up: usize,
    /// Down-facing dominoes
    pub down: usize,
    /// Left-facing dominoes
    pub left: usize,
    /// Right-facing dominoes
    pub right: usize,
}

impl FacingCounts {
    /// Tally the facings of a set of dominoes
    pub fn tally<'a>(dominoes: impl IntoIterator<Item = &'a Domino>) -> Self {
        let mut counts = Self::default();
        for domino in dominoes {
            *counts.get_mut(domino.facing) += 1;
        }
        counts
    }

    /// Count for one facing
    pub const fn get(&self, facing: Facing) -> usize {
        match facing {
            Facing::Up => self.up,
            Facing::Down => self.down,
            Facing::Left => self.left,
            Facing::Right => self.right,
        }
    }

    const fn get_mut(&mut self, facing: Facing) -> &mut usize {
        match facing {
            Facing::Up => &mut self.up,
            Facing::Down => &mut self.down,
            Facing::Left => &mut self.left,
            Facing::Right => &mut self.right,
        }
    }

    /// Total number of dominoes
    pub const fn total(&self) -> usize {
        self.up + self.down + self.left + self.right
    }

    /// Dominoes lying horizontally (Up and Down)
    pub const fn horizontal(&self) -> usize {
        self.up + self.down
    }

    /// Dominoes lying vertically (Left and Right)
    pub const fn vertical(&self) -> usize {
        self.left + self.right
    }
}

/// Centre of a domino in doubled coordinates
///
/// The diamond is centred on the origin in these units.
pub const fn doubled_centre(domino: &Domino) -> (i64, i64) {
    let x = 2 * domino.anchor.x as i64;
    let y = 2 * domino.anchor.y as i64;
    if domino.facing.is_horizontal() {
        (x + 2, y + 1)
    } else {
        (x + 1, y + 2)
    }
}

/// Facing that dominates the frozen corner containing a doubled point
///
/// The corner is chosen by the larger coordinate magnitude: the north and
/// south corners freeze into Up and Down dominoes, west and east into Left
/// and Right. Points on a diagonal go to the horizontal corners.
pub const fn polar_facing(centre: (i64, i64)) -> Facing {
    let (x, y) = centre;
    if y.abs() > x.abs() {
        if y < 0 { Facing::Up } else { Facing::Down }
    } else if x < 0 {
        Facing::Left
    } else {
        Facing::Right
    }
}

/// Whether a domino lies outside the arctic circle of the given order
///
/// The circle is inscribed in the diamond, radius `n / √2` in cell units,
/// which is `2n²` squared in doubled units.
pub const fn is_frozen(domino: &Domino, order: u32) -> bool {
    let (x, y) = doubled_centre(domino);
    let n = order as i64;
    x * x + y * y > 2 * n * n
}

/// Summary of a tiling's structure
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TilingStatistics {
    /// Diamond order of the tiling
    pub order: u32,
    /// Facing tallies over every domino
    pub counts: FacingCounts,
    /// Dominoes outside the arctic circle
    pub frozen: usize,
    /// Frozen dominoes whose facing matches their corner
    pub frozen_aligned: usize,
}

impl TilingStatistics {
    /// Analyse the dominoes of a store against the diamond of the given order
    pub fn from_store(store: &DominoStore, order: u32) -> Self {
        let counts = FacingCounts::tally(store.iter());
        let mut frozen = 0;
        let mut frozen_aligned = 0;

        for domino in store.iter().filter(|domino| is_frozen(domino, order)) {
            frozen += 1;
            if polar_facing(doubled_centre(domino)) == domino.facing {
                frozen_aligned += 1;
            }
        }

        Self {
            order,
            counts,
            frozen,
            frozen_aligned,
        }
    }

    /// Dominoes inside the arctic circle
    pub const fn temperate(&self) -> usize {
        self.counts.total() - self.frozen
    }

    /// Share of dominoes outside the arctic circle
    pub fn frozen_share(&self) -> f64 {
        ratio(self.frozen, self.counts.total())
    }

    /// Share of frozen dominoes that face their own corner
    pub fn alignment(&self) -> f64 {
        ratio(self.frozen_aligned, self.frozen)
    }
}

impl fmt::Display for TilingStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "order:      {}", self.order)?;
        writeln!(f, "dominoes:   {}", self.counts.total())?;
        writeln!(
            f,
            "facings:    up {} / down {} / left {} / right {}",
            self.counts.up, self.counts.down, self.counts.left, self.counts.right
        )?;
        writeln!(
            f,
            "frozen:     {} ({:.1}%), {:.1}% facing their corner",
            self.frozen,
            100.0 * self.frozen_share(),
            100.0 * self.alignment()
        )?;
        write!(f, "temperate:  {}", self.temperate())
    }
}

/// How evenly the fills split between the two orientations
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FairnessReport {
    /// Number of fills observed
    pub fills: usize,
    /// Share of fills drawn horizontal
    pub horizontal_share: f64,
    /// Standard score of the horizontal count against a fair coin
    pub z_score: f64,
}

impl FairnessReport {
    /// Evaluate the orientation draws recorded by an engine
    pub fn from_stats(stats: &ShuffleStats) -> Self {
        let fills = stats.horizontal_fills + stats.vertical_fills;
        let z_score = if fills == 0 {
            0.0
        } else {
            let n = fills as f64;
            (stats.horizontal_fills as f64 - n / 2.0) / (n / 4.0).sqrt()
        };

        Self {
            fills,
            horizontal_share: ratio(stats.horizontal_fills, fills),
            z_score,
        }
    }

    /// Whether the split is within the given number of standard deviations
    pub fn is_plausibly_fair(&self, tolerance: f64) -> bool {
        self.z_score.abs() <= tolerance
    }
}

impl fmt::Display for FairnessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fills:      {} ({:.2}% horizontal, z = {:+.2})",
            self.fills,
            100.0 * self.horizontal_share,
            self.z_score
        )
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
