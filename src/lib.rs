//! Uniformly random domino tilings of the Aztec diamond
//!
//! Tilings are grown one order at a time by domino shuffling: colliding
//! dominoes are destroyed, survivors slide one cell in the direction they
//! face, and the 2×2 voids left behind are refilled with a fair coin flip.
//! After growing to order `n` the tiling is a uniform sample over all tilings
//! of the order `n` diamond.

#![forbid(unsafe_code)]

/// Shuffling engine: gap filling, opposed-pair removal and growth
pub mod algorithm;
/// Statistics over finished tilings
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Cells, dominoes and the occupancy store
pub mod spatial;

pub use algorithm::engine::ShuffleEngine;
pub use io::error::{AlgorithmError, Result};
