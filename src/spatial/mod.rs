//! Spatial data structures for the diamond
//!
//! This module contains:
//! - Cell coordinates and diamond membership
//! - Dominoes and their facings
//! - Dense per-cell storage and bit masks
//! - The domino store with its occupancy index

/// Dominoes, facings and fill orientations
pub mod domino;
/// Cell coordinates and diamond geometry
pub mod geometry;
/// Dense per-cell values over a square around the origin
pub mod grid;
/// Per-cell bit mask
pub mod mask;
/// Domino collection with occupancy lookup
pub mod store;

pub use domino::{Domino, DominoId, Facing, Orientation};
pub use geometry::Cell;
pub use store::DominoStore;
