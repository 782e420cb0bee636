//! Analysis of finished tilings

/// Facing counts, arctic circle classification and fill fairness
pub mod statistics;
