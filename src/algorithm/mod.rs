/// Shuffle state machine and batch operations
pub mod engine;
/// Events and observers for each transition
pub mod events;
/// Detection of 2×2 voids after growth
pub mod gaps;
/// Detection of dominoes about to collide
pub mod opposed;
