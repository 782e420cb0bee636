/// Command-line arguments and the generation runner
pub mod cli;
/// Constants and validated run parameters
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// PNG rendering of tilings
pub mod image;
/// Progress bar for long runs
pub mod progress;
/// Growth animation as GIF
pub mod visualization;
