//! Position-tracked reading of log files and detection of the file that is
//! currently being written.

pub mod discover;
mod error;
mod monitor;
mod reader;
#[cfg(test)]
mod tests;

pub use discover::discover_logs;
pub use error::TailError;
pub use monitor::{Observation, Rotation, RotationMonitor, TailState, current_file};
pub use reader::{PendingRead, ReadMode, ReadOutcome, collect_from, read_from};
