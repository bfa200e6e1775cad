//! Running counters folded from flag sets, and the ratios derived from them.

mod ratio;
mod snapshot;
mod source;
mod state;
#[cfg(test)]
mod tests;

pub use ratio::Ratio;
pub use snapshot::{CacheSnapshot, SourceSnapshot, StatsSnapshot};
pub use source::{SourceSpec, default_sources};
pub use state::{AggregateState, CacheCounters, SourceCounters};
