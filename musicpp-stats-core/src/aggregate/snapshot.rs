use crate::aggregate::ratio::Ratio;
use crate::aggregate::state::{AggregateState, CacheCounters, SourceCounters};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Everything presentation needs for one refresh.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub directory: PathBuf,
    pub current_file: Option<PathBuf>,
    pub taken_at: DateTime<Local>,
    pub total_lines: u64,
    pub sources: Vec<SourceSnapshot>,
    pub cache: CacheSnapshot,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceSnapshot {
    pub name: String,
    pub tracks_availability: bool,
    #[serde(flatten)]
    pub counters: SourceCounters,
    pub reliability: Ratio,
}

#[derive(Debug, Clone, Serialize)]
pub struct CacheSnapshot {
    #[serde(flatten)]
    pub counters: CacheCounters,
    pub hit_rate: Ratio,
    pub write_rate: Ratio,
    pub expiration_rate: Ratio,
}

impl StatsSnapshot {
    pub fn capture(state: &AggregateState, directory: &Path, current_file: Option<&Path>) -> Self {
        let sources = state
            .sources()
            .map(|(spec, counters)| SourceSnapshot {
                name: spec.name.clone(),
                tracks_availability: spec.tracks_availability(),
                counters: *counters,
                reliability: state.reliability(&spec.name),
            })
            .collect();

        Self {
            directory: directory.to_path_buf(),
            current_file: current_file.map(Path::to_path_buf),
            taken_at: Local::now(),
            total_lines: state.total_lines_processed(),
            sources,
            cache: CacheSnapshot {
                counters: *state.cache(),
                hit_rate: state.hit_rate(),
                write_rate: state.write_rate(),
                expiration_rate: state.expiration_rate(),
            },
        }
    }
}
