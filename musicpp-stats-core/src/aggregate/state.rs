use crate::aggregate::source::{SourceSpec, default_sources};
use crate::flags::FlagSet;
use crate::flags::vocabulary::{CACHE_WRITTEN, DB_HIT_IMAGE, IMG_EXPIRED};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SourceCounters {
    pub used: u64,
    pub available: u64,
    pub unavailable: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheCounters {
    pub total_entries: u64,
    pub hits: u64,
    pub expired: u64,
    pub written: u64,
}

/// All counters accumulated since startup.
///
/// The only way to change them is [`AggregateState::fold`], one flag-bearing
/// line at a time.
#[derive(Debug, Clone)]
pub struct AggregateState {
    sources: Vec<(SourceSpec, SourceCounters)>,
    cache: CacheCounters,
    total_lines_processed: u64,
}

impl AggregateState {
    pub fn new(sources: Vec<SourceSpec>) -> Self {
        Self {
            sources: sources
                .into_iter()
                .map(|spec| (spec, SourceCounters::default()))
                .collect(),
            cache: CacheCounters::default(),
            total_lines_processed: 0,
        }
    }

    /// Folds the flags of one flag-bearing line into the counters.
    pub fn fold(&mut self, flags: &FlagSet) {
        self.total_lines_processed += 1;
        self.cache.total_entries += 1;

        if flags.contains(DB_HIT_IMAGE) {
            self.cache.hits += 1;
        }
        if flags.contains(IMG_EXPIRED) {
            self.cache.expired += 1;
        }
        if flags.contains(CACHE_WRITTEN) {
            self.cache.written += 1;
        }

        // Several sources can be used by the same lookup.
        for (spec, counters) in &mut self.sources {
            if !flags.contains(&spec.used_flag) {
                continue;
            }
            counters.used += 1;

            let Some(available_flag) = &spec.available_flag else {
                continue;
            };
            if flags.contains(available_flag) {
                counters.available += 1;
            } else {
                counters.unavailable += 1;
            }
        }
    }

    pub fn source(&self, name: &str) -> Option<&SourceCounters> {
        self.sources
            .iter()
            .find(|(spec, _)| spec.name == name)
            .map(|(_, counters)| counters)
    }

    /// Sources in configured order.
    pub fn sources(&self) -> impl Iterator<Item = (&SourceSpec, &SourceCounters)> {
        self.sources.iter().map(|(spec, counters)| (spec, counters))
    }

    pub fn cache(&self) -> &CacheCounters {
        &self.cache
    }

    pub fn total_lines_processed(&self) -> u64 {
        self.total_lines_processed
    }
}

impl Default for AggregateState {
    fn default() -> Self {
        Self::new(default_sources())
    }
}
