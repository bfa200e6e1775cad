use crate::aggregate::state::AggregateState;

/// A ratio that is `None` when its denominator is zero.
///
/// "No data" has to stay distinguishable from a genuine `0.0`.
pub type Ratio = Option<f64>;

fn ratio(numerator: u64, denominator: u64) -> Ratio {
    (denominator > 0).then(|| numerator as f64 / denominator as f64)
}

impl AggregateState {
    /// Share of lookups using `source` where the source had a result.
    /// Unknown sources have no data.
    pub fn reliability(&self, source: &str) -> Ratio {
        self.source(source)
            .and_then(|counters| ratio(counters.available, counters.used))
    }

    pub fn hit_rate(&self) -> Ratio {
        ratio(self.cache().hits, self.cache().total_entries)
    }

    pub fn write_rate(&self) -> Ratio {
        ratio(self.cache().written, self.cache().total_entries)
    }

    /// Expired images among cache hits, not among all entries.
    pub fn expiration_rate(&self) -> Ratio {
        ratio(self.cache().expired, self.cache().hits)
    }
}
