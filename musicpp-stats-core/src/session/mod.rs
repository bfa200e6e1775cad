//! Owns the counters and the tail position for one stats run.
//!
//! A run seeds the counters with one pass over every log file, then keeps them
//! current by tailing whichever file is newest, one [`StatsSession::tick`] at
//! a time.

mod error;
#[cfg(test)]
mod tests;

pub use error::SessionError;

use crate::aggregate::{AggregateState, SourceSpec, StatsSnapshot};
use crate::conf::StatsConfig;
use crate::tail::{
    ReadMode, Rotation, RotationMonitor, TailState, collect_from, current_file, discover_logs,
    read_from,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub files: usize,
    pub skipped: usize,
    pub matched: u64,
    pub current: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// File tailed this tick; `None` if the directory had no log files.
    pub file: Option<PathBuf>,

    /// Flag-bearing lines folded this tick, including the rest of a file that
    /// was rotated away from.
    pub matched: u64,

    pub rotation: Option<Rotation>,
}

impl TickReport {
    fn idle() -> Self {
        Self {
            file: None,
            matched: 0,
            rotation: None,
        }
    }
}

pub struct StatsSession {
    state: AggregateState,
    monitor: RotationMonitor,
}

impl StatsSession {
    pub fn new(dir: impl Into<PathBuf>, sources: Vec<SourceSpec>) -> Self {
        Self {
            state: AggregateState::new(sources),
            monitor: RotationMonitor::new(dir),
        }
    }

    pub fn from_config(config: &StatsConfig) -> Self {
        Self::new(config.log_dir.clone(), config.sources.clone())
    }

    pub fn dir(&self) -> &Path {
        self.monitor.dir()
    }

    pub fn state(&self) -> &AggregateState {
        &self.state
    }

    pub fn tail(&self) -> Option<&TailState> {
        self.monitor.tail()
    }

    /// Scans every log file from the start to build the baseline counters.
    ///
    /// The newest file is read up to its last complete line and tailing
    /// resumes from there, so nothing counted here is counted again by
    /// [`tick`](Self::tick). A file that cannot be read is logged and
    /// skipped.
    pub fn seed(&mut self) -> Result<SeedReport, SessionError> {
        let dir = self.monitor.dir().to_path_buf();
        if !dir.is_dir() {
            return Err(SessionError::MissingDirectory { path: dir });
        }

        let files = discover_logs(&dir)?;
        if files.is_empty() {
            return Err(SessionError::NoLogFiles { path: dir });
        }

        let current = current_file(&dir)?;
        let mut report = SeedReport {
            files: files.len(),
            current: current.clone(),
            ..Default::default()
        };

        for file in &files {
            let is_current = current.as_ref() == Some(file);
            let mode = if is_current {
                ReadMode::CompleteLines
            } else {
                ReadMode::ToEof
            };

            match read_from(file, 0, mode, &mut self.state) {
                Ok(outcome) => {
                    report.matched += outcome.matched;
                    if is_current {
                        self.monitor.commit(TailState::new(file.clone(), outcome.offset));
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable log file");
                    report.skipped += 1;
                }
            }
        }

        tracing::info!(
            dir = %dir.display(),
            files = report.files,
            skipped = report.skipped,
            matched = report.matched,
            "initial scan complete"
        );

        Ok(report)
    }

    /// One monitoring step: find the current file and fold whatever was
    /// appended to it since the last step.
    ///
    /// When a different file has become current, the remainder of the old
    /// one is read first and the new one is read from its start. Nothing is
    /// folded and the tail position does not move unless the current file
    /// was read successfully; an old file that can no longer be read is
    /// logged and given up on.
    pub fn tick(&mut self) -> Result<TickReport, SessionError> {
        let Some(observation) = self.monitor.observe()? else {
            return Ok(TickReport::idle());
        };

        let remainder = match &observation.rotation {
            Rotation::Rotated { previous } => {
                match collect_from(&previous.file, previous.offset, ReadMode::ToEof) {
                    Ok(pending) => Some(pending),
                    Err(e) => {
                        tracing::warn!(error = %e, "could not finish rotated log file");
                        None
                    }
                }
            }
            Rotation::Started | Rotation::Unchanged => None,
        };

        let tail = observation.tail;
        let current = collect_from(&tail.file, tail.offset, ReadMode::CompleteLines)?;

        if let Rotation::Rotated { previous } = &observation.rotation {
            tracing::info!(
                from = %previous.file.display(),
                to = %tail.file.display(),
                "log rotation detected"
            );
        }

        let mut matched = 0;
        if let Some(pending) = remainder {
            matched += pending.apply(&mut self.state).matched;
        }
        let outcome = current.apply(&mut self.state);
        matched += outcome.matched;
        self.monitor.commit(TailState::new(tail.file.clone(), outcome.offset));

        Ok(TickReport {
            file: Some(tail.file),
            matched,
            rotation: Some(observation.rotation),
        })
    }

    /// [`tick`](Self::tick) for the live loop: a failed step is logged and
    /// skipped, and the next one tries again.
    pub fn poll(&mut self) -> Option<TickReport> {
        match self.tick() {
            Ok(report) => Some(report),
            Err(e) => {
                tracing::warn!(error = %e, "tick failed; keeping previous totals");
                None
            }
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let current = self.monitor.tail().map(|tail| tail.file.as_path());
        StatsSnapshot::capture(&self.state, self.monitor.dir(), current)
    }
}
