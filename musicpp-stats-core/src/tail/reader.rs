use crate::aggregate::AggregateState;
use crate::flags::{FlagSet, parse_flags};
use crate::tail::error::TailError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

/// How to treat a trailing line that has no newline yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Consume everything up to end-of-file. For files nobody writes anymore.
    ToEof,

    /// Stop in front of an unterminated trailing line so a line the writer is
    /// still appending is picked up whole on the next read.
    CompleteLines,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOutcome {
    /// Byte position to resume from.
    pub offset: u64,

    /// Flag-bearing lines folded by this read.
    pub matched: u64,
}

/// Flag sets read from a file but not yet folded into any counters.
#[derive(Debug, Clone)]
pub struct PendingRead {
    offset: u64,
    flags: Vec<FlagSet>,
}

impl PendingRead {
    pub fn apply(self, state: &mut AggregateState) -> ReadOutcome {
        for flags in &self.flags {
            state.fold(flags);
        }

        ReadOutcome {
            offset: self.offset,
            matched: self.flags.len() as u64,
        }
    }
}

/// Reads `path` from byte `offset`, folding every flag-bearing line into
/// `state`.
///
/// Invalid UTF-8 is replaced rather than rejected. Counters are only touched
/// once the whole read has succeeded, so a failed read changes nothing and
/// the same range is simply read again next time. If the file is now shorter
/// than `offset` it was truncated in place and is read from the start.
pub fn read_from(
    path: &Path,
    offset: u64,
    mode: ReadMode,
    state: &mut AggregateState,
) -> Result<ReadOutcome, TailError> {
    Ok(collect_from(path, offset, mode)?.apply(state))
}

/// [`read_from`] without the fold: the caller decides when, and whether,
/// to apply what was read.
pub fn collect_from(path: &Path, offset: u64, mode: ReadMode) -> Result<PendingRead, TailError> {
    let file = File::open(path).map_err(|source| TailError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let len = file
        .metadata()
        .map_err(|source| TailError::Metadata {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    let start = if offset > len {
        tracing::warn!(
            path = %path.display(),
            offset,
            len,
            "log file shrank below tracked offset; reading from start"
        );
        0
    } else {
        offset
    };

    let (offset, flags) =
        collect_flag_sets(BufReader::new(file), start, mode).map_err(|source| {
            TailError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

    tracing::debug!(
        path = %path.display(),
        from = start,
        to = offset,
        matched = flags.len(),
        "read log file"
    );

    Ok(PendingRead { offset, flags })
}

fn collect_flag_sets(
    mut reader: BufReader<File>,
    start: u64,
    mode: ReadMode,
) -> io::Result<(u64, Vec<FlagSet>)> {
    reader.seek(SeekFrom::Start(start))?;

    let mut pending = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            break;
        }

        if mode == ReadMode::CompleteLines && buf.last() != Some(&b'\n') {
            reader.seek_relative(-(read as i64))?;
            break;
        }

        if let Some(flags) = parse_flags(&String::from_utf8_lossy(&buf)) {
            pending.push(flags);
        }
    }

    // Byte position from the stream itself; decoded text length differs
    // whenever a replacement character was substituted.
    let offset = reader.stream_position()?;
    Ok((offset, pending))
}
