use crate::tail::discover::discover_logs;
use crate::tail::error::TailError;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the most recently modified log file in `dir`, if there is one.
///
/// Equal modification times are broken by the greater path, so the answer is
/// stable while the directory is unchanged. Files that vanish between listing
/// and inspection are ignored.
pub fn current_file(dir: &Path) -> Result<Option<PathBuf>, TailError> {
    let newest = discover_logs(dir)?
        .into_iter()
        .filter_map(|path| {
            let modified = fs::metadata(&path).and_then(|m| m.modified()).ok()?;
            Some((modified, path))
        })
        .max()
        .map(|(_, path)| path);

    Ok(newest)
}

/// The file being tailed and how far into it we have read.
///
/// The offset only means something for this exact file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailState {
    pub file: PathBuf,
    pub offset: u64,
}

impl TailState {
    pub fn new(file: PathBuf, offset: u64) -> Self {
        Self { file, offset }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rotation {
    /// Nothing was being tailed yet.
    Started,

    /// Still the same file.
    Unchanged,

    /// A different file became the newest. `previous` is where tailing of
    /// the old file stopped.
    Rotated { previous: TailState },
}

/// Result of one look at the log directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub rotation: Rotation,
    pub tail: TailState,
}

/// Tracks which log file is current and where to resume reading it.
#[derive(Debug, Clone)]
pub struct RotationMonitor {
    dir: PathBuf,
    tail: Option<TailState>,
}

impl RotationMonitor {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            tail: None,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn tail(&self) -> Option<&TailState> {
        self.tail.as_ref()
    }

    /// Re-evaluates the current file. Switching files restarts at offset 0.
    ///
    /// Nothing is recorded here; the caller hands the new position to
    /// [`commit`](Self::commit) once the file has been read, so a failed
    /// read sees the same observation again next time. Returns `None` when
    /// the directory holds no log files.
    pub fn observe(&self) -> Result<Option<Observation>, TailError> {
        let Some(current) = current_file(&self.dir)? else {
            return Ok(None);
        };

        let (rotation, tail) = match &self.tail {
            Some(tail) if tail.file == current => (Rotation::Unchanged, tail.clone()),
            Some(previous) => (
                Rotation::Rotated {
                    previous: previous.clone(),
                },
                TailState::new(current, 0),
            ),
            None => (Rotation::Started, TailState::new(current, 0)),
        };

        Ok(Some(Observation { rotation, tail }))
    }

    /// Records the file now being tailed and how far it has been read.
    pub fn commit(&mut self, tail: TailState) {
        self.tail = Some(tail);
    }
}
