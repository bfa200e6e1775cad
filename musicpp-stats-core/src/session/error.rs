use crate::tail::TailError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Log directory does not exist: {}", path.display())]
    MissingDirectory { path: PathBuf },

    #[error("No log files found in {}", path.display())]
    NoLogFiles { path: PathBuf },

    #[error(transparent)]
    Tail(#[from] TailError),
}

impl SessionError {
    /// True for the empty-state outcomes: nothing to report, but nothing
    /// went wrong either.
    pub fn is_absent_logs(&self) -> bool {
        matches!(
            self,
            SessionError::MissingDirectory { .. } | SessionError::NoLogFiles { .. }
        )
    }
}
