use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("no log directory configured; pass --dir, set log_dir, or set MUSICPP_LOG_DIR")]
    NoLogDirectory,

    #[error("refresh interval must be at least one second")]
    InvalidInterval,

    #[error("source {name:?} is defined more than once")]
    DuplicateSource { name: String },

    #[error("source {name:?} has an empty flag")]
    EmptySourceFlag { name: String },
}
