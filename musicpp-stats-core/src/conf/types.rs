use crate::aggregate::SourceSpec;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming the log directory.
pub const LOG_DIR_ENV: &str = "MUSICPP_LOG_DIR";

/// Per-user application data root on Windows; logs live below it.
pub const LOCAL_APP_DATA_ENV: &str = "LOCALAPPDATA";
pub const APP_DIR_NAME: &str = "musicpp";
pub const LOGS_DIR_NAME: &str = "logs";

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Fully resolved settings for a stats run.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsConfig {
    pub log_dir: PathBuf,
    pub interval: Duration,
    pub sources: Vec<SourceSpec>,
}

/// Contents of an optional TOML config file.
///
/// ```toml
/// log_dir = "C:/Users/me/AppData/Local/musicpp/logs"
/// interval_seconds = 2
///
/// [[source]]
/// name = "am"
/// used_flag = "am_used"
/// available_flag = "am_avail"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub log_dir: Option<PathBuf>,
    pub interval_seconds: Option<u64>,

    #[serde(default, rename = "source")]
    pub sources: Vec<SourceSpec>,
}

/// Values given on the command line. They win over everything else.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub interval_seconds: Option<u64>,
}
