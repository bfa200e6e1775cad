use crate::aggregate::{SourceSpec, default_sources};
use crate::conf::error::ConfigError;
use crate::conf::types::{
    APP_DIR_NAME, ConfigOverrides, DEFAULT_INTERVAL, FileConfig, LOCAL_APP_DATA_ENV, LOG_DIR_ENV,
    LOGS_DIR_NAME, StatsConfig,
};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolves the run configuration from the command line, the optional config
/// file and the process environment.
pub fn load_config(overrides: &ConfigOverrides) -> Result<StatsConfig, ConfigError> {
    let file = match &overrides.config_file {
        Some(path) => read_file_config(path)?,
        None => FileConfig::default(),
    };

    resolve_config(overrides, file, |key| std::env::var(key).ok())
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_file_config(path, &raw)
}

pub fn parse_file_config(path: &Path, raw: &str) -> Result<FileConfig, ConfigError> {
    toml::from_str(raw).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: Box::new(e),
    })
}

/// Merges the layers. `env` looks up environment variables so callers can
/// resolve without touching the real process environment.
pub fn resolve_config(
    overrides: &ConfigOverrides,
    file: FileConfig,
    env: impl Fn(&str) -> Option<String>,
) -> Result<StatsConfig, ConfigError> {
    let log_dir = overrides
        .log_dir
        .clone()
        .or(file.log_dir)
        .or_else(|| env(LOG_DIR_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
        .or_else(|| {
            env(LOCAL_APP_DATA_ENV)
                .filter(|v| !v.is_empty())
                .map(|root| PathBuf::from(root).join(APP_DIR_NAME).join(LOGS_DIR_NAME))
        })
        .ok_or(ConfigError::NoLogDirectory)?;

    let interval = match overrides.interval_seconds.or(file.interval_seconds) {
        Some(0) => return Err(ConfigError::InvalidInterval),
        Some(seconds) => Duration::from_secs(seconds),
        None => DEFAULT_INTERVAL,
    };

    let sources = if file.sources.is_empty() {
        default_sources()
    } else {
        validate_sources(&file.sources)?;
        file.sources
    };

    Ok(StatsConfig {
        log_dir,
        interval,
        sources,
    })
}

fn validate_sources(sources: &[SourceSpec]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for source in sources {
        if !seen.insert(source.name.as_str()) {
            return Err(ConfigError::DuplicateSource {
                name: source.name.clone(),
            });
        }

        let empty_available = source
            .available_flag
            .as_deref()
            .is_some_and(|flag| flag.trim().is_empty());
        if source.used_flag.trim().is_empty() || empty_available {
            return Err(ConfigError::EmptySourceFlag {
                name: source.name.clone(),
            });
        }
    }

    Ok(())
}
