use crate::tail::error::TailError;
use glob::{MatchOptions, Pattern, glob_with};
use std::path::{Path, PathBuf};

/// Log files end in `.log`, compared case-insensitively.
pub const LOG_PATTERN: &str = "*.log";

/// Lists the log files directly inside `dir`, sorted by path.
///
/// Entries that cannot be read while listing are skipped, as are
/// directories that happen to match the pattern.
///
/// # Errors
///
/// Returns `TailError::Glob` if the resolved pattern cannot be parsed.
pub fn discover_logs(dir: &Path) -> Result<Vec<PathBuf>, TailError> {
    let pattern = resolve_glob(dir, LOG_PATTERN);
    let options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };

    let mut paths: Vec<_> = glob_with(&pattern, options)
        .map_err(|e| TailError::Glob {
            pattern: pattern.clone(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .collect();

    paths.sort();
    Ok(paths)
}

/// Joins `pattern` onto `root`, escaping any glob syntax in the directory
/// name so only `pattern` itself is interpreted.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    let escaped_root = Pattern::escape(&root.to_string_lossy());
    Path::new(&escaped_root)
        .join(pattern)
        .to_string_lossy()
        .into_owned()
}
