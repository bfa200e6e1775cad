use musicpp_stats_core::aggregate::default_sources;
use musicpp_stats_core::session::StatsSession;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// A throwaway log directory with explicit control over file mtimes.
pub struct LogDir {
    dir: TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp log dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Appends `content` to `name` and stamps it `age` seconds after a fixed
    /// base time, so a larger `age` means newer.
    pub fn append(&self, name: &str, content: &str, age: u64) -> PathBuf {
        let path = self.file(name);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .expect("failed to open log file");
        file.write_all(content.as_bytes())
            .expect("failed to append to log file");
        drop(file);
        self.touch(name, age);
        path
    }

    pub fn touch(&self, name: &str, age: u64) {
        let base = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        File::options()
            .write(true)
            .open(self.file(name))
            .expect("failed to open log file")
            .set_modified(base + Duration::from_secs(age))
            .expect("failed to set mtime");
    }

    pub fn truncate(&self, name: &str, content: &str, age: u64) {
        fs::write(self.file(name), content).expect("failed to rewrite log file");
        self.touch(name, age);
    }

    pub fn session(&self) -> StatsSession {
        StatsSession::new(self.path(), default_sources())
    }
}

impl Default for LogDir {
    fn default() -> Self {
        Self::new()
    }
}

/// An `ArtworkLog` line the way the application writes it.
pub fn artwork_line(flags: &str) -> String {
    format!(
        "[2025-01-04 18:22:41.113] [info] ArtworkLog | Flags: [{flags}] | DB URL: \"\" | Final URL: \"https://img\" | Source: \"test\"\n"
    )
}
