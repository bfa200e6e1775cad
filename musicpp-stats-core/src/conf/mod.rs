mod error;
mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, parse_file_config, resolve_config};
pub use types::{ConfigOverrides, FileConfig, StatsConfig};
