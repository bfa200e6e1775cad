use clap::Parser;
use musicpp_stats_core::cli::stats::{StatsCmd, run_stats};
use musicpp_stats_core::conf::{ConfigError, ConfigOverrides, load_config};
use musicpp_stats_core::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "musicpp-stats",
    version,
    about = "Artwork source reliability and cache statistics from musicpp logs"
)]
struct Cli {
    /// Path to an optional TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log directory (defaults to MUSICPP_LOG_DIR, then %LOCALAPPDATA%/musicpp/logs)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<StatsCmd>,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let command = cli.command.unwrap_or_default();
    let overrides = ConfigOverrides {
        config_file: cli.config,
        log_dir: cli.dir,
        interval_seconds: command.interval_override(),
    };

    let config = match load_config(&overrides) {
        Ok(config) => config,
        // Nothing to look at is an expected outcome, not a failure.
        Err(e @ ConfigError::NoLogDirectory) => {
            println!("{e}");
            return;
        }
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            eprintln!("config error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_stats(command, &config) {
        eprintln!("musicpp-stats error: {e:#}");
        std::process::exit(1);
    }
}
