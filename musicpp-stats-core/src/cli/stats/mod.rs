//! Artwork Source Statistics
//!
//! Every artwork lookup the application performs ends with an `ArtworkLog`
//! line whose `Flags: [...]` field records which sources were tried, which of
//! them had something, and what the image cache did. This command turns those
//! lines into two kinds of numbers:
//!
//! - **Reliability** per source: how often the source had a result when it
//!   was asked
//! - **Cache effectiveness**: hit, write and expiration rates
//!
//! `summary` scans the log directory once and prints the result. `watch` does
//! the same scan and then keeps following the newest log file, redrawing the
//! table every few seconds until interrupted.
//!
//! The overall data processing architecture is:
//!
//! log directory
//! RotationMonitor (which file is current)
//! read_from (new bytes only)
//! parse_flags
//! AggregateState::fold
//! StatsSnapshot
//! render_summary
//!

mod constants;
mod render;
mod run;

use crate::logging::ColorMode;
use clap::Subcommand;

pub use render::{redraw, render_json, render_summary};
pub use run::{Frame, run_stats, run_summary, run_watch, watch_loop};

#[derive(Subcommand, Debug, Clone)]
pub enum StatsCmd {
    /// Scan every log file once and print the totals (default)
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Keep following the newest log file and refresh the totals
    Watch {
        /// Output one JSON object per refresh
        #[arg(long)]
        json: bool,

        /// Seconds between refreshes
        #[arg(long)]
        interval: Option<u64>,
    },
}

impl Default for StatsCmd {
    fn default() -> Self {
        StatsCmd::Summary { json: false }
    }
}

impl StatsCmd {
    pub fn interval_override(&self) -> Option<u64> {
        match self {
            StatsCmd::Watch { interval, .. } => *interval,
            StatsCmd::Summary { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text(ColorMode),
    Json,
}

impl OutputFormat {
    pub fn new(json: bool, color: ColorMode) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text(color)
        }
    }
}
