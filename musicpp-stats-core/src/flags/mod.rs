//! Flag extraction for artwork log lines.
//!
//! The application writes one `ArtworkLog` line per artwork lookup, carrying a
//! bracketed `Flags: [...]` field. Everything else in a log file is noise as
//! far as statistics are concerned.

mod parse;
mod types;
pub mod vocabulary;

pub use parse::{extract_flag_field, parse_flags};
pub use types::FlagSet;
