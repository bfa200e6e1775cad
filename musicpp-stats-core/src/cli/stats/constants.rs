pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// Reliability at or above this is shown as healthy.
pub const GOOD_RATIO: f64 = 0.9;
/// Reliability below this is shown as poor.
pub const POOR_RATIO: f64 = 0.5;

pub const RULE: &str = "-----------------------";
