use crate::aggregate::{Ratio, SourceSnapshot, StatsSnapshot};
use crate::cli::stats::constants::{CLEAR_SCREEN, GOOD_RATIO, POOR_RATIO, RULE};
use crate::logging::ColorMode;
use owo_colors::OwoColorize;
use std::io::{self, Write};

pub fn render_summary(snapshot: &StatsSnapshot, color: ColorMode) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Summary\n\
         Directory: {}\n\
         Total lines considered: {}\n\
         {}\n",
        snapshot.directory.display(),
        snapshot.total_lines,
        RULE
    ));

    for source in &snapshot.sources {
        out.push_str(&render_source(source, color));
        out.push('\n');
    }

    out.push_str("\nCache Statistics\n----------------\n");

    let cache = &snapshot.cache;
    if cache.counters.total_entries == 0 {
        out.push_str("No log entries found\n");
        return out;
    }

    out.push_str(&format!(
        "cache hit rate        = {}\n",
        format_rate(cache.hit_rate)
    ));
    out.push_str(&format!(
        "cache write rate      = {}\n",
        format_rate(cache.write_rate)
    ));
    match cache.expiration_rate {
        Some(rate) => out.push_str(&format!("cache expiration rate = {rate:.5}\n")),
        None => out.push_str("cache expiration rate = no cache hits found\n"),
    }

    out
}

fn render_source(source: &SourceSnapshot, color: ColorMode) -> String {
    let Some(reliability) = source.reliability else {
        let note = match color {
            ColorMode::Color => "no usage found".dimmed().to_string(),
            ColorMode::Plain => "no usage found".to_string(),
        };
        return format!("{}: {note}", source.name);
    };

    let counters = &source.counters;
    if !source.tracks_availability {
        return format!("{}: used={}", source.name, counters.used);
    }

    format!(
        "{}: reliability = {} (used={}, available={}, unavailable={})",
        source.name,
        color_ratio(reliability, color),
        counters.used,
        counters.available,
        counters.unavailable
    )
}

fn color_ratio(ratio: f64, color: ColorMode) -> String {
    let text = format!("{ratio:.5}");
    match color {
        ColorMode::Plain => text,
        ColorMode::Color if ratio >= GOOD_RATIO => text.green().to_string(),
        ColorMode::Color if ratio >= POOR_RATIO => text.yellow().to_string(),
        ColorMode::Color => text.red().to_string(),
    }
}

fn format_rate(rate: Ratio) -> String {
    rate.map_or_else(|| "n/a".to_string(), |r| format!("{r:.5}"))
}

/// Header shown above the table while watching.
pub(crate) fn render_live_header(snapshot: &StatsSnapshot, interval_secs: u64) -> String {
    let tailing = snapshot
        .current_file
        .as_ref()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "<no log file>".to_string());

    format!(
        "Live ({}s refresh) | tailing {} | updated {}\n\n",
        interval_secs,
        tailing,
        snapshot.taken_at.format("%H:%M:%S")
    )
}

pub fn render_json(snapshot: &StatsSnapshot, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(snapshot)
    } else {
        serde_json::to_string(snapshot)
    }
}

pub fn redraw(output: &str) {
    print!("{CLEAR_SCREEN}");
    println!("{output}");
    let _ = io::stdout().flush();
}
