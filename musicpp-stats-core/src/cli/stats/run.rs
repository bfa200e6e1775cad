use crate::aggregate::StatsSnapshot;
use crate::cli::stats::constants::{HIDE_CURSOR, SHOW_CURSOR};
use crate::cli::stats::render::{redraw, render_json, render_live_header, render_summary};
use crate::cli::stats::{OutputFormat, StatsCmd};
use crate::conf::StatsConfig;
use crate::logging::default_color_mode;
use crate::session::StatsSession;
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

/// Which refresh is being emitted by [`watch_loop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Live,
    Final,
}

pub fn run_stats(cmd: StatsCmd, config: &StatsConfig) -> Result<()> {
    let color = default_color_mode();
    match cmd {
        StatsCmd::Summary { json } => run_summary(config, OutputFormat::new(json, color)),
        StatsCmd::Watch { json, .. } => run_watch(config, OutputFormat::new(json, color)),
    }
}

pub fn run_summary(config: &StatsConfig, format: OutputFormat) -> Result<()> {
    let mut session = StatsSession::from_config(config);
    if !seed_or_explain(&mut session)? {
        return Ok(());
    }

    let snapshot = session.snapshot();
    match format {
        OutputFormat::Text(color) => print!("{}", render_summary(&snapshot, color)),
        OutputFormat::Json => println!("{}", render_json(&snapshot, true)?),
    }
    Ok(())
}

pub fn run_watch(config: &StatsConfig, format: OutputFormat) -> Result<()> {
    let mut session = StatsSession::from_config(config);
    if !seed_or_explain(&mut session)? {
        return Ok(());
    }

    // Ctrl-C wakes the loop out of its wait instead of killing the process,
    // so the last totals still get printed.
    let (tx, rx) = mpsc::channel::<()>();
    ctrlc::set_handler(move || {
        let _ = tx.send(());
    })
    .context("failed to install Ctrl-C handler")?;

    let interval_secs = config.interval.as_secs();
    let live_table = matches!(format, OutputFormat::Text(_));

    if live_table {
        print!("{HIDE_CURSOR}");
        let _ = io::stdout().flush();
    }

    let result = watch_loop(&mut session, config.interval, &rx, |snapshot, frame| {
        emit(snapshot, frame, format, interval_secs)
    });

    if live_table {
        print!("{SHOW_CURSOR}");
        let _ = io::stdout().flush();
    }

    result
}

/// Drives the session: emit, wait `interval` or until `shutdown` fires,
/// tick, emit again. After shutdown one last tick is taken and emitted as
/// [`Frame::Final`].
pub fn watch_loop<F>(
    session: &mut StatsSession,
    interval: Duration,
    shutdown: &Receiver<()>,
    mut emit: F,
) -> Result<()>
where
    F: FnMut(&StatsSnapshot, Frame) -> Result<()>,
{
    emit(&session.snapshot(), Frame::Live)?;

    loop {
        match shutdown.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }

        if let Some(report) = session.poll() {
            tracing::debug!(
                matched = report.matched,
                rotation = ?report.rotation,
                "tick"
            );
        }
        emit(&session.snapshot(), Frame::Live)?;
    }

    tracing::info!("shutdown requested");
    session.poll();
    emit(&session.snapshot(), Frame::Final)
}

fn emit(
    snapshot: &StatsSnapshot,
    frame: Frame,
    format: OutputFormat,
    interval_secs: u64,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", render_json(snapshot, false)?);
            let _ = io::stdout().flush();
        }
        OutputFormat::Text(color) => {
            let body = render_summary(snapshot, color);
            match frame {
                Frame::Live => redraw(&format!(
                    "{}{body}",
                    render_live_header(snapshot, interval_secs)
                )),
                Frame::Final => redraw(&format!("{body}\nStopped.")),
            }
        }
    }
    Ok(())
}

/// Seeds the session. A missing or empty log directory is reported on
/// stdout and yields `false`; it is an expected state, not a failure.
fn seed_or_explain(session: &mut StatsSession) -> Result<bool> {
    match session.seed() {
        Ok(_) => Ok(true),
        Err(e) if e.is_absent_logs() => {
            println!("{e}");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
