//! Stderr backend for the `log` facade
//!
//! The core crate logs through `log`; the binary routes those records to
//! stderr so stdout stays clean for CSV/JSON output.

use log::{LevelFilter, Log, Metadata, Record};

use crate::error::{ReportError, ReportResult};

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger at `level`. Fails if a logger is already set.
pub fn init(level: LevelFilter) -> ReportResult<()> {
    log::set_logger(&LOGGER).map_err(|_| ReportError::LoggerInstalled)?;
    log::set_max_level(level);
    Ok(())
}

/// Map `-q`/`-v` counts to a level: warnings by default
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
