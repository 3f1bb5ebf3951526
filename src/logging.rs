#![cfg(feature = "std")]
//! Stderr logger for the binaries.

use log::{LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "SEA_BATTLE_LOG";

/// Level used when neither a flag nor [`LOG_ENV`] names one. Kept at `warn`
/// so log lines do not interleave with the game prompt.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Pick the log level: an explicit choice wins, then a parseable `env`
/// value, then [`DEFAULT_LOG_LEVEL`].
pub fn resolve_level(explicit: Option<LevelFilter>, env: Option<&str>) -> LevelFilter {
    explicit
        .or_else(|| env.and_then(|lvl| lvl.trim().parse().ok()))
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Install the stderr logger. `level` usually comes from `--log-level`;
/// without it [`LOG_ENV`] is consulted. Later calls only adjust the level.
pub fn init_logging(level: Option<LevelFilter>) -> LevelFilter {
    let env = std::env::var(LOG_ENV).ok();
    let level = resolve_level(level, env.as_deref());
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
    level
}
