#![cfg(feature = "std")]

use std::env;
use std::eprintln;
use log::{self, LevelFilter, Metadata, Record};

/// Environment variable holding the log level (`error` .. `trace`, or `off`).
pub const LOG_ENV: &str = "SEA_BATTLE_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // stdout belongs to the game prompts and the sim report
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn level_from(value: Option<String>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Initialize logging with a level taken from the `SEA_BATTLE_LOG`
/// environment variable. Defaults to `info` if unset or invalid.
/// Calling it more than once is harmless.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing() {
        assert_eq!(level_from(None), LevelFilter::Info);
        assert_eq!(level_from(Some("debug".into())), LevelFilter::Debug);
        assert_eq!(level_from(Some("OFF".into())), LevelFilter::Off);
        assert_eq!(level_from(Some("chatty".into())), LevelFilter::Info);
    }
}
