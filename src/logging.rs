use crate::config::Config;
use env_logger::Builder;
use log::{Level, LevelFilter, Record};
use std::io::Write;

/// Log target for conditions that end the run. Rendered as `CRITICAL`.
pub const CRITICAL: &str = "critical";

/// Installs the global logger. Call once, at startup.
pub fn init(config: &Config) {
    builder(config).init();

    if let Some(raw) = &config.invalid_log_level {
        warn!(
            "Unknown {} '{}', using {}",
            crate::config::LOG_LEVEL_VAR,
            raw,
            config.log_level
        );
    }
}

fn builder(config: &Config) -> Builder {
    let mut builder = Builder::new();
    if config.critical_only {
        builder
            .filter_level(LevelFilter::Off)
            .filter(Some(CRITICAL), LevelFilter::Error);
    } else {
        builder.filter_level(config.log_level);
    }
    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            level_label(record),
            record.args()
        )
    });
    builder
}

fn level_label(record: &Record) -> &'static str {
    match record.level() {
        Level::Error if record.target() == CRITICAL => "CRITICAL",
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
