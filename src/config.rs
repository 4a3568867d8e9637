use log::LevelFilter;

pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: LevelFilter,
    /// `LOG_LEVEL=CRITICAL`: only the fatal messages get through, ordinary
    /// errors are silenced too.
    pub critical_only: bool,
    /// The `LOG_LEVEL` value that couldn't be understood, if any. Kept so it
    /// can be reported once logging is running.
    pub invalid_log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: DEFAULT_LOG_LEVEL,
            critical_only: false,
            invalid_log_level: None,
        }
    }
}

impl Config {
    /// Loads `.env` (if there is one) and reads the process environment.
    pub fn load() -> Self {
        if let Err(e) = dotenv::dotenv() {
            if !e.not_found() {
                eprintln!("Couldn't load .env: {}", e);
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(LOG_LEVEL_VAR) {
            None => Config::default(),
            Some(raw) => match parse_level(&raw) {
                Some(log_level) => Config {
                    log_level,
                    critical_only: is_critical(&raw),
                    invalid_log_level: None,
                },
                None => Config {
                    invalid_log_level: Some(raw),
                    ..Config::default()
                },
            },
        }
    }
}

/// Level names as people tend to write them, including the long-form
/// `WARNING` and `CRITICAL`.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    if is_critical(name) {
        return Some(LevelFilter::Error);
    }
    match name.trim().to_ascii_uppercase().as_str() {
        "WARNING" => Some(LevelFilter::Warn),
        other => other.parse().ok(),
    }
}

fn is_critical(name: &str) -> bool {
    let name = name.trim();
    name.eq_ignore_ascii_case("CRITICAL") || name.eq_ignore_ascii_case("FATAL")
}
