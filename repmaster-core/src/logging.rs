//! stderr logging through env_logger.
//!
//! Levels come either as a bare level (`debug`) or as env_logger directives
//! (`info,repmaster::db=trace`), so single modules can be turned up.

use log::LevelFilter;
use std::io::Write;

fn builder() -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .format(move |buf, record| {
            writeln!(
                buf,
                "{}: {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr);
    builder
}

pub fn init_logger(level: LevelFilter) {
    let _ = builder().filter_level(level).try_init();
    log::set_max_level(level);
}

pub fn parse_level(level: &str) -> Option<LevelFilter> {
    let lvl = match level.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => return None,
    };
    Some(lvl)
}

/// Rewrites a directive list with canonical level names and returns it with
/// the most verbose level it names. `None` when a directive carries an
/// unknown level. A bare module path enables everything for that module.
pub fn normalize_directives(directives: &str) -> Option<(String, LevelFilter)> {
    let mut normalized = Vec::new();
    let mut max = LevelFilter::Off;
    for directive in directives.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        let (directive, level) = match directive.split_once('=') {
            Some((module, level)) => {
                let level = parse_level(level)?;
                (format!("{}={}", module.trim(), level), level)
            }
            None => match parse_level(directive) {
                Some(level) => (level.to_string(), level),
                None => (directive.to_string(), LevelFilter::Trace),
            },
        };
        max = max.max(level);
        normalized.push(directive);
    }
    if normalized.is_empty() {
        return None;
    }
    Some((normalized.join(","), max))
}

/// Initialise logging from a level or directive list. Returns `false` when it
/// cannot be understood.
pub fn set_log_level(directives: &str) -> bool {
    let Some((directives, max)) = normalize_directives(directives) else {
        return false;
    };
    let _ = builder().parse_filters(&directives).try_init();
    log::set_max_level(max);
    true
}
