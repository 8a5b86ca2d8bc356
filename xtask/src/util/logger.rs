//! stderr logger with the bracketed tags the task output has always used
//! (`[info]`, `[step]`, `[ok]`, `[warn]`, ...).
//!
//! Records logged with `target: "step"` or `target: "ok"` use the target as
//! the tag; everything else is tagged with its level.

use log::{Level, LevelFilter, Metadata, Record};

static LOGGER: TagLogger = TagLogger;

struct TagLogger;

impl log::Log for TagLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", tag(record), record.args());
        }
    }

    fn flush(&self) {}
}

fn tag<'a>(record: &Record<'a>) -> &'a str {
    match (record.level(), record.target()) {
        (Level::Info, t @ ("step" | "ok")) => t,
        (Level::Error, _) => "error",
        (Level::Warn, _) => "warn",
        (Level::Info, _) => "info",
        (Level::Debug, _) => "debug",
        (Level::Trace, _) => "trace",
    }
}

/// `-q` wins over `-v`; each `-v` raises the level one step past info.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Warn;
    }
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the logger. Safe to call more than once; later calls only adjust
/// the level.
pub fn init(max_level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(max_level);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_of(level: Level, target: &'static str) -> String {
        tag(&Record::builder()
            .args(format_args!("msg"))
            .level(level)
            .target(target)
            .build())
        .to_string()
    }

    #[test]
    fn step_and_ok_targets_become_tags() {
        assert_eq!(tag_of(Level::Info, "step"), "step");
        assert_eq!(tag_of(Level::Info, "ok"), "ok");
        assert_eq!(tag_of(Level::Info, "xtask::driver"), "info");
    }

    #[test]
    fn other_levels_use_level_name() {
        assert_eq!(tag_of(Level::Warn, "step"), "warn");
        assert_eq!(tag_of(Level::Error, "xtask"), "error");
        assert_eq!(tag_of(Level::Debug, "xtask"), "debug");
    }

    #[test]
    fn verbosity_flags() {
        assert_eq!(level_for(0, false), LevelFilter::Info);
        assert_eq!(level_for(1, false), LevelFilter::Debug);
        assert_eq!(level_for(3, false), LevelFilter::Trace);
        assert_eq!(level_for(2, true), LevelFilter::Warn);
    }
}
