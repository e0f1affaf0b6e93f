//! Severity levels for leveled log output.

use std::fmt;

/// Severity of a single log message.
///
/// Levels are totally ordered from least to most severe:
/// `Debug < Info < Warn < Error < Fatal < Panic`.
///
/// A `Level` is a plain value; it is never combined with other levels and
/// carries no filtering semantics of its own. Filtering, if any, belongs to
/// the backend that ultimately writes the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Warning messages
    Warn,
    /// Error messages
    Error,
    /// Unrecoverable errors; the backend may terminate the process
    Fatal,
    /// Programming errors; the backend may panic
    Panic,
}

impl Level {
    /// All levels in ascending severity order.
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Panic,
    ];
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Panic => "PANIC",
        };
        f.write_str(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
        assert!(Level::Fatal < Level::Panic);
    }

    #[test]
    fn test_level_display_tags() {
        let tags: Vec<String> = Level::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(tags, ["DEBUG", "INFO", "WARN", "ERROR", "FATAL", "PANIC"]);
    }

    #[test]
    fn test_level_all_is_ascending() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_level_copy() {
        let level = Level::Warn;
        let copied = level;
        assert_eq!(level, copied);
    }
}
