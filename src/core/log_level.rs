//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log message, ordered from least to most severe.
///
/// `Plain` is unprefixed raw output and `Fatal` terminates the process after
/// the line has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Plain = 0,
    Trace = 1,
    Debug = 2,
    #[default]
    Info = 3,
    Warn = 4,
    Error = 5,
    Fatal = 6,
}

impl LogLevel {
    /// Every level, least severe first.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Plain,
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Plain => "PLAIN",
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Position of this level inside a [`LevelTable`](super::LevelTable).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The prefix printed in front of the caller column.
    ///
    /// `[INFO] ` and `[WARN] ` carry a trailing space so every prefix is
    /// seven characters wide.
    pub fn default_prefix(&self) -> &'static str {
        match self {
            LogLevel::Plain => "",
            LogLevel::Trace => "[TRACE]",
            LogLevel::Debug => "[DEBUG]",
            LogLevel::Info => "[INFO] ",
            LogLevel::Warn => "[WARN] ",
            LogLevel::Error => "[ERROR]",
            LogLevel::Fatal => "[FATAL]",
        }
    }

    /// Whether a message at this level passes the given threshold.
    ///
    /// Fatal messages are never suppressed.
    #[inline]
    pub fn passes(self, threshold: LogLevel) -> bool {
        self == LogLevel::Fatal || threshold <= self
    }

    /// Levels written to standard error by default.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, LogLevel::Error | LogLevel::Fatal)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Plain => White,
            LogLevel::Trace => BrightBlack,
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal => BrightRed,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PLAIN" => Ok(LogLevel::Plain),
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_matches_severity() {
        for pair in LogLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should be below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_index_matches_position() {
        for (i, level) in LogLevel::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
        }
    }

    #[test]
    fn test_passes_threshold() {
        assert!(LogLevel::Info.passes(LogLevel::Info));
        assert!(LogLevel::Error.passes(LogLevel::Info));
        assert!(!LogLevel::Debug.passes(LogLevel::Info));
        assert!(!LogLevel::Plain.passes(LogLevel::Trace));
        assert!(LogLevel::Plain.passes(LogLevel::Plain));
    }

    #[test]
    fn test_fatal_is_never_suppressed() {
        for threshold in LogLevel::ALL {
            assert!(LogLevel::Fatal.passes(threshold));
        }
    }

    #[test]
    fn test_default_prefixes_share_width() {
        for level in LogLevel::ALL.iter().filter(|l| **l != LogLevel::Plain) {
            assert_eq!(level.default_prefix().len(), 7, "{}", level);
        }
        assert_eq!(LogLevel::Plain.default_prefix(), "");
    }

    #[test]
    fn test_parse() {
        assert_eq!("info".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("Warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!(" plain ".parse::<LogLevel>().unwrap(), LogLevel::Plain);
        let err = "loud".parse::<LogLevel>().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));
    }
}
