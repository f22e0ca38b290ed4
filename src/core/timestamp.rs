//! Timestamp formatting for the date column
//!
//! The date column is rendered from a strftime-compatible pattern. The
//! default pattern produces `YYYY-MM-DD HH:MM:SS.mmm` in local time.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Pattern used when none is configured: `2025-01-08 10:30:45.123`
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// A strftime pattern for the date column.
///
/// # Examples
///
/// ```
/// use rust_leveled_logger::DateFormat;
///
/// // Day first, as used by some operators
/// let format = DateFormat::new("%d.%m.%Y at %H:%M:%S");
/// assert_eq!(format.pattern(), "%d.%m.%Y at %H:%M:%S");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateFormat(String);

impl DateFormat {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn pattern(&self) -> &str {
        &self.0
    }

    /// Whether chrono understands every specifier in the pattern
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !StrftimeItems::new(&self.0).any(|item| matches!(item, Item::Error))
    }

    /// Format a point in time with this pattern.
    ///
    /// A pattern chrono cannot render does not fail the call; the raw
    /// pattern text is returned instead, so the problem shows up in the
    /// output.
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        if !self.is_valid() {
            return self.0.clone();
        }
        let mut out = String::with_capacity(self.0.len() + 8);
        if write!(out, "{}", datetime.format(&self.0)).is_err() {
            return self.0.clone();
        }
        out
    }

    /// Format the current local time
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

impl From<&str> for DateFormat {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for DateFormat {
    fn from(pattern: String) -> Self {
        Self(pattern)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_default_format() {
        let result = DateFormat::default().format(&fixed_datetime());
        assert_eq!(result, "2025-01-08 10:30:45.123");
    }

    #[test]
    fn test_custom_format() {
        let format = DateFormat::new("%d.%m.%Y at %H:%M:%S");
        assert_eq!(format.format(&fixed_datetime()), "08.01.2025 at 10:30:45");
    }

    #[test]
    fn test_invalid_pattern_falls_back_to_pattern_text() {
        let format = DateFormat::new("%Y-%!");
        assert!(!format.is_valid());
        assert_eq!(format.format(&fixed_datetime()), "%Y-%!");
    }

    #[test]
    fn test_now_uses_pattern() {
        let stamp = DateFormat::default().now();
        // YYYY-MM-DD HH:MM:SS.mmm
        assert_eq!(stamp.len(), 23);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[19..20], ".");
    }

    #[test]
    fn test_serde_is_transparent() {
        let format: DateFormat = serde_json::from_str("\"%H:%M\"").unwrap();
        assert_eq!(format.pattern(), "%H:%M");
        assert_eq!(serde_json::to_string(&format).unwrap(), "\"%H:%M\"");
    }
}
