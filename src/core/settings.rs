//! Serializable settings for loading configuration from JSON or the environment

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    log_level::LogLevel,
    timestamp::DateFormat,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Environment variable holding the threshold, e.g. `LOG_LEVEL=debug`
pub const ENV_LEVEL: &str = "LOG_LEVEL";
/// Environment variable holding a strftime pattern for the date column
pub const ENV_DATE_FORMAT: &str = "LOG_DATE_FORMAT";

/// The data-only part of a [`LoggerConfig`].
///
/// Unset fields leave the target configuration untouched.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::{LogLevel, LoggerConfig, LoggerSettings};
///
/// let settings = LoggerSettings::from_json_str(
///     r#"{ "level": "DEBUG", "prefixes": { "WARN": "[WARNING]" } }"#,
/// ).unwrap();
///
/// let mut config = LoggerConfig::new();
/// settings.apply(&mut config);
/// assert_eq!(config.level, LogLevel::Debug);
/// assert_eq!(config.prefixes[LogLevel::Warn], "[WARNING]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<DateFormat>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub prefixes: BTreeMap<LogLevel, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_filtered_callers: Option<bool>,
}

impl LoggerSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read [`ENV_LEVEL`] and [`ENV_DATE_FORMAT`] from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(raw) = lookup(ENV_LEVEL) {
            settings.level = Some(raw.parse()?);
        }

        if let Some(raw) = lookup(ENV_DATE_FORMAT) {
            let format = DateFormat::new(raw);
            if !format.is_valid() {
                return Err(LoggerError::config(
                    ENV_DATE_FORMAT,
                    format!("unsupported date pattern '{}'", format),
                ));
            }
            settings.date_format = Some(format);
        }

        Ok(settings)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Overwrite the fields of `config` that are set here.
    pub fn apply(&self, config: &mut LoggerConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
        if let Some(ref format) = self.date_format {
            config.date_format = format.clone();
        }
        for (level, prefix) in &self.prefixes {
            config.prefixes[*level] = prefix.clone();
        }
        if let Some(align) = self.align_filtered_callers {
            config.align_filtered_callers = align;
        }
    }
}
