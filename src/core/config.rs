//! Live logger configuration

use super::{
    destination::Destination, level_table::LevelTable, log_level::LogLevel, render::Renderer,
    timestamp::DateFormat,
};
use crate::renderers::{DefaultRenderer, PlainRenderer};
use std::fmt;
use std::sync::Arc;

/// Everything that decides whether and how a line is written.
///
/// Cloning is cheap: renderers are shared and destinations are handles.
#[derive(Clone)]
pub struct LoggerConfig {
    /// Messages below this level are dropped (Fatal excepted)
    pub level: LogLevel,
    pub date_format: DateFormat,
    pub prefixes: LevelTable<String>,
    pub renderers: LevelTable<Arc<dyn Renderer>>,
    pub destinations: LevelTable<Destination>,
    /// Resolve callers before the threshold check, so filtered calls also
    /// widen the caller column.
    pub align_filtered_callers: bool,
}

impl LoggerConfig {
    /// Built-in defaults: Info threshold, stdout/stderr routing, the plain
    /// renderer for Plain and the default renderer for everything else.
    pub fn new() -> Self {
        let default: Arc<dyn Renderer> = Arc::new(DefaultRenderer);
        let plain: Arc<dyn Renderer> = Arc::new(PlainRenderer);
        Self {
            level: LogLevel::Info,
            date_format: DateFormat::default(),
            prefixes: LevelTable::from_fn(|level| level.default_prefix().to_string()),
            renderers: LevelTable::from_fn(|level| match level {
                LogLevel::Plain => Arc::clone(&plain),
                _ => Arc::clone(&default),
            }),
            destinations: LevelTable::from_fn(Destination::for_level),
            align_filtered_callers: false,
        }
    }

    #[inline]
    pub fn should_log(&self, level: LogLevel) -> bool {
        level.passes(self.level)
    }

    /// Use one renderer for every level, Plain included.
    pub fn set_renderer_for_all(&mut self, renderer: Arc<dyn Renderer>) {
        self.renderers.fill(renderer);
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("level", &self.level)
            .field("date_format", &self.date_format)
            .field("prefixes", &self.prefixes)
            .field("destinations", &self.destinations)
            .field("align_filtered_callers", &self.align_filtered_callers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::new();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.prefixes[LogLevel::Info], "[INFO] ");
        assert_eq!(config.prefixes[LogLevel::Plain], "");
        assert!(matches!(config.destinations[LogLevel::Debug], Destination::Stdout));
        assert!(matches!(config.destinations[LogLevel::Fatal], Destination::Stderr));
        assert!(!config.align_filtered_callers);
    }

    #[test]
    fn test_should_log() {
        let mut config = LoggerConfig::new();
        config.level = LogLevel::Error;
        assert!(!config.should_log(LogLevel::Warn));
        assert!(config.should_log(LogLevel::Error));
        assert!(config.should_log(LogLevel::Fatal));
    }

    #[test]
    fn test_set_renderer_for_all() {
        let mut config = LoggerConfig::new();
        let plain: Arc<dyn Renderer> = Arc::new(PlainRenderer);
        config.set_renderer_for_all(Arc::clone(&plain));
        for (_, renderer) in config.renderers.iter() {
            assert!(Arc::ptr_eq(renderer, &plain));
        }
    }
}
