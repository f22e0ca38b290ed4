//! The dispatch path shared by `Logger` and the default logger

use super::{
    caller::{CallSite, CallerResolver},
    config::LoggerConfig,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    render::RenderRecord,
};
use parking_lot::RwLock;
use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Exit status used by Fatal calls and failed fatal checks
pub const FATAL_EXIT_CODE: i32 = 1;

/// What happened to a single log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    Emitted,
    Filtered,
    /// Rendering or writing returned an error; counted, never surfaced
    Failed,
}

/// Configuration plus the state every call touches.
///
/// The configuration lock is only held while checking the threshold and
/// picking the level's renderer and destination. Rendering and writing
/// happen after it is released.
pub struct Dispatcher {
    config: RwLock<LoggerConfig>,
    resolver: Arc<CallerResolver>,
    metrics: LoggerMetrics,
}

impl Dispatcher {
    pub fn new(config: LoggerConfig, resolver: Arc<CallerResolver>) -> Self {
        Self {
            config: RwLock::new(config),
            resolver,
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn config(&self) -> &RwLock<LoggerConfig> {
        &self.config
    }

    pub fn resolver(&self) -> &CallerResolver {
        &self.resolver
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[inline]
    pub fn should_log(&self, level: LogLevel) -> bool {
        self.config.read().should_log(level)
    }

    /// Filter, render and write one call.
    ///
    /// Fatal calls are written like any other; terminating is left to the
    /// caller so its return type can be `!`.
    pub fn dispatch(
        &self,
        level: LogLevel,
        site: CallSite,
        trace_id: u64,
        args: fmt::Arguments<'_>,
    ) -> Emit {
        let config = self.config.read();

        let early = if config.align_filtered_callers {
            Some(self.resolver.resolve(site))
        } else {
            None
        };

        if !config.should_log(level) {
            self.metrics.record_filtered();
            return Emit::Filtered;
        }

        let date_format = config.date_format.clone();
        let prefix = config.prefixes[level].clone();
        let renderer = Arc::clone(&config.renderers[level]);
        let destination = config.destinations[level].clone();
        drop(config);

        let (caller, column_width) = early.unwrap_or_else(|| self.resolver.resolve(site));
        let timestamp = date_format.now();
        let message = match args.as_str() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(args.to_string()),
        };

        let record = RenderRecord {
            level,
            timestamp: &timestamp,
            prefix: &prefix,
            column_width,
            caller: &caller,
            trace_id,
            message: &message,
        };

        let mut line = Vec::with_capacity(timestamp.len() + column_width + message.len() + 32);
        let written = renderer
            .render(&mut line, &record)
            .and_then(|()| destination.write_line(&line));

        match written {
            Ok(()) => {
                self.metrics.record_emitted();
                Emit::Emitted
            }
            Err(_) => {
                self.metrics.record_write_failure();
                Emit::Failed
            }
        }
    }
}

/// Flush the standard streams and exit with [`FATAL_EXIT_CODE`].
pub fn terminate() -> ! {
    let _ = io::stdout().flush();
    let _ = io::stderr().flush();
    std::process::exit(FATAL_EXIT_CODE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{render_fn, Destination};
    use parking_lot::Mutex;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn dispatcher_with(capture: &Capture) -> Dispatcher {
        let mut config = LoggerConfig::new();
        config.destinations.fill(Destination::from_writer(capture.clone()));
        Dispatcher::new(config, Arc::new(CallerResolver::new()))
    }

    #[test]
    fn test_emitted_line_ends_with_message() {
        let capture = Capture::default();
        let dispatcher = dispatcher_with(&capture);

        let emit = dispatcher.dispatch(LogLevel::Info, CallSite::Unknown, 10, format_args!("y"));

        assert_eq!(emit, Emit::Emitted);
        let text = capture.text();
        assert!(text.ends_with(" | #a | y\n"), "{:?}", text);
        assert!(text.contains("[INFO]  ???:-1"));
        assert_eq!(dispatcher.metrics().emitted_count(), 1);
    }

    #[test]
    fn test_filtered_call_writes_nothing_and_keeps_width() {
        let capture = Capture::default();
        let dispatcher = dispatcher_with(&capture);

        let emit = dispatcher.dispatch(LogLevel::Debug, CallSite::here(), 0, format_args!("x"));

        assert_eq!(emit, Emit::Filtered);
        assert!(capture.text().is_empty());
        assert_eq!(dispatcher.resolver().column_width(), 0);
        assert_eq!(dispatcher.metrics().filtered_count(), 1);
    }

    #[test]
    fn test_align_filtered_callers_widens_on_filtered_call() {
        let capture = Capture::default();
        let dispatcher = dispatcher_with(&capture);
        dispatcher.config().write().align_filtered_callers = true;

        dispatcher.dispatch(LogLevel::Trace, CallSite::Unknown, 0, format_args!("x"));

        assert!(capture.text().is_empty());
        assert_eq!(dispatcher.resolver().column_width(), "???:-1".len());
    }

    #[test]
    fn test_fatal_ignores_threshold() {
        let capture = Capture::default();
        let dispatcher = dispatcher_with(&capture);
        dispatcher.config().write().level = LogLevel::Fatal;

        assert_eq!(
            dispatcher.dispatch(LogLevel::Error, CallSite::Unknown, 0, format_args!("e")),
            Emit::Filtered
        );
        assert_eq!(
            dispatcher.dispatch(LogLevel::Fatal, CallSite::Unknown, 0, format_args!("f")),
            Emit::Emitted
        );
        assert!(capture.text().contains("[FATAL]"));
    }

    #[test]
    fn test_interpolated_message() {
        let capture = Capture::default();
        let dispatcher = dispatcher_with(&capture);
        dispatcher.config().write().level = LogLevel::Error;

        dispatcher.dispatch(LogLevel::Error, CallSite::Unknown, 0, format_args!("val={}", 42));

        assert!(capture.text().ends_with("| val=42\n"));
    }

    #[test]
    fn test_custom_renderer_receives_prefix_and_width() {
        let capture = Capture::default();
        let dispatcher = dispatcher_with(&capture);
        dispatcher.resolver().widen(20);
        dispatcher.config().write().renderers[LogLevel::Info] = Arc::new(render_fn(|out, r| {
            writeln!(out, "{}|{}|{}", r.prefix, r.column_width, r.message)
        }));

        dispatcher.dispatch(LogLevel::Info, CallSite::Unknown, 0, format_args!("literal"));

        assert_eq!(capture.text(), "[INFO] |20|literal\n");
    }

    #[test]
    fn test_write_failure_is_counted_not_raised() {
        let mut config = LoggerConfig::new();
        config.destinations[LogLevel::Info] = Destination::from_writer(Broken);
        let dispatcher = Dispatcher::new(config, Arc::new(CallerResolver::new()));

        let emit = dispatcher.dispatch(LogLevel::Info, CallSite::Unknown, 0, format_args!("lost"));

        assert_eq!(emit, Emit::Failed);
        assert_eq!(dispatcher.metrics().write_failure_count(), 1);
    }
}
