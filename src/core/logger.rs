//! Independently configurable logger instances

use super::{
    caller::{CallSite, CallerResolver},
    config::LoggerConfig,
    destination::Destination,
    dispatch::{terminate, Dispatcher, Emit},
    error::LoggerError,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    render::Renderer,
    sequence::TraceSequencer,
    settings::LoggerSettings,
    timestamp::DateFormat,
};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// A logger with its own threshold, date format, prefixes, renderers and
/// destinations, and one fixed trace id.
///
/// Every line written through the same instance carries the same trace id,
/// so the lines of one logical sequence (a request, a job) can be grouped.
/// The caller column width is shared with the default logger unless the
/// builder supplies a separate [`CallerResolver`].
///
/// Each level has three call shapes: `info(msg)` writes `msg` verbatim,
/// `info_fmt(format_args!(..))` interpolates (see also the `info!` macro),
/// and `info_at(location, ..)` attributes the line to an explicit location.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::prelude::*;
///
/// let logger = Logger::with_level(LogLevel::Debug);
/// logger.debug("connection pool ready");
/// logger.info_fmt(format_args!("listening on port {}", 8080));
/// ```
pub struct Logger {
    dispatcher: Dispatcher,
    trace_id: u64,
}

impl Logger {
    /// Snapshot the default logger's current configuration and take the
    /// next trace id.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Like [`new`](Self::new) with a different threshold.
    #[must_use]
    pub fn with_level(level: LogLevel) -> Self {
        Self::builder().level(level).build()
    }

    /// Like [`with_level`](Self::with_level), rendering every level,
    /// Plain included, with `renderer`.
    #[must_use]
    pub fn with_renderer<R: Renderer + 'static>(level: LogLevel, renderer: R) -> Self {
        Self::builder().level(level).renderer_for_all(renderer).build()
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn trace_id(&self) -> u64 {
        self.trace_id
    }

    /// A copy of the current configuration
    pub fn config(&self) -> LoggerConfig {
        self.dispatcher.config().read().clone()
    }

    pub fn level(&self) -> LogLevel {
        self.dispatcher.config().read().level
    }

    pub fn set_level(&self, level: LogLevel) {
        self.dispatcher.config().write().level = level;
    }

    pub fn set_date_format(&self, format: impl Into<DateFormat>) {
        self.dispatcher.config().write().date_format = format.into();
    }

    pub fn set_prefix(&self, level: LogLevel, prefix: impl Into<String>) {
        self.dispatcher.config().write().prefixes[level] = prefix.into();
    }

    /// Takes effect on the next call at `level`.
    pub fn set_renderer<R: Renderer + 'static>(&self, level: LogLevel, renderer: R) {
        self.dispatcher.config().write().renderers[level] = Arc::new(renderer);
    }

    pub fn set_destination(&self, level: LogLevel, destination: Destination) {
        self.dispatcher.config().write().destinations[level] = destination;
    }

    pub fn set_align_filtered_callers(&self, enabled: bool) {
        self.dispatcher.config().write().align_filtered_callers = enabled;
    }

    pub fn apply_settings(&self, settings: &LoggerSettings) {
        settings.apply(&mut self.dispatcher.config().write());
    }

    pub fn should_log(&self, level: LogLevel) -> bool {
        self.dispatcher.should_log(level)
    }

    pub fn should_log_debug(&self) -> bool {
        self.should_log(LogLevel::Debug)
    }

    pub fn should_log_trace(&self) -> bool {
        self.should_log(LogLevel::Trace)
    }

    /// Current caller column width
    pub fn column_width(&self) -> usize {
        self.dispatcher.resolver().column_width()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        self.dispatcher.metrics()
    }

    /// Flush every configured destination.
    ///
    /// Stops at the first destination that fails and reports it as a
    /// [`LoggerError::WriterError`] naming the level and destination.
    pub fn flush(&self) -> super::error::Result<()> {
        let config = self.config();
        for (level, destination) in config.destinations.iter() {
            destination.flush().map_err(|e| {
                LoggerError::writer(format!("flushing {:?} for {}: {}", destination, level, e))
            })?;
        }
        Ok(())
    }

    fn emit(&self, level: LogLevel, site: CallSite, args: fmt::Arguments<'_>) -> Emit {
        let emit = self.dispatcher.dispatch(level, site, self.trace_id, args);
        if level == LogLevel::Fatal {
            terminate();
        }
        emit
    }

    /// Log at any level. A Fatal level terminates the process.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) -> Emit {
        self.emit(level, CallSite::here(), format_args!("{}", message))
    }

    #[track_caller]
    pub fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) -> Emit {
        self.emit(level, CallSite::here(), args)
    }

    pub fn log_at(
        &self,
        level: LogLevel,
        location: &'static Location<'static>,
        args: fmt::Arguments<'_>,
    ) -> Emit {
        self.emit(level, CallSite::Known(location), args)
    }

    #[track_caller]
    pub fn plain(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Plain, CallSite::here(), format_args!("{}", message));
    }

    #[track_caller]
    pub fn plain_fmt(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Plain, CallSite::here(), args);
    }

    pub fn plain_at(&self, location: &'static Location<'static>, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Plain, CallSite::Known(location), args);
    }

    #[track_caller]
    pub fn trace(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Trace, CallSite::here(), format_args!("{}", message));
    }

    #[track_caller]
    pub fn trace_fmt(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Trace, CallSite::here(), args);
    }

    pub fn trace_at(&self, location: &'static Location<'static>, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Trace, CallSite::Known(location), args);
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Debug, CallSite::here(), format_args!("{}", message));
    }

    #[track_caller]
    pub fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Debug, CallSite::here(), args);
    }

    pub fn debug_at(&self, location: &'static Location<'static>, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Debug, CallSite::Known(location), args);
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Info, CallSite::here(), format_args!("{}", message));
    }

    #[track_caller]
    pub fn info_fmt(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Info, CallSite::here(), args);
    }

    pub fn info_at(&self, location: &'static Location<'static>, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Info, CallSite::Known(location), args);
    }

    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Warn, CallSite::here(), format_args!("{}", message));
    }

    #[track_caller]
    pub fn warn_fmt(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Warn, CallSite::here(), args);
    }

    pub fn warn_at(&self, location: &'static Location<'static>, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Warn, CallSite::Known(location), args);
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Error, CallSite::here(), format_args!("{}", message));
    }

    #[track_caller]
    pub fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Error, CallSite::here(), args);
    }

    pub fn error_at(&self, location: &'static Location<'static>, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Error, CallSite::Known(location), args);
    }

    /// Write the message, then exit the process with status 1.
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.fatal_at(Location::caller(), format_args!("{}", message))
    }

    #[track_caller]
    pub fn fatal_fmt(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatal_at(Location::caller(), args)
    }

    pub fn fatal_at(&self, location: &'static Location<'static>, args: fmt::Arguments<'_>) -> ! {
        self.dispatcher
            .dispatch(LogLevel::Fatal, CallSite::Known(location), self.trace_id, args);
        terminate()
    }

    /// Log an error at Error level using its `Debug` form.
    ///
    /// Error types that capture a backtrace (anyhow, eyre, ...) include it
    /// in their `Debug` output. Plain std errors print their derived debug
    /// text rather than their `Display` message, so a failed
    /// `"x".parse::<u32>()` logs `ParseIntError { kind: InvalidDigit }`.
    /// Log `err.to_string()` with [`error`](Self::error) when the message
    /// text is wanted instead.
    #[track_caller]
    pub fn log_stack<E: fmt::Debug + ?Sized>(&self, err: &E) {
        self.log_stack_at(Location::caller(), err);
    }

    pub fn log_stack_at<E: fmt::Debug + ?Sized>(
        &self,
        location: &'static Location<'static>,
        err: &E,
    ) {
        self.emit(LogLevel::Error, CallSite::Known(location), format_args!("{:?}", err));
    }

    /// Unwrap `result`, or log its error with [`log_stack`](Self::log_stack)
    /// and exit with status 1.
    #[track_caller]
    pub fn fatal_check<T, E: fmt::Debug>(&self, result: Result<T, E>) -> T {
        match result {
            Ok(value) => value,
            Err(err) => {
                self.log_stack_at(Location::caller(), &err);
                terminate()
            }
        }
    }

    /// Like [`fatal_check`](Self::fatal_check), additionally writing a
    /// Fatal line with `args` before exiting.
    #[track_caller]
    pub fn fatal_checkf<T, E: fmt::Debug>(&self, result: Result<T, E>, args: fmt::Arguments<'_>) -> T {
        match result {
            Ok(value) => value,
            Err(err) => {
                let location = Location::caller();
                self.log_stack_at(location, &err);
                self.fatal_at(location, args)
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("trace_id", &self.trace_id)
            .field("config", &*self.dispatcher.config().read())
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Starts from a snapshot of the default logger's configuration.
///
/// # Example
/// ```
/// use rust_leveled_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .level(LogLevel::Debug)
///     .date_format("%H:%M:%S")
///     .prefix(LogLevel::Warn, "[WARNING]")
///     .destination(LogLevel::Warn, Destination::Stderr)
///     .build();
/// assert_eq!(logger.level(), LogLevel::Debug);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    trace_id: Option<u64>,
    resolver: Option<Arc<CallerResolver>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            config: crate::facade::config(),
            trace_id: None,
            resolver: None,
        }
    }

    /// Replace the whole starting configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn settings(mut self, settings: &LoggerSettings) -> Self {
        settings.apply(&mut self.config);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn date_format(mut self, format: impl Into<DateFormat>) -> Self {
        self.config.date_format = format.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, level: LogLevel, prefix: impl Into<String>) -> Self {
        self.config.prefixes[level] = prefix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn renderer<R: Renderer + 'static>(mut self, level: LogLevel, renderer: R) -> Self {
        self.config.renderers[level] = Arc::new(renderer);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn renderer_for_all<R: Renderer + 'static>(mut self, renderer: R) -> Self {
        self.config.set_renderer_for_all(Arc::new(renderer));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn destination(mut self, level: LogLevel, destination: Destination) -> Self {
        self.config.destinations[level] = destination;
        self
    }

    /// Send every level to `destination`
    #[must_use = "builder methods return a new value"]
    pub fn destination_for_all(mut self, destination: Destination) -> Self {
        self.config.destinations.fill(destination);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn align_filtered_callers(mut self, enabled: bool) -> Self {
        self.config.align_filtered_callers = enabled;
        self
    }

    /// Use a fixed trace id instead of taking one from the global sequence
    #[must_use = "builder methods return a new value"]
    pub fn trace_id(mut self, trace_id: u64) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Track the caller column separately from the default logger
    #[must_use = "builder methods return a new value"]
    pub fn caller_resolver(mut self, resolver: Arc<CallerResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let trace_id = self
            .trace_id
            .unwrap_or_else(|| TraceSequencer::global().next());
        let resolver = self.resolver.unwrap_or_else(CallerResolver::global);
        Logger {
            dispatcher: Dispatcher::new(self.config, resolver),
            trace_id,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
