//! The process-wide default logger and its free functions
//!
//! The default logger is created on first use with [`LoggerConfig::new`]
//! and lives for the rest of the process. Its configuration is read live by
//! every call; changes made through the setters here apply to the next
//! call. [`init`] replaces the whole configuration and [`reset`] restores
//! the built-in one.
//!
//! Every call through this module takes a fresh trace id from the global
//! sequence, whether or not the message passes the threshold. The id shown
//! on a line therefore counts all calls made before it, visible or not.
//!
//! ```
//! use rust_leveled_logger::{facade, LogLevel};
//!
//! facade::set_level(LogLevel::Debug);
//! facade::debug("cache warmed");
//! rust_leveled_logger::info!("{} workers started", 4);
//! ```

use crate::core::{
    caller::{CallSite, CallerResolver},
    dispatch::{terminate, Dispatcher, Emit},
    DateFormat, Destination, LogLevel, Logger, LoggerConfig, LoggerMetrics, LoggerSettings,
    Renderer, Result, TraceSequencer,
};
use std::fmt;
use std::panic::Location;
use std::sync::{Arc, OnceLock};

struct DefaultLogger {
    dispatcher: Dispatcher,
    sequencer: &'static TraceSequencer,
}

impl DefaultLogger {
    fn emit(&self, level: LogLevel, site: CallSite, args: fmt::Arguments<'_>) -> Emit {
        let trace_id = self.sequencer.next();
        let emit = self.dispatcher.dispatch(level, site, trace_id, args);
        if level == LogLevel::Fatal {
            terminate();
        }
        emit
    }
}

fn default_logger() -> &'static DefaultLogger {
    static DEFAULT: OnceLock<DefaultLogger> = OnceLock::new();
    DEFAULT.get_or_init(|| DefaultLogger {
        dispatcher: Dispatcher::new(LoggerConfig::new(), CallerResolver::global()),
        sequencer: TraceSequencer::global(),
    })
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Replace the default logger's configuration.
pub fn init(config: LoggerConfig) {
    *default_logger().dispatcher.config().write() = config;
}

/// Apply `LOG_LEVEL` / `LOG_DATE_FORMAT` from the environment.
pub fn init_from_env() -> Result<()> {
    let settings = LoggerSettings::from_env()?;
    apply_settings(&settings);
    Ok(())
}

pub fn apply_settings(settings: &LoggerSettings) {
    settings.apply(&mut default_logger().dispatcher.config().write());
}

/// Restore the built-in configuration. Counters and column width are kept.
pub fn reset() {
    init(LoggerConfig::new());
}

/// A copy of the current configuration
pub fn config() -> LoggerConfig {
    default_logger().dispatcher.config().read().clone()
}

pub fn level() -> LogLevel {
    default_logger().dispatcher.config().read().level
}

pub fn set_level(level: LogLevel) {
    default_logger().dispatcher.config().write().level = level;
}

pub fn set_date_format(format: impl Into<DateFormat>) {
    default_logger().dispatcher.config().write().date_format = format.into();
}

pub fn set_prefix(level: LogLevel, prefix: impl Into<String>) {
    default_logger().dispatcher.config().write().prefixes[level] = prefix.into();
}

pub fn set_renderer<R: Renderer + 'static>(level: LogLevel, renderer: R) {
    default_logger().dispatcher.config().write().renderers[level] = Arc::new(renderer);
}

pub fn set_destination(level: LogLevel, destination: Destination) {
    default_logger().dispatcher.config().write().destinations[level] = destination;
}

pub fn set_align_filtered_callers(enabled: bool) {
    default_logger().dispatcher.config().write().align_filtered_callers = enabled;
}

pub fn should_log(level: LogLevel) -> bool {
    default_logger().dispatcher.should_log(level)
}

pub fn should_log_debug() -> bool {
    should_log(LogLevel::Debug)
}

pub fn should_log_trace() -> bool {
    should_log(LogLevel::Trace)
}

/// The trace id the next default-logger call will carry
pub fn trace_counter() -> u64 {
    TraceSequencer::global().current()
}

/// The process-wide caller column width
pub fn caller_column_width() -> usize {
    default_logger().dispatcher.resolver().column_width()
}

pub fn metrics() -> &'static LoggerMetrics {
    default_logger().dispatcher.metrics()
}

// ---------------------------------------------------------------------------
// Logger construction
// ---------------------------------------------------------------------------

/// A [`Logger`] snapshotting the current configuration, with the next
/// trace id.
pub fn new_logger() -> Logger {
    Logger::new()
}

pub fn new_logger_with_level(level: LogLevel) -> Logger {
    Logger::with_level(level)
}

pub fn new_logger_with_renderer<R: Renderer + 'static>(level: LogLevel, renderer: R) -> Logger {
    Logger::with_renderer(level, renderer)
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Log at any level. A Fatal level terminates the process.
#[track_caller]
pub fn log(level: LogLevel, message: impl fmt::Display) -> Emit {
    default_logger().emit(level, CallSite::here(), format_args!("{}", message))
}

#[track_caller]
pub fn log_fmt(level: LogLevel, args: fmt::Arguments<'_>) -> Emit {
    default_logger().emit(level, CallSite::here(), args)
}

pub fn log_at(level: LogLevel, location: &'static Location<'static>, args: fmt::Arguments<'_>) -> Emit {
    default_logger().emit(level, CallSite::Known(location), args)
}

#[track_caller]
pub fn plain(message: impl fmt::Display) {
    default_logger().emit(LogLevel::Plain, CallSite::here(), format_args!("{}", message));
}

#[track_caller]
pub fn plain_fmt(args: fmt::Arguments<'_>) {
    default_logger().emit(LogLevel::Plain, CallSite::here(), args);
}

pub fn plain_at(location: &'static Location<'static>, args: fmt::Arguments<'_>) {
    default_logger().emit(LogLevel::Plain, CallSite::Known(location), args);
}

#[track_caller]
pub fn trace(message: impl fmt::Display) {
    default_logger().emit(LogLevel::Trace, CallSite::here(), format_args!("{}", message));
}

#[track_caller]
pub fn trace_fmt(args: fmt::Arguments<'_>) {
    default_logger().emit(LogLevel::Trace, CallSite::here(), args);
}

pub fn trace_at(location: &'static Location<'static>, args: fmt::Arguments<'_>) {
    default_logger().emit(LogLevel::Trace, CallSite::Known(location), args);
}

#[track_caller]
pub fn debug(message: impl fmt::Display) {
    default_logger().emit(LogLevel::Debug, CallSite::here(), format_args!("{}", message));
}

#[track_caller]
pub fn debug_fmt(args: fmt::Arguments<'_>) {
    default_logger().emit(LogLevel::Debug, CallSite::here(), args);
}

pub fn debug_at(location: &'static Location<'static>, args: fmt::Arguments<'_>) {
    default_logger().emit(LogLevel::Debug, CallSite::Known(location), args);
}

#[track_caller]
pub fn info(message: impl fmt::Display) {
    default_logger().emit(LogLevel::Info, CallSite::here(), format_args!("{}", message));
}

#[track_caller]
pub fn info_fmt(args: fmt::Arguments<'_>) {
    default_logger().emit(LogLevel::Info, CallSite::here(), args);
}

pub fn info_at(location: &'static Location<'static>, args: fmt::Arguments<'_>) {
    default_logger().emit(LogLevel::Info, CallSite::Known(location), args);
}

#[track_caller]
pub fn warn(message: impl fmt::Display) {
    default_logger().emit(LogLevel::Warn, CallSite::here(), format_args!("{}", message));
}

#[track_caller]
pub fn warn_fmt(args: fmt::Arguments<'_>) {
    default_logger().emit(LogLevel::Warn, CallSite::here(), args);
}

pub fn warn_at(location: &'static Location<'static>, args: fmt::Arguments<'_>) {
    default_logger().emit(LogLevel::Warn, CallSite::Known(location), args);
}

#[track_caller]
pub fn error(message: impl fmt::Display) {
    default_logger().emit(LogLevel::Error, CallSite::here(), format_args!("{}", message));
}

#[track_caller]
pub fn error_fmt(args: fmt::Arguments<'_>) {
    default_logger().emit(LogLevel::Error, CallSite::here(), args);
}

pub fn error_at(location: &'static Location<'static>, args: fmt::Arguments<'_>) {
    default_logger().emit(LogLevel::Error, CallSite::Known(location), args);
}

/// Write the message, then exit the process with status 1.
#[track_caller]
pub fn fatal(message: impl fmt::Display) -> ! {
    fatal_at(Location::caller(), format_args!("{}", message))
}

#[track_caller]
pub fn fatal_fmt(args: fmt::Arguments<'_>) -> ! {
    fatal_at(Location::caller(), args)
}

pub fn fatal_at(location: &'static Location<'static>, args: fmt::Arguments<'_>) -> ! {
    let logger = default_logger();
    let trace_id = logger.sequencer.next();
    logger
        .dispatcher
        .dispatch(LogLevel::Fatal, CallSite::Known(location), trace_id, args);
    terminate()
}

/// Log an error at Error level using its `Debug` form, which carries the
/// backtrace for error types that capture one.
///
/// Plain std errors print their derived debug text, not their `Display`
/// message; see [`Logger::log_stack`].
#[track_caller]
pub fn log_stack<E: fmt::Debug + ?Sized>(err: &E) {
    log_stack_at(Location::caller(), err);
}

pub fn log_stack_at<E: fmt::Debug + ?Sized>(location: &'static Location<'static>, err: &E) {
    default_logger().emit(LogLevel::Error, CallSite::Known(location), format_args!("{:?}", err));
}

/// Unwrap `result`, or log its error with [`log_stack`] and exit with
/// status 1.
///
/// ```no_run
/// use rust_leveled_logger::facade;
///
/// let config = facade::fatal_check(std::fs::read_to_string("app.toml"));
/// ```
#[track_caller]
pub fn fatal_check<T, E: fmt::Debug>(result: std::result::Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            log_stack_at(Location::caller(), &err);
            terminate()
        }
    }
}

/// Like [`fatal_check`], additionally writing a Fatal line with `args`.
#[track_caller]
pub fn fatal_checkf<T, E: fmt::Debug>(result: std::result::Result<T, E>, args: fmt::Arguments<'_>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            let location = Location::caller();
            log_stack_at(location, &err);
            fatal_at(location, args)
        }
    }
}
