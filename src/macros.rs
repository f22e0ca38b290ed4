//! Format-string logging macros.
//!
//! Each macro interpolates with `format_args!` and reports the location of
//! the macro invocation. With a format literal first they log through the
//! default logger; with a `Logger` expression first they log through that
//! instance.
//!
//! # Examples
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//! use rust_leveled_logger::{info, warn};
//!
//! // Default logger
//! info!("Server started");
//! info!("Server listening on port {}", 8080);
//!
//! // A logger instance
//! let logger = Logger::new();
//! warn!(logger, "Retry attempt {} of {}", 3, 5);
//! ```

/// Log at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_leveled_logger::log;
/// log!(LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Warn, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $fmt:literal $($arg:tt)*) => {
        $crate::facade::log_fmt($level, ::std::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_fmt($level, ::std::format_args!($($arg)+))
    };
}

/// Log a plain, unprefixed line.
///
/// ```
/// use rust_leveled_logger::plain;
/// plain!("{} files copied", 12);
/// ```
#[macro_export]
macro_rules! plain {
    ($fmt:literal $($arg:tt)*) => {
        $crate::facade::plain_fmt(::std::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.plain_fmt(::std::format_args!($($arg)+))
    };
}

/// Log a trace-level message.
///
/// ```
/// use rust_leveled_logger::trace;
/// trace!("Entering function: calculate()");
/// ```
#[macro_export]
macro_rules! trace {
    ($fmt:literal $($arg:tt)*) => {
        $crate::facade::trace_fmt(::std::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.trace_fmt(::std::format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// ```
/// use rust_leveled_logger::debug;
/// debug!("Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:literal $($arg:tt)*) => {
        $crate::facade::debug_fmt(::std::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug_fmt(::std::format_args!($($arg)+))
    };
}

/// Log an info-level message.
///
/// ```
/// use rust_leveled_logger::info;
/// info!("Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($fmt:literal $($arg:tt)*) => {
        $crate::facade::info_fmt(::std::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.info_fmt(::std::format_args!($($arg)+))
    };
}

/// Log a warning-level message.
///
/// ```
/// use rust_leveled_logger::warn;
/// warn!("Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($fmt:literal $($arg:tt)*) => {
        $crate::facade::warn_fmt(::std::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn_fmt(::std::format_args!($($arg)+))
    };
}

/// Log an error-level message.
///
/// ```
/// use rust_leveled_logger::error;
/// error!("Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($fmt:literal $($arg:tt)*) => {
        $crate::facade::error_fmt(::std::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.error_fmt(::std::format_args!($($arg)+))
    };
}

/// Log a fatal-level message and exit with status 1.
///
/// ```no_run
/// use rust_leveled_logger::fatal;
/// fatal!("Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($fmt:literal $($arg:tt)*) => {
        $crate::facade::fatal_fmt(::std::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal_fmt(::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{CallerResolver, Destination, LogLevel, Logger, LoggerConfig};
    use parking_lot::Mutex;
    use std::io::{self, Write};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_logger(capture: &Capture) -> Logger {
        Logger::builder()
            .config(LoggerConfig::new())
            .level(LogLevel::Plain)
            .destination_for_all(Destination::from_writer(capture.clone()))
            .caller_resolver(Arc::new(CallerResolver::new()))
            .build()
    }

    fn text(capture: &Capture) -> String {
        String::from_utf8(capture.0.lock().clone()).unwrap()
    }

    #[test]
    fn test_instance_macros_interpolate() {
        let capture = Capture::default();
        let logger = capture_logger(&capture);

        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "val={}", 42);
        plain!(logger, "raw {}", "line");

        let out = text(&capture);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].ends_with("| Items: 100"));
        assert!(lines[1].ends_with("| Retry 1 of 3"));
        assert!(lines[2].ends_with("| val=42"));
        assert_eq!(lines[3], "raw line");
    }

    #[test]
    fn test_macro_reports_invocation_line() {
        let capture = Capture::default();
        let logger = capture_logger(&capture);

        let line = line!() + 1;
        debug!(logger, "where");

        assert!(text(&capture).contains(&format!("macros.rs:{}", line)));
    }

    #[test]
    fn test_log_macro_with_level() {
        let capture = Capture::default();
        let logger = capture_logger(&capture);

        log!(logger, LogLevel::Trace, "Formatted: {}", 42);

        let out = text(&capture);
        assert!(out.contains("[TRACE]"));
        assert!(out.ends_with("| Formatted: 42\n"));
    }
}
