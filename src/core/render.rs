//! Render functions: turning one log call into bytes

use super::log_level::LogLevel;
use std::io::{self, Write};

/// Everything a render function may print for one log call.
#[derive(Debug, Clone, Copy)]
pub struct RenderRecord<'a> {
    pub level: LogLevel,
    /// Already formatted with the logger's date format
    pub timestamp: &'a str,
    /// The configured prefix for `level`, e.g. `[INFO] `
    pub prefix: &'a str,
    /// Current caller column width; pad `caller` to this
    pub column_width: usize,
    /// `file:line` of the call site
    pub caller: &'a str,
    pub trace_id: u64,
    /// The final message after interpolation
    pub message: &'a str,
}

/// Per-level formatting routine.
///
/// Implementations write exactly one logical entry to `out`. Any function
/// or closure with the matching signature is a `Renderer`; wrap closures in
/// [`render_fn`] so their argument types are inferred.
pub trait Renderer: Send + Sync {
    fn render(&self, out: &mut dyn Write, record: &RenderRecord<'_>) -> io::Result<()>;
}

impl<F> Renderer for F
where
    F: Fn(&mut dyn Write, &RenderRecord<'_>) -> io::Result<()> + Send + Sync,
{
    fn render(&self, out: &mut dyn Write, record: &RenderRecord<'_>) -> io::Result<()> {
        self(out, record)
    }
}

/// Identity helper that pins a closure to the [`Renderer`] signature.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::prelude::*;
/// use std::io::Write;
///
/// let logger = Logger::new();
/// logger.set_renderer(
///     LogLevel::Info,
///     render_fn(|out, record| writeln!(out, ">> {}", record.message)),
/// );
/// ```
pub fn render_fn<F>(f: F) -> F
where
    F: Fn(&mut dyn Write, &RenderRecord<'_>) -> io::Result<()> + Send + Sync + 'static,
{
    f
}
