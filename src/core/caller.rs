//! Call-site capture and caller-column alignment
//!
//! Public entry points are `#[track_caller]`, so the location is captured
//! once at the outermost call and handed inward as a value. Wrapper layers
//! inside this crate never shift the reported location.

use std::fmt;
use std::panic::Location;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

/// Rendered when no source location is available.
pub const UNKNOWN_CALLER: &str = "???:-1";

/// Where a log call originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallSite {
    Known(&'static Location<'static>),
    Unknown,
}

impl CallSite {
    /// The location of whoever called the enclosing `#[track_caller]` function.
    #[track_caller]
    #[inline]
    pub fn here() -> Self {
        CallSite::Known(Location::caller())
    }

    pub fn from_location(location: Option<&'static Location<'static>>) -> Self {
        location.map_or(CallSite::Unknown, CallSite::Known)
    }

    /// `basename(file):line`, or [`UNKNOWN_CALLER`].
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        CallSite::Known(location)
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallSite::Known(location) => {
                let file = location.file();
                let base = Path::new(file)
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or(file);
                write!(f, "{}:{}", base, location.line())
            }
            CallSite::Unknown => f.write_str(UNKNOWN_CALLER),
        }
    }
}

/// Resolves call sites to caller strings and tracks the caller column width.
///
/// The width only ever grows: each resolved caller longer than the current
/// width becomes the new width, and every later line pads to it.
#[derive(Debug, Default)]
pub struct CallerResolver {
    column_width: AtomicUsize,
}

impl CallerResolver {
    pub const fn new() -> Self {
        Self {
            column_width: AtomicUsize::new(0),
        }
    }

    /// The resolver shared by the default logger and every `Logger` that
    /// was not given its own.
    pub fn global() -> Arc<CallerResolver> {
        static GLOBAL: OnceLock<Arc<CallerResolver>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(CallerResolver::new())))
    }

    /// Render the call site and widen the column to fit it.
    ///
    /// Returns the caller string together with the width to pad it to.
    pub fn resolve(&self, site: CallSite) -> (String, usize) {
        let caller = site.render();
        let width = self.widen(caller.len());
        (caller, width)
    }

    /// Raise the width to at least `len` and return the resulting width.
    #[inline]
    pub fn widen(&self, len: usize) -> usize {
        let previous = self.column_width.fetch_max(len, Ordering::AcqRel);
        previous.max(len)
    }

    #[inline]
    pub fn column_width(&self) -> usize {
        self.column_width.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_site_uses_basename_and_line() {
        let line = line!() + 1;
        let site = CallSite::here();
        assert_eq!(site.render(), format!("caller.rs:{}", line));
    }

    #[test]
    fn test_unknown_call_site() {
        assert_eq!(CallSite::Unknown.render(), "???:-1");
        assert_eq!(CallSite::from_location(None), CallSite::Unknown);
    }

    #[track_caller]
    fn attributed_to_caller() -> CallSite {
        CallSite::here()
    }

    #[test]
    fn test_track_caller_skips_helper_frames() {
        let line = line!() + 1;
        let site = attributed_to_caller();
        assert_eq!(site.render(), format!("caller.rs:{}", line));
    }

    #[test]
    fn test_width_only_grows() {
        let resolver = CallerResolver::new();
        assert_eq!(resolver.widen(10), 10);
        assert_eq!(resolver.widen(4), 10);
        assert_eq!(resolver.widen(12), 12);
        assert_eq!(resolver.column_width(), 12);
    }

    #[test]
    fn test_resolve_updates_width() {
        let resolver = CallerResolver::new();
        let (caller, width) = resolver.resolve(CallSite::Unknown);
        assert_eq!(caller, UNKNOWN_CALLER);
        assert_eq!(width, UNKNOWN_CALLER.len());
        assert_eq!(resolver.column_width(), UNKNOWN_CALLER.len());
    }
}
