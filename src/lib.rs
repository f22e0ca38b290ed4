//! # Rust Leveled Logger
//!
//! A synchronous leveled logging facility. Every line carries a timestamp,
//! a level prefix, the caller's `file:line` and a trace id, and is written
//! through a per-level render function to a per-level destination before
//! the logging call returns.
//!
//! ## Features
//!
//! - **Default logger**: free functions and macros backed by one
//!   process-wide configuration (see [`facade`])
//! - **Logger instances**: independently configured, each with a fixed
//!   trace id for correlating one sequence of lines
//! - **Pluggable rendering**: replace any level's render function or
//!   destination at runtime
//! - **Aligned callers**: the caller column grows to the widest caller seen
//! - **Fatal**: Fatal calls and failed fatal checks exit with status 1

pub mod core;
pub mod facade;
pub mod macros;
pub mod renderers;

pub mod prelude {
    pub use crate::core::{
        render_fn, CallSite, CallerResolver, DateFormat, Destination, Emit, LevelTable, LogLevel,
        Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, LoggerSettings,
        RenderRecord, Renderer, Result, TraceSequencer,
    };
    pub use crate::facade;
    #[cfg(feature = "console")]
    pub use crate::renderers::ColoredRenderer;
    pub use crate::renderers::{DefaultRenderer, PlainRenderer};
}

pub use crate::core::{
    render_fn, CallSite, CallerResolver, DateFormat, Destination, Emit, LevelTable, LogLevel,
    Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, LoggerSettings, RenderRecord,
    Renderer, Result, TraceSequencer, DEFAULT_DATE_FORMAT, FATAL_EXIT_CODE, UNKNOWN_CALLER,
};
#[cfg(feature = "console")]
pub use renderers::ColoredRenderer;
pub use renderers::{DefaultRenderer, PlainRenderer};
