//! Core logger types and traits

pub mod caller;
pub mod config;
pub mod destination;
pub mod dispatch;
pub mod error;
pub mod level_table;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod render;
pub mod sequence;
pub mod settings;
pub mod timestamp;

pub use caller::{CallSite, CallerResolver, UNKNOWN_CALLER};
pub use config::LoggerConfig;
pub use destination::Destination;
pub use dispatch::{Emit, FATAL_EXIT_CODE};
pub use error::{LoggerError, Result};
pub use level_table::LevelTable;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use render::{render_fn, RenderRecord, Renderer};
pub use sequence::TraceSequencer;
pub use settings::LoggerSettings;
pub use timestamp::{DateFormat, DEFAULT_DATE_FORMAT};
