//! Built-in render functions

#[cfg(feature = "console")]
pub mod colored;
pub mod default;
pub mod plain;

#[cfg(feature = "console")]
pub use colored::ColoredRenderer;
pub use default::DefaultRenderer;
pub use plain::PlainRenderer;

pub use crate::core::{RenderRecord, Renderer};
