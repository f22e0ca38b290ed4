//! The standard aligned line layout

use crate::core::{RenderRecord, Renderer};
use std::io::{self, Write};

/// `<timestamp> <prefix> <caller padded to width> | #<trace id hex> | <message>`
///
/// ```text
/// 2025-01-08 10:30:45.123 [INFO]  main.rs:12      | #1f | Server started
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRenderer;

impl Renderer for DefaultRenderer {
    fn render(&self, out: &mut dyn Write, record: &RenderRecord<'_>) -> io::Result<()> {
        writeln!(
            out,
            "{} {} {:<width$} | #{:x} | {}",
            record.timestamp,
            record.prefix,
            record.caller,
            record.trace_id,
            record.message,
            width = record.column_width
        )
    }
}
