//! Default layout with a colorized level prefix

use crate::core::{RenderRecord, Renderer};
use colored::Colorize;
use std::io::{self, Write};

/// Same columns as [`DefaultRenderer`](super::DefaultRenderer), with the
/// prefix colored by level and the caller dimmed.
///
/// Coloring follows the `colored` crate's global switches (`NO_COLOR`,
/// `CLICOLOR_FORCE`, `colored::control::set_override`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ColoredRenderer;

impl Renderer for ColoredRenderer {
    fn render(&self, out: &mut dyn Write, record: &RenderRecord<'_>) -> io::Result<()> {
        // Pad before coloring; escape codes would count towards the width.
        let caller = format!("{:<width$}", record.caller, width = record.column_width);
        writeln!(
            out,
            "{} {} {} | #{:x} | {}",
            record.timestamp,
            record.prefix.color(record.level.color_code()),
            caller.dimmed(),
            record.trace_id,
            record.message
        )
    }
}
