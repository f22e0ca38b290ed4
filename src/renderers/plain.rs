//! Raw message output

use crate::core::{RenderRecord, Renderer};
use std::io::{self, Write};

/// Writes the message followed by a newline and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render(&self, out: &mut dyn Write, record: &RenderRecord<'_>) -> io::Result<()> {
        writeln!(out, "{}", record.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_only_message_is_written() {
        let mut buf = Vec::new();
        PlainRenderer
            .render(
                &mut buf,
                &RenderRecord {
                    level: LogLevel::Plain,
                    timestamp: "2025-01-08",
                    prefix: "",
                    column_width: 30,
                    caller: "main.rs:1",
                    trace_id: 9,
                    message: "raw",
                },
            )
            .unwrap();
        assert_eq!(buf, b"raw\n");
    }
}
