//! Shared helpers for integration tests

#![allow(dead_code)]

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// In-memory destination that can be inspected after logging.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("log output is utf-8")
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(String::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Split a default-layout line into (prefix, caller, trace id, message).
pub fn fields(line: &str) -> (String, String, String, String) {
    let mut parts = line.splitn(3, " | ");
    let head = parts.next().expect("head");
    let trace = parts.next().expect("trace id");
    let message = parts.next().expect("message");

    // "<date> <time> <prefix> <caller...>"
    let after_date = head.splitn(3, ' ').nth(2).expect("prefix and caller");
    let (prefix, caller) = after_date.split_at(7);
    (
        prefix.to_string(),
        caller.trim().to_string(),
        trace.to_string(),
        message.to_string(),
    )
}
