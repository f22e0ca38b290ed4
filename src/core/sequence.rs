//! Trace id sequencing

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonically increasing source of trace ids.
///
/// The process-wide instance counts every call made through the default
/// logger, whether or not the message passed the level filter, plus one
/// per constructed `Logger`.
#[derive(Debug, Default)]
pub struct TraceSequencer {
    next: AtomicU64,
}

static GLOBAL: TraceSequencer = TraceSequencer::new();

impl TraceSequencer {
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    pub fn global() -> &'static TraceSequencer {
        &GLOBAL
    }

    /// Take the current id and advance the counter by one.
    #[inline]
    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Peek at the id the next call will receive.
    #[inline]
    pub fn current(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_next_returns_previous_value() {
        let seq = TraceSequencer::new();
        assert_eq!(seq.current(), 0);
        assert_eq!(seq.next(), 0);
        assert_eq!(seq.next(), 1);
        assert_eq!(seq.current(), 2);
    }

    #[test]
    fn test_concurrent_ids_are_unique() {
        let seq = Arc::new(TraceSequencer::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let seq = Arc::clone(&seq);
                thread::spawn(move || (0..250).map(|_| seq.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate trace id {}", id);
            }
        }
        assert_eq!(seen.len(), 2000);
        assert_eq!(seq.current(), 2000);
    }
}
