//! Fixed per-level storage indexed by [`LogLevel`]

use super::log_level::LogLevel;
use std::ops::{Index, IndexMut};

/// One slot per log level.
///
/// Every level always has a value, so lookups cannot miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTable<T> {
    slots: [T; LogLevel::COUNT],
}

impl<T> LevelTable<T> {
    /// Build a table by computing each slot from its level.
    pub fn from_fn(f: impl FnMut(LogLevel) -> T) -> Self {
        Self {
            slots: LogLevel::ALL.map(f),
        }
    }

    /// Replace every slot with a clone of `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.slots.fill(value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (LogLevel, &T)> {
        LogLevel::ALL.into_iter().zip(self.slots.iter())
    }
}

impl<T> Index<LogLevel> for LevelTable<T> {
    type Output = T;

    #[inline]
    fn index(&self, level: LogLevel) -> &T {
        &self.slots[level.index()]
    }
}

impl<T> IndexMut<LogLevel> for LevelTable<T> {
    #[inline]
    fn index_mut(&mut self, level: LogLevel) -> &mut T {
        &mut self.slots[level.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_and_index() {
        let mut table = LevelTable::from_fn(|level| level.to_str().len());
        assert_eq!(table[LogLevel::Info], 4);
        assert_eq!(table[LogLevel::Error], 5);

        table[LogLevel::Info] = 42;
        assert_eq!(table[LogLevel::Info], 42);
        assert_eq!(table[LogLevel::Warn], 4);
    }

    #[test]
    fn test_fill_and_iter() {
        let mut table = LevelTable::from_fn(|_| 0u8);
        table.fill(7);
        let levels: Vec<LogLevel> = table.iter().map(|(level, _)| level).collect();
        assert_eq!(levels, LogLevel::ALL.to_vec());
        assert!(table.iter().all(|(_, v)| *v == 7));
    }
}
