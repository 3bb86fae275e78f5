//! Bounded difficulty history with undo support.
use std::collections::VecDeque;
use thiserror::Error;

use crate::constants::HISTORY_CAPACITY;
use crate::level::DifficultyLevel;

/// Error raised when the history stack is popped while empty.
///
/// Seeding and re-seeding keep the stack non-empty after every public
/// operation, so observing this error means a caller broke that invariant
/// and should treat it as fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("difficulty history is empty")]
    Empty,
}

/// Fixed-capacity deque used stack-like: push and pop at the top, with the
/// bottom (oldest) entry dropped on overflow so undo keeps working against
/// the most recent transitions.
#[derive(Debug, Clone)]
pub struct DifficultyHistory {
    levels: VecDeque<DifficultyLevel>,
}

impl DifficultyHistory {
    /// New history seeded with [`DifficultyLevel::Easy`].
    #[must_use]
    pub fn new() -> Self {
        let mut levels = VecDeque::with_capacity(HISTORY_CAPACITY);
        levels.push_back(DifficultyLevel::default());
        Self { levels }
    }

    /// Push a level on top, evicting the bottom entry when full.
    pub fn push(&mut self, level: DifficultyLevel) {
        if self.levels.len() == HISTORY_CAPACITY {
            self.levels.pop_front();
        }
        self.levels.push_back(level);
    }

    /// Remove and return the top entry.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Empty`] when the stack holds no entries.
    pub fn pop(&mut self) -> Result<DifficultyLevel, HistoryError> {
        self.levels.pop_back().ok_or(HistoryError::Empty)
    }

    /// Active difficulty: the top of the stack.
    #[must_use]
    pub fn current(&self) -> DifficultyLevel {
        self.levels.back().copied().unwrap_or_default()
    }

    /// Discard the current top; the new top becomes the active difficulty.
    /// An exhausted stack re-seeds with a single `Easy` entry.
    pub fn undo(&mut self) -> DifficultyLevel {
        self.levels.pop_back();
        if self.levels.is_empty() {
            self.levels.push_back(DifficultyLevel::default());
        }
        self.current()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl Default for DifficultyHistory {
    fn default() -> Self {
        Self::new()
    }
}
