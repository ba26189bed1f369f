//! External persistence for mastered achievements.
//!
//! The simulation only appends lines; reading back is for drivers that
//! want to show history. Dedup bookkeeping lives in memory in the tracker.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("achievement store I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Append-only line store.
pub trait AchievementStore: Send {
    /// Append one line.
    fn save(&mut self, line: &str) -> Result<(), StoreError>;
    /// All previously saved lines, oldest first.
    fn read(&self) -> Result<Vec<String>, StoreError>;
}

/// Store that keeps lines in memory. Used headless and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    lines: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AchievementStore for MemoryStore {
    fn save(&mut self, line: &str) -> Result<(), StoreError> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn read(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.lines.clone())
    }
}
