//! Achievement store backed by a plain text file, one line per entry.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use voidrun_sim::store::{AchievementStore, StoreError};

use crate::config::DEFAULT_ACHIEVEMENT_FILE;

#[derive(Debug, Clone)]
pub struct FileStore {
    location: PathBuf,
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_ACHIEVEMENT_FILE)
    }
}

impl FileStore {
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn set_location(&mut self, location: impl Into<PathBuf>) {
        self.location = location.into();
    }

    pub fn location(&self) -> &Path {
        &self.location
    }
}

impl AchievementStore for FileStore {
    fn save(&mut self, line: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.location.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.location)?;
        writeln!(file, "{line}")?;
        Ok(())
    }

    /// A file that does not exist yet has no entries.
    fn read(&self) -> Result<Vec<String>, StoreError> {
        match fs::read_to_string(&self.location) {
            Ok(contents) => Ok(contents.lines().map(str::to_string).collect()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }
}
