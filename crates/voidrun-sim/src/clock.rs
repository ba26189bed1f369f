//! Time source for survival statistics.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Reports whole seconds elapsed since the run started.
pub trait Clock: Send {
    fn elapsed_secs(&self) -> u64;
}

/// Wall-clock time measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    started: Instant,
}

impl WallClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Clock for WallClock {
    fn elapsed_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}

/// Externally driven clock. Clones share the same reading, so a driver (or
/// a test) can keep a handle after giving one to the engine.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    secs: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, secs: u64) {
        self.secs.store(secs, Ordering::Relaxed);
    }

    pub fn advance(&self, secs: u64) {
        self.secs.fetch_add(secs, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn elapsed_secs(&self) -> u64 {
        self.secs.load(Ordering::Relaxed)
    }
}
