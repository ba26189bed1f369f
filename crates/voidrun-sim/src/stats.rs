//! Player statistics accumulated over a run. Counters only ever grow.

use crate::clock::{Clock, WallClock};

pub struct PlayerStats {
    shots_fired: u32,
    shots_hit: u32,
    clock: Box<dyn Clock>,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::with_clock(Box::new(WallClock::start()))
    }
}

impl std::fmt::Debug for PlayerStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerStats")
            .field("shots_fired", &self.shots_fired)
            .field("shots_hit", &self.shots_hit)
            .field("elapsed_secs", &self.elapsed_secs())
            .finish()
    }
}

impl PlayerStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            shots_fired: 0,
            shots_hit: 0,
            clock,
        }
    }

    pub fn record_shot_fired(&mut self) {
        self.shots_fired = self.shots_fired.saturating_add(1);
    }

    pub fn record_shot_hit(&mut self) {
        self.shots_hit = self.shots_hit.saturating_add(1);
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    pub fn shots_hit(&self) -> u32 {
        self.shots_hit
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.clock.elapsed_secs()
    }

    /// Hits per shot fired; 0.0 before the first shot.
    pub fn accuracy(&self) -> f64 {
        if self.shots_fired == 0 {
            return 0.0;
        }
        self.shots_hit as f64 / self.shots_fired as f64
    }
}
