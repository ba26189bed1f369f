//! Level and spawn-rate progression.

use log::info;

use voidrun_core::constants::{SCORE_THRESHOLD, SPAWN_RATE_INCREASE, START_LEVEL, START_SPAWN_RATE};
use voidrun_core::events::GameEvent;
use voidrun_core::ship::Ship;

/// Current difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progression {
    pub level: u32,
    /// Percentage chance (0-100) of an asteroid roll succeeding.
    pub spawn_rate: u32,
}

impl Default for Progression {
    fn default() -> Self {
        Self::with_spawn_rate(START_SPAWN_RATE)
    }
}

impl Progression {
    pub fn with_spawn_rate(spawn_rate: u32) -> Self {
        Self {
            level: START_LEVEL,
            spawn_rate,
        }
    }

    /// Score needed to leave the current level.
    pub fn next_threshold(&self) -> u64 {
        self.level as u64 * SCORE_THRESHOLD
    }
}

/// Advance one level if the ship's score has reached the threshold.
/// At most one level is gained per call.
pub fn level_up(progression: &mut Progression, ship: &Ship) -> Option<GameEvent> {
    if ship.score() < progression.next_threshold() {
        return None;
    }
    progression.level += 1;
    progression.spawn_rate += SPAWN_RATE_INCREASE;
    info!(
        "Level up: level {} (spawn rate {}%)",
        progression.level, progression.spawn_rate
    );
    Some(GameEvent::LevelUp {
        level: progression.level,
        spawn_rate: progression.spawn_rate,
    })
}
