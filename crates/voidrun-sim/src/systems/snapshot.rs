//! Snapshot system: builds the FrameSnapshot and game-over report.
//!
//! This system is read-only. It never modifies simulation state.

use voidrun_core::enums::GamePhase;
use voidrun_core::events::GameEvent;
use voidrun_core::ship::Ship;
use voidrun_core::state::{EntityView, FrameSnapshot, GameOverReport, StatLine};
use voidrun_core::types::SimTime;

use crate::achievements::AchievementTracker;
use crate::registry::EntityRegistry;
use crate::stats::PlayerStats;

use super::progression::Progression;

/// Build a complete FrameSnapshot from the current state.
pub fn build_snapshot(
    ship: &Ship,
    registry: &EntityRegistry,
    stats: &PlayerStats,
    progression: &Progression,
    achievements: &AchievementTracker,
    time: SimTime,
    phase: GamePhase,
    events: &[GameEvent],
) -> FrameSnapshot {
    FrameSnapshot {
        time,
        phase,
        level: progression.level,
        spawn_rate: progression.spawn_rate,
        entities: build_entities(ship, registry),
        stats: build_stats(ship, stats, progression),
        achievements: achievements.views(),
        log_lines: events.iter().map(ToString::to_string).collect(),
    }
}

/// Render descriptions in registry order, ship last.
pub fn build_entities(ship: &Ship, registry: &EntityRegistry) -> Vec<EntityView> {
    registry
        .iter()
        .map(|e| e.render())
        .chain(std::iter::once(ship.render()))
        .collect()
}

fn build_stats(ship: &Ship, stats: &PlayerStats, progression: &Progression) -> Vec<StatLine> {
    vec![
        StatLine::new("Score", ship.score().to_string()),
        StatLine::new("Health", ship.health().to_string()),
        StatLine::new("Level", progression.level.to_string()),
        StatLine::new(
            "Time Survived",
            format!("{} seconds", stats.elapsed_secs()),
        ),
    ]
}

/// Final statistics for the game-over screen.
pub fn build_game_over_report(
    ship: &Ship,
    stats: &PlayerStats,
    progression: &Progression,
    achievements: &AchievementTracker,
) -> GameOverReport {
    GameOverReport {
        shots_fired: stats.shots_fired(),
        shots_hit: stats.shots_hit(),
        // Every recorded hit destroyed an enemy.
        enemies_destroyed: stats.shots_hit(),
        survival_secs: stats.elapsed_secs(),
        final_score: ship.score(),
        level: progression.level,
        achievements: achievements.views(),
    }
}
