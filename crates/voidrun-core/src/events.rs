//! Events emitted by the simulation for the log sink.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::{AchievementView, EntityView};
use crate::types::GridPos;

/// A gameplay occurrence worth telling the player about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Score threshold reached.
    LevelUp { level: u32, spawn_rate: u32 },
    /// Bullet spawned at the ship's cell.
    BulletFired,
    /// Ship picked up a power-up.
    PowerUpCollected { power_up: EntityView },
    /// Ship collided with an asteroid or enemy.
    ShipHit { by: EntityView, damage: u32 },
    /// Ship moved to a new cell.
    ShipMoved { pos: GridPos },
    /// A move was rejected at the grid edge.
    MoveRejected { message: String },
    /// A token that maps to no command.
    InvalidInput { message: String },
    Paused,
    Unpaused,
    /// Progress reached mastery for the first time.
    AchievementMastered { name: String },
    /// Periodic progress summary.
    AchievementProgress { achievements: Vec<AchievementView> },
    GameOver,
}

impl GameEvent {
    /// Events only reported when the simulation runs verbose.
    pub fn is_verbose_only(&self) -> bool {
        matches!(
            self,
            GameEvent::LevelUp { .. }
                | GameEvent::BulletFired
                | GameEvent::PowerUpCollected { .. }
                | GameEvent::ShipHit { .. }
                | GameEvent::ShipMoved { .. }
                | GameEvent::AchievementProgress { .. }
        )
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::LevelUp { level, spawn_rate } => write!(
                f,
                "Level Up! Welcome to Level {level}. Spawn rate increased to {spawn_rate}%."
            ),
            GameEvent::BulletFired => f.write_str("Bullet fired!"),
            GameEvent::PowerUpCollected { power_up } => {
                write!(f, "Power-up collected: {power_up}")
            }
            GameEvent::ShipHit { by, damage } => {
                write!(f, "Hit by {by}! Health reduced by {damage}.")
            }
            GameEvent::ShipMoved { pos } => write!(f, "Ship moved to {pos}"),
            GameEvent::MoveRejected { message } | GameEvent::InvalidInput { message } => {
                f.write_str(message)
            }
            GameEvent::Paused => f.write_str("Game paused."),
            GameEvent::Unpaused => f.write_str("Game unpaused."),
            GameEvent::AchievementMastered { name } => write!(f, "Achievement mastered: {name}"),
            GameEvent::AchievementProgress { achievements } => {
                f.write_str("Achievement progress:")?;
                for a in achievements {
                    write!(f, "\n  {a}")?;
                }
                Ok(())
            }
            GameEvent::GameOver => f.write_str("Game over."),
        }
    }
}
