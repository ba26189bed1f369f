//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{EXPERT_THRESHOLD, MASTERY_THRESHOLD};

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks and commands are processed.
    #[default]
    Running,
    /// Only the pause toggle is honoured; ticks are no-ops.
    Paused,
    /// Ship destroyed. Terminal.
    GameOver,
}

/// Power-up flavour. Each applies a different effect to the ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Grants bonus score.
    Shield,
    /// Restores health.
    Health,
}

/// Kind tag for anything drawn on the grid, the ship included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Ship,
    Bullet,
    Asteroid,
    Enemy,
    ShieldPowerUp,
    HealthPowerUp,
}

/// Achievement tier derived from progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    /// Progress below 0.5.
    #[default]
    Novice,
    /// Progress in [0.5, 0.999).
    Expert,
    /// Progress at or above 0.999.
    Master,
}

impl PowerUpKind {
    pub fn entity_kind(self) -> EntityKind {
        match self {
            PowerUpKind::Shield => EntityKind::ShieldPowerUp,
            PowerUpKind::Health => EntityKind::HealthPowerUp,
        }
    }
}

impl EntityKind {
    /// Display name, as used in render descriptions and log lines.
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Ship => "Ship",
            EntityKind::Bullet => "Bullet",
            EntityKind::Asteroid => "Asteroid",
            EntityKind::Enemy => "Enemy",
            EntityKind::ShieldPowerUp => "ShieldPowerUp",
            EntityKind::HealthPowerUp => "HealthPowerUp",
        }
    }

    /// Single-character glyph for text renderers.
    pub fn glyph(self) -> char {
        match self {
            EntityKind::Ship => 'A',
            EntityKind::Bullet => '|',
            EntityKind::Asteroid => 'O',
            EntityKind::Enemy => 'V',
            EntityKind::ShieldPowerUp => 'S',
            EntityKind::HealthPowerUp => '+',
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Tier {
    pub fn from_progress(progress: f64) -> Self {
        if progress < EXPERT_THRESHOLD {
            Tier::Novice
        } else if progress < MASTERY_THRESHOLD {
            Tier::Expert
        } else {
            Tier::Master
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Novice => "Novice",
            Tier::Expert => "Expert",
            Tier::Master => "Master",
        };
        f.write_str(name)
    }
}
