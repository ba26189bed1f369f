//! Frame snapshot: the complete visible state handed to the renderer and
//! stat sink after each tick.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, GamePhase, Tier};
use crate::types::{GridPos, SimTime};

/// Complete visible state produced by one advance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub level: u32,
    pub spawn_rate: u32,
    /// Every entity in registry order, with the ship appended last.
    pub entities: Vec<EntityView>,
    /// Score, Health, Level and Time Survived, in that order.
    pub stats: Vec<StatLine>,
    pub achievements: Vec<AchievementView>,
    /// Event text produced during this tick.
    pub log_lines: Vec<String>,
}

/// Render description of one grid occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityView {
    pub kind: EntityKind,
    pub x: i32,
    pub y: i32,
}

/// A labelled value for the stat panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    pub label: String,
    pub value: String,
}

/// Achievement progress for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementView {
    pub name: String,
    pub description: String,
    /// 0.0 - 1.0.
    pub progress: f64,
    pub tier: Tier,
}

/// Final statistics shown once the ship is destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOverReport {
    pub shots_fired: u32,
    pub shots_hit: u32,
    pub enemies_destroyed: u32,
    pub survival_secs: u64,
    pub final_score: u64,
    pub level: u32,
    pub achievements: Vec<AchievementView>,
}

impl EntityView {
    pub fn new(kind: EntityKind, pos: GridPos) -> Self {
        Self {
            kind,
            x: pos.x,
            y: pos.y,
        }
    }

    pub fn pos(&self) -> GridPos {
        GridPos::new(self.x, self.y)
    }
}

impl fmt::Display for EntityView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.kind, self.x, self.y)
    }
}

impl StatLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl FrameSnapshot {
    /// Look up a stat value by label.
    pub fn stat(&self, label: &str) -> Option<&str> {
        self.stats
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.value.as_str())
    }

    /// The ship's render description (always the last entity).
    pub fn ship(&self) -> Option<&EntityView> {
        self.entities.last().filter(|e| e.kind == EntityKind::Ship)
    }
}

impl fmt::Display for AchievementView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.0}% ({})",
            self.name,
            self.progress * 100.0,
            self.tier
        )
    }
}

impl fmt::Display for GameOverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shots Fired: {}", self.shots_fired)?;
        writeln!(f, "Shots Hit: {}", self.shots_hit)?;
        writeln!(f, "Enemies Destroyed: {}", self.enemies_destroyed)?;
        writeln!(f, "Survival Time: {} seconds", self.survival_secs)?;
        writeln!(f, "Final Score: {} (Level {})", self.final_score, self.level)?;
        for a in &self.achievements {
            writeln!(
                f,
                "{} - {} ({:.0}% complete, Tier: {})",
                a.name,
                a.description,
                a.progress * 100.0,
                a.tier
            )?;
        }
        Ok(())
    }
}
