//! The player's ship. Exactly one exists per simulation and it is never
//! stored alongside the other entities.

use serde::{Deserialize, Serialize};

use crate::constants::{SHIP_MAX_HEALTH, SHIP_START_X, SHIP_START_Y};
use crate::enums::EntityKind;
use crate::error::BoundaryError;
use crate::state::EntityView;
use crate::types::{Direction, GridPos};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    pos: GridPos,
    /// Always within [0, SHIP_MAX_HEALTH].
    health: u32,
    score: u64,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            pos: GridPos::new(SHIP_START_X, SHIP_START_Y),
            health: SHIP_MAX_HEALTH,
            score: 0,
        }
    }
}

impl Ship {
    pub fn new() -> Self {
        Self::default()
    }

    /// A ship at an arbitrary cell. Health above the ceiling is clamped.
    pub fn at(x: i32, y: i32, health: u32) -> Self {
        Self {
            pos: GridPos::new(x, y),
            health: health.min(SHIP_MAX_HEALTH),
            score: 0,
        }
    }

    pub fn pos(&self) -> GridPos {
        self.pos
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    pub fn take_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(SHIP_MAX_HEALTH);
    }

    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Step one cell. The ship stays put if the target cell is off the grid.
    pub fn move_in(&mut self, direction: Direction) -> Result<(), BoundaryError> {
        let target = self.pos.step(direction);
        if !target.in_bounds() {
            return Err(BoundaryError { direction });
        }
        self.pos = target;
        Ok(())
    }

    pub fn render(&self) -> EntityView {
        EntityView::new(EntityKind::Ship, self.pos)
    }
}
