//! The closed set of simulated objects other than the ship.
//!
//! Every entity carries only a grid position; kind-specific behaviour
//! (movement cadence, power-up effects) is expressed by matching on the
//! variant.

use serde::{Deserialize, Serialize};

use crate::constants::{
    HEALTH_POWER_UP_AMOUNT, POWER_UP_MOVE_INTERVAL, SHIELD_POWER_UP_SCORE,
};
use crate::enums::{EntityKind, PowerUpKind};
use crate::ship::Ship;
use crate::state::EntityView;
use crate::types::{Direction, GridPos};

/// A non-ship object on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Entity {
    /// Fired by the ship; climbs one row per tick.
    Bullet { pos: GridPos },
    /// Descends one row per tick. Absorbs bullets without being destroyed.
    Asteroid { pos: GridPos },
    /// Descends one row per tick. Destroyed by a bullet.
    Enemy { pos: GridPos },
    /// Descends one row every `POWER_UP_MOVE_INTERVAL` ticks.
    PowerUp { kind: PowerUpKind, pos: GridPos },
}

impl Entity {
    pub fn bullet(x: i32, y: i32) -> Self {
        Entity::Bullet {
            pos: GridPos::new(x, y),
        }
    }

    pub fn asteroid(x: i32, y: i32) -> Self {
        Entity::Asteroid {
            pos: GridPos::new(x, y),
        }
    }

    pub fn enemy(x: i32, y: i32) -> Self {
        Entity::Enemy {
            pos: GridPos::new(x, y),
        }
    }

    pub fn power_up(kind: PowerUpKind, x: i32, y: i32) -> Self {
        Entity::PowerUp {
            kind,
            pos: GridPos::new(x, y),
        }
    }

    pub fn pos(&self) -> GridPos {
        match *self {
            Entity::Bullet { pos }
            | Entity::Asteroid { pos }
            | Entity::Enemy { pos }
            | Entity::PowerUp { pos, .. } => pos,
        }
    }

    fn pos_mut(&mut self) -> &mut GridPos {
        match self {
            Entity::Bullet { pos }
            | Entity::Asteroid { pos }
            | Entity::Enemy { pos }
            | Entity::PowerUp { pos, .. } => pos,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Bullet { .. } => EntityKind::Bullet,
            Entity::Asteroid { .. } => EntityKind::Asteroid,
            Entity::Enemy { .. } => EntityKind::Enemy,
            Entity::PowerUp { kind, .. } => kind.entity_kind(),
        }
    }

    pub fn is_bullet(&self) -> bool {
        matches!(self, Entity::Bullet { .. })
    }

    /// Whether a bullet can strike this entity.
    pub fn is_bullet_target(&self) -> bool {
        matches!(self, Entity::Enemy { .. } | Entity::Asteroid { .. })
    }

    pub fn occupies(&self, pos: GridPos) -> bool {
        self.pos() == pos
    }

    /// Apply this entity's per-tick movement rule. Nothing moves sideways.
    pub fn tick(&mut self, tick: u64) {
        let step = match self {
            Entity::Bullet { .. } => Some(Direction::Up),
            Entity::Asteroid { .. } | Entity::Enemy { .. } => Some(Direction::Down),
            Entity::PowerUp { .. } => {
                tick.is_multiple_of(POWER_UP_MOVE_INTERVAL).then_some(Direction::Down)
            }
        };
        if let Some(direction) = step {
            let pos = self.pos_mut();
            *pos = pos.step(direction);
        }
    }

    /// Display-agnostic description of this entity.
    pub fn render(&self) -> EntityView {
        EntityView::new(self.kind(), self.pos())
    }
}

impl PowerUpKind {
    /// Mutate the ship according to this power-up.
    pub fn apply_effect(self, ship: &mut Ship) {
        match self {
            PowerUpKind::Health => ship.heal(HEALTH_POWER_UP_AMOUNT),
            PowerUpKind::Shield => ship.add_score(SHIELD_POWER_UP_SCORE),
        }
    }
}
