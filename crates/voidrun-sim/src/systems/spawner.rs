//! Spawn system: rolls for new asteroids, enemies and power-ups each tick.
//!
//! Draw order is part of the reproducibility contract and never varies:
//!
//! 1. asteroid chance, 2. asteroid column (only on success),
//! 3. enemy chance, 4. enemy column (only on success),
//! 5. power-up chance, 6. power-up column and 7. power-up kind (only on success).
//!
//! A spawn whose cell is already taken is dropped after its draws have
//! happened, so occupancy never shifts the sequence.

use log::debug;

use voidrun_core::constants::{
    ENEMY_SPAWN_FACTOR, GRID_WIDTH, POWER_UP_SPAWN_FACTOR, SPAWN_ROLL_BOUND, SPAWN_ROW,
};
use voidrun_core::entity::Entity;
use voidrun_core::enums::PowerUpKind;
use voidrun_core::ship::Ship;
use voidrun_core::types::GridPos;

use crate::registry::EntityRegistry;
use crate::rng::SpawnRng;

/// Spawn outcomes for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnResult {
    pub spawned: Vec<Entity>,
    /// Candidates dropped because their cell was occupied.
    pub blocked: u32,
}

/// Roll for new entities at row 0 and add the ones that fit.
pub fn run(
    rng: &mut dyn SpawnRng,
    registry: &mut EntityRegistry,
    ship: &Ship,
    spawn_rate: u32,
) -> SpawnResult {
    let mut result = SpawnResult::default();
    let rate = spawn_rate as f64;

    if roll(rng) < rate {
        let x = column(rng);
        place(Entity::asteroid(x, SPAWN_ROW), registry, ship, &mut result);
    }

    if roll(rng) < rate * ENEMY_SPAWN_FACTOR {
        let x = column(rng);
        place(Entity::enemy(x, SPAWN_ROW), registry, ship, &mut result);
    }

    if roll(rng) < rate * POWER_UP_SPAWN_FACTOR {
        let x = column(rng);
        let kind = if rng.next_bool() {
            PowerUpKind::Shield
        } else {
            PowerUpKind::Health
        };
        place(Entity::power_up(kind, x, SPAWN_ROW), registry, ship, &mut result);
    }

    result
}

fn roll(rng: &mut dyn SpawnRng) -> f64 {
    rng.next_int(SPAWN_ROLL_BOUND) as f64
}

fn column(rng: &mut dyn SpawnRng) -> i32 {
    rng.next_int(GRID_WIDTH as u32) as i32
}

/// Whether the ship or any tracked entity sits on `pos`.
pub fn is_occupied(registry: &EntityRegistry, ship: &Ship, pos: GridPos) -> bool {
    ship.pos() == pos || registry.is_occupied(pos)
}

fn place(entity: Entity, registry: &mut EntityRegistry, ship: &Ship, result: &mut SpawnResult) {
    if is_occupied(registry, ship, entity.pos()) {
        debug!("spawn: {} blocked, cell occupied", entity.render());
        result.blocked += 1;
        return;
    }
    registry.add(entity);
    result.spawned.push(entity);
}
