//! Collision system: ship and bullet interactions.
//!
//! Both passes read the same pre-pass entity list and only record indices
//! to remove. Removals are applied once both passes have finished.

use std::collections::BTreeSet;

use voidrun_core::constants::{ASTEROID_DAMAGE, ENEMY_DAMAGE};
use voidrun_core::entity::Entity;
use voidrun_core::events::GameEvent;
use voidrun_core::ship::Ship;

use crate::registry::EntityRegistry;
use crate::stats::PlayerStats;

/// Tallies from one collision run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionResult {
    pub power_ups_collected: u32,
    pub damage_taken: u32,
    pub enemies_destroyed: u32,
    pub bullets_absorbed: u32,
    pub removed: usize,
}

/// Resolve ship and bullet collisions for the current tick.
pub fn run(
    ship: &mut Ship,
    registry: &mut EntityRegistry,
    stats: &mut PlayerStats,
    events: &mut Vec<GameEvent>,
) -> CollisionResult {
    let mut result = CollisionResult::default();
    let mut to_remove: BTreeSet<usize> = BTreeSet::new();
    let entities = registry.as_slice();

    // Ship pass: everything except bullets that shares the ship's cell.
    let ship_pos = ship.pos();
    for (idx, entity) in entities.iter().enumerate() {
        if !entity.occupies(ship_pos) {
            continue;
        }
        match *entity {
            Entity::PowerUp { kind, .. } => {
                kind.apply_effect(ship);
                result.power_ups_collected += 1;
                events.push(GameEvent::PowerUpCollected {
                    power_up: entity.render(),
                });
            }
            Entity::Asteroid { .. } => {
                ship.take_damage(ASTEROID_DAMAGE);
                result.damage_taken += ASTEROID_DAMAGE;
                events.push(GameEvent::ShipHit {
                    by: entity.render(),
                    damage: ASTEROID_DAMAGE,
                });
            }
            Entity::Enemy { .. } => {
                ship.take_damage(ENEMY_DAMAGE);
                result.damage_taken += ENEMY_DAMAGE;
                events.push(GameEvent::ShipHit {
                    by: entity.render(),
                    damage: ENEMY_DAMAGE,
                });
            }
            Entity::Bullet { .. } => continue,
        }
        to_remove.insert(idx);
    }

    // Bullet pass: first enemy or asteroid on the bullet's cell wins.
    for (bullet_idx, bullet) in entities.iter().enumerate() {
        if !bullet.is_bullet() {
            continue;
        }
        let hit = entities
            .iter()
            .enumerate()
            .find(|(_, other)| other.is_bullet_target() && other.occupies(bullet.pos()));
        match hit {
            Some((target_idx, Entity::Enemy { .. })) => {
                to_remove.insert(bullet_idx);
                to_remove.insert(target_idx);
                stats.record_shot_hit();
                result.enemies_destroyed += 1;
            }
            Some((_, Entity::Asteroid { .. })) => {
                to_remove.insert(bullet_idx);
                result.bullets_absorbed += 1;
            }
            _ => {}
        }
    }

    result.removed = registry.remove_marked(&to_remove);
    result
}
