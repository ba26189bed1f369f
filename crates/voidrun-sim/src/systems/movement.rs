//! Movement system.
//!
//! Applies each entity's own movement rule for the current tick. The ship
//! only moves in response to player commands.

use crate::registry::EntityRegistry;

/// Advance every tracked entity by one tick.
pub fn run(registry: &mut EntityRegistry, tick: u64) {
    for entity in registry.iter_mut() {
        entity.tick(tick);
    }
}
