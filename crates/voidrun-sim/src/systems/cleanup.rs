//! Cleanup system: removes entities that have left the grid.

use log::debug;

use crate::registry::EntityRegistry;

/// Drop every entity outside `0 <= x < GRID_WIDTH`, `0 <= y < GRID_HEIGHT`.
/// Returns how many were removed.
pub fn run(registry: &mut EntityRegistry) -> usize {
    let removed = registry.retain(|e| e.pos().in_bounds());
    if removed > 0 {
        debug!("cleanup: {removed} entities left the grid");
    }
    removed
}
