//! Insertion-ordered collection of every non-ship entity.
//!
//! Removal only happens through `remove_marked` / `retain`, which the
//! engine calls once a pass over the collection has finished deciding.

use std::collections::BTreeSet;

use voidrun_core::entity::Entity;
use voidrun_core::types::GridPos;

#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entities: Vec<Entity>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn as_slice(&self) -> &[Entity] {
        &self.entities
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Whether any tracked entity sits on `pos`.
    pub fn is_occupied(&self, pos: GridPos) -> bool {
        self.entities.iter().any(|e| e.occupies(pos))
    }

    /// Remove the entities at the given indices, preserving order of the rest.
    pub fn remove_marked(&mut self, marked: &BTreeSet<usize>) -> usize {
        if marked.is_empty() {
            return 0;
        }
        let before = self.entities.len();
        let mut index = 0;
        self.entities.retain(|_| {
            let keep = !marked.contains(&index);
            index += 1;
            keep
        });
        before - self.entities.len()
    }

    /// Keep only entities matching `keep`. Returns how many were dropped.
    pub fn retain(&mut self, keep: impl FnMut(&Entity) -> bool) -> usize {
        let before = self.entities.len();
        self.entities.retain(keep);
        before - self.entities.len()
    }
}
