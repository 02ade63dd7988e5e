//! Representation map - ID-keyed ownership of live representations

use std::collections::HashMap;

use manus_core::EntityId;

/// Mapping from tracked-entity ID to an owned representation
///
/// One map per (entity kind, purpose) pairing; visual and physical
/// representations of the same entity live in separate maps. Every key
/// refers to a live representation created by a reconciliation pass, and
/// an ID absent from the current frame is removed in the same pass.
#[derive(Debug, Default)]
pub struct RepresentationMap<R> {
    entries: HashMap<EntityId, R>,
}

impl<R> RepresentationMap<R> {
    pub fn new() -> Self {
        RepresentationMap {
            entries: HashMap::new(),
        }
    }

    /// Get a representation by entity ID
    pub fn get(&self, id: EntityId) -> Option<&R> {
        self.entries.get(&id)
    }

    /// Get a mutable representation by entity ID
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut R> {
        self.entries.get_mut(&id)
    }

    /// Insert or replace a representation
    pub fn insert(&mut self, id: EntityId, repr: R) {
        self.entries.insert(id, repr);
    }

    /// Remove and return a representation; dropping it destroys it
    pub fn remove(&mut self, id: EntityId) -> Option<R> {
        self.entries.remove(&id)
    }

    /// Check if an entity has a live representation
    pub fn contains(&self, id: EntityId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of live representations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// IDs with live representations
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entries.keys().copied()
    }

    /// Iterate over live representations
    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &R)> {
        self.entries.iter()
    }

    /// Drop every representation
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_basic() {
        let mut map: RepresentationMap<&str> = RepresentationMap::new();
        assert!(map.is_empty());

        map.insert(EntityId::new(1), "left hand");
        assert!(map.contains(EntityId::new(1)));
        assert_eq!(map.len(), 1);

        assert_eq!(map.remove(EntityId::new(1)), Some("left hand"));
        assert!(map.is_empty());
    }
}
