//! Identity types for tracked entities
//!
//! Tracking sources report 32-bit integer IDs that are stable for as long
//! as an entity stays in view. An ID that disappears and later reappears
//! denotes a new entity, never a resumed one.

use std::fmt;

/// Tracked-entity identity - assigned by the tracking source
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl EntityId {
    pub const ZERO: EntityId = EntityId(0);

    #[inline]
    pub fn new(id: u32) -> Self {
        EntityId(id)
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    #[inline]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        EntityId(u32::from_le_bytes(bytes))
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
