//! Representation capability traits
//!
//! A representation is the visual or physical stand-in for one tracked
//! entity. The embedding application supplies concrete types; this crate
//! only drives their lifecycle. Dropping a representation releases
//! whatever resources it owns.

use manus_core::{ManusResult, TrackedEntity, Transform};

/// Lifecycle operations a representation must expose
///
/// Call order for a new representation: `bind_source`, `set_scale`,
/// `initialize` (exactly once), then `refresh` every tick it stays live.
/// Existing representations get `bind_source`, `set_scale`, `refresh`
/// each tick.
pub trait Representation {
    /// Apply a uniform scale factor
    fn set_scale(&mut self, factor: f32);

    /// Rebind to the entity data reported this frame
    fn bind_source(&mut self, entity: &TrackedEntity);

    /// One-time setup, after the first bind and before the first refresh
    fn initialize(&mut self) -> ManusResult<()>;

    /// Per-tick update from the currently bound entity data
    fn refresh(&mut self) -> ManusResult<()>;
}

/// Factory for representations of one morphological class
///
/// Prototypes are instantiated, never used directly; the anchor is the
/// owner's world position and orientation at creation time.
pub trait Prototype {
    type Repr: Representation;

    fn instantiate(&self, anchor: &Transform) -> ManusResult<Self::Repr>;
}
