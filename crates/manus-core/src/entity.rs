//! Tracked-entity model
//!
//! One `TrackedEntity` per physical object (hand or tool) reported present
//! in a frame. Entity data beyond the scale reference is opaque to this
//! workspace; frame formats carry whatever they need.

use crate::EntityId;

/// Reference distance from thumb base to pinky base in mm.
/// Representations are authored against this width; per-entity scale is
/// `reference_width / MODEL_REFERENCE_WIDTH`.
pub const MODEL_REFERENCE_WIDTH: f32 = 85.0;

/// Kind of physical object a tracking source can report
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Hand,
    Tool,
}

/// Morphological class of a tracked entity
///
/// Every entity belongs to exactly one of two classes. For hands this is
/// literal handedness; kinds without a meaningful split report a single
/// class for all instances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Chirality {
    Left,
    Right,
}

/// A live entity reported by one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedEntity {
    /// Source-assigned ID, stable while the entity stays in view
    pub id: EntityId,
    /// Morphological class
    pub chirality: Chirality,
    /// Source-estimated real-world width in mm, re-estimated every frame
    pub reference_width: f32,
}

impl TrackedEntity {
    pub fn new(id: EntityId, chirality: Chirality, reference_width: f32) -> Self {
        TrackedEntity {
            id,
            chirality,
            reference_width,
        }
    }

    /// Uniform scale factor relative to the authored model width
    #[inline]
    pub fn scale_factor(&self) -> f32 {
        self.reference_width / MODEL_REFERENCE_WIDTH
    }
}
