//! Per-frame reconciliation pass
//!
//! Aligns a `RepresentationMap` with the entity set reported by one
//! frame: unknown IDs get a freshly instantiated representation, known
//! IDs are rebound and refreshed, and IDs missing from the frame are
//! destroyed. IDs are transient - an entity that leaves and returns
//! under the same ID gets a brand-new representation.

use manus_core::{Chirality, EntityId, ManusResult, TrackedEntity, Transform};

use crate::{Prototype, Representation, RepresentationMap};

/// Result of one reconciliation pass
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub created: u32,
    pub updated: u32,
    pub removed: u32,
    pub skipped: u32,
}

/// Reconciliation engine for a single (entity kind, purpose) pairing
///
/// Holds one optional prototype per morphological class; an entity whose
/// class has no prototype is skipped entirely, which lets a caller track
/// only one class. The anchor and owner scale come from the embedding
/// application's world placement.
pub struct EntityReconciler<'a, P: Prototype> {
    left: Option<&'a P>,
    right: Option<&'a P>,
    anchor: Transform,
    owner_scale: f32,
}

impl<'a, P: Prototype> EntityReconciler<'a, P> {
    pub fn new(left: Option<&'a P>, right: Option<&'a P>) -> Self {
        EntityReconciler {
            left,
            right,
            anchor: Transform::IDENTITY,
            owner_scale: 1.0,
        }
    }

    /// Set the world anchor at which new representations are placed
    pub fn with_anchor(mut self, anchor: Transform) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the owner's uniform scale, multiplied into every entity scale
    pub fn with_owner_scale(mut self, scale: f32) -> Self {
        self.owner_scale = scale;
        self
    }

    fn prototype_for(&self, chirality: Chirality) -> Option<&'a P> {
        match chirality {
            Chirality::Left => self.left,
            Chirality::Right => self.right,
        }
    }

    /// Reconcile the map against one frame's entity list
    ///
    /// Entities are processed in listed order. Scale is recomputed for
    /// every live entity each pass since the source re-estimates its
    /// reference width. Collaborator errors abort the pass and propagate
    /// unmodified; ordinary churn never errors.
    pub fn reconcile(
        &self,
        map: &mut RepresentationMap<P::Repr>,
        entities: &[TrackedEntity],
    ) -> ManusResult<ReconcileOutcome> {
        let mut outcome = ReconcileOutcome::default();
        let mut stale: Vec<EntityId> = map.ids().collect();

        for entity in entities {
            let Some(prototype) = self.prototype_for(entity.chirality) else {
                tracing::debug!(id = %entity.id, chirality = ?entity.chirality,
                    "no prototype for class, skipping entity");
                outcome.skipped += 1;
                continue;
            };

            stale.retain(|id| *id != entity.id);
            let factor = entity.scale_factor() * self.owner_scale;

            if let Some(repr) = map.get_mut(entity.id) {
                repr.bind_source(entity);
                repr.set_scale(factor);
                repr.refresh()?;
                outcome.updated += 1;
            } else {
                let mut repr = prototype.instantiate(&self.anchor)?;
                repr.bind_source(entity);
                repr.set_scale(factor);
                repr.initialize()?;
                repr.refresh()?;
                map.insert(entity.id, repr);
                outcome.created += 1;
            }
        }

        // Destroy every representation whose ID went absent this frame.
        for id in stale {
            map.remove(id);
            outcome.removed += 1;
        }

        Ok(outcome)
    }
}
