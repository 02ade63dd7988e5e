//! Manus Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout the manus workspace:
//! - Identifiers (EntityId)
//! - Tracked-entity model (EntityKind, Chirality, TrackedEntity)
//! - Spatial anchor (Transform)
//! - Error types

pub mod entity;
pub mod error;
pub mod id;
pub mod transform;

pub use entity::*;
pub use error::*;
pub use id::*;
pub use transform::*;
