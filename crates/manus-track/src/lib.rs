//! Manus Track - Entity reconciliation engine
//!
//! This crate keeps a map of long-lived representations in sync with the
//! entity set reported by each incoming frame:
//! - Representation capability traits (instantiate, bind, scale, refresh)
//! - `RepresentationMap`: ID-keyed ownership of live representations
//! - `EntityReconciler`: per-frame create/update/destroy pass

pub mod map;
pub mod reconcile;
pub mod representation;

pub use map::*;
pub use reconcile::*;
pub use representation::*;
