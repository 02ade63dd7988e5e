//! Manus Session - Record/playback session controller
//!
//! This crate owns the per-tick state machine over live capture,
//! recording, and playback:
//! - `FrameFormat`: collaborator trait for serializing frames and
//!   enumerating their entities
//! - `SessionController`: command-driven mode switching and the per-tick
//!   frame selection that feeds entity reconciliation

pub mod controller;
pub mod format;

pub use controller::*;
pub use format::*;
