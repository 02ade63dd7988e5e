//! Manus Log - Frame log and playback engine
//!
//! This crate implements the recording side of a tracking session:
//! - `FrameLog`: ordered, append-only sequence of opaque frame payloads
//!   with flat-file persistence
//! - `PlaybackCursor`: deterministic tick-to-index mapping with speed,
//!   start-offset, looping, and loop-delay control

pub mod log;
pub mod playback;

pub use log::*;
pub use playback::*;
