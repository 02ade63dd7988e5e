//! Manus Wire - Binary frame record format
//!
//! A frame log on disk is a flat sequence of records with no header,
//! footer, or magic number:
//! - Bytes 0-3: Payload length L (LE, unsigned)
//! - Bytes 4..4+L: Opaque frame payload
//!
//! End of stream implies end of log. Payload contents are never
//! interpreted here.

pub mod record;

pub use record::*;
