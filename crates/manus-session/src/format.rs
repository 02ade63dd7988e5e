//! Frame format collaborator
//!
//! Frame payloads are opaque to the log and codec; the embedding
//! application supplies the format that turns frames into bytes and
//! enumerates the entities a frame contains.

use manus_core::{EntityKind, ManusResult, TrackedEntity};

/// Serialization and entity enumeration for one frame format
pub trait FrameFormat {
    /// A decoded frame: one tick's snapshot of all tracked entities
    type Frame;

    /// Serialize a frame to an opaque payload
    fn serialize(&self, frame: &Self::Frame) -> Vec<u8>;

    /// Deserialize a payload back into a frame
    fn deserialize(&self, payload: &[u8]) -> ManusResult<Self::Frame>;

    /// Enumerate the entities of one kind reported by a frame
    fn entities(&self, frame: &Self::Frame, kind: EntityKind) -> Vec<TrackedEntity>;
}
