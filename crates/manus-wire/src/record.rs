//! Length-prefixed record encoding
//!
//! Record = [4-byte LE length][payload]. Decoding advances the cursor by
//! exactly `4 + length` bytes on success; on failure the stream is
//! treated as exhausted.

use bytes::{Buf, BufMut};

use manus_core::{ManusError, ManusResult};

/// Size of the length prefix in bytes
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Total encoded size of a record for the given payload
#[inline]
pub fn record_len(payload: &[u8]) -> usize {
    LENGTH_PREFIX_SIZE + payload.len()
}

/// Encode one payload into a fresh length-prefixed record
pub fn encode_record(payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(record_len(payload));
    encode_record_into(payload, &mut buf);
    buf
}

/// Encode one payload into an existing buffer
pub fn encode_record_into(payload: &[u8], buf: &mut impl BufMut) {
    buf.put_u32_le(payload.len() as u32);
    buf.put_slice(payload);
}

/// Decode one record from the front of a buffer
///
/// Errors with `TruncatedRecord` if fewer than 4 bytes remain for the
/// length field, or fewer than `length` bytes remain for the payload.
/// The payload is returned verbatim; no content validation is performed.
pub fn decode_record(buf: &mut impl Buf) -> ManusResult<Vec<u8>> {
    if buf.remaining() < LENGTH_PREFIX_SIZE {
        return Err(ManusError::TruncatedRecord {
            expected: LENGTH_PREFIX_SIZE,
            actual: buf.remaining(),
        });
    }

    let len = buf.get_u32_le() as usize;
    if buf.remaining() < len {
        return Err(ManusError::TruncatedRecord {
            expected: len,
            actual: buf.remaining(),
        });
    }

    let mut payload = vec![0u8; len];
    buf.copy_to_slice(&mut payload);
    Ok(payload)
}
