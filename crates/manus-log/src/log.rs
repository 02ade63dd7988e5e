//! In-memory frame log with flat-file persistence

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use manus_core::{ManusError, ManusResult};
use manus_wire::{decode_record, encode_record_into};

/// Ordered, append-only sequence of opaque frame payloads
///
/// Insertion order is temporal order; indices are contiguous from 0.
/// Frames are only ever removed by `clear` or a wholesale reload.
#[derive(Debug, Default)]
pub struct FrameLog {
    frames: Vec<Vec<u8>>,
}

impl FrameLog {
    pub fn new() -> Self {
        FrameLog::default()
    }

    /// Append one payload to the end of the log
    pub fn append(&mut self, payload: Vec<u8>) {
        self.frames.push(payload);
    }

    /// Get the payload at an index
    pub fn get(&self, index: usize) -> ManusResult<&[u8]> {
        self.frames
            .get(index)
            .map(Vec::as_slice)
            .ok_or(ManusError::IndexOutOfRange {
                index,
                len: self.frames.len(),
            })
    }

    /// Number of stored frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if the log holds no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Drop every stored frame
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Iterate over stored payloads in log order
    pub fn frames(&self) -> impl Iterator<Item = &[u8]> {
        self.frames.iter().map(Vec::as_slice)
    }

    /// Write every stored payload to a file as length-prefixed records
    ///
    /// The file is opened in append mode and never truncated: saving
    /// twice without clearing the log in between leaves duplicate
    /// history in the file. This matches the legacy recorder and is
    /// deliberate; callers wanting a fresh file remove it first.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> ManusResult<()> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path.as_ref())?;
        let mut writer = BufWriter::new(file);

        let mut record = Vec::new();
        for payload in &self.frames {
            record.clear();
            encode_record_into(payload, &mut record);
            writer.write_all(&record)?;
        }
        writer.flush()?;

        tracing::debug!(frames = self.frames.len(), "frame log saved");
        Ok(())
    }

    /// Replace the log contents with the records stored in a file
    ///
    /// An empty file yields an empty log. A truncated trailing record
    /// yields `FormatError`; the records decoded before the truncation
    /// point are kept.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> ManusResult<()> {
        let mut file = File::open(path.as_ref())?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        self.load_from_bytes(&bytes)
    }

    /// Replace the log contents with the records in a byte stream
    ///
    /// Same partial-load policy as `load_from_file`; used when recordings
    /// ship as embedded assets rather than files.
    pub fn load_from_bytes(&mut self, bytes: &[u8]) -> ManusResult<()> {
        self.frames.clear();

        let mut cursor = bytes;
        while !cursor.is_empty() {
            match decode_record(&mut cursor) {
                Ok(payload) => self.frames.push(payload),
                Err(ManusError::TruncatedRecord { .. }) => {
                    let decoded = self.frames.len();
                    tracing::warn!(decoded, "frame log truncated mid-record, keeping prefix");
                    return Err(ManusError::FormatError { decoded });
                }
                Err(e) => return Err(e),
            }
        }

        tracing::debug!(frames = self.frames.len(), "frame log loaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manus_wire::encode_record;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("manus-log-{}-{}", std::process::id(), name));
        path
    }

    #[test]
    fn test_append_get_len() {
        let mut log = FrameLog::new();
        assert!(log.is_empty());

        log.append(vec![1, 2, 3]);
        log.append(vec![4]);

        assert_eq!(log.len(), 2);
        assert_eq!(log.get(0).unwrap(), &[1, 2, 3]);
        assert_eq!(log.get(1).unwrap(), &[4]);
        assert!(matches!(
            log.get(2),
            Err(ManusError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let path = temp_path("roundtrip");
        let _ = std::fs::remove_file(&path);

        let mut log = FrameLog::new();
        log.append(vec![1, 2, 3]);
        log.append(vec![]);
        log.append(vec![0xFF; 300]);
        log.save_to_file(&path).unwrap();

        let mut restored = FrameLog::new();
        restored.load_from_file(&path).unwrap();

        assert_eq!(restored.len(), 3);
        let original: Vec<_> = log.frames().collect();
        let loaded: Vec<_> = restored.frames().collect();
        assert_eq!(original, loaded);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_duplicate_history_on_repeated_save() {
        let path = temp_path("dup");
        let _ = std::fs::remove_file(&path);

        let mut log = FrameLog::new();
        log.append(vec![7, 8]);
        log.save_to_file(&path).unwrap();
        log.save_to_file(&path).unwrap();

        let mut restored = FrameLog::new();
        restored.load_from_file(&path).unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.get(0).unwrap(), restored.get(1).unwrap());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_empty_stream() {
        let mut log = FrameLog::new();
        log.append(vec![1]);
        log.load_from_bytes(&[]).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_partial_load_keeps_prefix() {
        let mut stream = Vec::new();
        stream.extend_from_slice(&encode_record(&[1, 2, 3]));
        stream.extend_from_slice(&encode_record(&[4, 5]));
        // Truncated trailing record: claims 10 bytes, delivers 2.
        stream.extend_from_slice(&10u32.to_le_bytes());
        stream.extend_from_slice(&[6, 7]);

        let mut log = FrameLog::new();
        let err = log.load_from_bytes(&stream).unwrap_err();
        assert!(matches!(err, ManusError::FormatError { decoded: 2 }));
        assert_eq!(log.len(), 2);
        assert_eq!(log.get(0).unwrap(), &[1, 2, 3]);
        assert_eq!(log.get(1).unwrap(), &[4, 5]);
    }

    #[test]
    fn test_load_file_matches_load_bytes() {
        let path = temp_path("bytes-eq");
        let _ = std::fs::remove_file(&path);

        let mut log = FrameLog::new();
        log.append(vec![42; 17]);
        log.save_to_file(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();

        let mut from_file = FrameLog::new();
        from_file.load_from_file(&path).unwrap();
        let mut from_bytes = FrameLog::new();
        from_bytes.load_from_bytes(&bytes).unwrap();

        assert_eq!(
            from_file.frames().collect::<Vec<_>>(),
            from_bytes.frames().collect::<Vec<_>>()
        );

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let mut log = FrameLog::new();
        let err = log
            .load_from_file(temp_path("does-not-exist"))
            .unwrap_err();
        assert!(matches!(err, ManusError::Io(_)));
    }
}
