//! Session controller - record/playback state machine
//!
//! One controller per tracking session. Each tick the caller hands in
//! the live frame (if capture succeeded) and gets back the frame to
//! reconcile against: the live frame while idle or recording, a frame
//! selected from the loaded log while playing, or nothing during
//! playback gaps. Mode changes arrive as discrete commands rather than
//! polled inputs.

use std::path::{Path, PathBuf};

use manus_core::{ManusError, ManusResult};
use manus_log::{FrameLog, PlaybackCursor, PlaybackParams};

use crate::FrameFormat;

/// What the session is configured to do
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionMode {
    /// Live capture only; frames pass straight through
    #[default]
    Off,
    /// Live capture with command-controlled recording
    Record,
    /// Frames come from a loaded log
    Playback,
}

/// Current recorder activity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecorderState {
    #[default]
    Idle,
    Recording,
    Playing,
}

/// Edge-triggered control events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Begin appending live frames to the log
    StartRecording,
    /// Persist the log and switch to looped playback of it
    SaveRecording,
    /// Drop the log and return to idle
    ResetRecording,
}

/// Session configuration
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub mode: SessionMode,
    /// Target file for `SaveRecording`
    pub recording_path: PathBuf,
    pub playback: PlaybackParams,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            mode: SessionMode::Off,
            recording_path: PathBuf::from("recording.manus"),
            playback: PlaybackParams::default(),
        }
    }
}

/// Per-tick controller over live capture, recording, and playback
///
/// The controller never touches representations; the caller feeds the
/// returned frame to its own reconcilers, one per (entity kind, purpose)
/// pairing. A `None` frame during playback gaps should be reconciled as
/// an empty entity set so stale representations are torn down.
pub struct SessionController<F: FrameFormat> {
    format: F,
    config: SessionConfig,
    log: FrameLog,
    cursor: PlaybackCursor,
    state: RecorderState,
    tick: u64,
}

impl<F: FrameFormat> SessionController<F> {
    pub fn new(format: F, config: SessionConfig) -> Self {
        let cursor = PlaybackCursor::new(config.playback);
        SessionController {
            format,
            config,
            log: FrameLog::new(),
            cursor,
            state: RecorderState::Idle,
            tick: 0,
        }
    }

    pub fn state(&self) -> RecorderState {
        self.state
    }

    pub fn mode(&self) -> SessionMode {
        self.config.mode
    }

    pub fn log(&self) -> &FrameLog {
        &self.log
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Apply one control event
    ///
    /// Recording commands only apply in `Record` mode; elsewhere they
    /// are ignored. Saving flips the session into looped playback of
    /// the just-saved log, starting immediately.
    pub fn handle(&mut self, command: SessionCommand) -> ManusResult<()> {
        if self.config.mode != SessionMode::Record {
            tracing::debug!(?command, mode = ?self.config.mode, "command ignored");
            return Ok(());
        }

        match command {
            SessionCommand::StartRecording => {
                tracing::info!("recording started");
                self.state = RecorderState::Recording;
            }
            SessionCommand::SaveRecording => {
                self.config.playback.looped = true;
                self.config.playback.start_tick = 0;
                self.cursor = PlaybackCursor::new(self.config.playback);
                self.state = RecorderState::Playing;
                self.log.save_to_file(&self.config.recording_path)?;
                tracing::info!(path = %self.config.recording_path.display(), "recording saved");
            }
            SessionCommand::ResetRecording => {
                tracing::info!("recording reset");
                self.log.clear();
                self.cursor.reset();
                self.state = RecorderState::Idle;
            }
        }
        Ok(())
    }

    /// Load a log from a file and start playing it
    ///
    /// A partially decodable file still arms playback with the decoded
    /// prefix; the `FormatError` is returned so the caller can report it.
    pub fn arm_playback_from_file(&mut self, path: impl AsRef<Path>) -> ManusResult<()> {
        let result = self.log.load_from_file(path);
        self.arm_if_loaded(result)
    }

    /// Load a log from an in-memory asset and start playing it
    pub fn arm_playback_from_bytes(&mut self, bytes: &[u8]) -> ManusResult<()> {
        let result = self.log.load_from_bytes(bytes);
        self.arm_if_loaded(result)
    }

    fn arm_if_loaded(&mut self, result: ManusResult<()>) -> ManusResult<()> {
        match &result {
            Ok(()) | Err(ManusError::FormatError { .. }) => {
                self.config.mode = SessionMode::Playback;
                self.cursor = PlaybackCursor::new(self.config.playback);
                self.state = RecorderState::Playing;
            }
            Err(_) => {}
        }
        result
    }

    /// Advance one tick and select the frame to reconcile
    ///
    /// While recording, the live frame is appended to the log and passed
    /// through for eager reconciliation. While playing, the cursor picks
    /// a log index and the stored payload is decoded. Otherwise the live
    /// frame passes through unchanged.
    pub fn step(&mut self, live: Option<F::Frame>) -> ManusResult<Option<F::Frame>> {
        let tick = self.tick;
        self.tick += 1;

        match self.state {
            RecorderState::Recording => {
                if let Some(frame) = &live {
                    self.log.append(self.format.serialize(frame));
                }
                Ok(live)
            }
            RecorderState::Playing => match self.cursor.advance(tick, self.log.len()) {
                Some(index) => {
                    let payload = self.log.get(index)?;
                    Ok(Some(self.format.deserialize(payload)?))
                }
                None => Ok(None),
            },
            RecorderState::Idle => Ok(live),
        }
    }
}
