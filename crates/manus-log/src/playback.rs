//! Tick-to-index playback cursor
//!
//! Maps a monotonic tick counter onto frame indices with fractional
//! speed, start-offset, end-hold, and looped-delay semantics. Pure state
//! machine; no file I/O happens on the per-tick path.

/// Playback control parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackParams {
    /// Tick before which no frame is emitted
    pub start_tick: u64,
    /// Fractional index advance per tick; 1.0 plays at recording rate
    pub speed: f32,
    /// Restart from frame 0 after the last frame
    pub looped: bool,
    /// Negative-index offset applied on wraparound, in index units:
    /// looping pauses for `loop_delay / speed` ticks before frame 0
    pub loop_delay: f32,
}

impl Default for PlaybackParams {
    fn default() -> Self {
        PlaybackParams {
            start_tick: 0,
            speed: 1.0,
            looped: false,
            loop_delay: 0.0,
        }
    }
}

/// Cursor over a frame log
///
/// One `advance` call per tick. Emitted indices are always in range for
/// the supplied log length; `None` means "no frame this tick" (playback
/// not started, empty log, or loop-delay gap).
#[derive(Clone, Debug)]
pub struct PlaybackCursor {
    params: PlaybackParams,
    index: f32,
}

impl PlaybackCursor {
    pub fn new(params: PlaybackParams) -> Self {
        PlaybackCursor { params, index: 0.0 }
    }

    pub fn params(&self) -> &PlaybackParams {
        &self.params
    }

    /// Rewind to the first frame
    pub fn reset(&mut self) {
        self.index = 0.0;
    }

    /// Advance one tick and return the frame index to show, if any
    ///
    /// While the running index is below the last frame it grows by
    /// `speed` each tick; the emitted index is clamped to the last frame
    /// so the final frame is held rather than indexed past. At the end,
    /// a looped cursor rewinds to `-loop_delay` (emitting nothing until
    /// the index climbs back to 0); a non-looped cursor holds forever.
    pub fn advance(&mut self, current_tick: u64, log_len: usize) -> Option<usize> {
        if current_tick < self.params.start_tick {
            return None;
        }
        if log_len == 0 {
            return None;
        }

        let last = log_len - 1;
        let emitted = if self.index >= 0.0 {
            Some((self.index as usize).min(last))
        } else {
            None
        };

        if self.index < last as f32 {
            self.index += self.params.speed;
        } else if self.params.looped {
            self.index = -self.params.loop_delay;
        }

        emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(cursor: &mut PlaybackCursor, ticks: u64, log_len: usize) -> Vec<Option<usize>> {
        (0..ticks).map(|t| cursor.advance(t, log_len)).collect()
    }

    #[test]
    fn test_unit_speed_plays_through_and_holds() {
        let mut cursor = PlaybackCursor::new(PlaybackParams::default());
        let emitted = run(&mut cursor, 6, 4);
        assert_eq!(
            emitted,
            vec![Some(0), Some(1), Some(2), Some(3), Some(3), Some(3)]
        );
    }

    #[test]
    fn test_indices_non_decreasing_and_clamped() {
        let mut cursor = PlaybackCursor::new(PlaybackParams {
            speed: 2.5,
            ..Default::default()
        });

        let mut previous = 0;
        for t in 0..20 {
            let index = cursor.advance(t, 7).unwrap();
            assert!(index >= previous);
            assert!(index < 7);
            previous = index;
        }
        assert_eq!(previous, 6);
    }

    #[test]
    fn test_start_tick_gates_playback() {
        let mut cursor = PlaybackCursor::new(PlaybackParams {
            start_tick: 3,
            ..Default::default()
        });
        let emitted = run(&mut cursor, 5, 4);
        assert_eq!(emitted, vec![None, None, None, Some(0), Some(1)]);
    }

    #[test]
    fn test_loop_reentry_after_delay() {
        let mut cursor = PlaybackCursor::new(PlaybackParams {
            looped: true,
            loop_delay: 2.0,
            ..Default::default()
        });

        let emitted = run(&mut cursor, 8, 3);
        assert_eq!(
            emitted,
            vec![
                Some(0),
                Some(1),
                Some(2), // last frame, cursor rewinds to -2
                None,
                None, // loop_delay / speed ticks of silence
                Some(0),
                Some(1),
                Some(2),
            ]
        );
    }

    #[test]
    fn test_loop_delay_scales_with_speed() {
        let mut cursor = PlaybackCursor::new(PlaybackParams {
            speed: 0.5,
            looped: true,
            loop_delay: 1.0,
            ..Default::default()
        });

        // Two frames at half speed: each frame shown twice, then a
        // 1.0 / 0.5 = 2 tick gap before frame 0 returns.
        let emitted = run(&mut cursor, 9, 2);
        assert_eq!(
            emitted,
            vec![
                Some(0),
                Some(0),
                Some(1),
                None,
                None,
                Some(0),
                Some(0),
                Some(1),
                None,
            ]
        );
    }

    #[test]
    fn test_empty_log_emits_nothing() {
        let mut cursor = PlaybackCursor::new(PlaybackParams::default());
        assert_eq!(cursor.advance(0, 0), None);
        assert_eq!(cursor.advance(1, 0), None);
    }

    #[test]
    fn test_single_frame_log_holds() {
        let mut cursor = PlaybackCursor::new(PlaybackParams::default());
        assert_eq!(cursor.advance(0, 1), Some(0));
        assert_eq!(cursor.advance(1, 1), Some(0));
    }

    #[test]
    fn test_reset_rewinds() {
        let mut cursor = PlaybackCursor::new(PlaybackParams::default());
        cursor.advance(0, 3);
        cursor.advance(1, 3);
        cursor.reset();
        assert_eq!(cursor.advance(2, 3), Some(0));
    }
}
