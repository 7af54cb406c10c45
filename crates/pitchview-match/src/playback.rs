use std::time::Duration;

use crate::error::MatchError;

/// Converts elapsed wall time into the index of the frame that should be on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackClock {
    fps: f64,
    frame_interval: Duration,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self {
            fps: 25.0,
            frame_interval: Duration::from_millis(40),
        }
    }
}

impl PlaybackClock {
    /// Create a clock running at `fps` frames per second.
    ///
    /// The frame interval `1 / fps` must be representable as a non-zero
    /// [`Duration`], which bounds `fps` to at most one frame per nanosecond.
    pub fn new(fps: f64) -> Result<Self, MatchError> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(MatchError::InvalidFrameRate(fps));
        }
        let frame_interval = Duration::try_from_secs_f64(1.0 / fps)
            .map_err(|_| MatchError::InvalidFrameRate(fps))?;
        if frame_interval.is_zero() {
            return Err(MatchError::InvalidFrameRate(fps));
        }
        Ok(Self {
            fps,
            frame_interval,
        })
    }

    /// Frames per second.
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Time between two consecutive frames.
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// The frame index due after `elapsed` time since playback start.
    pub fn expected_frame(&self, elapsed: Duration) -> usize {
        (elapsed.as_secs_f64() * self.fps).floor() as usize
    }
}

/// Playback position over a sequence of frames.
///
/// The caller owns the clock source and passes the elapsed time on every tick,
/// which keeps the replay deterministic.
#[derive(Debug, Clone)]
pub struct Playback {
    clock: PlaybackClock,
    num_frames: usize,
    current: usize,
}

impl Playback {
    /// Create a playback over `num_frames` frames.
    pub fn new(clock: PlaybackClock, num_frames: usize) -> Self {
        Self {
            clock,
            num_frames,
            current: 0,
        }
    }

    /// Advance by one frame if it is due at `elapsed`.
    ///
    /// At most one frame is returned per call, so a slow caller catches up
    /// over several ticks instead of skipping frames.
    pub fn advance(&mut self, elapsed: Duration) -> Option<usize> {
        if self.is_finished() || self.clock.expected_frame(elapsed) < self.current {
            return None;
        }
        let index = self.current;
        self.current += 1;
        Some(index)
    }

    /// Index of the next frame to be shown.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Whether all frames have been shown.
    pub fn is_finished(&self) -> bool {
        self.current >= self.num_frames
    }

    /// Restart from the first frame.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// The clock driving this playback.
    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_invalid_fps() {
        for fps in [0.0, -25.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                PlaybackClock::new(fps),
                Err(MatchError::InvalidFrameRate(_))
            ));
        }
    }

    #[test]
    fn test_clock_unrepresentable_interval() {
        // 1 / fps overflows a Duration
        assert!(matches!(
            PlaybackClock::new(1e-300),
            Err(MatchError::InvalidFrameRate(_))
        ));
        // 1 / fps rounds to zero nanoseconds
        assert!(matches!(
            PlaybackClock::new(1e12),
            Err(MatchError::InvalidFrameRate(_))
        ));
    }

    #[test]
    fn test_clock_extreme_valid_rates() -> Result<(), MatchError> {
        let slow = PlaybackClock::new(0.5)?;
        assert_eq!(slow.frame_interval(), Duration::from_secs(2));

        let fast = PlaybackClock::new(1e9)?;
        assert_eq!(fast.frame_interval(), Duration::from_nanos(1));

        // playback always terminates when ticking by the frame interval
        let mut playback = Playback::new(fast, 3);
        let mut elapsed = Duration::ZERO;
        let mut shown = 0;
        for _ in 0..1000 {
            if playback.is_finished() {
                break;
            }
            if playback.advance(elapsed).is_some() {
                shown += 1;
            }
            elapsed += fast.frame_interval();
        }
        assert_eq!(shown, 3);
        assert!(playback.is_finished());
        Ok(())
    }

    #[test]
    fn test_clock_expected_frame() {
        let clock = PlaybackClock::default();
        assert_eq!(clock.fps(), 25.0);
        assert_eq!(clock.frame_interval(), Duration::from_millis(40));
        assert_eq!(clock.expected_frame(Duration::ZERO), 0);
        assert_eq!(clock.expected_frame(Duration::from_millis(39)), 0);
        assert_eq!(clock.expected_frame(Duration::from_millis(41)), 1);
        assert_eq!(clock.expected_frame(Duration::from_secs(2)), 50);
    }

    #[test]
    fn test_playback_one_frame_per_tick() {
        let mut playback = Playback::new(PlaybackClock::default(), 3);
        assert_eq!(playback.advance(Duration::ZERO), Some(0));
        // frame 1 is not due yet
        assert_eq!(playback.advance(Duration::from_millis(10)), None);
        // late tick: frames are caught up one at a time
        assert_eq!(playback.advance(Duration::from_millis(500)), Some(1));
        assert_eq!(playback.advance(Duration::from_millis(500)), Some(2));
        assert!(playback.is_finished());
        assert_eq!(playback.advance(Duration::from_secs(10)), None);
    }

    #[test]
    fn test_playback_reset() {
        let mut playback = Playback::new(PlaybackClock::default(), 1);
        assert_eq!(playback.advance(Duration::ZERO), Some(0));
        assert!(playback.is_finished());
        playback.reset();
        assert_eq!(playback.current(), 0);
        assert_eq!(playback.advance(Duration::ZERO), Some(0));
    }

    #[test]
    fn test_playback_empty() {
        let mut playback = Playback::new(PlaybackClock::default(), 0);
        assert!(playback.is_finished());
        assert_eq!(playback.advance(Duration::from_secs(1)), None);
    }
}
