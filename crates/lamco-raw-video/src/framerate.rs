//! Exact rational framerate
//!
//! Framerates are kept as the negotiated `frames / seconds` pair so that
//! rates like NTSC (30000/1001) never drift through floating point.

use std::fmt;
use std::time::Duration;

use crate::error::{RawVideoError, Result};

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Frames per second as an exact `frames / seconds` ratio
///
/// The pair is stored as given and never reduced, so `30/1` and `60/2`
/// compare unequal.
///
/// # Examples
///
/// ```rust
/// use lamco_raw_video::Framerate;
///
/// let ntsc = Framerate::new(30000, 1001).expect("valid framerate");
/// assert_eq!(ntsc.to_string(), "30000/1001");
/// assert!((ntsc.as_f64() - 29.97).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Framerate {
    frames: u32,
    seconds: u32,
}

impl Framerate {
    /// Create a framerate of `frames` over `seconds`
    ///
    /// `frames` may be zero. `seconds` must be positive.
    pub fn new(frames: u32, seconds: u32) -> Result<Self> {
        if seconds == 0 {
            return Err(RawVideoError::InvalidFramerate { frames, seconds });
        }
        Ok(Self { frames, seconds })
    }

    /// Number of frames
    #[must_use]
    pub const fn frames(&self) -> u32 {
        self.frames
    }

    /// Number of seconds the frames span
    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Approximate frames per second
    ///
    /// Lossy - use for display and logging only.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        f64::from(self.frames) / f64::from(self.seconds)
    }

    /// Duration of a single frame, truncated to whole nanoseconds
    ///
    /// Returns `None` for a zero-frame rate.
    #[must_use]
    pub fn frame_duration(&self) -> Option<Duration> {
        if self.frames == 0 {
            return None;
        }
        // u32::MAX seconds in nanoseconds still fits in u64
        let nanos = u64::from(self.seconds) * NANOS_PER_SEC / u64::from(self.frames);
        Some(Duration::from_nanos(nanos))
    }
}

impl TryFrom<(u32, u32)> for Framerate {
    type Error = RawVideoError;

    fn try_from((frames, seconds): (u32, u32)) -> Result<Self> {
        Self::new(frames, seconds)
    }
}

impl fmt::Display for Framerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.frames, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_seconds() {
        assert_eq!(
            Framerate::new(30, 0),
            Err(RawVideoError::InvalidFramerate { frames: 30, seconds: 0 })
        );
    }

    #[test]
    fn test_zero_frames_allowed() {
        let rate = Framerate::new(0, 1).expect("zero frames is valid");
        assert_eq!(rate.frames(), 0);
        assert_eq!(rate.frame_duration(), None);
    }

    #[test]
    fn test_pair_not_reduced() {
        let a = Framerate::new(30, 1).expect("valid");
        let b = Framerate::new(60, 2).expect("valid");
        assert_ne!(a, b);
        assert_eq!(b.seconds(), 2);
    }

    #[test]
    fn test_frame_duration() {
        let rate = Framerate::new(25, 1).expect("valid");
        assert_eq!(rate.frame_duration(), Some(Duration::from_millis(40)));

        let ntsc = Framerate::new(30000, 1001).expect("valid");
        assert_eq!(ntsc.frame_duration(), Some(Duration::from_nanos(33_366_666)));

        let slow = Framerate::new(1, u32::MAX).expect("valid");
        assert_eq!(slow.frame_duration(), Some(Duration::from_secs(u64::from(u32::MAX))));
    }

    #[test]
    fn test_try_from_tuple() {
        let rate = Framerate::try_from((60, 1)).expect("valid");
        assert_eq!(rate.frames(), 60);
        assert!(Framerate::try_from((60, 0)).is_err());
    }

    #[test]
    fn test_display() {
        let rate = Framerate::new(30000, 1001).expect("valid");
        assert_eq!(rate.to_string(), "30000/1001");
    }
}
