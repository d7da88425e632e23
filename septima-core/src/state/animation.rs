//! Segment pattern animation

use super::{Frame, StepTimer, DIGITS};

/// Reasons a pattern buffer cannot be animated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternError {
    /// Pattern holds no complete frame
    Empty,
    /// Pattern length is not a multiple of four bytes
    PartialFrame,
}

/// Animation playback state
///
/// The pattern is borrowed for `'p`: raw segment bytes, four per frame,
/// leftmost digit first.
#[derive(Debug, Clone)]
pub struct AnimationState<'p> {
    pattern: &'p [u8],
    frame: usize,
    timer: StepTimer,
}

impl<'p> AnimationState<'p> {
    /// Start at frame 0; the frame is shown once the first interval elapses
    pub fn new(pattern: &'p [u8], interval_ms: u32, now_ms: u32) -> Result<Self, PatternError> {
        if pattern.len() < DIGITS {
            return Err(PatternError::Empty);
        }
        if pattern.len() % DIGITS != 0 {
            return Err(PatternError::PartialFrame);
        }

        Ok(Self {
            pattern,
            frame: 0,
            timer: StepTimer::new(interval_ms, now_ms),
        })
    }

    pub fn frame_count(&self) -> usize {
        self.pattern.len() / DIGITS
    }

    /// Index of the frame shown on the next step
    pub fn frame_index(&self) -> usize {
        self.frame
    }

    /// Segment bytes of the frame shown on the next step
    pub fn current(&self) -> Frame {
        let start = self.frame * DIGITS;
        core::array::from_fn(|i| self.pattern[start + i])
    }

    /// Return the current frame and move to the next, looping at the end
    pub fn advance(&mut self) -> Frame {
        let frame = self.current();
        self.frame += 1;
        if self.frame >= self.frame_count() {
            self.frame = 0;
        }
        frame
    }

    /// Show one frame if the interval has elapsed
    pub fn tick(&mut self, now_ms: u32) -> Option<Frame> {
        if self.timer.poll(now_ms) {
            Some(self.advance())
        } else {
            None
        }
    }
}
