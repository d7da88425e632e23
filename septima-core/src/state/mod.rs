//! Display content state machine
//!
//! Exactly one kind of content controls the digits at any instant:
//!
//! ```text
//!              display_text / display_time / display_digits
//!        ┌──────────────────────────────────────────────────┐
//!        ▼                                                  │
//!   ┌────────┐  start_scrolling   ┌───────────┐             │
//!   │ Static │ ─────────────────► │ Scrolling │ ────────────┤
//!   └────────┘                    └───────────┘             │
//!        │        animate_pattern       ▲  │                │
//!        │     ┌────────────────────────┘  ▼                │
//!        │     │                    ┌───────────┐           │
//!        └─────┴──────────────────► │ Animating │ ──────────┘
//!                                   └───────────┘
//! ```
//!
//! Scroll and animation state live inside the variant, so both can never be
//! active together.

pub mod animation;
pub mod scroll;

pub use animation::{AnimationState, PatternError};
pub use scroll::{ScrollState, SCROLL_CAPACITY};

/// Number of digit positions on the module
pub const DIGITS: usize = 4;

/// Segment bytes for one refresh of all four digits, leftmost first
pub type Frame = [u8; DIGITS];

/// Which kind of content is in control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Static,
    Scrolling,
    Animating,
}

/// Content state of the display
///
/// `'p` is the lifetime of a borrowed animation pattern.
#[derive(Debug, Clone, Default)]
pub enum DisplayState<'p> {
    /// Digits hold whatever was last written; nothing advances
    #[default]
    Static,
    /// Text window moves one cell per interval
    Scrolling(ScrollState),
    /// Frames of a segment pattern play in a loop
    Animating(AnimationState<'p>),
}

impl<'p> DisplayState<'p> {
    pub fn mode(&self) -> Mode {
        match self {
            DisplayState::Static => Mode::Static,
            DisplayState::Scrolling(_) => Mode::Scrolling,
            DisplayState::Animating(_) => Mode::Animating,
        }
    }

    pub fn is_scrolling(&self) -> bool {
        matches!(self, DisplayState::Scrolling(_))
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, DisplayState::Animating(_))
    }

    /// Advance the active machine
    ///
    /// Returns the raw segment frame to push to the digits if the active
    /// machine's interval has elapsed, `None` otherwise.
    pub fn tick(&mut self, now_ms: u32) -> Option<Frame> {
        match self {
            DisplayState::Static => None,
            DisplayState::Scrolling(scroll) => scroll.tick(now_ms),
            DisplayState::Animating(animation) => animation.tick(now_ms),
        }
    }
}

/// Fixed-interval step timer on a wrapping millisecond clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepTimer {
    last_ms: u32,
    interval_ms: u32,
}

impl StepTimer {
    pub const fn new(interval_ms: u32, now_ms: u32) -> Self {
        Self {
            last_ms: now_ms,
            interval_ms,
        }
    }

    /// Returns true and restarts the interval if it has elapsed
    pub fn poll(&mut self, now_ms: u32) -> bool {
        if now_ms.wrapping_sub(self.last_ms) >= self.interval_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}
