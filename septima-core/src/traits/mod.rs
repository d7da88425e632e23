//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and chip-specific display drivers.

pub mod clock;
pub mod display;

pub use clock::MonotonicClock;
pub use display::{SevenSegmentDisplay, DEFAULT_SCROLL_DELAY_MS, MAX_BRIGHTNESS};
