//! Seven-segment display contract
//!
//! One implementation exists per controller chip. Callers drive the display
//! only through this trait, so a different chip can be swapped in without
//! touching the control loop.

/// Highest supported intensity level
pub const MAX_BRIGHTNESS: u8 = 15;

/// Scroll step interval used by [`SevenSegmentDisplay::start_scrolling_default`]
pub const DEFAULT_SCROLL_DELAY_MS: u32 = 350;

/// Trait for 4-digit seven-segment displays
///
/// All methods run synchronously on the caller's thread. Scrolling and
/// animation only advance when [`update`](Self::update) is called, so it must
/// be polled at least as often as the shortest step interval in use.
///
/// `'p` is the lifetime of animation patterns: the display borrows the
/// pattern instead of copying it.
pub trait SevenSegmentDisplay<'p> {
    /// Error type for bus failures
    type Error;

    /// Run the controller power-on sequence and blank the digits
    fn begin(&mut self) -> Result<(), Self::Error>;

    /// Blank all digits
    ///
    /// Does not stop scrolling or animation; the next step redraws.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Set intensity, clamped to `0..=MAX_BRIGHTNESS`
    fn set_brightness(&mut self, level: u8) -> Result<(), Self::Error>;

    /// Write four hardware-decoded digit values, leftmost first
    fn display_digits(&mut self, d0: u8, d1: u8, d2: u8, d3: u8) -> Result<(), Self::Error>;

    /// Show up to four characters of static text
    ///
    /// A `.` lights the decimal point of the preceding character instead of
    /// taking a position. With `right_justify`, short text is padded on the
    /// left (e.g. `" 2.14"`), otherwise on the right (e.g. `"AP  "`).
    fn display_text(&mut self, text: &str, right_justify: bool) -> Result<(), Self::Error>;

    /// Show a time of day as HHMM
    ///
    /// - `hours`: 0-23, converted to 12-hour form when `hide_leading_zero` is set
    /// - `show_colon`: light the decimal point after the hours as a colon
    /// - `hide_leading_zero`: 12-hour mode with a blank leading zero (" 1:23")
    fn display_time(
        &mut self,
        hours: u8,
        minutes: u8,
        show_colon: bool,
        hide_leading_zero: bool,
    ) -> Result<(), Self::Error>;

    /// Scroll `text` right to left, one position every `scroll_delay_ms`
    ///
    /// Dots merge onto the preceding character, so IP addresses such as
    /// `"192.168.4.1"` scroll compactly.
    fn start_scrolling(&mut self, text: &str, scroll_delay_ms: u32) -> Result<(), Self::Error>;

    /// Loop through raw segment frames, four bytes per frame
    fn animate_pattern(&mut self, pattern: &'p [u8], frame_delay_ms: u32)
        -> Result<(), Self::Error>;

    /// Advance scrolling or animation if its interval has elapsed
    fn update(&mut self) -> Result<(), Self::Error>;

    /// Check if text is currently scrolling
    fn is_scrolling(&self) -> bool;

    /// Check if a pattern is currently animating
    fn is_animating(&self) -> bool;

    /// Scroll with the default step interval
    fn start_scrolling_default(&mut self, text: &str) -> Result<(), Self::Error> {
        self.start_scrolling(text, DEFAULT_SCROLL_DELAY_MS)
    }

    /// Show left-aligned static text
    fn display_text_left(&mut self, text: &str) -> Result<(), Self::Error> {
        self.display_text(text, false)
    }
}
