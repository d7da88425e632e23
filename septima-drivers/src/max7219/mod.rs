//! MAX7219 seven-segment display driver
//!
//! Drives a 4-digit module through the [`SevenSegmentDisplay`] contract.
//! Digit 0 is the leftmost position (register `DIGIT0`).
//!
//! # Decode modes
//!
//! The controller can either decode 4-bit Code B values with its internal
//! font or take raw segment bits. The mode is chosen once per display
//! operation: text uses Code B only when every character is in the font,
//! time and `display_digits` always use Code B, scrolling and animation
//! always use raw segments.
//!
//! # Usage
//!
//! ```ignore
//! let mut display = Max7219Display::new(spi, cs, delay, clock);
//! display.begin()?;
//! display.start_scrolling("192.168.4.1", 350)?;
//!
//! loop {
//!     display.update()?;
//! }
//! ```

pub mod bus;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use heapless::Vec;
use septima_core::glyph::{seg, CODE_B_BLANK, RAW_BLANK};
use septima_core::state::{
    AnimationState, DisplayState, Frame, Mode, PatternError, ScrollState, DIGITS,
};
use septima_core::text::{self, Cell};
use septima_core::time::clock_digits;
use septima_core::traits::{MonotonicClock, SevenSegmentDisplay, MAX_BRIGHTNESS};

pub use bus::{reg, DecodeMask, DecodeMode, RegisterBus};

use bus::{timing, MAX_DIGITS};

/// MAX7219 driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Max7219Error<SpiE, PinE> {
    /// SPI transfer failed
    Spi(SpiE),
    /// Chip select pin could not be driven
    Pin(PinE),
    /// Animation pattern rejected
    Pattern(PatternError),
}

/// MAX7219 display driver
///
/// `'p` is the lifetime of the animation pattern currently borrowed.
pub struct Max7219Display<'p, SPI, CS, D, C> {
    bus: RegisterBus<SPI, CS, D>,
    clock: C,
    state: DisplayState<'p>,
}

type DriverResult<T, SPI, CS> = Result<
    T,
    Max7219Error<
        <SPI as embedded_hal::spi::ErrorType>::Error,
        <CS as embedded_hal::digital::ErrorType>::Error,
    >,
>;

impl<'p, SPI, CS, D, C> Max7219Display<'p, SPI, CS, D, C>
where
    SPI: SpiBus,
    CS: OutputPin,
    D: DelayNs,
    C: MonotonicClock,
{
    /// Create a driver; call [`begin`](SevenSegmentDisplay::begin) before use
    pub fn new(spi: SPI, cs: CS, delay: D, clock: C) -> Self {
        Self {
            bus: RegisterBus::new(spi, cs, delay),
            clock,
            state: DisplayState::Static,
        }
    }

    /// Give back the bus lines and the clock
    pub fn release(self) -> (SPI, CS, D, C) {
        let (spi, cs, delay) = self.bus.release();
        (spi, cs, delay, self.clock)
    }

    /// Which kind of content is in control
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Decode mask last written to the controller
    pub fn decode_mask(&self) -> DecodeMask {
        self.bus.decode_mask()
    }

    fn set_state(&mut self, state: DisplayState<'p>) {
        #[cfg(feature = "defmt")]
        if self.state.mode() != state.mode() {
            defmt::debug!("max7219: {} -> {}", self.state.mode(), state.mode());
        }
        self.state = state;
    }

    /// Write one cell to a digit using the given encoding
    ///
    /// Digits outside the register space are ignored. Under Code B, a
    /// character outside the font is written as a blank.
    fn write_digit(
        &mut self,
        digit: u8,
        cell: Cell,
        mode: DecodeMode,
    ) -> DriverResult<(), SPI, CS> {
        if digit >= MAX_DIGITS {
            return Ok(());
        }

        let value = match mode {
            DecodeMode::CodeB => match cell.code_b() {
                Some(code) => code,
                None if cell.dp => CODE_B_BLANK | seg::DP,
                None => CODE_B_BLANK,
            },
            DecodeMode::Raw => cell.raw(),
        };
        self.bus.write_register(reg::digit(digit), value)
    }

    /// Write raw segment bits to a digit; digits outside the register space are ignored
    fn write_segments(&mut self, digit: u8, segments: u8) -> DriverResult<(), SPI, CS> {
        if digit >= MAX_DIGITS {
            return Ok(());
        }
        self.bus.write_register(reg::digit(digit), segments)
    }

    fn write_frame(&mut self, frame: Frame) -> DriverResult<(), SPI, CS> {
        for (digit, segments) in (0u8..).zip(frame) {
            self.write_segments(digit, segments)?;
        }
        Ok(())
    }
}

impl<'p, SPI, CS, D, C> SevenSegmentDisplay<'p> for Max7219Display<'p, SPI, CS, D, C>
where
    SPI: SpiBus,
    CS: OutputPin,
    D: DelayNs,
    C: MonotonicClock,
{
    type Error = Max7219Error<SPI::Error, CS::Error>;

    fn begin(&mut self) -> DriverResult<(), SPI, CS> {
        self.set_state(DisplayState::Static);
        self.bus.init()
    }

    fn clear(&mut self) -> DriverResult<(), SPI, CS> {
        for digit in 0..DIGITS as u8 {
            let blank = if self.bus.decode_enabled(digit) {
                CODE_B_BLANK
            } else {
                RAW_BLANK
            };
            self.bus.write_register(reg::digit(digit), blank)?;
        }
        Ok(())
    }

    fn set_brightness(&mut self, level: u8) -> DriverResult<(), SPI, CS> {
        self.bus.write_register(reg::INTENSITY, level.min(MAX_BRIGHTNESS))
    }

    fn display_digits(&mut self, d0: u8, d1: u8, d2: u8, d3: u8) -> DriverResult<(), SPI, CS> {
        self.set_state(DisplayState::Static);
        self.bus.set_decode_mask(DecodeMask::CODE_B)?;

        for (digit, value) in (0u8..).zip([d0, d1, d2, d3]) {
            self.bus.write_register(reg::digit(digit), value)?;
        }
        Ok(())
    }

    fn display_text(&mut self, text: &str, right_justify: bool) -> DriverResult<(), SPI, CS> {
        self.set_state(DisplayState::Static);

        let cells: Vec<Cell, DIGITS> = text::merge_dots(text);
        let mode = if cells.iter().all(Cell::is_code_b_compatible) {
            DecodeMode::CodeB
        } else {
            DecodeMode::Raw
        };
        self.bus.set_decode_mask(DecodeMask::for_mode(mode))?;

        let start = if right_justify {
            DIGITS - cells.len()
        } else {
            0
        };

        for position in 0..DIGITS {
            let cell = position
                .checked_sub(start)
                .and_then(|i| cells.get(i))
                .copied()
                .unwrap_or(Cell::BLANK);
            self.write_digit(position as u8, cell, mode)?;
        }
        Ok(())
    }

    fn display_time(
        &mut self,
        hours: u8,
        minutes: u8,
        show_colon: bool,
        hide_leading_zero: bool,
    ) -> DriverResult<(), SPI, CS> {
        self.set_state(DisplayState::Static);

        let digits = clock_digits(hours, minutes, show_colon, hide_leading_zero);

        self.bus.set_decode_mask(DecodeMask::CODE_B)?;
        self.bus.delay_ms(timing::INIT_STEP_MS);

        for (digit, value) in (0u8..).zip(digits) {
            self.bus.write_register(reg::digit(digit), value)?;
            self.bus.delay_ms(timing::DIGIT_STEP_MS);
        }
        Ok(())
    }

    fn start_scrolling(&mut self, text: &str, scroll_delay_ms: u32) -> DriverResult<(), SPI, CS> {
        let scroll = ScrollState::new(text, scroll_delay_ms, self.clock.now_ms());
        let first = scroll.window();

        self.bus.set_decode_mask(DecodeMask::RAW)?;
        self.set_state(DisplayState::Scrolling(scroll));
        self.write_frame(first)
    }

    fn animate_pattern(
        &mut self,
        pattern: &'p [u8],
        frame_delay_ms: u32,
    ) -> DriverResult<(), SPI, CS> {
        let animation = AnimationState::new(pattern, frame_delay_ms, self.clock.now_ms())
            .map_err(Max7219Error::Pattern)?;

        self.bus.set_decode_mask(DecodeMask::RAW)?;
        self.set_state(DisplayState::Animating(animation));
        Ok(())
    }

    fn update(&mut self) -> DriverResult<(), SPI, CS> {
        let now = self.clock.now_ms();
        match self.state.tick(now) {
            Some(frame) => self.write_frame(frame),
            None => Ok(()),
        }
    }

    fn is_scrolling(&self) -> bool {
        self.state.is_scrolling()
    }

    fn is_animating(&self) -> bool {
        self.state.is_animating()
    }
}
