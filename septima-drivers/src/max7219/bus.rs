//! MAX7219 register bus
//!
//! # SPI Protocol
//!
//! Every transfer is one 16-bit word, MSB first (SPI mode 0, up to 10 MHz):
//!
//! ```text
//!   CS ‾‾\________________________________/‾‾‾‾
//!        │ D15..D8: address │ D7..D0: data │
//! ```
//!
//! Data is latched on the rising edge of CS (LOAD). The controller needs a
//! short settle time after each latch before the next frame.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use super::Max7219Error;

/// MAX7219 register addresses
pub mod reg {
    /// Leftmost digit
    pub const DIGIT0: u8 = 0x01;
    pub const DIGIT1: u8 = 0x02;
    pub const DIGIT2: u8 = 0x03;
    /// Rightmost digit on a 4-digit module
    pub const DIGIT3: u8 = 0x04;
    /// Per-digit Code B decode enable
    pub const DECODE_MODE: u8 = 0x09;
    /// Global intensity (0-15)
    pub const INTENSITY: u8 = 0x0A;
    /// Number of scanned digits minus one
    pub const SCAN_LIMIT: u8 = 0x0B;
    /// 0 = shutdown, 1 = normal operation
    pub const SHUTDOWN: u8 = 0x0C;
    /// 1 = all segments on
    pub const DISPLAY_TEST: u8 = 0x0F;

    /// Digit register for a digit index (0-7)
    pub const fn digit(index: u8) -> u8 {
        DIGIT0 + index
    }
}

/// Settle times
pub mod timing {
    /// After every register latch
    pub const WRITE_SETTLE_US: u32 = 10;
    /// Between control register writes during power-up
    pub const INIT_STEP_MS: u32 = 10;
    /// Between digit writes during power-up and on the clock face
    pub const DIGIT_STEP_MS: u32 = 5;
    /// After leaving shutdown
    pub const WAKE_MS: u32 = 50;
}

/// Digit registers the controller can address
pub const MAX_DIGITS: u8 = 8;

/// Digits scanned on a 4-digit module
pub const ACTIVE_DIGITS: u8 = 4;

/// Intensity programmed at power-up
pub const DEFAULT_INTENSITY: u8 = 0x08;

/// Encoding used for digit register writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeMode {
    /// Controller's built-in Code B font
    CodeB,
    /// One bit per segment
    Raw,
}

/// Decode-mode register value, one bit per digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecodeMask(u8);

impl DecodeMask {
    /// No digit decoded
    pub const RAW: DecodeMask = DecodeMask(0x00);
    /// All active digits decoded
    pub const CODE_B: DecodeMask = DecodeMask((1 << ACTIVE_DIGITS) - 1);

    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Mask applying one mode to every active digit
    pub const fn for_mode(mode: DecodeMode) -> Self {
        match mode {
            DecodeMode::CodeB => Self::CODE_B,
            DecodeMode::Raw => Self::RAW,
        }
    }

    /// Check if Code B decode is on for a digit
    pub const fn is_decoded(&self, digit: u8) -> bool {
        digit < MAX_DIGITS && self.0 & (1 << digit) != 0
    }
}

/// Register-level access to a MAX7219 over SPI with a software chip select
///
/// Besides the bus lines, the only state kept is the decode mask last
/// written to the controller.
pub struct RegisterBus<SPI, CS, D> {
    spi: SPI,
    cs: CS,
    delay: D,
    decode: DecodeMask,
}

impl<SPI, CS, D> RegisterBus<SPI, CS, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    D: DelayNs,
{
    /// Wrap the bus lines; nothing is sent until [`init`](Self::init)
    pub fn new(spi: SPI, cs: CS, delay: D) -> Self {
        Self {
            spi,
            cs,
            delay,
            decode: DecodeMask::RAW,
        }
    }

    /// Give back the bus lines
    pub fn release(self) -> (SPI, CS, D) {
        (self.spi, self.cs, self.delay)
    }

    /// Decode mask last written to the controller
    pub fn decode_mask(&self) -> DecodeMask {
        self.decode
    }

    /// Check if Code B decode is on for a digit
    pub fn decode_enabled(&self, digit: u8) -> bool {
        self.decode.is_decoded(digit)
    }

    /// Write one register
    pub fn write_register(
        &mut self,
        address: u8,
        value: u8,
    ) -> Result<(), Max7219Error<SPI::Error, CS::Error>> {
        self.cs.set_low().map_err(Max7219Error::Pin)?;
        let transfer = self
            .spi
            .write(&[address, value])
            .and_then(|()| self.spi.flush());
        // LOAD goes back high even when the transfer failed
        let deselect = self.cs.set_high();
        transfer.map_err(Max7219Error::Spi)?;
        deselect.map_err(Max7219Error::Pin)?;

        self.delay.delay_us(timing::WRITE_SETTLE_US);
        Ok(())
    }

    /// Program the decode-mode register
    pub fn set_decode_mask(
        &mut self,
        mask: DecodeMask,
    ) -> Result<(), Max7219Error<SPI::Error, CS::Error>> {
        self.write_register(reg::DECODE_MODE, mask.bits())?;
        self.decode = mask;
        Ok(())
    }

    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Power-up sequence
    ///
    /// The order matters: writing digits or leaving shutdown before the scan
    /// limit and decode mode are set can latch garbage on some modules.
    pub fn init(&mut self) -> Result<(), Max7219Error<SPI::Error, CS::Error>> {
        // CS must idle high before the first clock edge
        self.cs.set_high().map_err(Max7219Error::Pin)?;
        self.delay.delay_ms(timing::INIT_STEP_MS);

        self.write_register(reg::DISPLAY_TEST, 0x00)?;
        self.delay.delay_ms(timing::INIT_STEP_MS);
        self.write_register(reg::SHUTDOWN, 0x00)?;
        self.delay.delay_ms(timing::INIT_STEP_MS);
        self.write_register(reg::SCAN_LIMIT, ACTIVE_DIGITS - 1)?;
        self.delay.delay_ms(timing::INIT_STEP_MS);
        self.set_decode_mask(DecodeMask::RAW)?;
        self.delay.delay_ms(timing::INIT_STEP_MS);
        self.write_register(reg::INTENSITY, DEFAULT_INTENSITY)?;
        self.delay.delay_ms(timing::INIT_STEP_MS);

        for digit in 0..ACTIVE_DIGITS {
            self.write_register(reg::digit(digit), 0x00)?;
            self.delay.delay_ms(timing::DIGIT_STEP_MS);
        }

        self.write_register(reg::SHUTDOWN, 0x01)?;
        self.delay.delay_ms(timing::WAKE_MS);

        self.cs.set_high().map_err(Max7219Error::Pin)?;
        Ok(())
    }
}
