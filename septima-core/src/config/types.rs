//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::{DEFAULT_SCROLL_DELAY_MS, MAX_BRIGHTNESS};

/// MAX7219 serial clock limit
pub const MAX_SPI_FREQUENCY_HZ: u32 = 10_000_000;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Brightness above `MAX_BRIGHTNESS`
    BrightnessOutOfRange,
    /// Scroll interval of zero
    ZeroScrollDelay,
    /// SPI frequency zero or above the controller limit
    FrequencyOutOfRange,
}

/// Display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Initial intensity (0-15)
    pub brightness: u8,
    /// Milliseconds between scroll steps
    pub scroll_delay_ms: u32,
    /// Show hours in 12-hour form without a leading zero
    pub twelve_hour: bool,
    /// Blink the colon once per second on the clock face
    pub blink_colon: bool,
    /// SPI clock in Hz
    pub spi_frequency_hz: u32,
}

impl DisplayConfig {
    /// 1 MHz bus, mid brightness, 350 ms scroll, 24-hour clock
    pub const fn new() -> Self {
        Self {
            brightness: 8,
            scroll_delay_ms: DEFAULT_SCROLL_DELAY_MS,
            twelve_hour: false,
            blink_colon: true,
            spi_frequency_hz: 1_000_000,
        }
    }

    /// Check every field against hardware limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.brightness > MAX_BRIGHTNESS {
            return Err(ConfigError::BrightnessOutOfRange);
        }
        if self.scroll_delay_ms == 0 {
            return Err(ConfigError::ZeroScrollDelay);
        }
        if self.spi_frequency_hz == 0 || self.spi_frequency_hz > MAX_SPI_FREQUENCY_HZ {
            return Err(ConfigError::FrequencyOutOfRange);
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}
