//! Time sources
//!
//! The display driver only needs a millisecond counter. Time of day would
//! normally come from NTP; this board counts it from a fixed start instead.

use embassy_time::Instant;
use septima_core::traits::MonotonicClock;

/// Millisecond clock backed by the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        // Truncation is fine: consumers use wrapping arithmetic
        Instant::now().as_millis() as u32
    }
}

/// Seconds in a day
const DAY_S: u64 = 24 * 60 * 60;

/// Time of day derived from uptime
#[derive(Debug, Clone, Copy)]
pub struct UptimeTimeOfDay {
    /// Seconds after midnight at boot
    start_s: u64,
}

impl UptimeTimeOfDay {
    pub const fn new(hours: u8, minutes: u8) -> Self {
        Self {
            start_s: (hours as u64 % 24) * 3600 + (minutes as u64 % 60) * 60,
        }
    }

    /// (hours, minutes, seconds) after `uptime_s` seconds
    pub fn at(&self, uptime_s: u64) -> (u8, u8, u8) {
        let t = (self.start_s + uptime_s) % DAY_S;
        ((t / 3600) as u8, ((t / 60) % 60) as u8, (t % 60) as u8)
    }
}
