//! Septima - Seven-Segment Clock Firmware
//!
//! Main firmware binary for an RP2040 driving a 4-digit MAX7219 module.
//!
//! Boot sequence:
//! 1. Spinner animation while the board settles
//! 2. One pass of the scrolling banner
//! 3. Clock face, refreshed once per second with a blinking colon
//!
//! Wiring (SPI0): GPIO17 = CS/LOAD, GPIO18 = CLK, GPIO19 = DIN.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::{self, Spi};
use embassy_time::{Delay, Duration, Instant, Ticker};
use {defmt_rtt as _, panic_probe as _};

use septima_core::glyph::seg;
use septima_core::traits::SevenSegmentDisplay;
use septima_drivers::Max7219Display;

use crate::clock::{EmbassyClock, UptimeTimeOfDay};
use crate::config::DISPLAY_CONFIG;

mod clock;
mod config;

/// Display update tick
const TICK_MS: u64 = 10;

/// How long the boot spinner runs
const BOOT_ANIMATION_MS: u64 = 2_000;

/// Spinner frame interval
const SPINNER_FRAME_MS: u32 = 80;

/// Banner scrolled once after boot
const BANNER: &str = "SEPTIMA";

/// Time shown at power-up until a real time source is wired in
const START_TIME: UptimeTimeOfDay = UptimeTimeOfDay::new(12, 0);

/// One lit segment running around the outside of the module
static SPINNER: [u8; 48] = [
    seg::A, 0, 0, 0, //
    0, seg::A, 0, 0, //
    0, 0, seg::A, 0, //
    0, 0, 0, seg::A, //
    0, 0, 0, seg::B, //
    0, 0, 0, seg::C, //
    0, 0, 0, seg::D, //
    0, 0, seg::D, 0, //
    0, seg::D, 0, 0, //
    seg::D, 0, 0, 0, //
    seg::E, 0, 0, 0, //
    seg::F, 0, 0, 0, //
];

/// Top-level display phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
enum Phase {
    Boot,
    Banner,
    Clock,
}

/// Log a display error and carry on; the next refresh rewrites every digit
fn report<E: core::fmt::Debug>(result: Result<(), E>) {
    if let Err(e) = result {
        warn!("Display error: {}", Debug2Format(&e));
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Septima firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = DISPLAY_CONFIG;
    info!(
        "Display config: brightness={}, scroll={}ms, 12h={}, blink={}, spi={}Hz",
        config.brightness,
        config.scroll_delay_ms,
        config.twelve_hour,
        config.blink_colon,
        config.spi_frequency_hz
    );

    let mut spi_config = spi::Config::default();
    spi_config.frequency = config.spi_frequency_hz;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let cs = Output::new(p.PIN_17, Level::High);

    let mut display = Max7219Display::new(spi, cs, Delay, EmbassyClock);
    match display.begin() {
        Ok(()) => info!("MAX7219 initialized"),
        Err(e) => error!("MAX7219 init failed: {}", Debug2Format(&e)),
    }
    report(display.set_brightness(config.brightness));
    report(display.animate_pattern(&SPINNER, SPINNER_FRAME_MS));

    // One full pass: every window from the first character entering to the
    // last blank screen
    let banner_ms = (BANNER.len() as u64 + 4) * config.scroll_delay_ms as u64;

    let mut phase = Phase::Boot;
    let mut phase_start = Instant::now();
    let mut last_second = u64::MAX;
    let mut ticker = Ticker::every(Duration::from_millis(TICK_MS));

    loop {
        ticker.next().await;
        report(display.update());

        let elapsed_ms = phase_start.elapsed().as_millis();
        let next = match phase {
            Phase::Boot if elapsed_ms >= BOOT_ANIMATION_MS => {
                report(display.start_scrolling(BANNER, config.scroll_delay_ms));
                Some(Phase::Banner)
            }
            Phase::Banner if elapsed_ms >= banner_ms => Some(Phase::Clock),
            Phase::Clock => {
                let uptime_s = Instant::now().as_secs();
                if uptime_s != last_second {
                    last_second = uptime_s;
                    let (hours, minutes, seconds) = START_TIME.at(uptime_s);
                    let colon = !config.blink_colon || seconds % 2 == 0;
                    report(display.display_time(hours, minutes, colon, config.twelve_hour));
                }
                None
            }
            _ => None,
        };

        if let Some(next) = next {
            debug!("Phase {} -> {}", phase, next);
            phase = next;
            phase_start = Instant::now();
        }
    }
}
