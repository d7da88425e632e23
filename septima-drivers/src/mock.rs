//! Recording bus mocks for host tests

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, ErrorKind, SpiBus};
use septima_core::traits::MonotonicClock;

/// Bus activity in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    CsLow,
    CsHigh,
    Write(Vec<u8>),
    Flush,
    DelayNs(u32),
}

#[derive(Default)]
struct Shared {
    events: RefCell<Vec<Event>>,
    fail_spi: Cell<bool>,
    now_ms: Cell<u32>,
}

/// Shared log handed out to every mock
#[derive(Clone, Default)]
pub struct BusLog(Rc<Shared>);

impl BusLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spi(&self) -> MockSpi {
        MockSpi(self.clone())
    }

    pub fn pin(&self) -> MockPin {
        MockPin(self.clone())
    }

    pub fn delay(&self) -> MockDelay {
        MockDelay(self.clone())
    }

    pub fn clock(&self) -> MockClock {
        MockClock(self.clone())
    }

    fn push(&self, event: Event) {
        self.0.events.borrow_mut().push(event);
    }

    /// Make every following SPI call fail
    pub fn fail_spi(&self, fail: bool) {
        self.0.fail_spi.set(fail);
    }

    pub fn set_now(&self, ms: u32) {
        self.0.now_ms.set(ms);
    }

    pub fn advance(&self, ms: u32) {
        self.0.now_ms.set(self.0.now_ms.get().wrapping_add(ms));
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.events.borrow_mut().clear();
    }

    /// Register writes as (address, value) pairs
    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.0
            .events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Write(bytes) if bytes.len() == 2 => Some((bytes[0], bytes[1])),
                _ => None,
            })
            .collect()
    }

    /// Take the writes recorded so far and reset the log
    pub fn take_writes(&self) -> Vec<(u8, u8)> {
        let writes = self.writes();
        self.clear();
        writes
    }

    pub fn total_delay_ns(&self) -> u64 {
        self.0
            .events
            .borrow()
            .iter()
            .map(|event| match event {
                Event::DelayNs(ns) => *ns as u64,
                _ => 0,
            })
            .sum()
    }

    /// Check every data transfer happens with CS low and is flushed before CS rises
    pub fn is_well_framed(&self) -> bool {
        let mut selected = false;
        let mut pending = false;
        for event in self.0.events.borrow().iter() {
            match event {
                Event::CsLow => selected = true,
                Event::CsHigh => {
                    if pending {
                        return false;
                    }
                    selected = false;
                }
                Event::Write(_) => {
                    if !selected {
                        return false;
                    }
                    pending = true;
                }
                Event::Flush => pending = false,
                Event::DelayNs(_) => {}
            }
        }
        !selected
    }
}

pub struct MockSpi(BusLog);

impl spi::ErrorType for MockSpi {
    type Error = ErrorKind;
}

impl MockSpi {
    fn check(&self) -> Result<(), ErrorKind> {
        if self.0 .0.fail_spi.get() {
            Err(ErrorKind::Other)
        } else {
            Ok(())
        }
    }
}

impl SpiBus for MockSpi {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        self.check()?;
        words.fill(0);
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        self.check()?;
        self.0.push(Event::Write(words.to_vec()));
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        self.write(write)?;
        read.fill(0);
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        self.write(words)?;
        words.fill(0);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.check()?;
        self.0.push(Event::Flush);
        Ok(())
    }
}

pub struct MockPin(BusLog);

impl digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.push(Event::CsLow);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.push(Event::CsHigh);
        Ok(())
    }
}

pub struct MockDelay(BusLog);

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.push(Event::DelayNs(ns));
    }
}

pub struct MockClock(BusLog);

impl MonotonicClock for MockClock {
    fn now_ms(&self) -> u32 {
        self.0 .0.now_ms.get()
    }
}
