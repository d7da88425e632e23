//! Time source trait

/// Monotonic millisecond clock
///
/// The counter may wrap; consumers compare timestamps with wrapping
/// subtraction.
pub trait MonotonicClock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u32;
}

impl<T: MonotonicClock + ?Sized> MonotonicClock for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}
