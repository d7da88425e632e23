//! Scrolling text window

use heapless::Vec;

use super::{Frame, StepTimer, DIGITS};
use crate::text::{extend_merged, Cell};

/// Maximum cells in a scroll buffer, padding included
pub const SCROLL_CAPACITY: usize = 64;

/// Scroll buffer state
///
/// The buffer is the caller's text (dots merged) framed by one blank screen
/// on each side, so the text enters from the right and leaves on the left.
/// `offset` is the first cell of the window currently shown and stays in
/// `0..=len - DIGITS`.
#[derive(Debug, Clone)]
pub struct ScrollState {
    cells: Vec<Cell, SCROLL_CAPACITY>,
    offset: usize,
    timer: StepTimer,
}

impl ScrollState {
    /// Build the padded buffer, positioned on the first window
    ///
    /// Text longer than the buffer allows is truncated.
    pub fn new(text: &str, interval_ms: u32, now_ms: u32) -> Self {
        let mut cells = Vec::new();
        for _ in 0..DIGITS {
            let _ = cells.push(Cell::BLANK);
        }

        extend_merged(&mut cells, text, SCROLL_CAPACITY - DIGITS);

        for _ in 0..DIGITS {
            let _ = cells.push(Cell::BLANK);
        }

        Self {
            cells,
            offset: 0,
            timer: StepTimer::new(interval_ms, now_ms),
        }
    }

    /// Buffer length in cells, padding included
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: the buffer holds at least its padding
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Raw segment frame for the current window
    pub fn window(&self) -> Frame {
        core::array::from_fn(|i| {
            self.cells
                .get(self.offset + i)
                .map(Cell::raw)
                .unwrap_or(0)
        })
    }

    /// Last valid window offset
    fn max_offset(&self) -> usize {
        self.cells.len().saturating_sub(DIGITS)
    }

    /// Move to the next window, wrapping after the final (all blank) one
    pub fn advance(&mut self) {
        self.offset += 1;
        if self.offset > self.max_offset() {
            self.offset = 0;
        }
    }

    /// Step one cell if the interval has elapsed and return the new window
    ///
    /// The initial window is rendered by the caller when scrolling starts,
    /// so the first tick already shows the shifted window instead of
    /// repeating the first one.
    pub fn tick(&mut self, now_ms: u32) -> Option<Frame> {
        if !self.timer.poll(now_ms) {
            return None;
        }
        self.advance();
        Some(self.window())
    }
}
