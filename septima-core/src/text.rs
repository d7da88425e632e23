//! Text preprocessing for digit cells
//!
//! A `.` never takes a digit position of its own: it lights the decimal point
//! of the cell before it, so `"12.5"` occupies three cells.

use heapless::Vec;

use crate::glyph::{self, seg};

/// One digit position: a character plus its decimal point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell {
    pub ch: char,
    pub dp: bool,
}

impl Cell {
    /// An unlit position
    pub const BLANK: Cell = Cell::new(' ');

    pub const fn new(ch: char) -> Self {
        Self { ch, dp: false }
    }

    /// Raw segment pattern, decimal point included
    pub const fn raw(&self) -> u8 {
        let bits = glyph::encode_char(self.ch);
        if self.dp {
            bits | seg::DP
        } else {
            bits
        }
    }

    /// Code B register value, decimal point included
    ///
    /// Returns `None` if the character is outside the Code B font.
    pub const fn code_b(&self) -> Option<u8> {
        match glyph::code_b(self.ch) {
            Some(code) if self.dp => Some(code | seg::DP),
            other => other,
        }
    }

    pub const fn is_code_b_compatible(&self) -> bool {
        glyph::is_code_b_compatible(self.ch)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Append `text` to `cells`, merging dots onto the preceding cell
///
/// Stops at the first character that would make `cells` longer than `limit`
/// (or its capacity). Dots directly after the last accepted cell are still
/// merged. A dot with no preceding cell is dropped.
pub fn extend_merged<const N: usize>(cells: &mut Vec<Cell, N>, text: &str, limit: usize) {
    let limit = limit.min(N);

    for ch in text.chars() {
        if ch == '.' {
            if let Some(last) = cells.last_mut() {
                last.dp = true;
            }
            continue;
        }

        if cells.len() >= limit {
            break;
        }
        // Cannot fail: length is below capacity
        let _ = cells.push(Cell::new(ch));
    }
}

/// Merge dots in `text` and keep the first `N` cells
pub fn merge_dots<const N: usize>(text: &str) -> Vec<Cell, N> {
    let mut cells = Vec::new();
    extend_merged(&mut cells, text, N);
    cells
}
