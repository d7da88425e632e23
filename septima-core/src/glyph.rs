//! Seven-segment glyph encoding
//!
//! Two encodings are supported, matching the two decode regimes of
//! MAX7219-style controllers:
//!
//! - **Raw** (no-decode): one bit per segment, sent verbatim.
//! - **Code B**: the controller's built-in font, limited to digits,
//!   `-`, `E`, `H`, `L`, `P` and blank.
//!
//! # Raw segment layout
//!
//! ```text
//!   bit:  7   6   5   4   3   2   1   0
//!   seg:  DP  A   B   C   D   E   F   G
//!
//!      ─A─
//!     F   B
//!      ─G─
//!     E   C
//!      ─D─  .DP
//! ```
//!
//! Letters that cannot be told apart on seven segments share a pattern:
//! U/V, H/K/X, A/M, 0/W, 5/S, 2/Z, 1/I and D/G.

/// Segment bits (raw layout)
pub mod seg {
    pub const A: u8 = 1 << 6;
    pub const B: u8 = 1 << 5;
    pub const C: u8 = 1 << 4;
    pub const D: u8 = 1 << 3;
    pub const E: u8 = 1 << 2;
    pub const F: u8 = 1 << 1;
    pub const G: u8 = 1 << 0;
    /// Decimal point, shared by both encodings
    pub const DP: u8 = 1 << 7;
}

/// Blank pattern in raw mode
pub const RAW_BLANK: u8 = 0x00;

/// Blank code in Code B mode
pub const CODE_B_BLANK: u8 = 0x0F;

/// Encode a character as a raw segment pattern
///
/// Letters are case-insensitive. Characters without a glyph render blank.
pub const fn encode_char(c: char) -> u8 {
    match c {
        '0' => 0x7E,
        '1' => 0x30,
        '2' => 0x6D,
        '3' => 0x79,
        '4' => 0x33,
        '5' => 0x5B,
        '6' => 0x5F,
        '7' => 0x70,
        '8' => 0x7F,
        '9' => 0x7B,
        'A' | 'a' => 0x77,
        'B' | 'b' => 0x7C,
        'C' | 'c' => 0x4E,
        'D' | 'd' => 0x5E,
        'E' | 'e' => 0x4F,
        'F' | 'f' => 0x47,
        'G' | 'g' => 0x5E,
        'H' | 'h' => 0x37,
        'I' | 'i' => 0x30,
        'J' | 'j' => 0x3C,
        'K' | 'k' => 0x37,
        'L' | 'l' => 0x0E,
        'M' | 'm' => 0x77,
        'N' | 'n' => 0x15,
        'O' | 'o' => 0x1D,
        'P' | 'p' => 0x67,
        'Q' | 'q' => 0x73,
        'R' | 'r' => 0x05,
        'S' | 's' => 0x5B,
        'T' | 't' => 0x0F,
        'U' | 'u' => 0x3E,
        'V' | 'v' => 0x3E,
        'W' | 'w' => 0x7E,
        'X' | 'x' => 0x37,
        'Y' | 'y' => 0x3B,
        'Z' | 'z' => 0x6D,
        '-' => seg::G,
        '_' => seg::D,
        '=' => seg::D | seg::G,
        '.' => seg::DP,
        _ => RAW_BLANK,
    }
}

/// Check whether the controller's Code B font can show this character
///
/// Case-sensitive: only uppercase `E`, `H`, `L` and `P` are in the font.
pub const fn is_code_b_compatible(c: char) -> bool {
    code_b(c).is_some()
}

/// Code B register value for a character, if the font has it
pub const fn code_b(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        '-' => Some(0x0A),
        'E' => Some(0x0B),
        'H' => Some(0x0C),
        'L' => Some(0x0D),
        'P' => Some(0x0E),
        ' ' => Some(CODE_B_BLANK),
        _ => None,
    }
}
