//! Clock face digit layout
//!
//! Converts an hour/minute pair into the four Code B digits shown on the
//! module: hours-tens, hours-ones, minutes-tens, minutes-ones.

use crate::glyph::{seg, CODE_B_BLANK};

/// Convert a 24-hour value to 12-hour form (0 -> 12, 13..=23 -> 1..=11)
pub const fn to_twelve_hour(hours: u8) -> u8 {
    match hours {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    }
}

/// Code B register values for a time of day
///
/// - `twelve_hour`: convert hours to 12-hour form and blank a zero tens digit
/// - `colon`: light the decimal point on hours-ones as a colon stand-in
///
/// Hours and minutes are not range checked; the packed value
/// `hours * 100 + minutes` is split into its lowest four decimal digits.
pub fn clock_digits(hours: u8, minutes: u8, colon: bool, twelve_hour: bool) -> [u8; 4] {
    let hours = if twelve_hour {
        to_twelve_hour(hours)
    } else {
        hours
    };

    let packed = hours as u32 * 100 + minutes as u32;
    let mut digits = [
        ((packed / 1000) % 10) as u8,
        ((packed / 100) % 10) as u8,
        ((packed / 10) % 10) as u8,
        (packed % 10) as u8,
    ];

    if twelve_hour && digits[0] == 0 {
        digits[0] = CODE_B_BLANK;
    }
    if colon {
        digits[1] |= seg::DP;
    }

    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_hour_conversion() {
        assert_eq!(to_twelve_hour(0), 12);
        assert_eq!(to_twelve_hour(1), 1);
        assert_eq!(to_twelve_hour(12), 12);
        assert_eq!(to_twelve_hour(13), 1);
        assert_eq!(to_twelve_hour(23), 11);
    }

    #[test]
    fn test_midnight_in_twelve_hour() {
        assert_eq!(clock_digits(0, 5, false, true), [1, 2, 0, 5]);
    }

    #[test]
    fn test_afternoon_blanks_leading_zero() {
        assert_eq!(clock_digits(13, 30, false, true), [CODE_B_BLANK, 1, 3, 0]);
    }

    #[test]
    fn test_twenty_four_hour_keeps_zero() {
        assert_eq!(clock_digits(7, 9, false, false), [0, 7, 0, 9]);
        assert_eq!(clock_digits(0, 0, false, false), [0, 0, 0, 0]);
        assert_eq!(clock_digits(23, 59, false, false), [2, 3, 5, 9]);
    }

    #[test]
    fn test_colon_on_hours_ones() {
        assert_eq!(clock_digits(12, 34, true, false), [1, 2 | 0x80, 3, 4]);
        assert_eq!(clock_digits(9, 15, true, true), [CODE_B_BLANK, 9 | 0x80, 1, 5]);
    }

    #[test]
    fn test_out_of_range_input_does_not_panic() {
        // 255 * 100 + 255 = 25755, lowest four digits shown
        assert_eq!(clock_digits(255, 255, false, false), [5, 7, 5, 5]);
    }
}
