//! Decoding of the per-year packed month-length word.
//!
//! Layout, least significant bit first:
//!
//! | bits     | meaning                                                  |
//! |----------|----------------------------------------------------------|
//! | `0..=11` | month flags, bit `11 - i` set when month `i + 1` is long |
//! | `12..=15`| ordinal of the month followed by a leap month, 0 if none |
//! | `16`     | set when the leap month is long                          |
//!
//! Long months have 30 days, short months 29.

use crate::consts::{
    LEAP_MONTH_LONG_BIT, LEAP_MONTH_MASK, LONG_MONTH_DAYS, MAX_MONTH, MONTH_FLAG_BITS,
    SHORT_MONTH_DAYS,
};

/// Raw fields of one packed year word.
///
/// `leap_month` is taken verbatim from bits `12..=15` and may be 13..=15 for
/// a corrupt word; the table builder rejects those.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedYear {
    pub normal_month_days: [u8; 12],
    pub leap_month:        Option<u8>,
    pub leap_month_days:   Option<u8>,
}

impl PackedYear {
    /// Sum of all month lengths, leap month included
    pub fn total_days(&self) -> u16 {
        self.normal_month_days
            .iter()
            .chain(self.leap_month_days.iter())
            .map(|&d| u16::from(d))
            .sum()
    }
}

const fn month_length(long: bool) -> u8 {
    if long { LONG_MONTH_DAYS } else { SHORT_MONTH_DAYS }
}

/// Splits a packed word into its month lengths. Bits above 16 are ignored.
pub const fn decode_packed_year(packed: u32) -> PackedYear {
    let mut normal_month_days = [SHORT_MONTH_DAYS; MAX_MONTH as usize];
    let mut i = 0;
    while i < normal_month_days.len() {
        let bit = MONTH_FLAG_BITS - 1 - i as u32;
        normal_month_days[i] = month_length(packed & (1 << bit) != 0);
        i += 1;
    }

    let leap = ((packed >> MONTH_FLAG_BITS) & LEAP_MONTH_MASK) as u8;
    let (leap_month, leap_month_days) = if leap == 0 {
        (None, None)
    } else {
        (Some(leap), Some(month_length(packed & LEAP_MONTH_LONG_BIT != 0)))
    };

    PackedYear {
        normal_month_days,
        leap_month,
        leap_month_days,
    }
}
