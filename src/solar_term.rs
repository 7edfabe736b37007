//! Solar-term day table.
//!
//! Each Gregorian year is one 24-digit base-36 row. Digit `2 * (m - 1)` and
//! `2 * (m - 1) + 1` give the days of the two terms falling in month `m`;
//! a zero digit means no term was recorded in that slot.

use log::debug;
use serde::Serialize;

use crate::consts::{SOLAR_TERMS_PER_MONTH, SOLAR_TERMS_PER_YEAR, SOLAR_TERM_RADIX};
use crate::{GregorianDate, LocaleData, MAX_MONTH};

/// Largest day a solar-term slot may hold
const MAX_TERM_DAY: u8 = 31;

/// One solar term within a Gregorian month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SolarTerm {
    /// Position in the year, 0 (minor cold) through 23 (winter solstice)
    pub index: usize,
    /// Day of the Gregorian month
    pub day:   u8,
}

/// The two solar-term slots of a Gregorian month, in term order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SolarTermDays {
    pub first:  Option<SolarTerm>,
    pub second: Option<SolarTerm>,
}

impl SolarTermDays {
    /// The term falling on `day`, if any
    pub fn on_day(&self, day: u8) -> Option<SolarTerm> {
        [self.first, self.second]
            .into_iter()
            .flatten()
            .find(|term| term.day == day)
    }
}

/// A malformed solar-term row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolarTermError {
    #[error("Solar-term row {row} has {len} digits, expected {SOLAR_TERMS_PER_YEAR}")]
    RowLength { row: usize, len: usize },

    #[error("Solar-term row {row} has invalid base-36 digit {digit:?} at position {position}")]
    InvalidDigit { row: usize, position: usize, digit: char },

    #[error("Solar-term row {row} names day {day} at position {position}")]
    DayOutOfRange { row: usize, position: usize, day: u8 },
}

/// Decoded solar-term days, one row per Gregorian year from `first_year`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolarTermTable {
    first_year: u16,
    years:      Vec<[u8; SOLAR_TERMS_PER_YEAR]>,
}

fn decode_digit(row: usize, position: usize, digit: char) -> Result<u8, SolarTermError> {
    let value = Some(digit)
        .filter(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        .and_then(|c| c.to_digit(SOLAR_TERM_RADIX))
        .and_then(|v| u8::try_from(v).ok())
        .ok_or(SolarTermError::InvalidDigit {
            row,
            position,
            digit,
        })?;
    if value > MAX_TERM_DAY {
        return Err(SolarTermError::DayOutOfRange {
            row,
            position,
            day: value,
        });
    }
    Ok(value)
}

fn decode_row(row: usize, digits: &str) -> Result<[u8; SOLAR_TERMS_PER_YEAR], SolarTermError> {
    let len = digits.chars().count();
    if len != SOLAR_TERMS_PER_YEAR {
        return Err(SolarTermError::RowLength { row, len });
    }
    let mut days = [0; SOLAR_TERMS_PER_YEAR];
    for (position, (slot, digit)) in days.iter_mut().zip(digits.chars()).enumerate() {
        *slot = decode_digit(row, position, digit)?;
    }
    Ok(days)
}

impl SolarTermTable {
    /// Decodes one row per Gregorian year, the first row being `first_year`.
    ///
    /// # Errors
    /// Returns a `SolarTermError` for the first malformed row.
    pub fn parse<S: AsRef<str>>(first_year: u16, rows: &[S]) -> Result<Self, SolarTermError> {
        let years = rows
            .iter()
            .enumerate()
            .map(|(row, digits)| decode_row(row, digits.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("decoded solar terms for {} years from {first_year}", years.len());
        Ok(Self { first_year, years })
    }

    pub const fn first_year(&self) -> u16 {
        self.first_year
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// The two terms of Gregorian `year`-`month`; both slots are empty for a
    /// year or month outside the table.
    pub fn solar_term_days(&self, year: u16, month: u8) -> SolarTermDays {
        let Some(row) = year
            .checked_sub(self.first_year)
            .and_then(|i| self.years.get(usize::from(i)))
        else {
            return SolarTermDays::default();
        };
        if month == 0 || month > MAX_MONTH {
            return SolarTermDays::default();
        }

        let first_index = usize::from(month - 1) * SOLAR_TERMS_PER_MONTH;
        let slot = |index: usize| {
            row.get(index)
                .copied()
                .filter(|&day| day != 0)
                .map(|day| SolarTerm { index, day })
        };
        SolarTermDays {
            first:  slot(first_index),
            second: slot(first_index + 1),
        }
    }

    /// Index of the solar term falling exactly on `date`, if any.
    pub fn term_index_on(&self, date: &GregorianDate) -> Option<usize> {
        self.solar_term_days(date.year(), date.month())
            .on_day(date.day())
            .map(|term| term.index)
    }

    /// Localized name of the solar term on `date`, or `""` when none falls
    /// on that day.
    pub fn solar_term_name<'l>(&self, date: &GregorianDate, locale: &'l LocaleData) -> &'l str {
        self.term_index_on(date)
            .map_or("", |index| locale.solar_term_name(index))
    }
}
