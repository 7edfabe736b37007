//! Plain Gregorian calendar dates, the input side of every conversion.

use std::num::NonZeroU8;
use std::str::FromStr;

use crate::consts::{DATE_SEPARATOR, DECEMBER, JANUARY};
use crate::prelude::*;
use crate::range::DateRange;
use crate::types::{self, Day, Month, Year, days_in_month};
use crate::ParseError;

/// A proleptic Gregorian calendar date with no time component.
///
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{}-{}", year, month, day)]
pub struct GregorianDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// A Gregorian month of a specific year, e.g. the page of a wall calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{}", year, month)]
pub struct GregorianYearMonth {
    year:  Year,
    month: Month,
}

impl GregorianDate {
    /// # Errors
    /// Returns a `ParseError` naming the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// The month this date falls in
    pub const fn year_month(&self) -> GregorianYearMonth {
        GregorianYearMonth {
            year:  self.year,
            month: self.month,
        }
    }

    /// Julian day number of this date; consecutive dates differ by one.
    pub const fn day_number(&self) -> i32 {
        types::day_number(self.year(), self.month(), self.day())
    }

    /// Builds the date with the given Julian day number, if it lies in
    /// `0001-01-01..=9999-12-31`.
    pub fn from_day_number(jdn: i32) -> Option<Self> {
        let (y, m, d) = types::civil_from_day_number(jdn);
        Self::new(
            u16::try_from(y).ok()?,
            u8::try_from(m).ok()?,
            u8::try_from(d).ok()?,
        )
        .ok()
    }

    /// Moves `days` calendar days forward (or backward when negative).
    pub fn add_days(&self, days: i32) -> Option<Self> {
        Self::from_day_number(self.day_number().checked_add(days)?)
    }

    /// Signed number of days from `earlier` to `self`.
    pub const fn days_since(&self, earlier: &Self) -> i32 {
        self.day_number() - earlier.day_number()
    }

    /// The next calendar day, `None` past 9999-12-31.
    pub fn succ(&self) -> Option<Self> {
        let (y, m, d) = (self.year(), self.month(), self.day());
        if d < days_in_month(y, m) {
            return Self::new(y, m, d + 1).ok();
        }
        Some(self.year_month().succ()?.first_day())
    }
}

impl GregorianYearMonth {
    /// # Errors
    /// Returns `ParseError::InvalidYear` / `InvalidMonth` for out-of-range parts.
    pub fn new(year: u16, month: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
        })
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    pub const fn first_day(&self) -> GregorianDate {
        self.day_at(NonZeroU8::MIN)
    }

    pub const fn last_day(&self) -> GregorianDate {
        match NonZeroU8::new(self.days_in_month()) {
            Some(last) => self.day_at(last),
            None => self.first_day(),
        }
    }

    /// Every day of the month, first to last.
    pub const fn days(&self) -> DateRange {
        DateRange::from_ordered(self.first_day(), self.last_day())
    }

    /// The following month, `None` after 9999-12.
    pub fn succ(&self) -> Option<Self> {
        if self.month() < DECEMBER {
            Self::new(self.year(), self.month() + 1).ok()
        } else {
            Self::new(self.year().checked_add(1)?, JANUARY).ok()
        }
    }

    // Only called with day 1 or the month's own length.
    const fn day_at(&self, day: NonZeroU8) -> GregorianDate {
        GregorianDate {
            year:  self.year,
            month: self.month,
            day:   Day::from_non_zero(day),
        }
    }
}

impl From<GregorianDate> for GregorianYearMonth {
    fn from(date: GregorianDate) -> Self {
        date.year_month()
    }
}

// --- parsing ---

fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

fn split_parts(s: &str, expected: usize) -> Result<Vec<&str>, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    if parts.len() != expected {
        return Err(ParseError::InvalidFormat(format!(
            "Expected {} {} separators, found {}",
            expected - 1,
            DATE_SEPARATOR,
            parts.len() - 1
        )));
    }
    Ok(parts)
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = split_parts(s, 3)?;
        Self::new(parse_u16(parts[0])?, parse_u8(parts[1])?, parse_u8(parts[2])?)
    }
}

impl FromStr for GregorianYearMonth {
    type Err = ParseError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = split_parts(s, 2)?;
        Self::new(parse_u16(parts[0])?, parse_u8(parts[1])?)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for GregorianYearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianYearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
