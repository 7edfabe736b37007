//! Gregorian to Chinese date conversion.
//!
//! A Chinese date is found by locating its year through the year table's
//! anchors, then consuming whole months from that anchor until the remaining
//! day count fits inside a month.

use std::cmp::Ordering;
use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::consts::{LEAP_MONTH_MARKER, SEXAGENARY_BASE_YEAR, SEXAGENARY_CYCLE};
use crate::year_info::YearInfoTable;
use crate::GregorianDate;

/// A date in the Chinese lunisolar calendar.
///
/// `year` is the Gregorian year in which that Chinese year began. A leap
/// month shares the ordinal of the month it follows and is told apart only
/// by `is_leap_month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChineseDate {
    pub year:          u16,
    pub month:         u8,
    pub day:           u8,
    pub is_leap_month: bool,
}

impl ChineseDate {
    pub const fn new(year: u16, month: u8, day: u8, is_leap_month: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap_month,
        }
    }

    /// New Year's Day of `year`
    pub const fn new_year(year: u16) -> Self {
        Self::new(year, 1, 1, false)
    }

    /// Position of the year in the sixty-year stem-branch cycle, 1 (甲子)
    /// through 60 (癸亥).
    pub const fn sexagenary_year(&self) -> u16 {
        let offset = (self.year as i32 - SEXAGENARY_BASE_YEAR as i32).rem_euclid(SEXAGENARY_CYCLE as i32);
        offset as u16 + 1
    }

    const fn cursor(&self) -> MonthCursor {
        MonthCursor {
            year:    self.year,
            month:   self.month,
            is_leap: self.is_leap_month,
        }
    }

    // Leap month sorts after the normal month of the same ordinal.
    const fn sort_key(&self) -> (u16, u8, bool, u8) {
        (self.year, self.month, self.is_leap_month, self.day)
    }
}

impl PartialOrd for ChineseDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChineseDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl fmt::Display for ChineseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-", self.year)?;
        if self.is_leap_month {
            write!(f, "{LEAP_MONTH_MARKER}")?;
        }
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// A month slot in the walk: a year, an ordinal and the leap flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MonthCursor {
    year:    u16,
    month:   u8,
    is_leap: bool,
}

impl MonthCursor {
    const fn first_of(year: u16) -> Self {
        Self {
            year,
            month: 1,
            is_leap: false,
        }
    }

    const fn day(self, day: u8) -> ChineseDate {
        ChineseDate::new(self.year, self.month, day, self.is_leap)
    }
}

impl YearInfoTable {
    fn month_length(&self, cursor: MonthCursor) -> Option<u8> {
        self.for_year(cursor.year)?
            .month_days(cursor.month, cursor.is_leap)
    }

    /// The month after `cursor`: the leap slot if one follows this ordinal,
    /// then the next ordinal, then month 1 of the next year if the table has it.
    fn next_month(&self, cursor: MonthCursor) -> Option<MonthCursor> {
        let info = self.for_year(cursor.year)?;
        if let Some((month, is_leap)) = info.month_after(cursor.month, cursor.is_leap) {
            return Some(MonthCursor {
                year: cursor.year,
                month,
                is_leap,
            });
        }
        let year = cursor.year.checked_add(1)?;
        if self.for_year(year).is_none() {
            trace!("month walk from {cursor:?} runs past the last supported year");
            return None;
        }
        Some(MonthCursor::first_of(year))
    }

    /// Converts a Gregorian date, or `None` outside the table's span.
    pub fn chinese_date(&self, date: &GregorianDate) -> Option<ChineseDate> {
        // The Chinese year is the Gregorian one once its anchor has passed,
        // otherwise the one before.
        let year = match self.for_year(date.year()) {
            Some(info) if *date >= info.first_day() => date.year(),
            _ => date.year().checked_sub(1)?,
        };
        let Some(info) = self.for_year(year) else {
            trace!("{date} falls outside the year table");
            return None;
        };
        if *date == info.first_day() {
            return Some(ChineseDate::new_year(year));
        }

        let mut remaining = date.days_since(&info.first_day());
        if remaining < 0 {
            return None;
        }
        let mut cursor = MonthCursor::first_of(year);
        loop {
            let length = i32::from(self.month_length(cursor)?);
            if remaining < length {
                return Some(cursor.day(u8::try_from(remaining + 1).ok()?));
            }
            remaining -= length;
            cursor = self.next_month(cursor)?;
        }
    }

    /// The Gregorian date of a Chinese date, or `None` if that year, month
    /// (including the leap flag) or day does not exist in the table.
    pub fn gregorian_date(&self, date: &ChineseDate) -> Option<GregorianDate> {
        let info = self.for_year(date.year)?;
        let length = info.month_days(date.month, date.is_leap_month)?;
        if date.day == 0 || date.day > length {
            return None;
        }
        let target = (date.month, date.is_leap_month);
        let preceding: i32 = info
            .months()
            .take_while(|&slot| slot != target)
            .filter_map(|(month, is_leap)| info.month_days(month, is_leap))
            .map(i32::from)
            .sum();
        info.first_day()
            .add_days(preceding + i32::from(date.day) - 1)
    }

    /// The Chinese date one day after `date`, rolling into the next month,
    /// leap month or year as needed. `None` if `date` does not exist in
    /// the table.
    pub fn next_day(&self, date: &ChineseDate) -> Option<ChineseDate> {
        let length = self.month_length(date.cursor())?;
        if date.day == 0 || date.day > length {
            return None;
        }
        if date.day < length {
            return Some(ChineseDate {
                day: date.day + 1,
                ..*date
            });
        }
        Some(self.next_month(date.cursor())?.day(1))
    }
}
