//! Per-year month-length metadata, built once from the packed table.

use log::{debug, warn};
use serde::Serialize;

use crate::consts::MAX_MONTH;
use crate::packed::decode_packed_year;
use crate::prelude::*;
use crate::range::DateRange;
use crate::types::Month;
use crate::GregorianDate;

/// One Chinese year, labelled by the Gregorian year its New Year's Day falls in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearInfo {
    year:              u16,
    total_days:        u16,
    first_day:         GregorianDate,
    normal_month_days: [u8; 12],
    leap_month:        Option<u8>,
    leap_month_days:   Option<u8>,
}

impl YearInfo {
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Days in the year, leap month included. Always within `353..=385`
    /// for the bundled data.
    pub const fn total_days(&self) -> u16 {
        self.total_days
    }

    /// The anchor: Gregorian date of the first day of month 1.
    pub const fn first_day(&self) -> GregorianDate {
        self.first_day
    }

    pub const fn first_day_gregorian_month(&self) -> u8 {
        self.first_day.month()
    }

    pub const fn first_day_gregorian_day(&self) -> u8 {
        self.first_day.day()
    }

    /// Lengths of months 1 through 12, leap month excluded
    pub const fn normal_month_days(&self) -> &[u8; 12] {
        &self.normal_month_days
    }

    /// Ordinal of the month followed by this year's leap month
    pub const fn leap_month(&self) -> Option<u8> {
        self.leap_month
    }

    pub const fn leap_month_days(&self) -> Option<u8> {
        self.leap_month_days
    }

    /// Length of `month`, or of the leap month sharing its ordinal.
    ///
    /// `None` when the month does not exist in this year.
    pub fn month_days(&self, month: u8, is_leap: bool) -> Option<u8> {
        if is_leap {
            return self.leap_month_days.filter(|_| self.leap_month == Some(month));
        }
        let index = Month::new(month).ok()?.index();
        self.normal_month_days.get(index).copied()
    }

    /// The month following `(month, is_leap)` within this year, or `None`
    /// when it is the last one.
    pub fn month_after(&self, month: u8, is_leap: bool) -> Option<(u8, bool)> {
        if !is_leap && self.leap_month == Some(month) {
            return Some((month, true));
        }
        (month < MAX_MONTH).then_some((month + 1, false))
    }

    /// Months of the year in calendar order, as `(ordinal, is_leap)`.
    pub fn months(&self) -> impl Iterator<Item = (u8, bool)> + '_ {
        std::iter::successors(Some((1, false)), move |&(month, is_leap)| {
            self.month_after(month, is_leap)
        })
    }

    /// Anchor of the following year.
    pub fn next_first_day(&self) -> Option<GregorianDate> {
        self.first_day.add_days(i32::from(self.total_days))
    }
}

/// Ordered, immutable table of [`YearInfo`], one entry per year starting at
/// `first_year`.
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct YearInfoTable {
    first_year: u16,
    #[deref]
    years:      Vec<YearInfo>,
}

impl YearInfoTable {
    /// Walks `min_year..=max_year`, decoding one packed word per year and
    /// carrying the anchor forward by each year's length.
    ///
    /// Stops early, keeping what was built so far, when `packed` runs out, a
    /// word names a leap month past 12, or the anchor leaves the Gregorian
    /// range.
    pub fn build(packed: &[u32], epoch: GregorianDate, min_year: u16, max_year: u16) -> Self {
        let expected = if min_year <= max_year {
            usize::from(max_year - min_year) + 1
        } else {
            0
        };
        let mut years = Vec::with_capacity(expected.min(packed.len()));
        let mut anchor = Some(epoch);

        for (year, &word) in (min_year..=max_year).zip(packed) {
            let Some(first_day) = anchor else {
                warn!("anchor for {year} is past the end of the Gregorian calendar");
                break;
            };
            let decoded = decode_packed_year(word);
            if decoded.leap_month.is_some_and(|m| m > MAX_MONTH) {
                warn!("packed word {word:#07x} for {year} names leap month {:?}", decoded.leap_month);
                break;
            }

            let info = YearInfo {
                year,
                total_days: decoded.total_days(),
                first_day,
                normal_month_days: decoded.normal_month_days,
                leap_month: decoded.leap_month,
                leap_month_days: decoded.leap_month_days,
            };
            anchor = info.next_first_day();
            years.push(info);
        }

        if years.len() < expected {
            warn!(
                "year table covers {} of {expected} years from {min_year}",
                years.len()
            );
        }
        let table = Self {
            first_year: min_year,
            years,
        };
        if let Some(span) = table.supported_range() {
            debug!("built {} year entries spanning {span}", table.years.len());
        }
        table
    }

    /// The entry for Chinese year `year`, if the table has one.
    pub fn for_year(&self, year: u16) -> Option<&YearInfo> {
        let index = year.checked_sub(self.first_year)?;
        self.years.get(usize::from(index))
    }

    pub const fn first_year(&self) -> u16 {
        self.first_year
    }

    /// Last year actually present, which may be short of the requested
    /// maximum for a truncated table.
    pub fn last_year(&self) -> Option<u16> {
        self.years.last().map(YearInfo::year)
    }

    /// Gregorian days covered: first anchor through the day before the
    /// anchor that would follow the last year.
    pub fn supported_range(&self) -> Option<DateRange> {
        let first = self.years.first()?.first_day();
        let last = self.years.last()?.next_first_day()?.add_days(-1)?;
        DateRange::new(first, last).ok()
    }
}
