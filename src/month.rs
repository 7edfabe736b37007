//! Chinese dates for every day of a Gregorian month.

use crate::range::Days;
use crate::year_info::YearInfoTable;
use crate::{ChineseDate, GregorianDate, GregorianYearMonth};

/// Walks a Gregorian month day by day alongside its Chinese dates.
///
/// Only the first day is converted from scratch; each later Chinese date is
/// the previous one advanced by a day. The walk ends early if it would leave
/// the year table.
#[derive(Debug, Clone)]
pub struct ChineseDays<'a> {
    table:   &'a YearInfoTable,
    days:    Days,
    chinese: Option<ChineseDate>,
}

impl<'a> ChineseDays<'a> {
    /// Seeds the walk from the first day of `month`; `None` if that day is
    /// outside the table.
    pub fn new(table: &'a YearInfoTable, month: GregorianYearMonth) -> Option<Self> {
        let seed = table.chinese_date(&month.first_day())?;
        Some(Self {
            table,
            days: month.days().iter(),
            chinese: Some(seed),
        })
    }
}

impl Iterator for ChineseDays<'_> {
    type Item = (GregorianDate, ChineseDate);

    fn next(&mut self) -> Option<Self::Item> {
        let chinese = self.chinese?;
        let gregorian = self.days.next()?;
        self.chinese = self.table.next_day(&chinese);
        Some((gregorian, chinese))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.days.size_hint();
        (0, upper)
    }
}

/// Pairs every day of `month` with its Chinese date, or `None` unless the
/// whole month is covered.
pub fn month_chinese_dates(
    table: &YearInfoTable,
    month: GregorianYearMonth,
) -> Option<Vec<(GregorianDate, ChineseDate)>> {
    let days: Vec<_> = ChineseDays::new(table, month)?.collect();
    (days.len() == usize::from(month.days_in_month())).then_some(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{bundled_years, date};

    fn year_month(y: u16, m: u8) -> GregorianYearMonth {
        GregorianYearMonth::new(y, m).unwrap()
    }

    #[test]
    fn test_thirty_one_day_month() {
        let table = bundled_years();
        let days = month_chinese_dates(&table, year_month(2017, 7)).unwrap();
        assert_eq!(days.len(), 31);
        assert_eq!(days[0].0, date(2017, 7, 1));
        assert_eq!(days[30].0, date(2017, 7, 31));
        assert_eq!(days[21].1, ChineseDate::new(2017, 6, 29, false));
        assert_eq!(days[22].1, ChineseDate::new(2017, 6, 1, true));
        for pair in days.windows(2) {
            let (prev, next) = (pair[0].1, pair[1].1);
            assert!(next.day == prev.day + 1 || next.day == 1, "{prev} -> {next}");
        }
    }

    #[test]
    fn test_matches_direct_conversion() {
        let table = bundled_years();
        for (y, m) in [(1999, 3), (2000, 2), (2020, 5), (2023, 3), (2033, 12), (2100, 12)] {
            let days = month_chinese_dates(&table, year_month(y, m)).unwrap();
            assert_eq!(days.len(), usize::from(year_month(y, m).days_in_month()));
            for (gregorian, chinese) in days {
                assert_eq!(table.chinese_date(&gregorian), Some(chinese), "{gregorian}");
            }
        }
    }

    #[test]
    fn test_month_starting_before_epoch_is_none() {
        let table = bundled_years();
        assert!(ChineseDays::new(&table, year_month(1999, 2)).is_none());
        assert!(month_chinese_dates(&table, year_month(1998, 1)).is_none());
    }

    #[test]
    fn test_month_running_past_last_year_is_none() {
        let table = bundled_years();
        let partial: Vec<_> = ChineseDays::new(&table, year_month(2101, 1)).unwrap().collect();
        assert_eq!(partial.len(), 28);
        assert!(month_chinese_dates(&table, year_month(2101, 1)).is_none());
    }

    #[test]
    fn test_walk_is_restartable_only_by_rebuilding() {
        let table = bundled_years();
        let mut walk = ChineseDays::new(&table, year_month(2024, 2)).unwrap();
        assert_eq!(walk.by_ref().count(), 29);
        assert_eq!(walk.next(), None);
        assert_eq!(ChineseDays::new(&table, year_month(2024, 2)).unwrap().count(), 29);
    }
}
