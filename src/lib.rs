//! Gregorian to Chinese lunisolar calendar conversion.
//!
//! The engine is driven by two bundled tables: one packed word per Chinese
//! year describing its month lengths and leap month, and one base-36 row per
//! Gregorian year giving the days of its 24 solar terms. Build a
//! [`ChineseCalendar`] once and share it by reference.
//!
//! ```
//! use lunisolar::{ChineseCalendar, ChineseDate, GregorianDate};
//!
//! let calendar = ChineseCalendar::new().unwrap();
//! let date: GregorianDate = "2017-07-23".parse().unwrap();
//! let chinese = calendar.chinese_date(&date).unwrap();
//!
//! assert_eq!(chinese, ChineseDate::new(2017, 6, 1, true));
//! assert_eq!(chinese.to_string(), "2017-L06-01");
//! ```

mod calendar;
mod chinese;
mod consts;
pub mod data;
mod display;
mod gregorian;
mod locale;
mod month;
mod packed;
mod prelude;
mod range;
mod solar_term;
mod types;
mod year_info;

#[cfg(test)]
mod test_utils;

pub use calendar::{CalendarConfig, CalendarError, ChineseCalendar};
pub use chinese::ChineseDate;
pub use consts::*;
pub use display::{
    AlternateDisplayDate, ChineseYearMonthDayInfo, alternate_display_date,
    build_year_month_day_info,
};
pub use gregorian::{GregorianDate, GregorianYearMonth};
pub use locale::{LocaleData, LocaleError};
pub use month::{ChineseDays, month_chinese_dates};
pub use packed::{PackedYear, decode_packed_year};
pub use range::{DateRange, Days, RangeError};
pub use solar_term::{SolarTerm, SolarTermDays, SolarTermError, SolarTermTable};
pub use types::{Day, Month, Year, is_leap_year};
pub use year_info::{YearInfo, YearInfoTable};

use crate::prelude::*;

/// Failure to build a Gregorian value from parts or text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_GREGORIAN_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, zh_locale};

    fn calendar() -> ChineseCalendar {
        ChineseCalendar::new().unwrap()
    }

    #[test]
    fn test_epoch_is_new_year() {
        assert_eq!(
            calendar().chinese_date(&date(EPOCH_YEAR, EPOCH_MONTH, EPOCH_DAY)),
            Some(ChineseDate::new_year(MIN_YEAR))
        );
    }

    #[test]
    fn test_before_first_year() {
        let calendar = calendar();
        assert_eq!(calendar.chinese_date(&date(1998, 1, 1)), None);
        assert_eq!(calendar.chinese_date(&date(1999, 2, 15)), None);
    }

    #[test]
    fn test_after_last_year() {
        let calendar = calendar();
        assert_eq!(
            calendar.chinese_date(&date(2101, 1, 28)),
            Some(ChineseDate::new(2100, 12, 29, false))
        );
        assert_eq!(calendar.chinese_date(&date(2101, 1, 29)), None);
        assert_eq!(calendar.chinese_date(&date(2200, 1, 1)), None);
    }

    #[test]
    fn test_new_year_days() {
        let calendar = calendar();
        for (y, m, d) in [(2000, 2, 5), (2001, 1, 24), (2020, 1, 25), (2024, 2, 10), (2025, 1, 29)] {
            assert_eq!(
                calendar.chinese_date(&date(y, m, d)),
                Some(ChineseDate::new_year(y)),
                "{y}-{m}-{d}"
            );
        }
    }

    #[test]
    fn test_leap_month_2017() {
        let calendar = calendar();
        assert_eq!(
            calendar.chinese_date(&date(2017, 7, 23)),
            Some(ChineseDate::new(2017, 6, 1, true))
        );
        assert_eq!(
            calendar.chinese_date(&date(2017, 8, 22)),
            Some(ChineseDate::new(2017, 7, 1, false))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<GregorianDate>(), Err(ParseError::EmptyInput));
        assert_eq!(
            "2023-02-29".parse::<GregorianDate>(),
            Err(ParseError::InvalidDay {
                month: 2,
                day:   29,
                year:  2023,
            })
        );
        assert_eq!("2024-13".parse::<GregorianYearMonth>(), Err(ParseError::InvalidMonth(13)));
        assert_eq!("0-01-01".parse::<GregorianDate>(), Err(ParseError::InvalidYear(0)));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ParseError::InvalidDay {
                month: 2,
                day:   30,
                year:  2024,
            }
            .to_string(),
            "Invalid day 30 for month 2024-02"
        );
        assert_eq!(ParseError::InvalidMonth(13).to_string(), "Invalid month: 13 (must be 1-12)");
        assert_eq!(ParseError::InvalidYear(0).to_string(), "Invalid year: 0 (must be 1-9999)");
    }

    #[test]
    fn test_day_info_end_to_end() {
        let calendar = calendar();
        let info = calendar
            .year_month_day_info(&"2023-03-22".parse().unwrap(), &zh_locale())
            .unwrap();
        assert_eq!(info.chinese_date, ChineseDate::new(2023, 2, 1, true));
        assert_eq!(info.year_name, "二〇二三");
        assert_eq!(info.month_name, "闰二月");
        assert_eq!(alternate_display_date(&info).display_date, "闰二月");
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChineseCalendar>();
        assert_send_sync::<LocaleData>();
    }
}
