//! Display records for calendar cells.

use serde::Serialize;

use crate::{ChineseDate, GregorianDate, LocaleData};

/// Everything a calendar cell needs to show about one Gregorian day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChineseYearMonthDayInfo {
    pub gregorian_date: GregorianDate,
    pub chinese_date:   ChineseDate,
    /// The Chinese year spelled digit by digit with the locale numerals
    pub year_name:      String,
    /// Month name, carrying the leap prefix for a leap month
    pub month_name:     String,
    pub day_name:       String,
    /// Empty unless a solar term falls on this day
    pub solar_term:     String,
}

/// The single label shown under a day number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternateDisplayDate {
    pub year:         u16,
    pub month:        u8,
    pub day:          u8,
    pub display_date: String,
}

fn year_name(year: u16, locale: &LocaleData) -> String {
    year.to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|digit| locale.numeral(digit))
        .collect()
}

fn month_name(date: &ChineseDate, locale: &LocaleData) -> String {
    let name = locale.month_name(date.month);
    if name.is_empty() || !date.is_leap_month {
        return name.to_owned();
    }
    format!("{}{name}", locale.leap_month_prefix)
}

/// Labels a converted date. `solar_term` is the localized term name for
/// `gregorian`, empty if there is none.
pub fn build_year_month_day_info(
    gregorian: GregorianDate,
    chinese: ChineseDate,
    solar_term: &str,
    locale: &LocaleData,
) -> ChineseYearMonthDayInfo {
    ChineseYearMonthDayInfo {
        gregorian_date: gregorian,
        chinese_date:   chinese,
        year_name:      year_name(chinese.year, locale),
        month_name:     month_name(&chinese, locale),
        day_name:       locale.day_name(chinese.day).to_owned(),
        solar_term:     solar_term.to_owned(),
    }
}

/// Picks the cell label: the solar term if any, else the month name on the
/// first of a month, else the day name.
pub fn alternate_display_date(info: &ChineseYearMonthDayInfo) -> AlternateDisplayDate {
    let label = if !info.solar_term.is_empty() {
        &info.solar_term
    } else if info.chinese_date.day == 1 {
        &info.month_name
    } else {
        &info.day_name
    };
    AlternateDisplayDate {
        year:         info.gregorian_date.year(),
        month:        info.gregorian_date.month(),
        day:          info.gregorian_date.day(),
        display_date: label.clone(),
    }
}
