//! Host-supplied display strings.

use serde::{Deserialize, Serialize};

use crate::consts::{LOCALE_DAY_NAMES, LOCALE_MONTH_NAMES, LOCALE_NUMERALS, SOLAR_TERMS_PER_YEAR};

/// Name tables used to label Chinese dates, usually deserialized from the
/// host application's locale bundle.
///
/// Lookups never fail: a missing entry reads as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleData {
    /// Glyphs for the digits 0 through 9
    pub numerals:          Vec<String>,
    /// Names of months 1 through 12
    pub month_names:       Vec<String>,
    /// Prepended to the month name of a leap month
    pub leap_month_prefix: String,
    /// Names of days 1 through 30
    pub day_names:         Vec<String>,
    /// Names of the 24 solar terms, starting with the minor cold
    pub solar_term_names:  Vec<String>,
}

/// A locale table with the wrong number of entries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Locale table `{table}` has {found} entries, expected {expected}")]
pub struct LocaleError {
    pub table:    &'static str,
    pub expected: usize,
    pub found:    usize,
}

fn entry(names: &[String], index: usize) -> &str {
    names.get(index).map_or("", String::as_str)
}

impl LocaleData {
    /// Checks every table has exactly the expected number of entries.
    ///
    /// # Errors
    /// Returns a `LocaleError` for the first table that does not.
    pub fn validate(&self) -> Result<(), LocaleError> {
        let tables = [
            ("numerals", &self.numerals, LOCALE_NUMERALS),
            ("monthNames", &self.month_names, LOCALE_MONTH_NAMES),
            ("dayNames", &self.day_names, LOCALE_DAY_NAMES),
            ("solarTermNames", &self.solar_term_names, SOLAR_TERMS_PER_YEAR),
        ];
        for (table, names, expected) in tables {
            if names.len() != expected {
                return Err(LocaleError {
                    table,
                    expected,
                    found: names.len(),
                });
            }
        }
        Ok(())
    }

    pub fn numeral(&self, digit: u32) -> &str {
        usize::try_from(digit).map_or("", |d| entry(&self.numerals, d))
    }

    /// Name of month `month` (1-based)
    pub fn month_name(&self, month: u8) -> &str {
        month
            .checked_sub(1)
            .map_or("", |i| entry(&self.month_names, usize::from(i)))
    }

    /// Name of day `day` (1-based)
    pub fn day_name(&self, day: u8) -> &str {
        day.checked_sub(1)
            .map_or("", |i| entry(&self.day_names, usize::from(i)))
    }

    /// Name of solar term `index` (0-based, 0 = minor cold)
    pub fn solar_term_name(&self, index: usize) -> &str {
        entry(&self.solar_term_names, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::zh_locale;

    #[test]
    fn test_fixture_is_valid() {
        assert_eq!(zh_locale().validate(), Ok(()));
    }

    #[test]
    fn test_lookups_are_one_based() {
        let locale = zh_locale();
        assert_eq!(locale.month_name(1), "正月");
        assert_eq!(locale.month_name(12), "腊月");
        assert_eq!(locale.day_name(1), "初一");
        assert_eq!(locale.day_name(30), "三十");
        assert_eq!(locale.numeral(0), "〇");
        assert_eq!(locale.solar_term_name(0), "小寒");
        assert_eq!(locale.solar_term_name(23), "冬至");
    }

    #[test]
    fn test_missing_entries_read_empty() {
        let locale = zh_locale();
        assert_eq!(locale.month_name(0), "");
        assert_eq!(locale.month_name(13), "");
        assert_eq!(locale.day_name(31), "");
        assert_eq!(locale.numeral(10), "");
        assert_eq!(locale.solar_term_name(24), "");

        let empty = LocaleData::default();
        assert_eq!(empty.month_name(1), "");
    }

    #[test]
    fn test_validate_reports_short_table() {
        let mut locale = zh_locale();
        locale.day_names.truncate(29);
        let err = locale.validate().unwrap_err();
        assert_eq!(
            err,
            LocaleError {
                table:    "dayNames",
                expected: 30,
                found:    29,
            }
        );
        assert_eq!(err.to_string(), "Locale table `dayNames` has 29 entries, expected 30");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "numerals": ["0","1","2","3","4","5","6","7","8","9"],
            "monthNames": [],
            "leapMonthPrefix": "leap ",
            "dayNames": [],
            "solarTermNames": []
        }"#;
        let locale: LocaleData = serde_json::from_str(json).unwrap();
        assert_eq!(locale.leap_month_prefix, "leap ");
        assert_eq!(locale.numeral(7), "7");
        assert!(locale.validate().is_err());
    }
}
