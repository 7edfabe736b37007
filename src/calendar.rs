//! The conversion engine: immutable tables built once and shared by reference.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::data::{PACKED_YEARS, SOLAR_TERM_DAYS};
use crate::display::{ChineseYearMonthDayInfo, build_year_month_day_info};
use crate::month::{ChineseDays, month_chinese_dates};
use crate::range::DateRange;
use crate::solar_term::{SolarTermDays, SolarTermError, SolarTermTable};
use crate::year_info::{YearInfo, YearInfoTable};
use crate::{
    ChineseDate, EPOCH_DAY, EPOCH_MONTH, EPOCH_YEAR, GregorianDate, GregorianYearMonth, LocaleData,
    MAX_YEAR, MIN_YEAR, ParseError,
};

/// Where the tables start and which years they cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarConfig {
    /// Gregorian year of New Year's Day of `min_year`
    pub epoch_year:  u16,
    pub epoch_month: u8,
    pub epoch_day:   u8,
    pub min_year:    u16,
    pub max_year:    u16,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            epoch_year:  EPOCH_YEAR,
            epoch_month: EPOCH_MONTH,
            epoch_day:   EPOCH_DAY,
            min_year:    MIN_YEAR,
            max_year:    MAX_YEAR,
        }
    }
}

/// Failure to build a [`ChineseCalendar`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid calendar config: {0}")]
    InvalidConfig(String),

    #[error("Invalid epoch: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    SolarTerm(#[from] SolarTermError),

    #[error("Packed year table has no usable entries")]
    EmptyTable,
}

/// Gregorian to Chinese lunisolar conversion over a fixed span of years.
///
/// Build it once and pass it by reference; it is never mutated after
/// construction and is safe to share across threads.
///
/// ```
/// use lunisolar::{ChineseCalendar, ChineseDate, GregorianDate};
///
/// let calendar = ChineseCalendar::new().unwrap();
/// let date = GregorianDate::new(2024, 2, 10).unwrap();
///
/// assert_eq!(Some(ChineseDate::new_year(2024)), calendar.chinese_date(&date));
/// ```
#[derive(Debug, Clone)]
pub struct ChineseCalendar {
    years:       YearInfoTable,
    solar_terms: SolarTermTable,
}

impl ChineseCalendar {
    /// Builds the engine from the bundled 1999..=2100 tables.
    ///
    /// # Errors
    /// Only fails if the bundled tables are corrupt.
    pub fn new() -> Result<Self, CalendarError> {
        Self::with_tables(&CalendarConfig::default(), &PACKED_YEARS, &SOLAR_TERM_DAYS)
    }

    /// Builds the engine from caller-supplied tables: one packed word per
    /// Chinese year and one base-36 solar-term row per Gregorian year, both
    /// starting at `config.min_year`.
    ///
    /// # Errors
    /// Returns `CalendarError` for an inconsistent config, a malformed
    /// solar-term row, or a packed table with no usable first year.
    pub fn with_tables<S: AsRef<str>>(
        config: &CalendarConfig,
        packed: &[u32],
        solar_terms: &[S],
    ) -> Result<Self, CalendarError> {
        if config.min_year > config.max_year {
            return Err(CalendarError::InvalidConfig(format!(
                "min year {} is after max year {}",
                config.min_year, config.max_year
            )));
        }
        let epoch = GregorianDate::new(config.epoch_year, config.epoch_month, config.epoch_day)?;
        if epoch.year() != config.min_year {
            return Err(CalendarError::InvalidConfig(format!(
                "epoch {epoch} does not fall in min year {}",
                config.min_year
            )));
        }

        let years = YearInfoTable::build(packed, epoch, config.min_year, config.max_year);
        if years.is_empty() {
            return Err(CalendarError::EmptyTable);
        }
        let solar_terms = SolarTermTable::parse(config.min_year, solar_terms)?;
        debug!(
            "calendar ready: {} years, solar terms for {} years",
            years.len(),
            solar_terms.len()
        );
        Ok(Self { years, solar_terms })
    }

    pub const fn years(&self) -> &YearInfoTable {
        &self.years
    }

    pub const fn solar_terms(&self) -> &SolarTermTable {
        &self.solar_terms
    }

    pub fn year_info(&self, year: u16) -> Option<&YearInfo> {
        self.years.for_year(year)
    }

    /// Gregorian days this engine can convert.
    pub fn supported_range(&self) -> Option<DateRange> {
        self.years.supported_range()
    }

    pub fn chinese_date(&self, date: &GregorianDate) -> Option<ChineseDate> {
        self.years.chinese_date(date)
    }

    pub fn gregorian_date(&self, date: &ChineseDate) -> Option<GregorianDate> {
        self.years.gregorian_date(date)
    }

    pub fn next_day(&self, date: &ChineseDate) -> Option<ChineseDate> {
        self.years.next_day(date)
    }

    pub fn solar_term_days(&self, year: u16, month: u8) -> SolarTermDays {
        self.solar_terms.solar_term_days(year, month)
    }

    pub fn solar_term_name<'l>(&self, date: &GregorianDate, locale: &'l LocaleData) -> &'l str {
        self.solar_terms.solar_term_name(date, locale)
    }

    /// Labels an already converted date, looking up its solar term.
    pub fn build_year_month_day_info(
        &self,
        gregorian: GregorianDate,
        chinese: ChineseDate,
        locale: &LocaleData,
    ) -> ChineseYearMonthDayInfo {
        let term = self.solar_term_name(&gregorian, locale);
        build_year_month_day_info(gregorian, chinese, term, locale)
    }

    /// Converts and labels one day; `None` outside the supported span.
    pub fn year_month_day_info(
        &self,
        date: &GregorianDate,
        locale: &LocaleData,
    ) -> Option<ChineseYearMonthDayInfo> {
        let chinese = self.chinese_date(date)?;
        Some(self.build_year_month_day_info(*date, chinese, locale))
    }

    /// Lazily walks `month`, pairing each day with its Chinese date.
    pub fn days(&self, month: GregorianYearMonth) -> Option<ChineseDays<'_>> {
        ChineseDays::new(&self.years, month)
    }

    /// One labelled record per day of `month`, or `None` unless the whole
    /// month is within the supported span.
    pub fn year_month_all_day_infos(
        &self,
        month: GregorianYearMonth,
        locale: &LocaleData,
    ) -> Option<Vec<ChineseYearMonthDayInfo>> {
        let days = month_chinese_dates(&self.years, month)?;
        Some(
            days.into_iter()
                .map(|(gregorian, chinese)| self.build_year_month_day_info(gregorian, chinese, locale))
                .collect(),
        )
    }
}
