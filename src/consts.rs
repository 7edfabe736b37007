/// First supported Chinese year (inclusive)
pub const MIN_YEAR: u16 = 1999;

/// Last supported Chinese year (inclusive)
pub const MAX_YEAR: u16 = 2100;

/// Gregorian year of the first supported Chinese New Year
pub const EPOCH_YEAR: u16 = 1999;
/// Gregorian month of the first supported Chinese New Year
pub const EPOCH_MONTH: u8 = 2;
/// Gregorian day of the first supported Chinese New Year
pub const EPOCH_DAY: u8 = 16;

/// Largest Gregorian year accepted by [`GregorianDate`](crate::GregorianDate)
pub const MAX_GREGORIAN_YEAR: u16 = 9999;

/// Maximum valid month (December, or the twelfth Chinese month)
pub const MAX_MONTH: u8 = 12;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Length of a short (小) Chinese month
pub const SHORT_MONTH_DAYS: u8 = 29;
/// Length of a long (大) Chinese month
pub const LONG_MONTH_DAYS: u8 = 30;

/// Width of the month-length flag field in a packed year word
pub(crate) const MONTH_FLAG_BITS: u32 = 12;
/// Mask for the leap-month ordinal after shifting by [`MONTH_FLAG_BITS`]
pub(crate) const LEAP_MONTH_MASK: u32 = 0xF;
/// Bit flagging a 30-day leap month
pub(crate) const LEAP_MONTH_LONG_BIT: u32 = 1 << 16;

/// Number of solar terms in a year
pub const SOLAR_TERMS_PER_YEAR: usize = 24;
/// Solar terms falling in each Gregorian month
pub const SOLAR_TERMS_PER_MONTH: usize = 2;
/// Radix of the solar-term day encoding
pub(crate) const SOLAR_TERM_RADIX: u32 = 36;

/// Digit glyphs a locale must supply
pub const LOCALE_NUMERALS: usize = 10;
/// Month names a locale must supply
pub const LOCALE_MONTH_NAMES: usize = 12;
/// Day names a locale must supply
pub const LOCALE_DAY_NAMES: usize = 30;

/// Length of the sexagenary (stem-branch) cycle
pub const SEXAGENARY_CYCLE: u16 = 60;
/// A Gregorian year that starts the sexagenary cycle (甲子)
pub(crate) const SEXAGENARY_BASE_YEAR: u16 = 1984;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Marker preceding the month of a leap-month date in its text form
pub const LEAP_MONTH_MARKER: char = 'L';
