//! Bundled almanac tables for 1999..=2100.
//!
//! Both tables are ordered by year ascending, starting at [`MIN_YEAR`](crate::MIN_YEAR).

/// One packed month-length word per Chinese year.
///
/// Bits `0..=11` flag 30-day months (bit 11 is month 1), bits `12..=15` hold
/// the leap-month ordinal and bit 16 flags a 30-day leap month.
pub const PACKED_YEARS: [u32; 102] = [
    0x0092e, 0x00c96, 0x04d95, 0x00d4a, 0x00da5, 0x02755, 0x0056a, 0x07abb, 0x0025d, 0x0092d, // 1999
    0x05cab, 0x00a95, 0x00b4a, 0x04baa, 0x00ad5, 0x0955d, 0x004ba, 0x00a5b, 0x16517, 0x0052b, // 2009
    0x00a93, 0x04795, 0x006aa, 0x00ad5, 0x025b5, 0x004b6, 0x06a6e, 0x00a4e, 0x00d26, 0x05ea6, // 2019
    0x00d53, 0x005aa, 0x0376a, 0x0096d, 0x0b4af, 0x004ad, 0x00a4d, 0x16d0b, 0x00d25, 0x00d52, // 2029
    0x05dd4, 0x00b5a, 0x0056d, 0x0255b, 0x0049b, 0x07a57, 0x00a4b, 0x00aa5, 0x15b25, 0x006d2, // 2039
    0x00ada, 0x134b6, 0x00937, 0x0849f, 0x00497, 0x0064b, 0x1668a, 0x00ea5, 0x006b2, 0x14a6c, // 2049
    0x00aae, 0x0092e, 0x03d2e, 0x00c96, 0x07d55, 0x00d4a, 0x00da5, 0x055d5, 0x0056a, 0x00a6d, // 2059
    0x0455d, 0x0052d, 0x08a9b, 0x00a95, 0x00b4a, 0x06b6a, 0x00ad5, 0x0055a, 0x04aba, 0x00a5b, // 2069
    0x0052b, 0x03b27, 0x00693, 0x07733, 0x006aa, 0x00ad5, 0x154b5, 0x004b6, 0x00a57, 0x0454e, // 2079
    0x00d16, 0x08e96, 0x00d52, 0x00daa, 0x166aa, 0x0056d, 0x004ae, 0x04a9d, 0x00a2d, 0x00d15, // 2089
    0x02f25, 0x00d52, // 2099
];

/// Day of month of each of the 24 solar terms per Gregorian year, as base-36
/// digits. Term 0 is the minor cold, term 23 the winter solstice.
pub const SOLAR_TERM_DAYS: [&str; 102] = [
    "6K4J6L5K6L6M7N8N8N9O8N7M", // 1999
    "6L4J5K4K5L5L7M7N7N8N7M7L",
    "5K4I5K5K5L5L7N7N7N8N7M7M",
    "5K4J6L5K6L6L7N8N8N8N7M7M",
    "6K4J6L5K6L6M7N8N8N9O8N7M",
    "6L4J5K4K5L5L7M7N7N8N7M7L",
    "5K4I5K5K5L5L7N7N7N8N7M7M",
    "5K4J6L5K5L6L7N7N8N8N7M7M",
    "6K4J6L5K6L6M7N8N8N9O8N7M",
    "6L4J5K4K5L5L7M7N7M8N7M7L",
    "5K4I5K4K5L5L7N7N7N8N7M7M", // 2009
    "5K4J6L5K5L6L7N7N8N8N7M7M",
    "6K4J6L5K6L6M7N8N8N8O8N7M",
    "6L4J5K4K5K5L7M7N7M8N7M7L",
    "5K4I5K4K5L5L7M7N7N8N7M7M",
    "5K4J6L5K5L6L7N7N8N8N7M7M",
    "6K4J6L5K6L6M7N8N8N8O8M7M",
    "6K4J5K4J5K5L7M7N7M8N7M7L",
    "5K3I5K4K5L5L7M7N7N8N7M7M",
    "5K4J5L5K5L6L7N7N8N8N7M7M",
    "5K4J6L5K6L6L7N8N8N8O8M7M", // 2019
    "6K4J5K4J5K5L6M7M7M8N7M7L",
    "5K3I5K4K5L5L7M7N7N8N7M7L",
    "5K4J5K5K5L6L7N7N7N8N7M7M",
    "5K4J6L5K6L6L7N8N8N8O8M7M",
    "6K4J5K4J5K5L6M7M7M8N7M6L",
    "5K3I5K4K5L5L7M7N7N8N7M7L",
    "5K4I5K5K5L5L7N7N7N8N7M7M",
    "5K4J6L5K6L6L7N8N8N8N7M7M",
    "6K4J5K4J5K5L6M7M7M8N7M6L",
    "5K3I5K4K5L5L7M7N7N8N7M7L", // 2029
    "5K4I5K5K5L5L7N7N7N8N7M7M",
    "5K4J6L5K6L6L7N8N8N8N7M7M",
    "6K4J5K4J5K5L6M7M7M8N7M6L",
    "5K3I5K4K5L5L7M7N7N8N7M7L",
    "5K4I5K5K5L5L7N7N7N8N7M7M",
    "5K4J6L5K5L6L7N7N8N8N7M7M",
    "6K4J5K4J5K5L6M7M7M8N7M6L",
    "5K3I5K4K5L5L7M7N7N8N7M7L",
    "5K4I5K5K5L5L7N7N7N8N7M7M",
    "5K4J6L5K5L6L7N7N8N8N7M7M", // 2039
    "6K4J5K4J5K5L6M7M7M8N7M6L",
    "5K3I5K4K5K5L7M7N7M8N7M7L",
    "5K4I5K4K5L5L7N7N7N8N7M7M",
    "5K4J6L5K5L6L7N7N8N8N7M7M",
    "6K4J5K4J5K5L6M7M7M7N7M6L",
    "5K3I5K4J5K5L7M7N7M8N7M7L",
    "5K4I5K4K5L5L7M7N7N8N7M7M",
    "5K4J6L5K5L6L7N7N8N8N7M7M",
    "6K4J5K4J5K5K6M7M7M7N7L6L",
    "5J3I5K4J5K5L6M7M7M8N7M7L", // 2049
    "5K3I5K4K5L5L7M7N7N8N7M7M",
    "5K4J5K5K5L6L7N7N7N8N7M7M",
    "5K4J5K4J5K5K6M7M7M7N7L6L",
    "5J3I5K4J5K5L6M7M7M8N7M7L",
    "5K3I5K4K5L5L7M7N7N8N7M7M",
    "5K4J5K5K5L5L7N7N7N8N7M7M",
    "5K4J5K4J5K5K6M7M7M7N7L6L",
    "5J3I5K4J5K5L6M7M7M8N7M6L",
    "5K3I5K4K5L5L7M7N7N8N7M7L",
    "5K4J5K5K5L5L7N7N7N8N7M7M", // 2059
    "5K4J5K4J5K5K6M7M7M7M6L6L",
    "5J3I5K4J5K5L6M7M7M8N7M6L",
    "5K3I5K4K5L5L7M7N7N8N7M7L",
    "5K4I5K5K5L5L7N7N7N8N7M7M",
    "5K4J5K4J5K5K6M7M7M7M6L6L",
    "5J3I5K4J5K5L6M7M7M8N7M6L",
    "5K3I5K4K5L5L7M7N7N8N7M7L",
    "5K4I5K5K5L5L7N7N7N8N7M7M",
    "5K4J5K4J4K5K6M6M7M7M6L6L",
    "5J3I5K4J5K5L6M7M7M8N7M6L", // 2069
    "5K3I5K4K5K5L7M7N7M8N7M7L",
    "5K4I5K5K5L5L7N7N7N8N7M7M",
    "5K4J5K4J4K5K6M6M7M7M6L6L",
    "5J3I5K4J5K5L6M7M7M7N7M6L",
    "5K3I5K4K5K5L7M7N7M8N7M7L",
    "5K4I5K4K5L5L7M7N7N8N7M7M",
    "5K4J5K4J4K5K6M6M7M7M6L6L",
    "5J3I5K4J5K5L6M7M7M7N7M6L",
    "5K3I5K4J5K5L6M7N7M8N7M7L",
    "5K4I5K4K5L5L7M7N7N8N7M7M", // 2079
    "5K4J5K4J4K5K6M6M7M7M6L6L",
    "5J3I5K4J5K5K6M7M7M7N7L6L",
    "5K3I5K4J5K5L6M7M7M8N7M7L",
    "5K3I5K4K5L5L7M7N7N8N7M7M",
    "5K4J4K4J4K5K6M6M6M7M6L6L",
    "4J3I5K4J5K5K6M7M7M7N7L6L",
    "5J3I5K4J5K5L6M7M7M8N7M7L",
    "5K3I5K4K5L5L7M7N7N8N7M7M",
    "5K4J4J4J4K4K6M6M6M7M6L6L",
    "4J3I5K4J5K5K6M7M7M7N7L6L", // 2089
    "5J3I5K4J5K5L6M7M7M8N7M6L",
    "5K3I5K4K5L5L7M7N7N8N7M7L",
    "5K4J4J4J4K4K6M6M6M7M6L6L",
    "4J3I5K4J5K5K6M7M7M7M6L6L",
    "5J3I5K4J5K5L6M7M7M8N7M6L",
    "5K3I5K4K5L5L7M7N7N8N7M7L",
    "5K4I4J4J4K4K6M6M6M7M6L6L",
    "4J3I5K4J5K5K6M6M7M7M6L6L",
    "5J3I5K4J5K5L6M7M7M8N7M6L",
    "5K3I5K4K5L5L7M7N7N8N7M7L", // 2099
    "5K4I4J4J4K4K6M6M6M7M6L6L",
];
