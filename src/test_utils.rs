//! Shared fixtures for unit tests.

use crate::data::{PACKED_YEARS, SOLAR_TERM_DAYS};
use crate::{
    EPOCH_DAY, EPOCH_MONTH, EPOCH_YEAR, GregorianDate, LocaleData, MAX_YEAR, MIN_YEAR,
    SolarTermTable, YearInfoTable,
};

const ZH_LOCALE: &str = r#"{
    "numerals": ["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"],
    "monthNames": [
        "正月", "二月", "三月", "四月", "五月", "六月",
        "七月", "八月", "九月", "十月", "冬月", "腊月"
    ],
    "leapMonthPrefix": "闰",
    "dayNames": [
        "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
        "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
        "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十"
    ],
    "solarTermNames": [
        "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨",
        "立夏", "小满", "芒种", "夏至", "小暑", "大暑", "立秋", "处暑",
        "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至"
    ]
}"#;

pub fn date(year: u16, month: u8, day: u8) -> GregorianDate {
    GregorianDate::new(year, month, day).unwrap()
}

pub fn bundled_years() -> YearInfoTable {
    let epoch = date(EPOCH_YEAR, EPOCH_MONTH, EPOCH_DAY);
    YearInfoTable::build(&PACKED_YEARS, epoch, MIN_YEAR, MAX_YEAR)
}

pub fn bundled_solar_terms() -> SolarTermTable {
    SolarTermTable::parse(MIN_YEAR, &SOLAR_TERM_DAYS).unwrap()
}

pub fn zh_locale() -> LocaleData {
    serde_json::from_str(ZH_LOCALE).unwrap()
}
