use std::sync::LazyLock;

use chrono::{NaiveTime, Weekday};
use regex::Regex;

/// Zero-padded `HH:MM` or `HH:MM:SS`. Fixed width keeps string order equal to
/// chronological order.
static TIME_OF_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01]\d|2[0-3]):[0-5]\d(:[0-5]\d)?$").expect("time-of-day pattern compiles")
});

pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    if !TIME_OF_DAY.is_match(value) {
        return None;
    }

    let format = if value.len() == 5 { "%H:%M" } else { "%H:%M:%S" };
    NaiveTime::parse_from_str(value, format).ok()
}

pub fn format_hour_minute(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

pub fn format_hour_minute_second(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

/// Weekday index with 0 = Sunday.
pub fn weekday_from_index(index: i64) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}
