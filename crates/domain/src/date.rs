use chrono::prelude::*;
use chrono_tz::Tz;

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

// month: January -> 1
pub fn get_month_length(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => panic!("Invalid month"),
    }
}

/// The calendar day in the given timezone at the given timestamp
pub fn today_in(tz: &Tz, timestamp_millis: i64) -> NaiveDate {
    match tz.timestamp_millis_opt(timestamp_millis) {
        chrono::LocalResult::Single(dt) => dt.date_naive(),
        chrono::LocalResult::Ambiguous(dt, _) => dt.date_naive(),
        chrono::LocalResult::None => Utc
            .timestamp_millis_opt(timestamp_millis)
            .single()
            .map(|dt| dt.date_naive())
            .unwrap_or_default(),
    }
}

pub fn same_month_day(a: NaiveDate, b: NaiveDate) -> bool {
    a.month() == b.month() && a.day() == b.day()
}

/// Sort key that ignores the year: `month * 100 + day`
pub fn month_day_key(date: NaiveDate) -> u32 {
    date.month() * 100 + date.day()
}

/// Moves `date` into `year`. February 29th becomes February 28th on non leap years.
pub fn shift_to_year(date: NaiveDate, year: i32) -> NaiveDate {
    let day = date.day().min(get_month_length(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).unwrap_or(date)
}

/// `dd-mm`
pub fn format_day_month(date: NaiveDate) -> String {
    date.format("%d-%m").to_string()
}
