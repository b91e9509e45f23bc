// Calendar helpers shared by the rental service and its tests

use chrono::{DateTime, Datelike, Duration, Local, Weekday};

/// True iff both timestamps fall on the same calendar day, ignoring time of day
pub fn same_calendar_day(a: DateTime<Local>, b: DateTime<Local>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Current local date shifted by `days` calendar days
pub fn today_plus_days(days: i64) -> DateTime<Local> {
    add_days(Local::now(), days)
}

/// `date` shifted by `days` calendar days, keeping the time of day
pub fn add_days(date: DateTime<Local>, days: i64) -> DateTime<Local> {
    date + Duration::days(days)
}

/// True iff `date` falls on the given weekday
pub fn is_weekday(date: DateTime<Local>, weekday: Weekday) -> bool {
    date.weekday() == weekday
}
