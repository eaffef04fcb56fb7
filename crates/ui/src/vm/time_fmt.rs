use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// "Thursday, July 18".
#[must_use]
pub fn format_day(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

/// "Jul 25".
#[must_use]
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

#[must_use]
pub fn format_time_range(start: NaiveTime, end: NaiveTime) -> String {
    format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"))
}

#[must_use]
pub fn format_days_left(days: i64) -> String {
    match days {
        ..=-1 => "overdue".to_owned(),
        0 => "today".to_owned(),
        1 => "1 day left".to_owned(),
        n => format!("{n} days left"),
    }
}

/// Coarse "time ago" relative to `now`.
#[must_use]
pub fn format_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - then;
    let hours = elapsed.num_hours();
    if elapsed.num_minutes() < 60 {
        "just now".to_owned()
    } else if hours < 24 {
        plural(hours, "hour")
    } else {
        plural(elapsed.num_days(), "day")
    }
}

/// Minutes as "2h 15m".
#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use study_core::time::{fixed_now, fixed_today};

    #[test]
    fn formats_dates() {
        assert_eq!(format_day(fixed_today()), "Thursday, July 18");
        assert_eq!(format_short_date(fixed_today()), "Jul 18");
    }

    #[test]
    fn relative_times() {
        let now = fixed_now();
        assert_eq!(format_ago(now - Duration::minutes(5), now), "just now");
        assert_eq!(format_ago(now - Duration::hours(2), now), "2 hours ago");
        assert_eq!(format_ago(now - Duration::days(1), now), "1 day ago");
        assert_eq!(format_days_left(0), "today");
        assert_eq!(format_days_left(7), "7 days left");
    }

    #[test]
    fn minutes() {
        assert_eq!(format_minutes(135), "2h 15m");
        assert_eq!(format_minutes(120), "2h");
        assert_eq!(format_minutes(45), "45m");
    }
}
