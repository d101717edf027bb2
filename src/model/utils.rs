use chrono::Duration as ChronoDuration;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Humanize an elapsed duration for the standings page header.
#[must_use]
pub fn format_time_ago_for_standings_view(td: ChronoDuration) -> String {
    let secs = td.num_seconds().max(0);

    if secs >= YEAR {
        let years = secs as f64 / YEAR as f64;
        if (years - 1.0).abs() < f64::EPSILON {
            "1 year".to_string()
        } else {
            format!("{years:.2} years")
        }
    } else if secs >= MONTH {
        let months = secs as f64 / MONTH as f64;
        format!("{months:.2} months")
    } else if secs >= WEEK {
        plural(secs / WEEK, "week")
    } else if secs >= DAY {
        plural(secs / DAY, "day")
    } else if secs >= HOUR {
        plural(secs / HOUR, "hour")
    } else if secs >= MINUTE {
        plural(secs / MINUTE, "minute")
    } else {
        plural(secs, "second")
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}
