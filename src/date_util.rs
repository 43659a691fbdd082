use chrono::{DateTime, Datelike, Timelike, Utc};

/// Human-readable elapsed time ("Just now", "5m ago", "3h ago", "2d ago",
/// falling back to "Mon D" past a week).
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds();
    if secs < 60 {
        return "Just now".to_string();
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{mins}m ago");
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    let days = hours / 24;
    if days < 7 {
        return format!("{days}d ago");
    }
    short_date(then)
}

/// "Mon D" label, e.g. "Aug 5".
pub fn short_date(dt: DateTime<Utc>) -> String {
    format!("{} {}", month_abbrev(dt.month()), dt.day())
}

/// Full datetime for export columns, e.g. "Aug 5, 2026 14:30".
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    format!(
        "{} {}, {} {:02}:{:02}",
        month_abbrev(dt.month()),
        dt.day(),
        dt.year(),
        dt.hour(),
        dt.minute()
    )
}

/// "HH:00" label for an hourly bucket.
pub fn hour_label(hour: u32) -> String {
    format!("{hour:02}:00")
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}
