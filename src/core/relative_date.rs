//! Human-relative labels for expense dates.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Formats a stored date as the dashboard label: "Today 2:30 PM",
/// "Yesterday 9:05 AM", "3 days ago", or a short month-day ("Jan 5").
///
/// The comparison is by calendar day, not a rolling 24 hours, so the label
/// flips exactly at midnight. No year is shown for older dates even across a
/// year boundary. Unparseable input is returned verbatim.
pub fn format(value: &str) -> String {
    format_on(value, Local::now().naive_local())
}

pub fn format_on(value: &str, now: NaiveDateTime) -> String {
    let Some(moment) = parse_timestamp(value) else {
        return value.to_string();
    };

    let day = moment.date();
    let today = now.date();

    if day == today {
        return format!("Today {}", format_clock(moment));
    }

    let days_ago = (today - day).num_days();
    match days_ago {
        1 => format!("Yesterday {}", format_clock(moment)),
        2..=6 => format!("{days_ago} days ago"),
        _ => moment.format("%b %-d").to_string(),
    }
}

// 12-hour clock, no leading zero on the hour, 2-digit minute
fn format_clock(moment: NaiveDateTime) -> String {
    moment.format("%-I:%M %p").to_string()
}

/// Parses the date formats the app stores: a plain `YYYY-MM-DD`, a local
/// timestamp, or a full RFC 3339 timestamp (converted to local time).
/// Date-only values land on midnight.
pub(crate) fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(moment) = DateTime::parse_from_rfc3339(value) {
        return Some(moment.with_timezone(&Local).naive_local());
    }
    if let Ok(moment) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(moment);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|day| day.and_time(NaiveTime::MIN))
}
