//! Date and time helpers for headline timestamps
//!
//! Feeds publish dates as RFC 2822 strings (`Mon, 03 Mar 2025 08:00:00 GMT`);
//! synthetic data uses RFC 3339 or plain `YYYY-MM-DD HH:MM:SS`. Anything else
//! is displayed verbatim.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime};

const PLAIN_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a published date in any of the formats the backend emits
pub fn parse_published_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, PLAIN_DATETIME_FORMAT)
                .ok()
                .map(|naive| naive.and_utc().fixed_offset())
        })
}

/// Human-readable published date relative to the local date
pub fn format_published_date(raw: &str) -> String {
    format_published_date_from(raw, Local::now().date_naive())
}

/// Same as [`format_published_date`] with an explicit reference date
pub fn format_published_date_from(raw: &str, today: NaiveDate) -> String {
    let Some(published) = parse_published_date(raw) else {
        return raw.to_string();
    };

    let local = published.with_timezone(&Local);
    let days_ago = (today - local.date_naive()).num_days();

    match days_ago {
        0 => format!("today {}", local.format("%H:%M")),
        1 => "yesterday".to_string(),
        2..=6 => format!("{} days ago", days_ago),
        _ => local.format("%d %b %Y").to_string(),
    }
}
