//! Display formatting for timestamps and long text.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Appended to text cut by [`truncate_text`].
pub const ELLIPSIS: &str = "...";

const ABSOLUTE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Shortest digit string read as epoch milliseconds; shorter numbers such as
/// a bare year are rejected.
const MIN_EPOCH_MILLIS_DIGITS: usize = 10;

/// Formats `date` relative to the current time.
#[must_use]
pub fn format_date(date: DateTime<Utc>) -> String {
    format_date_at(date, Utc::now())
}

/// Formats `date` relative to `now`.
///
/// Under a minute reads "moments ago"; then whole minutes, hours and days
/// (truncated) up to a week; anything older is shown as `YYYY-MM-DD`.
/// Dates in the future read "moments ago".
#[must_use]
pub fn format_date_at(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(date);

    if elapsed.num_seconds() < 60 {
        return "moments ago".to_string();
    }

    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return ago(minutes, "minute");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return ago(hours, "hour");
    }

    let days = elapsed.num_days();
    if days < 7 {
        return ago(days, "day");
    }

    date.format(ABSOLUTE_DATE_FORMAT).to_string()
}

/// Formats a serialized timestamp relative to the current time.
///
/// Returns `None` if `input` is not a recognizable timestamp.
#[must_use]
pub fn format_date_str(input: &str) -> Option<String> {
    parse_timestamp(input).map(format_date)
}

/// Parses RFC 3339, epoch milliseconds (at least ten digits), a naive `YYYY-MM-DDTHH:MM:SS` (UTC)
/// or a bare `YYYY-MM-DD` (UTC midnight).
#[must_use]
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.with_timezone(&Utc));
    }

    if input.bytes().all(|b| b.is_ascii_digit()) {
        if input.len() < MIN_EPOCH_MILLIS_DIGITS {
            return None;
        }
        return input
            .parse::<i64>()
            .ok()
            .and_then(DateTime::from_timestamp_millis);
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(input, ABSOLUTE_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Cuts `text` to at most `max_len` characters, appending [`ELLIPSIS`] when cut.
///
/// Counts characters, so multi-byte scripts are never split mid-character.
#[must_use]
pub fn truncate_text(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}
