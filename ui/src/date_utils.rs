//! Date parsing and human-readable formatting for the dashboard.
//!
//! Every formatter accepts anything convertible to [`DateInput`] and
//! answers with the `"?"` sentinel instead of failing when the input
//! does not describe a real instant.

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Utc;

/// Sentinel returned by every formatter for unparseable input.
pub const UNKNOWN_DATE: &str = "?";

/// A date as the dashboard receives it: an instant, an ISO-like string,
/// or a numeric epoch value in milliseconds. `Missing` stands in for an
/// absent value and is always invalid.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    Missing,
    Instant(DateTime<Utc>),
    Text(String),
    EpochMillis(f64),
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Instant(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        Self::EpochMillis(value as f64)
    }
}

impl From<f64> for DateInput {
    fn from(value: f64) -> Self {
        Self::EpochMillis(value)
    }
}

impl<T: Into<DateInput>> From<Option<T>> for DateInput {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Self::Missing,
        }
    }
}

/// Resolves an input to a concrete instant, or `None` if it is invalid.
pub fn to_date(input: impl Into<DateInput>) -> Option<DateTime<Utc>> {
    match input.into() {
        DateInput::Missing => None,
        DateInput::Instant(dt) => Some(dt),
        DateInput::Text(text) => parse_text(&text),
        DateInput::EpochMillis(ms) => {
            if ms.is_finite() {
                DateTime::from_timestamp_millis(ms as i64)
            } else {
                None
            }
        }
    }
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    None
}

/// True iff the input resolves to a real calendar instant.
pub fn is_valid(input: impl Into<DateInput>) -> bool {
    to_date(input).is_some()
}

/// Medium date, e.g. "Apr 29, 2023".
pub fn short(input: impl Into<DateInput>) -> String {
    match to_date(input) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => UNKNOWN_DATE.to_string(),
    }
}

/// Medium date with clock time, e.g. "Apr 29, 2023, 3:00 PM".
pub fn short_with_time(input: impl Into<DateInput>) -> String {
    match to_date(input) {
        Some(date) => date.format("%b %-d, %Y, %-I:%M %p").to_string(),
        None => UNKNOWN_DATE.to_string(),
    }
}

/// Describes the input relative to the current instant, e.g.
/// "yesterday at 3:00 PM". Falls back to a plain date beyond a week.
pub fn relative_now(input: impl Into<DateInput>) -> String {
    relative_at(input, Utc::now())
}

fn relative_at(input: impl Into<DateInput>, now: DateTime<Utc>) -> String {
    let Some(date) = to_date(input) else {
        return UNKNOWN_DATE.to_string();
    };

    let day_diff = (date.date_naive() - now.date_naive()).num_days();
    let time = date.format("%-I:%M %p");

    match day_diff {
        0 => format!("today at {time}"),
        -1 => format!("yesterday at {time}"),
        1 => format!("tomorrow at {time}"),
        -6..=-2 => format!("last {} at {time}", date.format("%A")),
        2..=6 => format!("{} at {time}", date.format("%A")),
        _ => date.format("%m/%d/%Y").to_string(),
    }
}

/// Strict distance between the input and now, with a directional
/// suffix: "3 days ago", "in 2 hours".
pub fn distance_from_now(input: impl Into<DateInput>) -> String {
    distance_at(input, Utc::now())
}

fn distance_at(input: impl Into<DateInput>, now: DateTime<Utc>) -> String {
    let Some(date) = to_date(input) else {
        return UNKNOWN_DATE.to_string();
    };

    let diff = date.signed_duration_since(now);
    let seconds = diff.num_milliseconds() as f64 / 1000.0;
    let (count, unit) = strict_distance(seconds.abs());

    let quantity = if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    };

    if seconds < 0.0 {
        format!("{quantity} ago")
    } else {
        format!("in {quantity}")
    }
}

/// Picks the largest single unit that describes `seconds` and rounds
/// the count to it.
fn strict_distance(seconds: f64) -> (i64, &'static str) {
    let minutes = seconds / 60.0;
    let hours = minutes / 60.0;
    let days = hours / 24.0;

    if seconds < 60.0 {
        (seconds.round() as i64, "second")
    } else if minutes < 60.0 {
        (minutes.round() as i64, "minute")
    } else if hours < 24.0 {
        (hours.round() as i64, "hour")
    } else if days < 30.0 {
        (days.round() as i64, "day")
    } else if days < 365.0 {
        ((days / 30.0).round() as i64, "month")
    } else {
        ((days / 365.0).round() as i64, "year")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    // Saturday afternoon.
    fn fixed_now() -> DateTime<Utc> {
        instant(2023, 4, 29, 15, 0, 0)
    }

    #[test]
    fn validity_matrix() {
        assert!(!is_valid(None::<&str>));
        assert!(!is_valid("not-a-date"));
        assert!(!is_valid(f64::NAN));
        assert!(!is_valid(f64::INFINITY));

        assert!(is_valid(Utc::now()));
        assert!(is_valid("2023-04-29T10:00:00Z"));
        assert!(is_valid("2023-04-29"));
        assert!(is_valid(1_700_000_000_000_i64));
    }

    #[test]
    fn formatters_share_the_unknown_sentinel() {
        assert_eq!(short("junk"), UNKNOWN_DATE);
        assert_eq!(short_with_time("junk"), UNKNOWN_DATE);
        assert_eq!(relative_now(None::<&str>), UNKNOWN_DATE);
        assert_eq!(distance_from_now(f64::NAN), UNKNOWN_DATE);
    }

    #[test]
    fn short_never_returns_sentinel_for_valid_input() {
        assert_eq!(short(instant(2023, 4, 29, 0, 0, 0)), "Apr 29, 2023");
        assert_eq!(
            short_with_time(instant(2023, 4, 29, 15, 0, 0)),
            "Apr 29, 2023, 3:00 PM"
        );
        assert_ne!(short(1_700_000_000_000_i64), UNKNOWN_DATE);
    }

    #[test]
    fn relative_phrases_near_now() {
        let now = fixed_now();
        assert_eq!(
            relative_at(instant(2023, 4, 29, 10, 0, 0), now),
            "today at 10:00 AM"
        );
        assert_eq!(
            relative_at(instant(2023, 4, 28, 20, 30, 0), now),
            "yesterday at 8:30 PM"
        );
        assert_eq!(
            relative_at(instant(2023, 4, 30, 9, 5, 0), now),
            "tomorrow at 9:05 AM"
        );
        assert_eq!(
            relative_at(instant(2023, 4, 25, 12, 0, 0), now),
            "last Tuesday at 12:00 PM"
        );
        assert_eq!(
            relative_at(instant(2023, 5, 2, 8, 0, 0), now),
            "Tuesday at 8:00 AM"
        );
    }

    #[test]
    fn relative_falls_back_to_plain_date_beyond_a_week() {
        assert_eq!(
            relative_at(instant(2023, 4, 1, 12, 0, 0), fixed_now()),
            "04/01/2023"
        );
    }

    #[test]
    fn strict_distances() {
        let now = fixed_now();
        assert_eq!(
            distance_at(now - chrono::Duration::days(3), now),
            "3 days ago"
        );
        assert_eq!(
            distance_at(now + chrono::Duration::hours(2), now),
            "in 2 hours"
        );
        assert_eq!(
            distance_at(now - chrono::Duration::seconds(1), now),
            "1 second ago"
        );
        assert_eq!(
            distance_at(now - chrono::Duration::days(60), now),
            "2 months ago"
        );
        assert_eq!(
            distance_at(now + chrono::Duration::days(800), now),
            "in 2 years"
        );
    }
}
