use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::constants::{CACHE_KEY_FORMAT, FEED_DATE_FORMAT};
use crate::error::AppError;

/// Cache key for a calendar date.
///
/// # Examples
///
/// ```
/// use baseball_schedule::data_fetcher::processors::cache_key;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 5).unwrap();
/// assert_eq!(cache_key(date), "2024_05_05");
/// ```
pub fn cache_key(date: NaiveDate) -> String {
    date.format(CACHE_KEY_FORMAT).to_string()
}

/// Date parameter expected by the schedule endpoint, e.g. `05/05/2024`.
pub fn feed_date_param(date: NaiveDate) -> String {
    date.format(FEED_DATE_FORMAT).to_string()
}

/// Short weekday, e.g. "Sun".
pub fn day_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Month and day without padding, e.g. "May 5".
pub fn date_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Wall-clock start time in `tz`, e.g. "7:05 PM".
pub fn format_local_time(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%-I:%M %p").to_string()
}

/// Calendar date in `tz` at `now`.
///
/// Teams west of the host can still be on yesterday's date; every team counts
/// its window from its own local date.
pub fn local_date(now: DateTime<Utc>, tz: Tz) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

/// Parses the feed's ISO-8601 `gameDate`.
pub fn parse_game_date(game_date: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(game_date)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parses a `YYYY-MM-DD` reference date given on the command line.
pub fn parse_reference_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        AppError::datetime_parse_error(format!(
            "Invalid date '{value}', expected YYYY-MM-DD: {e}"
        ))
    })
}
