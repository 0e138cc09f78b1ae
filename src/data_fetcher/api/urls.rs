//! URL building utilities for the schedule feed

use chrono::NaiveDate;

use crate::data_fetcher::processors::feed_date_param;

/// Builds the schedule URL for every MLB game on one calendar date.
///
/// The linescore is hydrated so live games carry the current inning.
///
/// # Arguments
/// * `api_domain` - The base API domain, without a trailing slash
/// * `date` - The calendar date to fetch
///
/// # Example
/// ```
/// use baseball_schedule::data_fetcher::api::build_schedule_url;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 5).unwrap();
/// let url = build_schedule_url("https://statsapi.mlb.com", date);
/// assert_eq!(
///     url,
///     "https://statsapi.mlb.com/api/v1/schedule/games/?sportId=1&date=05/05/2024&hydrate=linescore"
/// );
/// ```
pub fn build_schedule_url(api_domain: &str, date: NaiveDate) -> String {
    format!(
        "{api_domain}/api/v1/schedule/games/?sportId=1&date={}&hydrate=linescore",
        feed_date_param(date)
    )
}
