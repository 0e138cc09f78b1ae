//! Window Assembler and Freshness Pre-check over the 7-day schedule window

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use tracing::{debug, instrument, warn};

use super::day_fetcher::DayFetcher;
use crate::constants::window;
use crate::data_fetcher::models::{GameDay, GameDetails};
use crate::data_fetcher::processors::{cache_key, date_label, day_label};

/// The window's calendar dates, oldest first. Index 2 is `today`.
///
/// # Example
/// ```
/// use baseball_schedule::data_fetcher::api::window_dates;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let dates = window_dates(today);
/// assert_eq!(dates.len(), 7);
/// assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 4, 29).unwrap());
/// assert_eq!(dates[2], today);
/// assert_eq!(dates[6], NaiveDate::from_ymd_opt(2024, 5, 5).unwrap());
/// ```
pub fn window_dates(today: NaiveDate) -> Vec<NaiveDate> {
    (window::FIRST_OFFSET..=window::LAST_OFFSET)
        .map(|offset| today + Duration::days(offset))
        .collect()
}

impl DayFetcher {
    /// Builds the 7-day schedule for one team.
    ///
    /// `today` is the team's local calendar date. Each day holds the team's
    /// games in feed order, at most two, or a single `Off` placeholder.
    #[instrument(skip(self, now))]
    pub async fn get_team_games(
        &self,
        team_abbrev: &str,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Vec<GameDay> {
        let mut days = Vec::with_capacity(window::DAYS);

        for date in window_dates(today) {
            let mut games: Vec<GameDetails> = self
                .get_game_list_for_date(date, now)
                .await
                .into_iter()
                .filter(|game| game.involves(team_abbrev))
                .collect();

            if games.len() > window::MAX_GAMES_PER_DAY {
                warn!(
                    "{team_abbrev} has {} games on {date}, keeping the first {}",
                    games.len(),
                    window::MAX_GAMES_PER_DAY
                );
                games.truncate(window::MAX_GAMES_PER_DAY);
            }
            if games.is_empty() {
                games.push(GameDetails::off(day_label(date), date_label(date)));
            }

            days.push(GameDay {
                team: team_abbrev.to_string(),
                year: format!("{:04}", date.year()),
                month: format!("{:02}", date.month()),
                day: format!("{:02}", date.day()),
                games,
            });
        }

        debug!("Assembled {} days for {team_abbrev}", days.len());
        days
    }

    /// True only if every date of the window around `today` has a fresh cache
    /// entry at `now`. Never fetches.
    pub async fn is_cache_current(&self, today: NaiveDate, now: DateTime<Utc>) -> bool {
        for date in window_dates(today) {
            let key = cache_key(date);
            if !self.cache().is_fresh(&key, now).await {
                debug!("Cache entry {key} is missing or expired");
                return false;
            }
        }
        true
    }
}
