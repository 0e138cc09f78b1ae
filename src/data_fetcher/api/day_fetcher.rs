//! Day Fetcher: one calendar date's games, from the cache or the feed

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Client;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::urls::build_schedule_url;
use crate::config::Config;
use crate::data_fetcher::cache::DurableCache;
use crate::data_fetcher::models::{GameDetails, ScheduleFeed};
use crate::data_fetcher::processors::{
    DayClassification, GameState, NormalizedGame, cache_key, compute_expiration, normalize_game,
};
use crate::error::AppError;

/// Returns normalized game lists per calendar date, backed by the day cache.
///
/// Shared by all teams of a run. Concurrent requests for the same date are
/// coalesced so the feed is asked at most once per date key.
#[derive(Debug)]
pub struct DayFetcher {
    client: Client,
    api_domain: String,
    cache: Arc<DurableCache>,
    /// One lock per date key; bounded by the dates touched in a run
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    warned_statuses: std::sync::Mutex<HashSet<String>>,
}

impl DayFetcher {
    pub fn new(client: Client, api_domain: impl Into<String>, cache: Arc<DurableCache>) -> Self {
        Self {
            client,
            api_domain: api_domain.into(),
            cache,
            in_flight: Mutex::new(HashMap::new()),
            warned_statuses: std::sync::Mutex::new(HashSet::new()),
        }
    }

    /// Builds a fetcher with an HTTP client configured from `config`.
    pub fn from_config(config: &Config, cache: Arc<DurableCache>) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::new(client, config.api_base_url(), cache))
    }

    pub fn cache(&self) -> &DurableCache {
        &self.cache
    }

    /// Returns every game on `date`, possibly empty.
    ///
    /// A fresh cache entry is returned without a network call. Otherwise the
    /// feed is fetched once, the games normalized and classified, and the list
    /// cached with an expiration matching the state of its games. Feed and
    /// cache failures are logged and never returned.
    #[instrument(skip(self, now))]
    pub async fn get_game_list_for_date(
        &self,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Vec<GameDetails> {
        let key = cache_key(date);

        if let Some(games) = self.cached_games(&key, now).await {
            debug!("Cache hit for {key}");
            return games;
        }

        let key_lock = self.key_lock(&key).await;
        let _guard = key_lock.lock().await;

        // Another task may have fetched this date while we waited
        if let Some(games) = self.cached_games(&key, now).await {
            debug!("Cache filled for {key} by a concurrent fetch");
            return games;
        }

        self.fetch_and_store(date, &key, now).await
    }

    async fn key_lock(&self, key: &str) -> Arc<Mutex<()>> {
        let mut in_flight = self.in_flight.lock().await;
        in_flight
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    async fn cached_games(&self, key: &str, now: DateTime<Utc>) -> Option<Vec<GameDetails>> {
        let payload = self.cache.get(key, now).await?;
        match serde_json::from_value(payload) {
            Ok(games) => Some(games),
            Err(e) => {
                warn!("Ignoring unreadable cache entry {key}: {e}");
                None
            }
        }
    }

    async fn fetch_and_store(
        &self,
        date: NaiveDate,
        key: &str,
        now: DateTime<Utc>,
    ) -> Vec<GameDetails> {
        let url = build_schedule_url(&self.api_domain, date);
        info!("Cache miss for {key}, fetching {url}");

        let raw_games = match fetch::<ScheduleFeed>(&self.client, &url).await {
            Ok(feed) => feed.into_games(),
            Err(e) => {
                warn!("No schedule data for {key}, treating the date as having no games: {e}");
                Vec::new()
            }
        };

        let normalized: Vec<NormalizedGame> = raw_games
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| match normalize_game(raw, date) {
                Ok(game) => Some(game),
                Err(reason) => {
                    warn!("Skipping feed entry {index} for {key}: {}", AppError::from(reason));
                    debug!("Skipped entry: {raw}");
                    None
                }
            })
            .collect();

        for game in &normalized {
            if game.state == GameState::Unrecognized {
                self.warn_unrecognized_status(&game.raw_status);
            }
        }

        let classification = DayClassification::from_games(&normalized, now);
        let expires_at = compute_expiration(&classification, now);
        debug!("Classified {key}: {classification:?}");

        let games: Vec<GameDetails> = normalized.into_iter().map(|game| game.details).collect();
        self.store(key, &games, expires_at).await;

        info!(
            "Cached {} games for {key} until {}",
            games.len(),
            expires_at.to_rfc3339()
        );
        games
    }

    async fn store(&self, key: &str, games: &[GameDetails], expires_at: DateTime<Utc>) {
        let payload = match serde_json::to_value(games) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Could not serialize games for {key}: {e}");
                return;
            }
        };
        if let Err(e) = self.cache.set(key, payload, expires_at).await {
            warn!("{e}");
        }
    }

    fn warn_unrecognized_status(&self, status: &str) {
        let first_sighting = match self.warned_statuses.lock() {
            Ok(mut warned) => warned.insert(status.to_string()),
            Err(poisoned) => poisoned.into_inner().insert(status.to_string()),
        };
        if first_sighting {
            warn!("Unrecognized game status '{status}', treating it as still to play");
        }
    }
}
