//! MLB Seven-Day Schedule Library
//!
//! This library builds rolling seven-day schedules (two days back through four
//! days ahead) for MLB teams and venues from the public stats feed. Each
//! calendar date is fetched at most once per freshness period and kept in a
//! durable cache whose expiration adapts to the state of that day's games.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use baseball_schedule::config::Config;
//! use baseball_schedule::data_fetcher::{DayFetcher, DurableCache};
//! use baseball_schedule::data_fetcher::processors::local_date;
//! use baseball_schedule::error::AppError;
//! use baseball_schedule::teams::lookup_team;
//! use chrono::Utc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let cache = Arc::new(DurableCache::load(config.cache_file()).await);
//!     let fetcher = DayFetcher::from_config(&config, cache)?;
//!
//!     let team = lookup_team("BOS").ok_or_else(|| AppError::unknown_team("BOS"))?;
//!     let now = Utc::now();
//!     let days = fetcher
//!         .get_team_games(team.abbreviation, local_date(now, team.time_zone), now)
//!         .await;
//!
//!     for day in &days {
//!         println!("{}-{}-{}: {} game(s)", day.year, day.month, day.day, day.games.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod schedule_output;
pub mod teams;

// Re-export commonly used types for convenience
pub use app::{RunOptions, create_schedules};
pub use config::Config;
pub use data_fetcher::models::{GameDay, GameDetails};
pub use data_fetcher::{DayFetcher, DurableCache, window_dates};
pub use error::AppError;
pub use schedule_output::{JsonScheduleWriter, ScheduleRenderer, format_schedule_summary};
pub use teams::{Team, lookup_team};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
