//! Application-wide constants and configuration values
//!
//! This module centralizes the cache lifetimes, window shape and feed settings
//! so the freshness policy can be read in one place.

/// Default MLB stats API domain
pub const DEFAULT_API_DOMAIN: &str = "https://statsapi.mlb.com";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 20;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 8;

/// Application directory name under the platform config/cache dirs
pub const APP_DIR_NAME: &str = "baseball_schedule";

/// File name of the persisted day cache
pub const CACHE_FILE_NAME: &str = "baseball-sched-cache.json";

/// File name of the rolling log file
pub const LOG_FILE_NAME: &str = "baseball_schedule.log";

/// Default directory for rendered schedules, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "teams";

/// Status written into the placeholder entry for a day without games
pub const OFF_STATUS: &str = "Off";

/// Cache key format for a calendar date (e.g. `2024_05_05`)
pub const CACHE_KEY_FORMAT: &str = "%Y_%m_%d";

/// Date format expected by the schedule endpoint (e.g. `05/05/2024`)
pub const FEED_DATE_FORMAT: &str = "%m/%d/%Y";

/// Cache expiration values, picked from the state of a date's games
pub mod cache_ttl {
    /// Dates without any games; nothing is going to change soon
    pub const NO_GAMES_SECONDS: i64 = 7 * 24 * 60 * 60;

    /// At least one game is in progress
    pub const ACTIVE_GAMES_SECONDS: i64 = 10 * 60;

    /// A game is in warmup or pre-game
    pub const GAMES_SOON_SECONDS: i64 = 30 * 60;

    /// Next game starts within the hour
    pub const STARTING_WITHIN_HOUR_SECONDS: i64 = 60 * 60;

    /// Next game starts within the next 26 hours
    pub const STARTING_WITHIN_DAY_SECONDS: i64 = 2 * 60 * 60;

    /// Next game is at least 26 hours away
    pub const DISTANT_GAMES_SECONDS: i64 = 24 * 60 * 60;

    /// Every game for the date has concluded
    pub const CONCLUDED_GAMES_SECONDS: i64 = 7 * 24 * 60 * 60;

    /// Start distance below which the one-hour expiration applies
    pub const IMMINENT_START_SECONDS: i64 = 60 * 60;

    /// Start distance below which the two-hour expiration applies
    pub const NEAR_START_SECONDS: i64 = 26 * 60 * 60;
}

/// Shape of the rolling schedule window
pub mod window {
    /// Offset of the oldest day, relative to today
    pub const FIRST_OFFSET: i64 = -2;

    /// Offset of the furthest future day, relative to today
    pub const LAST_OFFSET: i64 = 4;

    /// Number of days in the window
    pub const DAYS: usize = 7;

    /// Index of "today" in the window
    pub const TODAY_SLOT: usize = 2;

    /// Most games one team can play on one calendar day
    pub const MAX_GAMES_PER_DAY: usize = 2;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "BASEBALL_API_DOMAIN";

    /// Environment variable for cache file override
    pub const CACHE_FILE: &str = "BASEBALL_CACHE_FILE";

    /// Environment variable for output directory override
    pub const OUTPUT_DIR: &str = "BASEBALL_OUTPUT_DIR";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "BASEBALL_LOG_FILE";

    /// Environment variable for HTTP timeout override, in seconds
    pub const HTTP_TIMEOUT: &str = "BASEBALL_HTTP_TIMEOUT";
}
