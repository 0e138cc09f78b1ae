pub mod day_fetcher;
pub mod fetch_utils;
pub mod http_client;
pub mod urls;
pub mod window;

// Re-export the day fetcher; window assembly is implemented on it
pub use day_fetcher::DayFetcher;
// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
pub use window::window_dates;
