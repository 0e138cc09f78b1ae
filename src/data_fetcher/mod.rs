pub mod api;
pub mod cache;
pub mod models;
pub mod processors;

pub use api::{DayFetcher, window_dates};
pub use cache::DurableCache;
pub use models::{GameDay, GameDetails};
