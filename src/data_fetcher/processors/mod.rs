pub mod expiration;
pub mod game_status;
pub mod normalize;
pub mod time_formatting;

pub use expiration::{DayClassification, compute_expiration};
pub use game_status::{GameState, classify_status};
pub use normalize::{NormalizedGame, SkipReason, normalize_game};
pub use time_formatting::{
    cache_key, date_label, day_label, feed_date_param, format_local_time, local_date,
    parse_game_date, parse_reference_date,
};
