use chrono::{DateTime, Duration, Utc};

use super::normalize::NormalizedGame;
use crate::constants::cache_ttl;

/// Flags gathered over all games of one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayClassification {
    pub any_active: bool,
    pub any_still_to_play: bool,
    pub any_games_soon: bool,
    pub no_games: bool,
    /// Earliest start strictly after the classification instant
    pub soonest_future_start: Option<DateTime<Utc>>,
}

impl Default for DayClassification {
    fn default() -> Self {
        Self {
            any_active: false,
            any_still_to_play: false,
            any_games_soon: false,
            no_games: true,
            soonest_future_start: None,
        }
    }
}

impl DayClassification {
    pub fn from_games<'a>(
        games: impl IntoIterator<Item = &'a NormalizedGame>,
        now: DateTime<Utc>,
    ) -> Self {
        games
            .into_iter()
            .fold(Self::default(), |mut cls, game| {
                cls.no_games = false;
                cls.any_active |= game.state.is_active();
                cls.any_still_to_play |= game.state.is_still_to_play();
                cls.any_games_soon |= game.state.is_soon();
                if let Some(start) = game.start
                    && start > now
                {
                    cls.soonest_future_start = Some(
                        cls.soonest_future_start
                            .map_or(start, |soonest| soonest.min(start)),
                    );
                }
                cls
            })
    }
}

/// Picks how long a date's game list stays cached. First match wins:
///
/// | Condition | Lifetime |
/// |---|---|
/// | no games | 7 days |
/// | any game live | 10 minutes |
/// | still to play, warmup or pre-game | 30 minutes |
/// | still to play, next start under 1 hour away (or none in the future) | 1 hour |
/// | still to play, next start under 26 hours away | 2 hours |
/// | still to play, next start further out | 24 hours |
/// | everything concluded | 7 days |
pub fn compute_expiration(cls: &DayClassification, now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::seconds(ttl_seconds(cls, now))
}

fn ttl_seconds(cls: &DayClassification, now: DateTime<Utc>) -> i64 {
    if cls.no_games {
        return cache_ttl::NO_GAMES_SECONDS;
    }
    if cls.any_active {
        return cache_ttl::ACTIVE_GAMES_SECONDS;
    }
    if !cls.any_still_to_play {
        return cache_ttl::CONCLUDED_GAMES_SECONDS;
    }
    if cls.any_games_soon {
        return cache_ttl::GAMES_SOON_SECONDS;
    }

    let Some(start) = cls.soonest_future_start else {
        // Overdue or delayed starts
        return cache_ttl::STARTING_WITHIN_HOUR_SECONDS;
    };
    let until_start = (start - now).num_seconds();
    if until_start < cache_ttl::IMMINENT_START_SECONDS {
        cache_ttl::STARTING_WITHIN_HOUR_SECONDS
    } else if until_start < cache_ttl::NEAR_START_SECONDS {
        cache_ttl::STARTING_WITHIN_DAY_SECONDS
    } else {
        cache_ttl::DISTANT_GAMES_SECONDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::GameDetails;
    use crate::data_fetcher::processors::GameState;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 5, 12, 0, 0).unwrap()
    }

    fn game(state: GameState, start: Option<DateTime<Utc>>) -> NormalizedGame {
        NormalizedGame {
            details: GameDetails::default(),
            state,
            start,
            raw_status: String::new(),
        }
    }

    fn expiration_for(games: &[NormalizedGame]) -> Duration {
        let cls = DayClassification::from_games(games, now());
        compute_expiration(&cls, now()) - now()
    }

    #[test]
    fn test_no_games_keeps_a_week() {
        let games: [NormalizedGame; 0] = [];
        let cls = DayClassification::from_games(&games, now());
        assert!(cls.no_games);
        assert_eq!(compute_expiration(&cls, now()) - now(), Duration::days(7));
    }

    #[test]
    fn test_live_game_wins_over_scheduled() {
        let games = [
            game(GameState::Live, Some(now() - Duration::hours(1))),
            game(GameState::Upcoming, Some(now() + Duration::hours(5))),
        ];
        let cls = DayClassification::from_games(&games, now());
        assert!(cls.any_active);
        assert!(cls.any_still_to_play);
        assert_eq!(expiration_for(&games), Duration::minutes(10));
    }

    #[test]
    fn test_warmup_is_thirty_minutes() {
        let games = [
            game(GameState::Imminent, Some(now() + Duration::minutes(20))),
            game(GameState::Upcoming, Some(now() + Duration::hours(6))),
        ];
        assert_eq!(expiration_for(&games), Duration::minutes(30));
    }

    #[test]
    fn test_start_within_the_hour() {
        let games = [game(GameState::Upcoming, Some(now() + Duration::minutes(40)))];
        assert_eq!(expiration_for(&games), Duration::hours(1));
    }

    #[test]
    fn test_start_within_a_day() {
        let games = [game(GameState::Upcoming, Some(now() + Duration::hours(1)))];
        assert_eq!(expiration_for(&games), Duration::hours(2));

        let games = [game(GameState::Upcoming, Some(now() + Duration::hours(25)))];
        assert_eq!(expiration_for(&games), Duration::hours(2));
    }

    #[test]
    fn test_distant_start() {
        let games = [game(GameState::Upcoming, Some(now() + Duration::hours(26)))];
        assert_eq!(expiration_for(&games), Duration::hours(24));
    }

    #[test]
    fn test_soonest_start_ignores_past_starts() {
        let games = [
            game(GameState::Concluded, Some(now() - Duration::hours(3))),
            game(GameState::Upcoming, Some(now() + Duration::hours(30))),
            game(GameState::Upcoming, Some(now() + Duration::hours(28))),
        ];
        let cls = DayClassification::from_games(&games, now());
        assert_eq!(
            cls.soonest_future_start,
            Some(now() + Duration::hours(28))
        );
        assert_eq!(expiration_for(&games), Duration::hours(24));
    }

    #[test]
    fn test_overdue_start_is_one_hour() {
        let games = [game(GameState::Upcoming, Some(now() - Duration::minutes(15)))];
        assert_eq!(expiration_for(&games), Duration::hours(1));

        let games = [game(GameState::Unrecognized, None)];
        assert_eq!(expiration_for(&games), Duration::hours(1));
    }

    #[test]
    fn test_all_concluded_keeps_a_week() {
        let games = [
            game(GameState::Concluded, Some(now() - Duration::hours(6))),
            game(GameState::Concluded, Some(now() - Duration::hours(2))),
        ];
        let cls = DayClassification::from_games(&games, now());
        assert!(!cls.no_games);
        assert!(!cls.any_still_to_play);
        assert_eq!(expiration_for(&games), Duration::days(7));
    }
}
