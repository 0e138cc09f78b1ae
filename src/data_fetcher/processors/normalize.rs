use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use tracing::debug;

use super::game_status::{GameState, classify_status};
use super::time_formatting::{date_label, day_label, format_local_time, parse_game_date};
use crate::data_fetcher::models::{FeedGame, GameDetails};
use crate::error::AppError;
use crate::teams::{Team, lookup_team_by_id};

/// Why a raw feed entry was left out of a date's game list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry does not have the shape of a feed game
    NotAGame(String),
    /// The home or away team id is missing
    MissingTeamId(&'static str),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotAGame(message) => write!(f, "entry is not a game: {message}"),
            SkipReason::MissingTeamId(side) => write!(f, "missing {side} team id"),
        }
    }
}

impl From<SkipReason> for AppError {
    fn from(reason: SkipReason) -> Self {
        AppError::malformed_entry(reason.to_string())
    }
}

/// A validated feed game plus the facts the expiration policy needs.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedGame {
    pub details: GameDetails,
    pub state: GameState,
    /// Scheduled start, when the feed gives a parsable one
    pub start: Option<DateTime<Utc>>,
    /// Status as reported by the feed, used when logging unknown statuses
    pub raw_status: String,
}

/// Validates one raw feed entry and turns it into [`GameDetails`].
///
/// `date` is the calendar date the entry was requested for; its day and date
/// labels are used for display. A team id the directory does not know keeps
/// the game with an empty abbreviation and no local start time.
pub fn normalize_game(raw: &Value, date: NaiveDate) -> Result<NormalizedGame, SkipReason> {
    let game = FeedGame::deserialize(raw).map_err(|e| SkipReason::NotAGame(e.to_string()))?;

    let home_id = game.home_team_id().ok_or(SkipReason::MissingTeamId("home"))?;
    let away_id = game.away_team_id().ok_or(SkipReason::MissingTeamId("away"))?;

    let start = game.game_date.as_deref().and_then(parse_game_date);
    let home_team = resolve_team(home_id);
    let away_team = resolve_team(away_id);
    let local_time =
        |team: Option<&Team>| start.zip(team).map(|(s, t)| format_local_time(s, t.time_zone));

    let status = game.status.clone().unwrap_or_default();
    let state = classify_status(
        status.abstract_game_state.as_deref(),
        status.detailed_state.as_deref(),
    );
    let raw_status = match (&status.abstract_game_state, &status.detailed_state) {
        (Some(a), Some(d)) => format!("{a}/{d}"),
        (Some(s), None) | (None, Some(s)) => s.clone(),
        (None, None) => String::new(),
    };

    let series = game.series_description.clone().or_else(|| {
        (game.game_type.as_deref() == Some("R")).then(|| "Regular Season".to_string())
    });
    let linescore = game.linescore.clone().unwrap_or_default();

    let details = GameDetails {
        status: status
            .abstract_game_state
            .clone()
            .or_else(|| status.detailed_state.clone())
            .unwrap_or_default(),
        detailed_status: status.detailed_state,
        reason: status.reason,
        series,
        game_type: game.game_type.clone(),
        day: day_label(date),
        date: date_label(date),
        home_time: local_time(home_team),
        away_time: local_time(away_team),
        home_team_runs: game.home_score(),
        away_team_runs: game.away_score(),
        home_name_abbrev: home_team.map(|t| t.abbreviation.to_string()).unwrap_or_default(),
        away_name_abbrev: away_team.map(|t| t.abbreviation.to_string()).unwrap_or_default(),
        inning: linescore.current_inning,
        top_inning: linescore.is_top_inning,
    };

    Ok(NormalizedGame {
        details,
        state,
        start,
        raw_status,
    })
}

fn resolve_team(id: u32) -> Option<&'static Team> {
    let team = lookup_team_by_id(id);
    if team.is_none() {
        debug!("Team id {id} is not in the team directory");
    }
    team
}
