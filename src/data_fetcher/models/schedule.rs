use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top level of the `schedule/games` response.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScheduleFeed {
    #[serde(default)]
    pub dates: Vec<FeedDate>,
}

/// Games for one calendar date.
///
/// Games stay loosely typed here so one bad entry can be skipped without
/// failing the whole date.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeedDate {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub games: Vec<Value>,
}

impl ScheduleFeed {
    /// Raw game entries of the first date, or nothing when the feed has no dates.
    pub fn into_games(self) -> Vec<Value> {
        self.dates
            .into_iter()
            .next()
            .map(|date| date.games)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeedGame {
    #[serde(rename = "gamePk")]
    pub game_pk: Option<u64>,
    /// ISO-8601 start instant in UTC
    #[serde(rename = "gameDate")]
    pub game_date: Option<String>,
    #[serde(rename = "gameType")]
    pub game_type: Option<String>,
    #[serde(rename = "seriesDescription")]
    pub series_description: Option<String>,
    pub status: Option<FeedStatus>,
    pub teams: Option<FeedTeams>,
    pub linescore: Option<FeedLinescore>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeedStatus {
    #[serde(rename = "abstractGameState")]
    pub abstract_game_state: Option<String>,
    #[serde(rename = "detailedState")]
    pub detailed_state: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeedTeams {
    pub home: Option<FeedSide>,
    pub away: Option<FeedSide>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeedSide {
    pub score: Option<u32>,
    pub team: Option<FeedTeamRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeedTeamRef {
    pub id: Option<u32>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeedLinescore {
    #[serde(rename = "currentInning")]
    pub current_inning: Option<u32>,
    #[serde(rename = "isTopInning")]
    pub is_top_inning: Option<bool>,
}

impl FeedGame {
    pub fn home_team_id(&self) -> Option<u32> {
        self.teams
            .as_ref()
            .and_then(|t| t.home.as_ref())
            .and_then(|side| side.team.as_ref())
            .and_then(|team| team.id)
    }

    pub fn away_team_id(&self) -> Option<u32> {
        self.teams
            .as_ref()
            .and_then(|t| t.away.as_ref())
            .and_then(|side| side.team.as_ref())
            .and_then(|team| team.id)
    }

    pub fn home_score(&self) -> Option<u32> {
        self.teams
            .as_ref()
            .and_then(|t| t.home.as_ref())
            .and_then(|side| side.score)
    }

    pub fn away_score(&self) -> Option<u32> {
        self.teams
            .as_ref()
            .and_then(|t| t.away.as_ref())
            .and_then(|side| side.score)
    }
}
