use serde::{Deserialize, Serialize};

use crate::constants::OFF_STATUS;

/// One game, ready for rendering.
///
/// This is also the payload stored in the day cache, so field names are part
/// of the on-disk format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GameDetails {
    /// Abstract game state ("Preview", "Live", "Final") or `Off`
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_type: Option<String>,
    /// Weekday of the calendar date, e.g. "Tue"
    pub day: String,
    /// Calendar date, e.g. "May 5"
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_team_runs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_team_runs: Option<u32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub home_name_abbrev: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub away_name_abbrev: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inning: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_inning: Option<bool>,
}

impl GameDetails {
    /// Placeholder for a day the team does not play.
    pub fn off(day: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            status: OFF_STATUS.to_string(),
            day: day.into(),
            date: date.into(),
            ..Default::default()
        }
    }

    pub fn is_off(&self) -> bool {
        self.status == OFF_STATUS
    }

    /// True when `abbreviation` is the home or away side of this game.
    pub fn involves(&self, abbreviation: &str) -> bool {
        !abbreviation.is_empty()
            && (self.home_name_abbrev == abbreviation || self.away_name_abbrev == abbreviation)
    }
}

/// One calendar day of a team's schedule: one or two games, or a single `Off`
/// placeholder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameDay {
    pub team: String,
    pub year: String,
    pub month: String,
    pub day: String,
    pub games: Vec<GameDetails>,
}
