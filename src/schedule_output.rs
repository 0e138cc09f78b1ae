//! Rendering of assembled team schedules
//!
//! The engine hands each team's seven [`GameDay`]s to a [`ScheduleRenderer`].
//! [`JsonScheduleWriter`] is the stock renderer and writes one JSON document
//! per schedule item into the output directory.

use std::future::Future;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::debug;

use crate::data_fetcher::models::{GameDay, GameDetails};
use crate::error::AppError;
use crate::teams::{Team, TeamColors};

/// Consumer of assembled schedules.
pub trait ScheduleRenderer: Sync {
    /// True if output for `team` already exists from an earlier run.
    fn has_output(&self, team: &Team) -> bool;

    /// Renders one team's window. Returns where the output went.
    fn render(
        &self,
        team: &Team,
        days: &[GameDay],
        generated_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<PathBuf, AppError>> + Send;
}

/// Document written for each schedule item.
#[derive(Debug, Serialize)]
pub struct RenderedSchedule<'a> {
    pub team: &'a str,
    pub name: &'a str,
    pub colors: TeamColors,
    pub generated_at: String,
    pub days: &'a [GameDay],
}

/// Writes `{output_dir}/{KEY}.json` for every rendered item.
#[derive(Debug, Clone)]
pub struct JsonScheduleWriter {
    output_dir: PathBuf,
}

impl JsonScheduleWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn output_path(&self, team: &Team) -> PathBuf {
        self.output_dir.join(format!("{}.json", team.key))
    }
}

impl ScheduleRenderer for JsonScheduleWriter {
    fn has_output(&self, team: &Team) -> bool {
        self.output_path(team).is_file()
    }

    async fn render(
        &self,
        team: &Team,
        days: &[GameDay],
        generated_at: DateTime<Utc>,
    ) -> Result<PathBuf, AppError> {
        let document = RenderedSchedule {
            team: team.key,
            name: team.name,
            colors: team.colors,
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            days,
        };
        let content = serde_json::to_string_pretty(&document).map_err(std::io::Error::from)?;

        tokio::fs::create_dir_all(&self.output_dir).await?;
        let path = self.output_path(team);
        tokio::fs::write(&path, content).await?;

        debug!("Wrote {} days for {} to {}", days.len(), team.key, path.display());
        Ok(path)
    }
}

/// One line per window day, for `--print`.
///
/// ```text
/// BOS  Boston Red Sox
///   Fri May 3   Off
///   Sun May 5   NYY 2 @ BOS 4  Final
///   Mon May 6   BOS @ NYY  7:05 PM  Scheduled
/// ```
pub fn format_schedule_summary(team: &Team, days: &[GameDay]) -> String {
    let mut lines = vec![format!("{}  {}", team.key, team.name)];

    for day in days {
        let Some(first) = day.games.first() else {
            continue;
        };
        let label = format!("{} {}", first.day, first.date);
        let games = day
            .games
            .iter()
            .map(|game| format_game(team, game))
            .collect::<Vec<_>>()
            .join(" | ");
        lines.push(format!("  {label:<11} {games}"));
    }

    lines.join("\n")
}

fn format_game(team: &Team, game: &GameDetails) -> String {
    if game.is_off() {
        return game.status.clone();
    }

    let matchup = match (game.away_team_runs, game.home_team_runs) {
        (Some(away), Some(home)) => format!(
            "{} {away} @ {} {home}",
            game.away_name_abbrev, game.home_name_abbrev
        ),
        _ => {
            let start = if game.home_name_abbrev == team.abbreviation {
                game.home_time.as_deref()
            } else {
                game.away_time.as_deref()
            };
            match start {
                Some(start) => format!(
                    "{} @ {}  {start}",
                    game.away_name_abbrev, game.home_name_abbrev
                ),
                None => format!("{} @ {}", game.away_name_abbrev, game.home_name_abbrev),
            }
        }
    };

    let status = game.detailed_status.as_deref().unwrap_or(&game.status);
    match (game.inning, game.top_inning) {
        (Some(inning), Some(top)) if game.status == "Live" => {
            let half = if top { "Top" } else { "Bot" };
            format!("{matchup}  {status}, {half} {inning}")
        }
        _ => format!("{matchup}  {status}"),
    }
}
