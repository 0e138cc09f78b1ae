//! Schedule orchestration: decides which items need rebuilding and drives the
//! window assembly and rendering for each of them.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, Utc};
use futures::future::join_all;
use tracing::{debug, error, info};

use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::processors::local_date;
use crate::data_fetcher::{DayFetcher, DurableCache};
use crate::error::AppError;
use crate::schedule_output::{JsonScheduleWriter, ScheduleRenderer, format_schedule_summary};
use crate::teams::{Team, lookup_team};

/// Per-run switches for [`create_schedules`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Rebuild even when every window date is fresh
    pub force: bool,
    /// Print a summary of every rebuilt schedule to stdout
    pub print: bool,
    /// Use this date as "today" for every item instead of its local date
    pub reference_date: Option<NaiveDate>,
}

/// Builds schedules for every item of `items`.
///
/// Freshness is decided for all items before anything is fetched, so a date
/// refreshed while building one team still counts as changed for the others.
/// Items are then built concurrently; requests for a shared date are
/// coalesced by the fetcher.
///
/// Returns `true` only if every item was known and rendered (or skipped as
/// up to date).
pub async fn create_schedules<R: ScheduleRenderer>(
    fetcher: &DayFetcher,
    renderer: &R,
    items: &[String],
    options: RunOptions,
    now: DateTime<Utc>,
) -> bool {
    let host_today = options
        .reference_date
        .unwrap_or_else(|| now.with_timezone(&Local).date_naive());
    if !options.force && fetcher.is_cache_current(host_today, now).await {
        debug!("Every date around {host_today} is cached; checking items individually");
    }

    let mut all_ok = true;
    let mut seen = HashSet::new();
    let mut pending: Vec<(&'static Team, NaiveDate)> = Vec::new();

    for item in items {
        let Some(team) = lookup_team(item) else {
            error!("{}", AppError::unknown_team(item.as_str()));
            all_ok = false;
            continue;
        };
        if team.is_venue() {
            debug!("{} builds the {} schedule", team.key, team.abbreviation);
        }
        if !seen.insert(team.key) {
            debug!("{} requested more than once", team.key);
            continue;
        }

        let today = options
            .reference_date
            .unwrap_or_else(|| local_date(now, team.time_zone));
        if !options.force
            && renderer.has_output(team)
            && fetcher.is_cache_current(today, now).await
        {
            info!("{} is up to date", team.key);
            continue;
        }
        pending.push((team, today));
    }

    let results = join_all(
        pending
            .into_iter()
            .map(|(team, today)| build_item(fetcher, renderer, team, today, options, now)),
    )
    .await;

    all_ok && results.into_iter().all(|ok| ok)
}

async fn build_item<R: ScheduleRenderer>(
    fetcher: &DayFetcher,
    renderer: &R,
    team: &Team,
    today: NaiveDate,
    options: RunOptions,
    now: DateTime<Utc>,
) -> bool {
    let days = fetcher.get_team_games(team.abbreviation, today, now).await;

    match renderer.render(team, &days, now).await {
        Ok(path) => {
            info!("Schedule for {} written to {}", team.key, path.display());
            if options.print {
                println!("{}\n", format_schedule_summary(team, &days));
            }
            true
        }
        Err(e) => {
            error!("Failed to render schedule for {}: {e}", team.key);
            false
        }
    }
}

/// Runs the engine with settings from `config` and `args`.
///
/// Loads the durable cache, builds the fetcher and JSON writer, and returns
/// the combined result of [`create_schedules`].
pub async fn run(
    args: &Args,
    config: &Config,
    reference_date: Option<NaiveDate>,
) -> Result<bool, AppError> {
    let cache = Arc::new(DurableCache::load(config.cache_file()).await);
    info!(
        "Loaded {} cached dates from {}",
        cache.len().await,
        cache.path().display()
    );

    let fetcher = DayFetcher::from_config(config, cache)?;
    let writer = JsonScheduleWriter::new(config.output_directory());
    let items = args.schedule_items(config);
    info!(
        "Building {} schedules into {}",
        items.len(),
        writer.output_dir().display()
    );
    let options = RunOptions {
        force: args.force,
        print: args.print,
        reference_date,
    };

    let succeeded = create_schedules(&fetcher, &writer, &items, options, Utc::now()).await;
    if succeeded {
        info!("All schedules are up to date");
    } else {
        error!("One or more schedules could not be built");
    }
    Ok(succeeded)
}
