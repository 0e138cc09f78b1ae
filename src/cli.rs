use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use crate::config::Config;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// True when the command only prints or writes configuration and never
/// touches the schedule cache or feed.
pub fn is_informational_mode(args: &Args) -> bool {
    args.list_teams || args.list_config || args.init_config
}

/// MLB 7-day schedule builder
///
/// Builds a rolling schedule (two days back through four days ahead) for each
/// requested team or venue and writes it as JSON, one file per item.
///
/// Schedule data is cached per calendar date. How long a date stays cached
/// depends on its games:
/// - 10 minutes while a game is live
/// - 30 minutes to 24 hours before games start, depending on how soon
/// - 7 days once every game is over, or when there are none
///
/// When every date a team needs is still cached its schedule is left as is.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Team abbreviations (BOS, LAD, ...) or venue aliases (FENWAY).
    /// Defaults to the teams in the config file, or every team.
    #[arg(value_name = "TEAM")]
    pub teams: Vec<String>,

    /// Rebuild schedules even when every cached date is still fresh.
    #[arg(short, long)]
    pub force: bool,

    /// Print a one-line-per-day summary of each rebuilt schedule.
    #[arg(short, long)]
    pub print: bool,

    /// Build the window around this date (YYYY-MM-DD) instead of each team's local today.
    #[arg(short = 'd', long = "date")]
    pub date: Option<String>,

    /// Directory the schedule files are written to.
    #[arg(short = 'o', long = "output-dir", help_heading = "Paths")]
    pub output_dir: Option<String>,

    /// Location of the schedule cache file.
    #[arg(long = "cache-file", help_heading = "Paths")]
    pub cache_file: Option<String>,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Paths")]
    pub log_file: Option<String>,

    /// List the known teams and venue aliases
    #[arg(long = "list-teams", help_heading = "Info")]
    pub list_teams: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Write the current settings to the config file if it does not exist yet
    #[arg(long = "init-config", help_heading = "Configuration")]
    pub init_config: bool,

    /// Log at debug level.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Log only to the log file, not to stdout.
    #[arg(short, long, help_heading = "Debug")]
    pub quiet: bool,
}

impl Args {
    /// Applies path overrides given on the command line to `config`.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = Some(output_dir.clone());
        }
        if let Some(cache_file) = &self.cache_file {
            config.cache_file_path = Some(cache_file.clone());
        }
        if let Some(log_file) = &self.log_file {
            config.log_file_path = Some(log_file.clone());
        }
    }

    /// Items to build: the command line list, else the configured list, else
    /// every club.
    pub fn schedule_items(&self, config: &Config) -> Vec<String> {
        if !self.teams.is_empty() {
            self.teams.clone()
        } else if !config.teams.is_empty() {
            config.teams.clone()
        } else {
            crate::teams::all_teams()
                .iter()
                .map(|team| team.key.to_string())
                .collect()
        }
    }
}
