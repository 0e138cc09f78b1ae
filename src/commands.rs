use crate::config::Config;
use crate::error::AppError;
use crate::teams::{all_teams, all_venues};
use std::path::Path;

/// Handles the --list-teams command.
///
/// Prints every club and venue alias with its feed id and timezone.
pub fn handle_list_teams_command() {
    println!("\nTeams");
    println!("────────────────────────────────────");
    for team in all_teams() {
        println!(
            "{:<4} {:>3}  {:<24} {}",
            team.key, team.id, team.name, team.time_zone
        );
    }
    println!("────────────────────────────────────");
    println!("Venues");
    for venue in all_venues() {
        println!(
            "{:<7} {} ({})",
            venue.key, venue.name, venue.abbreviation
        );
    }
}

/// Handles the --list-config command.
pub fn handle_list_config_command(config: &Config) {
    config.display();
}

/// Handles the --init-config command.
///
/// Writes the effective settings to the config file. An existing file is
/// left untouched.
pub async fn handle_init_config_command(config: &Config) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    if Path::new(&config_path).exists() {
        println!("Config file already exists at {config_path}, leaving it unchanged");
        return Ok(());
    }

    config.save().await?;
    println!("Config file written to {config_path}");
    Ok(())
}
