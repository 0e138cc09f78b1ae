// src/main.rs
use baseball_schedule::cli::{Args, is_informational_mode};
use baseball_schedule::config::Config;
use baseball_schedule::data_fetcher::processors::parse_reference_date;
use baseball_schedule::error::AppError;
use baseball_schedule::{app, commands, logging};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let mut config = Config::load().await?;
    args.apply_to(&mut config);
    config.validate()?;

    if is_informational_mode(&args) {
        if args.list_teams {
            commands::handle_list_teams_command();
        }
        if args.list_config {
            commands::handle_list_config_command(&config);
        }
        if args.init_config {
            commands::handle_init_config_command(&config).await?;
        }
        return Ok(());
    }

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (log_file_path, guard) = logging::setup_logging(&args, &config).await?;
    info!("Logs are being written to: {log_file_path}");

    let reference_date = args
        .date
        .as_deref()
        .map(parse_reference_date)
        .transpose()?;

    let succeeded = app::run(&args, &config, reference_date).await?;
    if !succeeded {
        drop(guard);
        std::process::exit(1);
    }

    Ok(())
}
