use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_cache_file_path, get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Schedule feed domain. Should include https:// prefix.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// HTTP timeout in seconds for schedule requests. Defaults to 20 seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Location of the persisted day cache. Defaults to the platform cache directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_file_path: Option<String>,
    /// Directory rendered schedules are written to. Defaults to `./teams`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Teams or venues to build when none are given on the command line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<String>,
}

fn default_api_domain() -> String {
    constants::DEFAULT_API_DOMAIN.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: default_api_domain(),
            http_timeout_seconds: default_http_timeout(),
            cache_file_path: None,
            output_dir: None,
            log_file_path: None,
            teams: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file means defaults; environment variables override
    /// file values.
    ///
    /// # Environment Variables
    /// - `BASEBALL_API_DOMAIN` - Override API domain
    /// - `BASEBALL_CACHE_FILE` - Override cache file path
    /// - `BASEBALL_OUTPUT_DIR` - Override output directory
    /// - `BASEBALL_LOG_FILE` - Override log file path
    /// - `BASEBALL_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 20)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Applies `BASEBALL_*` environment variable overrides in place.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            self.api_domain = api_domain;
        }

        if let Ok(cache_file) = std::env::var(env_vars::CACHE_FILE) {
            self.cache_file_path = Some(cache_file);
        }

        if let Ok(output_dir) = std::env::var(env_vars::OUTPUT_DIR) {
            self.output_dir = Some(output_dir);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_domain,
            self.http_timeout_seconds,
            &[
                ("Cache file path", &self.cache_file_path),
                ("Output directory", &self.output_dir),
                ("Log file path", &self.log_file_path),
            ],
        )
    }

    /// API domain with a scheme and without a trailing slash, ready for URL building.
    pub fn api_base_url(&self) -> String {
        let domain = self.api_domain.trim_end_matches('/');
        if domain.starts_with("http://") || domain.starts_with("https://") {
            domain.to_string()
        } else {
            format!("https://{domain}")
        }
    }

    /// Cache file in effect: the configured one or the platform default.
    pub fn cache_file(&self) -> String {
        self.cache_file_path
            .clone()
            .unwrap_or_else(get_cache_file_path)
    }

    /// Output directory in effect: the configured one or `./teams`.
    pub fn output_directory(&self) -> String {
        self.output_dir
            .clone()
            .unwrap_or_else(|| constants::DEFAULT_OUTPUT_DIR.to_string())
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub fn display(&self) {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path} (not created, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("API Domain:");
        println!("{}", self.api_domain);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", self.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Cache File:");
        println!("{}", self.cache_file());
        println!("────────────────────────────────────");
        println!("Output Directory:");
        println!("{}", self.output_directory());
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }
        if !self.teams.is_empty() {
            println!("────────────────────────────────────");
            println!("Teams:");
            println!("{}", self.teams.join(", "));
        }
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and ensures the API
    /// domain has a scheme.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            api_domain: self.api_base_url(),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
