//! Single-attempt JSON fetching with HTTP status mapping

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

use crate::error::AppError;

/// Fetches `url` once and parses the body as `T`.
///
/// There is no retry: a timeout, connection error or non-2xx status is mapped
/// to the matching [`AppError`] and returned to the caller.
///
/// # Errors
/// * `AppError::NetworkTimeout` / `AppError::NetworkConnection` - transport failures
/// * `AppError::ApiNotFound`, `ApiRateLimit`, `ApiClientError`, `ApiServerError`,
///   `ApiServiceUnavailable` - non-success status codes
/// * `AppError::ApiNoData`, `ApiMalformedJson`, `ApiUnexpectedStructure` - unusable bodies
#[instrument(skip(client))]
pub async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    debug!("Fetching data from URL: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    debug!("Response length: {} bytes", response_text.len());

    serde_json::from_str::<T>(&response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);

        let trimmed = response_text.trim_start();
        if trimmed.is_empty() {
            AppError::api_no_data("Response body is empty", url)
        } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            AppError::api_malformed_json("Response is not valid JSON", url)
        } else {
            AppError::api_unexpected_structure(e.to_string(), url)
        }
    })
}
