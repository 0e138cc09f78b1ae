use crate::error::AppError;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain cannot be empty
/// - API domain must be a valid URL or domain name
/// - HTTP timeout must be at least one second
/// - Optional paths, when given, cannot be empty
pub fn validate_config(
    api_domain: &str,
    http_timeout_seconds: u64,
    paths: &[(&str, &Option<String>)],
) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        // Without a scheme it should at least look like a domain
        if !api_domain.contains('.') && !api_domain.starts_with("localhost") {
            return Err(AppError::config_error(
                "API domain must be a valid URL or domain name",
            ));
        }
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    for (name, value) in paths {
        if let Some(path) = value
            && path.trim().is_empty()
        {
            return Err(AppError::config_error(format!("{name} cannot be empty")));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_default_domain() {
        assert!(validate_config("https://statsapi.mlb.com", 20, &[]).is_ok());
        assert!(validate_config("statsapi.mlb.com", 20, &[]).is_ok());
        assert!(validate_config("localhost:8080", 20, &[]).is_ok());
    }

    #[test]
    fn test_rejects_bad_domain() {
        assert!(validate_config("", 20, &[]).is_err());
        assert!(validate_config("not-a-domain", 20, &[]).is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let err = validate_config("https://statsapi.mlb.com", 0, &[]).unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_rejects_empty_paths() {
        let empty = Some("  ".to_string());
        let err =
            validate_config("https://statsapi.mlb.com", 20, &[("Cache file path", &empty)])
                .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Cache file path cannot be empty"
        );

        let unset: Option<String> = None;
        assert!(
            validate_config("https://statsapi.mlb.com", 20, &[("Cache file path", &unset)])
                .is_ok()
        );
    }
}
