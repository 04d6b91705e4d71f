//! Validation helpers and parsing utilities for configuration values.

use std::time::Duration;

use url::Url;

use crate::defaults::MAX_POLL_INTERVAL;
use crate::error::{ConfigError, ConfigResult};

/// Parse and validate an API base address.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the value is not an absolute
/// http(s) URL with a host, or when it carries a query string or fragment.
pub fn parse_base_url(raw: &str) -> ConfigResult<Url> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed)
        .map_err(|_| ConfigError::invalid("api_base_url", Some(trimmed), "must be an absolute URL"))?;
    validate_base_url(&url)?;
    Ok(url)
}

/// Validate an already-parsed API base address.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for non-http(s) schemes, missing hosts,
/// and addresses carrying a query string or fragment.
pub fn validate_base_url(url: &Url) -> ConfigResult<()> {
    let value = Some(url.as_str());
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::invalid(
            "api_base_url",
            value,
            "scheme must be http or https",
        ));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ConfigError::invalid("api_base_url", value, "host is required"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::invalid(
            "api_base_url",
            value,
            "must not carry a query or fragment",
        ));
    }
    Ok(())
}

/// Validate a bearer token.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the token is blank or contains
/// whitespace, which would corrupt the `Authorization` header.
pub fn validate_token(token: &str) -> ConfigResult<()> {
    if token.trim().is_empty() {
        return Err(ConfigError::invalid("bearer_token", None, "must not be blank"));
    }
    if token.chars().any(char::is_whitespace) {
        return Err(ConfigError::invalid(
            "bearer_token",
            None,
            "must not contain whitespace",
        ));
    }
    Ok(())
}

/// Validate the dashboard poll interval.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the interval is zero or longer
/// than one hour.
pub fn validate_poll_interval(interval: Duration) -> ConfigResult<()> {
    if interval.is_zero() {
        return Err(ConfigError::invalid(
            "poll_interval",
            Some("0"),
            "must be greater than zero",
        ));
    }
    if interval > MAX_POLL_INTERVAL {
        return Err(ConfigError::invalid(
            "poll_interval",
            Some(&interval.as_secs().to_string()),
            "must not exceed one hour",
        ));
    }
    Ok(())
}

/// Validate the per-request timeout.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the timeout is zero.
pub fn validate_request_timeout(timeout: Duration) -> ConfigResult<()> {
    if timeout.is_zero() {
        return Err(ConfigError::invalid(
            "request_timeout",
            Some("0"),
            "must be greater than zero",
        ));
    }
    Ok(())
}

/// Parse a whole number of seconds.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the value is not an unsigned integer.
pub fn parse_seconds(field: &'static str, raw: &str) -> ConfigResult<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::invalid(field, Some(raw), "must be a whole number of seconds"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_accepts_http_with_path() -> ConfigResult<()> {
        let url = parse_base_url(" http://127.0.0.1:8080/api ")?;
        assert_eq!(url.path(), "/api");
        Ok(())
    }

    #[test]
    fn base_url_rejects_other_schemes_and_queries() {
        assert!(matches!(
            parse_base_url("ftp://files.test"),
            Err(ConfigError::InvalidField { reason, .. }) if reason.contains("scheme")
        ));
        assert!(parse_base_url("http://api.test/?x=1").is_err());
        assert!(parse_base_url("http://api.test/#top").is_err());
        assert!(parse_base_url("not a url").is_err());
    }

    #[test]
    fn tokens_must_be_single_non_blank_words() {
        assert!(validate_token("dummy-token").is_ok());
        assert!(validate_token("   ").is_err());
        assert!(validate_token("two words").is_err());
    }

    #[test]
    fn poll_interval_is_bounded() {
        assert!(validate_poll_interval(Duration::from_secs(5)).is_ok());
        assert!(validate_poll_interval(Duration::ZERO).is_err());
        assert!(validate_poll_interval(Duration::from_secs(3_601)).is_err());
    }

    #[test]
    fn seconds_parser_reports_field() {
        assert_eq!(
            parse_seconds("poll_interval", "7"),
            Ok(Duration::from_secs(7))
        );
        assert!(matches!(
            parse_seconds("poll_interval", "soon"),
            Err(ConfigError::InvalidField { field: "poll_interval", .. })
        ));
    }
}
