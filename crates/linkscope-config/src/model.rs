//! Typed client configuration.

use std::time::Duration;

use serde::Serialize;
use url::Url;

use crate::defaults::{
    DEFAULT_API_URL, DEFAULT_POLL_INTERVAL, DEFAULT_REQUEST_TIMEOUT, KEY_API_TOKEN, KEY_API_URL,
    KEY_HTTP_TIMEOUT_SECS, KEY_POLL_INTERVAL_SECS,
};
use crate::error::ConfigResult;
use crate::validate::{
    parse_base_url, parse_seconds, validate_base_url, validate_poll_interval,
    validate_request_timeout, validate_token,
};

/// Connection settings shared by every API client.
///
/// Built once at startup and handed to the client; nothing reads credentials
/// from ambient globals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClientConfig {
    /// Base address every endpoint path is joined onto (e.g. `http://host/api`).
    pub api_base_url: Url,
    /// Static bearer credential sent on every request.
    #[serde(skip_serializing)]
    pub bearer_token: Option<String>,
    /// Interval between dashboard list refreshes.
    pub poll_interval: Duration,
    /// Per-request timeout for native clients.
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Build a configuration for `api_base_url` with default timings and no token.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError`] when the base address is invalid.
    pub fn new(api_base_url: &str) -> ConfigResult<Self> {
        Ok(Self {
            api_base_url: parse_base_url(api_base_url)?,
            bearer_token: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    /// Build a configuration from an arbitrary key lookup (environment, storage, flags).
    ///
    /// Missing or blank entries fall back to the defaults in [`crate::defaults`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError`] when any supplied value fails validation.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base = read(KEY_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let mut config = Self::new(&base)?;
        config.bearer_token = read(KEY_API_TOKEN).map(|token| token.trim().to_string());
        if let Some(raw) = read(KEY_POLL_INTERVAL_SECS) {
            config.poll_interval = parse_seconds("poll_interval", &raw)?;
        }
        if let Some(raw) = read(KEY_HTTP_TIMEOUT_SECS) {
            config.request_timeout = parse_seconds("request_timeout", &raw)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Attach a bearer token.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Override the poll interval.
    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns the first [`crate::ConfigError`] encountered.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_base_url(&self.api_base_url)?;
        if let Some(token) = &self.bearer_token {
            validate_token(token)?;
        }
        validate_poll_interval(self.poll_interval)?;
        validate_request_timeout(self.request_timeout)
    }

    /// Join an endpoint path onto the base address, keeping the base path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Value for the `Authorization` header, when a token is configured.
    #[must_use]
    pub fn authorization_header(&self) -> Option<String> {
        self.bearer_token
            .as_deref()
            .map(|token| format!("Bearer {token}"))
    }

    /// Poll interval in whole milliseconds, saturating at `u32::MAX`.
    #[must_use]
    pub fn poll_interval_ms(&self) -> u32 {
        u32::try_from(self.poll_interval.as_millis()).unwrap_or(u32::MAX)
    }
}
