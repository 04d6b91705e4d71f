//! Default values and lookup keys for client configuration.

use std::time::Duration;

/// Base address used when none is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/api";
/// Interval between list refreshes on the dashboard.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);
/// Per-request timeout applied by native clients.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Upper bound accepted for the poll interval.
pub const MAX_POLL_INTERVAL: Duration = Duration::from_secs(3_600);

/// Lookup key for the API base address.
pub const KEY_API_URL: &str = "LINKSCOPE_API_URL";
/// Lookup key for the bearer token.
pub const KEY_API_TOKEN: &str = "LINKSCOPE_API_TOKEN";
/// Lookup key for the poll interval, in whole seconds.
pub const KEY_POLL_INTERVAL_SECS: &str = "LINKSCOPE_POLL_INTERVAL_SECS";
/// Lookup key for the request timeout, in whole seconds.
pub const KEY_HTTP_TIMEOUT_SECS: &str = "LINKSCOPE_HTTP_TIMEOUT_SECS";
