#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the website-analysis API.
//!
//! The backend speaks capitalised field names (`ID`, `Link`, `HTMLVersion`, ...).
//! Both the browser client and the CLI decode through these types so the casing
//! lives in exactly one place.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

/// Analysis lifecycle as reported by the backend.
///
/// Transitions are driven entirely server-side: `queued → running → done | error`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UrlStatus {
    /// Submitted and waiting for a worker.
    Queued,
    /// Analysis in progress.
    Running,
    /// Analysis finished successfully.
    Done,
    /// Analysis failed.
    Error,
}

impl UrlStatus {
    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Running => "running",
            Self::Done => "done",
            Self::Error => "error",
        }
    }
}

impl Display for UrlStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// One row of analysis output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlResult {
    /// Backend-assigned identifier.
    #[serde(rename = "ID")]
    pub id: u64,
    /// The submitted URL.
    #[serde(rename = "Link")]
    pub link: String,
    /// Page title; empty until analysis completes.
    #[serde(rename = "Title", default)]
    pub title: String,
    /// Detected HTML version; may be empty.
    #[serde(rename = "HTMLVersion", default)]
    pub html_version: String,
    /// Count of links pointing at the same host.
    #[serde(rename = "InternalLinks", default)]
    pub internal_links: u32,
    /// Count of links pointing at other hosts.
    #[serde(rename = "ExternalLinks", default)]
    pub external_links: u32,
    /// Count of links that failed to resolve.
    #[serde(rename = "BrokenLinks", default)]
    pub broken_links: u32,
    /// Whether the page contains a login form.
    #[serde(rename = "HasLoginForm", default)]
    pub has_login_form: bool,
    /// Current analysis status.
    #[serde(rename = "Status")]
    pub status: UrlStatus,
    /// Creation timestamp, passed through verbatim.
    #[serde(rename = "CreatedAt", default)]
    pub created_at: String,
}

/// A single broken link discovered on an analysed page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrokenLinkItem {
    /// Target of the broken link.
    #[serde(rename = "Link")]
    pub link: String,
    /// Status reported for the link (HTTP code or transport error text).
    #[serde(rename = "Status", default)]
    pub status: String,
}

/// Detail payload returned by `GET /urls/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlDetail {
    /// Summary fields shared with the list endpoint.
    #[serde(flatten)]
    pub result: UrlResult,
    /// Broken links in backend order.
    #[serde(
        rename = "BrokenLinkItems",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub broken_link_items: Vec<BrokenLinkItem>,
}

/// Request body for `POST /urls`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUrlRequest {
    /// URL to enqueue for analysis.
    pub url: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn url_result_decodes_capitalised_fields() -> Result<(), serde_json::Error> {
        let value = json!({
            "ID": 7,
            "Link": "https://example.com",
            "Title": "Example Domain",
            "HTMLVersion": "HTML5",
            "InternalLinks": 3,
            "ExternalLinks": 1,
            "BrokenLinks": 0,
            "HasLoginForm": true,
            "Status": "running",
            "CreatedAt": "2025-07-01T10:00:00Z"
        });
        let result: UrlResult = serde_json::from_value(value)?;
        assert_eq!(result.id, 7);
        assert_eq!(result.html_version, "HTML5");
        assert_eq!(result.status, UrlStatus::Running);
        assert!(result.has_login_form);
        Ok(())
    }

    #[test]
    fn url_result_defaults_fields_missing_before_analysis() -> Result<(), serde_json::Error> {
        let result: UrlResult = serde_json::from_value(json!({
            "ID": 1,
            "Link": "http://queued.test",
            "Status": "queued"
        }))?;
        assert!(result.title.is_empty());
        assert_eq!(result.internal_links, 0);
        assert!(!result.has_login_form);
        Ok(())
    }

    #[test]
    fn unknown_status_is_rejected() {
        let decoded = serde_json::from_value::<UrlResult>(json!({
            "ID": 1,
            "Link": "http://x.test",
            "Status": "paused"
        }));
        assert!(decoded.is_err());
    }

    #[test]
    fn negative_counts_are_rejected() {
        let decoded = serde_json::from_value::<UrlResult>(json!({
            "ID": 1,
            "Link": "http://x.test",
            "Status": "done",
            "BrokenLinks": -1
        }));
        assert!(decoded.is_err());
    }

    #[test]
    fn detail_flattens_summary_and_keeps_broken_link_order() -> Result<(), serde_json::Error> {
        let detail: UrlDetail = serde_json::from_value(json!({
            "ID": 4,
            "Link": "https://docs.test",
            "Status": "done",
            "BrokenLinkItems": [
                {"Link": "https://docs.test/a", "Status": "404"},
                {"Link": "https://docs.test/b", "Status": "500"}
            ]
        }))?;
        assert_eq!(detail.result.id, 4);
        let links: Vec<_> = detail
            .broken_link_items
            .iter()
            .map(|item| item.link.as_str())
            .collect();
        assert_eq!(links, ["https://docs.test/a", "https://docs.test/b"]);
        Ok(())
    }

    #[test]
    fn null_broken_links_decode_as_empty() -> Result<(), serde_json::Error> {
        let detail: UrlDetail = serde_json::from_value(json!({
            "ID": 4,
            "Link": "https://docs.test",
            "Status": "error",
            "BrokenLinkItems": null
        }))?;
        assert!(detail.broken_link_items.is_empty());
        Ok(())
    }

    #[test]
    fn create_request_uses_lowercase_url_key() -> Result<(), serde_json::Error> {
        let body = serde_json::to_value(CreateUrlRequest {
            url: "http://example.com".into(),
        })?;
        assert_eq!(body, json!({"url": "http://example.com"}));
        Ok(())
    }

    #[test]
    fn status_names_match_wire_values() {
        assert_eq!(UrlStatus::Done.to_string(), "done");
        assert_eq!(UrlStatus::Running.as_str(), "running");
    }
}
