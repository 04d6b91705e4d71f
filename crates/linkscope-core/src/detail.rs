//! Detail page state and the link-distribution chart data.

use linkscope_api_models::{UrlDetail, UrlResult};

use crate::error::ServiceResult;
use crate::service::UrlService;

/// Text shown when a result has no broken links.
pub const NO_BROKEN_LINKS: &str = "No broken links found.";

/// Lifecycle of one detail fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DetailState {
    /// Fetch outstanding.
    #[default]
    Loading,
    /// Fetch resolved.
    Loaded(Box<UrlDetail>),
    /// Fetch failed; carries a user-facing message.
    Failed(String),
}

impl DetailState {
    /// Fold a fetch result into a state.
    #[must_use]
    pub fn from_result(id: u64, result: ServiceResult<UrlDetail>) -> Self {
        match result {
            Ok(detail) => Self::Loaded(Box::new(detail)),
            Err(err) => {
                tracing::warn!(id, error = %err, "detail fetch failed");
                Self::Failed(format!("Failed to load details for URL {id}."))
            }
        }
    }

    /// Fetch one result.
    pub async fn load<S>(service: &S, id: u64) -> Self
    where
        S: UrlService + ?Sized,
    {
        Self::from_result(id, service.get(id).await)
    }

    /// Loaded detail, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&UrlDetail> {
        match self {
            Self::Loaded(detail) => Some(detail.as_ref()),
            Self::Loading | Self::Failed(_) => None,
        }
    }
}

/// One slice of the link-distribution chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartSlice {
    /// Legend label.
    pub label: &'static str,
    /// Raw count.
    pub value: u32,
    /// Share of the total in `[0, 1]`; zero when the total is zero.
    pub fraction: f64,
}

impl ChartSlice {
    /// Share as a whole-number percentage.
    #[must_use]
    pub fn percent(&self) -> f64 {
        (self.fraction * 100.0).round()
    }
}

/// Internal and external slices, in that order.
#[must_use]
pub fn link_distribution(result: &UrlResult) -> [ChartSlice; 2] {
    let total = f64::from(result.internal_links) + f64::from(result.external_links);
    let share = |value: u32| {
        if total > 0.0 {
            f64::from(value) / total
        } else {
            0.0
        }
    };
    [
        ChartSlice {
            label: "Internal",
            value: result.internal_links,
            fraction: share(result.internal_links),
        },
        ChartSlice {
            label: "External",
            value: result.external_links,
            fraction: share(result.external_links),
        },
    ]
}

/// Whether every slice is zero, in which case the chart renders an empty ring.
#[must_use]
pub fn is_empty_distribution(slices: &[ChartSlice]) -> bool {
    slices.iter().all(|slice| slice.value == 0)
}

/// `value`, or `-` when it is empty.
#[must_use]
pub fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

/// `Yes` or `No`.
#[must_use]
pub const fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingService, row};
    use linkscope_api_models::UrlStatus;

    #[test]
    fn distribution_splits_by_share() {
        let mut result = row(1, "http://a.test", UrlStatus::Done);
        result.internal_links = 3;
        result.external_links = 1;
        let [internal, external] = link_distribution(&result);
        assert_eq!(internal.label, "Internal");
        assert!((internal.fraction - 0.75).abs() < f64::EPSILON);
        assert!((external.percent() - 25.0).abs() < f64::EPSILON);
        assert!(!is_empty_distribution(&[internal, external]));
    }

    #[test]
    fn zero_counts_produce_empty_ring() {
        let slices = link_distribution(&row(1, "http://a.test", UrlStatus::Queued));
        assert!(is_empty_distribution(&slices));
        assert!(slices.iter().all(|slice| slice.fraction.abs() < f64::EPSILON));
    }

    #[test]
    fn placeholders_for_missing_fields() {
        assert_eq!(or_dash(""), "-");
        assert_eq!(or_dash("HTML5"), "HTML5");
        assert_eq!(yes_no(true), "Yes");
    }

    #[tokio::test]
    async fn load_resolves_or_fails() {
        let service =
            RecordingService::with_rows(vec![row(7, "http://seven.test", UrlStatus::Done)]);
        let loaded = DetailState::load(&service, 7).await;
        assert_eq!(loaded.detail().map(|detail| detail.result.id), Some(7));

        let missing = DetailState::load(&service, 8).await;
        assert!(matches!(missing, DetailState::Failed(ref message) if message.contains('8')));
        assert_eq!(service.calls(), vec![Call::Get(7), Call::Get(8)]);
    }
}
