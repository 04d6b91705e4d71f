//! Retry and delete, one at a time or in bulk.

use std::fmt::{self, Display, Formatter};

use futures_util::future::join_all;

use crate::error::ServiceResult;
use crate::service::UrlService;

/// Per-row action offered by the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UrlAction {
    /// Re-run analysis.
    Retry,
    /// Remove the result.
    Delete,
}

impl UrlAction {
    /// Verb used in logs and labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Retry => "retry",
            Self::Delete => "delete",
        }
    }

    /// One-shot notice shown when the action fails.
    #[must_use]
    pub const fn failure_notice(self) -> &'static str {
        match self {
            Self::Retry => "Failed to retry URL.",
            Self::Delete => "Failed to delete URL.",
        }
    }

    /// Label for the bulk button.
    #[must_use]
    pub const fn bulk_label(self) -> &'static str {
        match self {
            Self::Retry => "Retry Selected",
            Self::Delete => "Delete Selected",
        }
    }
}

impl Display for UrlAction {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Issue one action request.
///
/// # Errors
///
/// Propagates the service failure unchanged.
pub async fn perform<S>(service: &S, action: UrlAction, id: u64) -> ServiceResult<()>
where
    S: UrlService + ?Sized,
{
    tracing::debug!(%action, id, "issuing action");
    match action {
        UrlAction::Retry => service.retry(id).await,
        UrlAction::Delete => service.delete(id).await,
    }
}

/// Per-identifier results of a bulk action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BulkOutcome {
    /// Identifiers whose request succeeded, in request order.
    pub succeeded: Vec<u64>,
    /// Identifiers whose request failed, in request order.
    pub failed: Vec<u64>,
}

impl BulkOutcome {
    /// Whether every request succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// `"n succeeded, m failed"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} succeeded, {} failed",
            self.succeeded.len(),
            self.failed.len()
        )
    }
}

/// Issue one request per identifier, all at once, and wait for every result.
///
/// There is no ordering guarantee between requests and no rollback; a failure
/// for one identifier does not affect the others.
pub async fn perform_bulk<S>(service: &S, action: UrlAction, ids: &[u64]) -> BulkOutcome
where
    S: UrlService + ?Sized,
{
    let results = join_all(
        ids.iter()
            .map(|&id| async move { (id, perform(service, action, id).await) }),
    )
    .await;

    let mut outcome = BulkOutcome::default();
    for (id, result) in results {
        match result {
            Ok(()) => outcome.succeeded.push(id),
            Err(err) => {
                tracing::warn!(%action, id, error = %err, "bulk item failed");
                outcome.failed.push(id);
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingService, row};
    use linkscope_api_models::UrlStatus;

    #[tokio::test]
    async fn single_actions_hit_matching_endpoint() {
        let service = RecordingService::with_rows(vec![row(4, "http://a.test", UrlStatus::Done)]);
        perform(&service, UrlAction::Retry, 4).await.expect("retry");
        perform(&service, UrlAction::Delete, 4).await.expect("delete");
        assert_eq!(service.calls(), vec![Call::Retry(4), Call::Delete(4)]);
    }

    #[tokio::test]
    async fn bulk_reports_partial_failure() {
        let service = RecordingService {
            failing_ids: [2].into_iter().collect(),
            ..RecordingService::default()
        };
        let outcome = perform_bulk(&service, UrlAction::Delete, &[1, 2, 3]).await;
        assert_eq!(outcome.succeeded, vec![1, 3]);
        assert_eq!(outcome.failed, vec![2]);
        assert!(!outcome.is_success());
        assert_eq!(outcome.summary(), "2 succeeded, 1 failed");
        assert_eq!(service.count(|call| matches!(call, Call::Delete(_))), 3);
    }

    #[tokio::test]
    async fn empty_bulk_issues_nothing() {
        let service = RecordingService::default();
        let outcome = perform_bulk(&service, UrlAction::Retry, &[]).await;
        assert!(outcome.is_success());
        assert!(service.calls().is_empty());
    }

    #[test]
    fn labels_match_buttons() {
        assert_eq!(UrlAction::Retry.bulk_label(), "Retry Selected");
        assert_eq!(UrlAction::Delete.failure_notice(), "Failed to delete URL.");
    }
}
