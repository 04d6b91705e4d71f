//! Dashboard list state and the polling contract.
//!
//! Each fetch takes a [`FetchTicket`]; only the most recently issued ticket
//! may change state, so a slow response can never overwrite a newer one.

use linkscope_api_models::{UrlResult, UrlStatus};

use crate::actions::{BulkOutcome, UrlAction, perform_bulk};
use crate::error::ServiceResult;
use crate::service::UrlService;
use crate::view::{ResultView, ViewState, derive};

/// Banner shown while the list cannot be fetched.
pub const FETCH_FAILED_BANNER: &str =
    "Failed to fetch URLs. Please check your network connection.";

/// Sequence number handed to one list fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

/// Monotonic issuer of [`FetchTicket`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchSequencer {
    issued: u64,
}

impl FetchSequencer {
    /// Issue the next ticket; it supersedes every earlier one.
    pub const fn issue(&mut self) -> FetchTicket {
        self.issued = self.issued.saturating_add(1);
        FetchTicket(self.issued)
    }

    /// Whether `ticket` is the latest one issued.
    #[must_use]
    pub const fn is_latest(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.issued
    }
}

/// Everything the dashboard renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    /// Raw list from the last applied fetch, in server order.
    pub rows: Vec<UrlResult>,
    /// Persistent banner text while fetching fails.
    pub error: Option<String>,
    /// Whether any fetch has been applied yet.
    pub loaded: bool,
    /// Client-local view settings.
    pub view: ViewState,
    sequencer: FetchSequencer,
}

impl DashboardState {
    /// Start a fetch.
    pub const fn begin_fetch(&mut self) -> FetchTicket {
        self.sequencer.issue()
    }

    /// Apply a fetch result if `ticket` is still current.
    ///
    /// Success replaces the list and clears the banner; failure sets the
    /// banner and keeps the previous list. Returns whether anything changed.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: ServiceResult<Vec<UrlResult>>,
    ) -> bool {
        if !self.sequencer.is_latest(ticket) {
            tracing::warn!(?ticket, "dropping stale fetch result");
            return false;
        }
        match result {
            Ok(rows) => self.set_rows(rows),
            Err(err) => {
                tracing::warn!(error = %err, "list fetch failed");
                self.error = Some(FETCH_FAILED_BANNER.to_string());
            }
        }
        true
    }

    /// Replace the list wholesale, prune vanished selections and clear the banner.
    pub fn set_rows(&mut self, rows: Vec<UrlResult>) {
        self.view.prune_selection(&rows);
        self.rows = rows;
        self.error = None;
        self.loaded = true;
    }

    /// Derive the current page.
    #[must_use]
    pub fn result_view(&self) -> ResultView {
        derive(&self.rows, &self.view)
    }
}

/// Whether the retry control is enabled for `row`.
#[must_use]
pub fn retry_allowed(row: &UrlResult) -> bool {
    row.status != UrlStatus::Running
}

/// Fetch the list and apply it under a fresh ticket.
pub async fn refresh<S>(state: &mut DashboardState, service: &S) -> bool
where
    S: UrlService + ?Sized,
{
    let ticket = state.begin_fetch();
    let result = service.list().await;
    state.apply_fetch(ticket, result)
}

/// Run `action` for every selected identifier, then refresh exactly once.
pub async fn act_on_selection<S>(
    state: &mut DashboardState,
    service: &S,
    action: UrlAction,
) -> BulkOutcome
where
    S: UrlService + ?Sized,
{
    let ids = state.view.selected_ids();
    let outcome = perform_bulk(service, action, &ids).await;
    refresh(state, service).await;
    outcome
}
