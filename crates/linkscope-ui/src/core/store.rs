//! Shared yewdux store for the dashboard.

use linkscope_api_models::CreateUrlRequest;
use linkscope_core::{
    BulkOutcome, DashboardState, FetchTicket, SubmitError, SubmitForm, UrlAction, ViewState,
};
use yewdux::store::Store;

use crate::models::{Toast, ToastKind};

/// Global application store.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Result list, banner and view settings.
    pub dashboard: DashboardState,
    /// Submission form input and busy flag.
    pub form: SubmitForm,
    /// Visible toasts, oldest first.
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl AppStore {
    /// Queue a toast and return its identifier.
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_toast_id = self.next_toast_id.saturating_add(1);
        let id = self.next_toast_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Remove the toast with `id`; unknown identifiers are ignored.
    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Fresh dashboard visit: default view settings and, unless a submission
    /// is still in flight, an empty form. Loaded rows stay until the next fetch.
    pub fn reset_view(&mut self) {
        self.dashboard.view = ViewState::default();
        if !self.form.busy {
            self.form = SubmitForm::default();
        }
    }

    /// Issue the ticket for the next list fetch.
    pub const fn begin_refresh(&mut self) -> FetchTicket {
        self.dashboard.begin_fetch()
    }

    /// Start a submission from the form input.
    ///
    /// Returns the request to send, or `None` when nothing should be sent:
    /// while busy the press is ignored, and invalid input raises a toast.
    pub fn start_submission(&mut self) -> Option<CreateUrlRequest> {
        match self.form.begin() {
            Ok(request) => Some(request),
            Err(SubmitError::Busy) => None,
            Err(err) => {
                self.push_toast(ToastKind::Error, err.to_string());
                None
            }
        }
    }

    /// Report a finished bulk action.
    pub fn finish_bulk(&mut self, action: UrlAction, outcome: &BulkOutcome) {
        if outcome.is_success() {
            self.push_toast(ToastKind::Success, outcome.summary());
        } else {
            let message = format!("{} ({})", action.failure_notice(), outcome.summary());
            self.push_toast(ToastKind::Error, message);
        }
    }
}
