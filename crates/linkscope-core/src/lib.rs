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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Front-end agnostic result handling for the Linkscope clients.
//!
//! Layout: `service.rs` (the [`UrlService`] seam implemented by each HTTP
//! client), `view.rs` (filter, sort, paginate and select), `submit.rs` (URL
//! submission), `actions.rs` (single and bulk retry/delete), `dashboard.rs`
//! (list state and fetch sequencing), `detail.rs` (detail page state and chart
//! slices), `error.rs` ([`ServiceError`]).

pub mod actions;
pub mod dashboard;
pub mod detail;
pub mod error;
pub mod service;
pub mod submit;
pub mod view;

#[cfg(test)]
mod testing;

pub use actions::{BulkOutcome, UrlAction, perform, perform_bulk};
pub use dashboard::{
    DashboardState, FETCH_FAILED_BANNER, FetchSequencer, FetchTicket, act_on_selection,
    refresh, retry_allowed,
};
pub use detail::{
    ChartSlice, DetailState, NO_BROKEN_LINKS, is_empty_distribution, link_distribution, or_dash,
    yes_no,
};
pub use error::{ServiceError, ServiceResult};
pub use service::UrlService;
pub use submit::{
    SUBMIT_FAILED_NOTICE, SubmitError, SubmitForm, submit_url, validate_submission,
};
pub use view::{PAGE_SIZE, ResultView, SortDirection, SortKey, ViewState, derive};

pub use linkscope_api_models as models;
