//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one API client per app boot.
//! - Pages reach it through `use_context` instead of rebuilding clients.

use crate::services::api::ApiClient;
use linkscope_config::ClientConfig;
use std::rc::Rc;

/// Shared API client context for UI services.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    pub(crate) fn new(config: ClientConfig) -> Self {
        Self {
            client: Rc::new(ApiClient::new(config)),
        }
    }

    /// Dashboard refresh period in milliseconds.
    pub(crate) fn poll_interval_ms(&self) -> u32 {
        self.client.config().poll_interval_ms()
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
