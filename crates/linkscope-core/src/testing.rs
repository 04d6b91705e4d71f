//! In-memory [`UrlService`] used by unit tests.

use std::cell::RefCell;
use std::collections::BTreeSet;

use async_trait::async_trait;
use linkscope_api_models::{CreateUrlRequest, UrlDetail, UrlResult, UrlStatus};

use crate::error::{ServiceError, ServiceResult};
use crate::service::UrlService;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    List,
    Get(u64),
    Create(String),
    Retry(u64),
    Delete(u64),
}

#[derive(Default)]
pub(crate) struct RecordingService {
    pub(crate) rows: RefCell<Vec<UrlResult>>,
    pub(crate) calls: RefCell<Vec<Call>>,
    pub(crate) failing_ids: BTreeSet<u64>,
    pub(crate) fail_list: bool,
    pub(crate) fail_create: bool,
}

impl RecordingService {
    pub(crate) fn with_rows(rows: Vec<UrlResult>) -> Self {
        Self {
            rows: RefCell::new(rows),
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn count(&self, matcher: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| matcher(call)).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn check(&self, operation: &'static str, id: u64) -> ServiceResult<()> {
        if self.failing_ids.contains(&id) {
            return Err(ServiceError::Status {
                operation,
                status: 500,
            });
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl UrlService for RecordingService {
    async fn list(&self) -> ServiceResult<Vec<UrlResult>> {
        self.record(Call::List);
        if self.fail_list {
            return Err(ServiceError::Transport {
                operation: "list",
                source: "offline".into(),
            });
        }
        Ok(self.rows.borrow().clone())
    }

    async fn get(&self, id: u64) -> ServiceResult<UrlDetail> {
        self.record(Call::Get(id));
        self.check("get", id)?;
        self.rows
            .borrow()
            .iter()
            .find(|row| row.id == id)
            .map(|row| UrlDetail {
                result: row.clone(),
                broken_link_items: Vec::new(),
            })
            .ok_or(ServiceError::Status {
                operation: "get",
                status: 404,
            })
    }

    async fn create(&self, request: &CreateUrlRequest) -> ServiceResult<Option<UrlResult>> {
        self.record(Call::Create(request.url.clone()));
        if self.fail_create {
            return Err(ServiceError::Status {
                operation: "create",
                status: 500,
            });
        }
        let mut rows = self.rows.borrow_mut();
        let id = rows.iter().map(|row| row.id).max().unwrap_or(0) + 1;
        let created = row(id, &request.url, UrlStatus::Queued);
        rows.push(created.clone());
        Ok(Some(created))
    }

    async fn retry(&self, id: u64) -> ServiceResult<()> {
        self.record(Call::Retry(id));
        self.check("retry", id)?;
        if let Some(row) = self.rows.borrow_mut().iter_mut().find(|row| row.id == id) {
            row.status = UrlStatus::Queued;
        }
        Ok(())
    }

    async fn delete(&self, id: u64) -> ServiceResult<()> {
        self.record(Call::Delete(id));
        self.check("delete", id)?;
        self.rows.borrow_mut().retain(|row| row.id != id);
        Ok(())
    }
}

pub(crate) fn row(id: u64, link: &str, status: UrlStatus) -> UrlResult {
    UrlResult {
        id,
        link: link.to_string(),
        title: String::new(),
        html_version: String::new(),
        internal_links: 0,
        external_links: 0,
        broken_links: 0,
        has_login_form: false,
        status,
        created_at: String::new(),
    }
}
