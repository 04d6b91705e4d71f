use std::cell::RefCell;

use async_trait::async_trait;
use linkscope_core::models::{CreateUrlRequest, UrlDetail, UrlResult, UrlStatus};
use linkscope_core::{
    DashboardState, ServiceError, ServiceResult, SubmitForm, UrlService, refresh, retry_allowed,
};

#[derive(Default)]
struct Backend {
    rows: RefCell<Vec<UrlResult>>,
    log: RefCell<Vec<String>>,
}

impl Backend {
    fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

#[async_trait(?Send)]
impl UrlService for Backend {
    async fn list(&self) -> ServiceResult<Vec<UrlResult>> {
        self.log.borrow_mut().push("GET /urls".to_string());
        Ok(self.rows.borrow().clone())
    }

    async fn get(&self, id: u64) -> ServiceResult<UrlDetail> {
        self.log.borrow_mut().push(format!("GET /urls/{id}"));
        Err(ServiceError::Status {
            operation: "get",
            status: 404,
        })
    }

    async fn create(&self, request: &CreateUrlRequest) -> ServiceResult<Option<UrlResult>> {
        self.log.borrow_mut().push(format!("POST /urls {}", request.url));
        let id = u64::try_from(self.rows.borrow().len()).unwrap_or_default() + 1;
        self.rows.borrow_mut().push(UrlResult {
            id,
            link: request.url.clone(),
            title: String::new(),
            html_version: String::new(),
            internal_links: 0,
            external_links: 0,
            broken_links: 0,
            has_login_form: false,
            status: UrlStatus::Running,
            created_at: String::new(),
        });
        Ok(None)
    }

    async fn retry(&self, id: u64) -> ServiceResult<()> {
        self.log.borrow_mut().push(format!("POST /urls/{id}/retry"));
        Ok(())
    }

    async fn delete(&self, id: u64) -> ServiceResult<()> {
        self.log.borrow_mut().push(format!("DELETE /urls/{id}"));
        Ok(())
    }
}

#[tokio::test]
async fn submission_posts_once_then_refetches_once() {
    let backend = Backend::default();
    let mut dashboard = DashboardState::default();
    let mut form = SubmitForm::default();
    form.set_input("http://example.com");

    form.submit(&backend).await.expect("submission succeeds");
    refresh(&mut dashboard, &backend).await;

    assert_eq!(
        backend.log(),
        vec!["POST /urls http://example.com", "GET /urls"]
    );
    assert!(form.input.is_empty());
    let view = dashboard.result_view();
    assert_eq!(view.rows.len(), 1);
    assert!(!retry_allowed(&view.rows[0]));
}

#[tokio::test]
async fn rejected_submission_never_reaches_backend() {
    let backend = Backend::default();
    let mut form = SubmitForm::default();
    form.set_input("not-a-url");
    assert!(form.submit(&backend).await.is_err());
    assert!(backend.log().is_empty());
}
