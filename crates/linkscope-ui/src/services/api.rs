//! HTTP client helpers (REST).

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use linkscope_config::ClientConfig;
use linkscope_core::models::{CreateUrlRequest, UrlDetail, UrlResult};
use linkscope_core::{ServiceError, ServiceResult, UrlService};
use serde::de::DeserializeOwned;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    pub(crate) const fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub(crate) const fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn authorize(&self, request: Request) -> Request {
        match self.config.authorization_header() {
            Some(value) => request.header("Authorization", &value),
            None => request,
        }
    }

    async fn send(&self, operation: &'static str, request: Request) -> ServiceResult<Response> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|err| transport(operation, &err))?;
        if response.ok() {
            Ok(response)
        } else {
            Err(ServiceError::Status {
                operation,
                status: response.status(),
            })
        }
    }

    async fn decode<T: DeserializeOwned>(
        operation: &'static str,
        response: Response,
    ) -> ServiceResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|err| ServiceError::Decode {
                operation,
                source: err.to_string().into(),
            })
    }
}

fn transport(operation: &'static str, err: &gloo_net::Error) -> ServiceError {
    ServiceError::Transport {
        operation,
        source: err.to_string().into(),
    }
}

#[async_trait(?Send)]
impl UrlService for ApiClient {
    async fn list(&self) -> ServiceResult<Vec<UrlResult>> {
        let request = Request::get(&self.config.endpoint("/urls"));
        let response = self.send("list", request).await?;
        Self::decode("list", response).await
    }

    async fn get(&self, id: u64) -> ServiceResult<UrlDetail> {
        let request = Request::get(&self.config.endpoint(&format!("/urls/{id}")));
        let response = self.send("get", request).await?;
        Self::decode("get", response).await
    }

    async fn create(&self, request: &CreateUrlRequest) -> ServiceResult<Option<UrlResult>> {
        let request = Request::post(&self.config.endpoint("/urls"))
            .json(request)
            .map_err(|err| transport("create", &err))?;
        let response = self.send("create", request).await?;
        Ok(response.json::<UrlResult>().await.ok())
    }

    async fn retry(&self, id: u64) -> ServiceResult<()> {
        let request = Request::post(&self.config.endpoint(&format!("/urls/{id}/retry")));
        self.send("retry", request).await.map(drop)
    }

    async fn delete(&self, id: u64) -> ServiceResult<()> {
        let request = Request::delete(&self.config.endpoint(&format!("/urls/{id}")));
        self.send("delete", request).await.map(drop)
    }
}
