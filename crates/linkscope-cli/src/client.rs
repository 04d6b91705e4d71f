//! Shared HTTP client, error types, and exit-code mapping for the CLI.

use std::fmt::{self, Display, Formatter};

use anyhow::anyhow;
use async_trait::async_trait;
use linkscope_api_models::{CreateUrlRequest, UrlDetail, UrlResult};
use linkscope_config::{ClientConfig, ConfigError};
use linkscope_core::{ServiceError, ServiceResult, SubmitError, UrlService};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match &err {
            ConfigError::InvalidField {
                value: Some(value), ..
            } => Self::validation(format!("{err} (got '{value}')")),
            ConfigError::InvalidField { value: None, .. } => Self::validation(err.to_string()),
        }
    }
}

impl From<SubmitError> for CliError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Invalid { input } => {
                Self::validation(format!("Enter a valid URL (got '{input}')"))
            }
            SubmitError::Busy => Self::validation("a submission is already in progress"),
            SubmitError::Service(source) => {
                Self::failure(anyhow::Error::new(source).context("Failed to submit URL."))
            }
        }
    }
}

/// Classify a backend failure into a CLI error.
///
/// Client-side rejections (400, 404, 409, 422) count as validation failures;
/// everything else is operational.
pub(crate) fn classify_problem(err: ServiceError) -> CliError {
    match err.status() {
        Some(400 | 404 | 409 | 422) => CliError::validation(err.to_string()),
        _ => CliError::failure(err),
    }
}

/// [`UrlService`] over reqwest.
#[derive(Clone, Debug)]
pub(crate) struct HttpUrlService {
    client: Client,
    config: ClientConfig,
}

impl HttpUrlService {
    /// Build a client carrying the bearer token and a per-invocation request id.
    pub(crate) fn new(config: ClientConfig, trace_id: &str) -> CliResult<Self> {
        let mut default_headers = HeaderMap::new();
        let request_id = HeaderValue::from_str(trace_id).map_err(|_| {
            CliError::failure(anyhow!("trace identifier contains invalid characters"))
        })?;
        default_headers.insert(HEADER_REQUEST_ID, request_id);
        if let Some(value) = config.authorization_header() {
            let mut auth = HeaderValue::from_str(&value).map_err(|_| {
                CliError::validation("API token contains characters not allowed in a header")
            })?;
            auth.set_sensitive(true);
            default_headers.insert(AUTHORIZATION, auth);
        }

        let client = Client::builder()
            .timeout(config.request_timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))?;

        Ok(Self { client, config })
    }

    pub(crate) const fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn send(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> ServiceResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|err| ServiceError::Transport {
                operation,
                source: Box::new(err),
            })?;
        let status = response.status();
        tracing::debug!(operation, status = status.as_u16(), "response received");
        if status.is_success() {
            Ok(response)
        } else {
            Err(ServiceError::Status {
                operation,
                status: status.as_u16(),
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
                source: Box::new(err),
            })
    }
}

#[async_trait(?Send)]
impl UrlService for HttpUrlService {
    async fn list(&self) -> ServiceResult<Vec<UrlResult>> {
        let url = self.config.endpoint("/urls");
        tracing::debug!(%url, "GET");
        let response = self.send("list", self.client.get(url)).await?;
        Self::decode("list", response).await
    }

    async fn get(&self, id: u64) -> ServiceResult<UrlDetail> {
        let url = self.config.endpoint(&format!("/urls/{id}"));
        tracing::debug!(%url, "GET");
        let response = self.send("get", self.client.get(url)).await?;
        Self::decode("get", response).await
    }

    async fn create(&self, request: &CreateUrlRequest) -> ServiceResult<Option<UrlResult>> {
        let url = self.config.endpoint("/urls");
        tracing::debug!(%url, "POST");
        let response = self
            .send("create", self.client.post(url).json(request))
            .await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ServiceError::Transport {
                operation: "create",
                source: Box::new(err),
            })?;
        Ok(serde_json::from_slice::<UrlResult>(&bytes).ok())
    }

    async fn retry(&self, id: u64) -> ServiceResult<()> {
        let url = self.config.endpoint(&format!("/urls/{id}/retry"));
        tracing::debug!(%url, "POST");
        self.send("retry", self.client.post(url)).await.map(drop)
    }

    async fn delete(&self, id: u64) -> ServiceResult<()> {
        let url = self.config.endpoint(&format!("/urls/{id}"));
        tracing::debug!(%url, "DELETE");
        self.send("delete", self.client.delete(url)).await.map(drop)
    }
}
