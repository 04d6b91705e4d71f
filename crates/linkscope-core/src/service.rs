//! Client seam over the analysis backend.
//!
//! The browser and terminal clients implement [`UrlService`] over their own
//! HTTP stacks; everything above this trait is transport-free and tested with
//! in-memory fakes.

use async_trait::async_trait;
use linkscope_api_models::{CreateUrlRequest, UrlDetail, UrlResult};

use crate::error::ServiceResult;

/// Requests understood by the analysis backend.
///
/// Futures are not required to be `Send` so that single-threaded browser
/// clients can implement the trait.
#[async_trait(?Send)]
pub trait UrlService {
    /// `GET /urls`: every result in server order.
    async fn list(&self) -> ServiceResult<Vec<UrlResult>>;

    /// `GET /urls/{id}`: one result with its broken links.
    async fn get(&self, id: u64) -> ServiceResult<UrlDetail>;

    /// `POST /urls`: enqueue a URL; the created record is returned when the
    /// backend sends one.
    async fn create(&self, request: &CreateUrlRequest) -> ServiceResult<Option<UrlResult>>;

    /// `POST /urls/{id}/retry`: ask the backend to analyse the URL again.
    async fn retry(&self, id: u64) -> ServiceResult<()>;

    /// `DELETE /urls/{id}`: remove a result.
    async fn delete(&self, id: u64) -> ServiceResult<()>;
}
