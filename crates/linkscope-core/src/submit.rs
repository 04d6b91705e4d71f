//! URL submission: validation and the add-form state machine.

use linkscope_api_models::{CreateUrlRequest, UrlResult};
use thiserror::Error;

use crate::error::ServiceError;
use crate::service::UrlService;

/// Notice shown when the backend rejects or never receives a submission.
pub const SUBMIT_FAILED_NOTICE: &str = "Failed to submit URL.";

/// Why a submission did not go through.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The input does not start with `http`; no request was made.
    #[error("Enter a valid URL")]
    Invalid {
        /// Rejected input.
        input: String,
    },
    /// A submission from the same form is still in flight.
    #[error("a submission is already in progress")]
    Busy,
    /// The backend call failed.
    #[error("Failed to submit URL.")]
    Service(#[from] ServiceError),
}

impl SubmitError {
    /// Whether the failure happened before any request was sent.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Invalid { .. } | Self::Busy)
    }
}

/// Accept any input that begins with the literal prefix `http`.
///
/// No trimming or URL parsing happens here; the backend owns full validation.
///
/// # Errors
///
/// Returns [`SubmitError::Invalid`] when the prefix is missing.
pub fn validate_submission(input: &str) -> Result<(), SubmitError> {
    if input.starts_with("http") {
        Ok(())
    } else {
        Err(SubmitError::Invalid {
            input: input.to_string(),
        })
    }
}

/// Validate and send a submission.
///
/// # Errors
///
/// Returns [`SubmitError::Invalid`] without calling the service when
/// validation fails, or [`SubmitError::Service`] when the request fails.
pub async fn submit_url<S>(service: &S, input: &str) -> Result<Option<UrlResult>, SubmitError>
where
    S: UrlService + ?Sized,
{
    validate_submission(input)?;
    tracing::debug!(url = %input, "submitting url");
    let request = CreateUrlRequest {
        url: input.to_string(),
    };
    Ok(service.create(&request).await?)
}

/// Add-URL form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitForm {
    /// Current input text.
    pub input: String,
    /// Whether a submission is in flight.
    pub busy: bool,
}

impl SubmitForm {
    /// Replace the input text.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Validate the input and mark the form busy.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Busy`] while a submission is in flight, or
    /// [`SubmitError::Invalid`] when the input fails validation.
    pub fn begin(&mut self) -> Result<CreateUrlRequest, SubmitError> {
        if self.busy {
            return Err(SubmitError::Busy);
        }
        validate_submission(&self.input)?;
        self.busy = true;
        Ok(CreateUrlRequest {
            url: self.input.clone(),
        })
    }

    /// Submission accepted: clear the input.
    pub fn succeed(&mut self) {
        self.input.clear();
        self.busy = false;
    }

    /// Submission failed: keep the input for another attempt.
    pub const fn fail(&mut self) {
        self.busy = false;
    }

    /// Label for the submit button.
    #[must_use]
    pub const fn button_label(&self) -> &'static str {
        if self.busy { "Adding..." } else { "Add URL" }
    }

    /// Run the whole flow against `service`.
    ///
    /// # Errors
    ///
    /// See [`SubmitForm::begin`]; backend failures are returned as
    /// [`SubmitError::Service`] after the form is reset to idle.
    pub async fn submit<S>(&mut self, service: &S) -> Result<Option<UrlResult>, SubmitError>
    where
        S: UrlService + ?Sized,
    {
        let request = self.begin()?;
        match submit_url(service, &request.url).await {
            Ok(created) => {
                self.succeed();
                Ok(created)
            }
            Err(err) => {
                tracing::warn!(error = %err, url = %request.url, "submission failed");
                self.fail();
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingService};

    #[test]
    fn validation_only_checks_http_prefix() {
        assert!(validate_submission("http://example.com").is_ok());
        assert!(validate_submission("https://example.com").is_ok());
        assert!(validate_submission("httpfoo").is_ok());
        assert!(matches!(
            validate_submission("not-a-url"),
            Err(SubmitError::Invalid { input }) if input == "not-a-url"
        ));
        assert!(validate_submission(" http://example.com").is_err());
        assert!(validate_submission("").is_err());
    }

    #[tokio::test]
    async fn invalid_input_makes_no_call() {
        let service = RecordingService::default();
        let mut form = SubmitForm::default();
        form.set_input("not-a-url");
        let err = form.submit(&service).await.expect_err("must be rejected");
        assert!(err.is_validation());
        assert!(service.calls().is_empty());
        assert_eq!(form.input, "not-a-url");
        assert!(!form.busy);
    }

    #[tokio::test]
    async fn success_clears_input() {
        let service = RecordingService::default();
        let mut form = SubmitForm::default();
        form.set_input("http://example.com");
        let created = form.submit(&service).await.expect("submission succeeds");
        assert_eq!(created.map(|row| row.link).as_deref(), Some("http://example.com"));
        assert_eq!(
            service.calls(),
            vec![Call::Create("http://example.com".to_string())]
        );
        assert!(form.input.is_empty());
        assert!(!form.busy);
    }

    #[tokio::test]
    async fn failure_keeps_input_and_reports_notice() {
        let service = RecordingService {
            fail_create: true,
            ..RecordingService::default()
        };
        let mut form = SubmitForm::default();
        form.set_input("http://example.com");
        let err = form.submit(&service).await.expect_err("backend fails");
        assert_eq!(err.to_string(), SUBMIT_FAILED_NOTICE);
        assert!(!err.is_validation());
        assert_eq!(form.input, "http://example.com");
        assert!(!form.busy);
    }

    #[test]
    fn busy_form_refuses_second_begin() {
        let mut form = SubmitForm::default();
        form.set_input("http://example.com");
        assert!(form.begin().is_ok());
        assert_eq!(form.button_label(), "Adding...");
        assert!(matches!(form.begin(), Err(SubmitError::Busy)));
        form.fail();
        assert_eq!(form.button_label(), "Add URL");
    }

    #[tokio::test]
    async fn submit_url_validates_before_calling() {
        let service = RecordingService::default();
        assert!(submit_url(&service, "ftp://x").await.is_err());
        assert_eq!(service.count(|call| matches!(call, Call::Create(_))), 0);
        assert!(submit_url(&service, "http://x.test").await.is_ok());
        assert_eq!(service.count(|call| matches!(call, Call::Create(_))), 1);
    }
}
