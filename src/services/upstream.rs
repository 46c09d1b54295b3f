//! Client for the upstream CRM form ingestion API.

use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

use crate::domain::submission::FormSubmission;
use crate::dto::upstream::{UpstreamBody, UpstreamPayload};
use crate::models::config::GhlConfig;

#[derive(Debug, Error)]
/// Failures while talking to the upstream API.
pub enum UpstreamError {
    #[error("failed to encode upstream payload: {0}")]
    Encode(#[from] serde_html_form::ser::Error),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Status and body returned by the upstream API.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: UpstreamBody,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Thin wrapper around a shared HTTP client bound to one upstream form.
///
/// No timeout or retry is configured: a hanging upstream hangs the request.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    http: reqwest::Client,
    config: GhlConfig,
}

impl UpstreamClient {
    pub fn new(config: GhlConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    /// Posts the lead to the configured form and returns the raw outcome.
    ///
    /// Non-2xx statuses are not errors here; only transport failures are.
    pub async fn submit(
        &self,
        submission: &FormSubmission,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let body = UpstreamPayload::new(&self.config.form_id, &self.config.location_id, submission)
            .to_form_body()?;

        let response = self
            .http
            .post(&self.config.submit_url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        Ok(UpstreamResponse {
            status,
            body: UpstreamBody::parse(&bytes),
        })
    }
}
