//! Services coordinating the relay workflow.

use serde_json::Value;
use thiserror::Error;

use crate::forms::FormError;
use crate::services::upstream::UpstreamError;

pub mod submission;
pub mod upstream;

#[derive(Debug, Error)]
/// Terminal outcomes of a relay request other than success.
pub enum ServiceError {
    /// Required lead fields were absent; the upstream was not contacted.
    #[error("Missing required fields: fullName, email, phone.")]
    MissingFields,

    /// Upstream answered with a non-2xx status.
    #[error("upstream rejected submission ({status}): {message}")]
    Upstream { status: u16, message: Value },

    /// Anything else that went wrong while processing the request.
    #[error("{0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::MissingFields => ServiceError::MissingFields,
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<UpstreamError> for ServiceError {
    fn from(err: UpstreamError) -> Self {
        ServiceError::Internal(err.to_string())
    }
}
