//! Form definitions backing the relay endpoint.

use thiserror::Error;

pub mod submission;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("Missing required fields: fullName, email, phone.")]
    MissingFields,

    #[error("request body is null")]
    NullBody,

    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid form body: {0}")]
    InvalidUrlEncoded(#[from] serde::de::value::Error),
}
