//! JSON bodies returned by the relay endpoint.

use serde::Serialize;
use serde_json::Value;

/// Message returned after the upstream accepted the lead.
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully.";

/// Message returned when processing failed unexpectedly.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

/// Body of a successful relay.
#[derive(Debug, Serialize, PartialEq)]
pub struct SubmitSuccessResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(rename = "ghlResponse")]
    pub ghl_response: Value,
}

impl SubmitSuccessResponse {
    pub fn new(ghl_response: Value) -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE,
            ghl_response,
        }
    }
}

/// Body carrying only a message.
///
/// Upstream rejections may carry a non-string message, which is kept as-is.
#[derive(Debug, Serialize, PartialEq)]
pub struct MessageResponse {
    pub message: Value,
}

/// Body of an unexpected processing fault.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct InternalErrorResponse {
    pub message: &'static str,
    pub error: String,
}

impl InternalErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            message: INTERNAL_ERROR_MESSAGE,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_body_uses_camel_case_result_field() {
        let body = serde_json::to_value(SubmitSuccessResponse::new(json!({"id": "123"}))).unwrap();
        assert_eq!(
            body,
            json!({
                "success": true,
                "message": "Form submitted successfully.",
                "ghlResponse": {"id": "123"},
            })
        );
    }

    #[test]
    fn internal_error_body_carries_description() {
        let body = serde_json::to_value(InternalErrorResponse::new("boom")).unwrap();
        assert_eq!(
            body,
            json!({"message": "An internal server error occurred.", "error": "boom"})
        );
    }
}
