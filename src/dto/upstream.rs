//! Wire shapes exchanged with the upstream CRM form API.

use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::submission::FormSubmission;

/// Message used when a failed upstream response carries nothing usable.
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "Submission to GHL failed.";

/// Form-encoded body expected by the upstream `forms/submit` endpoint.
///
/// Field order is part of the wire format: identifiers first, then the lead.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UpstreamPayload<'a> {
    #[serde(rename = "formId")]
    pub form_id: &'a str,
    pub location_id: &'a str,
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
}

impl<'a> UpstreamPayload<'a> {
    pub fn new(form_id: &'a str, location_id: &'a str, submission: &'a FormSubmission) -> Self {
        Self {
            form_id,
            location_id,
            full_name: submission.full_name.as_str(),
            email: submission.email.as_str(),
            phone: submission.phone.as_str(),
        }
    }

    /// Encodes the payload as `application/x-www-form-urlencoded`.
    pub fn to_form_body(&self) -> Result<String, serde_html_form::ser::Error> {
        serde_html_form::to_string(self)
    }
}

/// Upstream response body before it is normalized.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamBody {
    /// Body parsed as JSON.
    Structured(Value),
    /// Body that was not valid JSON, kept as text.
    RawText(String),
}

impl UpstreamBody {
    pub fn parse(bytes: &[u8]) -> Self {
        match serde_json::from_slice(bytes) {
            Ok(value) => UpstreamBody::Structured(value),
            Err(_) => UpstreamBody::RawText(String::from_utf8_lossy(bytes).into_owned()),
        }
    }

    /// Resolves the body into one uniform JSON shape.
    ///
    /// Raw text is wrapped as `{"message": <text>}`.
    pub fn into_value(self) -> Value {
        match self {
            UpstreamBody::Structured(value) => value,
            UpstreamBody::RawText(text) => json!({ "message": text }),
        }
    }
}

/// Derives the message reported to the caller when the upstream rejects a lead.
///
/// Prefers a truthy `message` field (passed through as-is), then a bare JSON
/// string body, then the fallback message.
pub fn failure_message(body: &Value) -> Value {
    if let Some(message) = body.get("message").filter(|message| is_truthy(message)) {
        return message.clone();
    }

    match body {
        Value::String(_) => body.clone(),
        _ => Value::from(UPSTREAM_FALLBACK_MESSAGE),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
