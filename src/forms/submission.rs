//! Inbound lead form as posted by the browser.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::submission::FormSubmission;
use crate::domain::types::{LeadEmail, LeadName, LeadPhone};
use crate::forms::FormError;

/// Raw lead form. Every field is optional until validated.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitLeadForm {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl SubmitLeadForm {
    /// Parses a JSON request body.
    ///
    /// Only object keys count as fields. Any other non-null value carries no
    /// fields at all, while `null` is a processing fault.
    pub fn from_json(body: &[u8]) -> Result<Self, FormError> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Null => Err(FormError::NullBody),
            object @ Value::Object(_) => Ok(serde_json::from_value(object)?),
            _ => Ok(Self::default()),
        }
    }

    /// Parses an `application/x-www-form-urlencoded` request body.
    pub fn from_urlencoded(body: &[u8]) -> Result<Self, FormError> {
        Ok(serde_html_form::from_bytes(body)?)
    }
}

impl TryFrom<SubmitLeadForm> for FormSubmission {
    type Error = FormError;

    fn try_from(form: SubmitLeadForm) -> Result<Self, Self::Error> {
        let full_name = form.full_name.and_then(|value| LeadName::new(value).ok());
        let email = form.email.and_then(|value| LeadEmail::new(value).ok());
        let phone = form.phone.and_then(|value| LeadPhone::new(value).ok());

        match (full_name, email, phone) {
            (Some(full_name), Some(email), Some(phone)) => {
                Ok(FormSubmission::new(full_name, email, phone))
            }
            _ => Err(FormError::MissingFields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_json() {
        let form = SubmitLeadForm::from_json(
            br#"{"fullName":"Ana Silva","email":"ana@example.com","phone":"+5511999999999"}"#,
        )
        .unwrap();

        let submission = FormSubmission::try_from(form).unwrap();
        assert_eq!(submission.full_name.as_str(), "Ana Silva");
        assert_eq!(submission.email.as_str(), "ana@example.com");
        assert_eq!(submission.phone.as_str(), "+5511999999999");
    }

    #[test]
    fn parses_urlencoded_body() {
        let form = SubmitLeadForm::from_urlencoded(
            b"fullName=Ana+Silva&email=ana%40example.com&phone=%2B5511999999999",
        )
        .unwrap();

        let submission = FormSubmission::try_from(form).unwrap();
        assert_eq!(submission.full_name.as_str(), "Ana Silva");
        assert_eq!(submission.phone.as_str(), "+5511999999999");
    }

    #[test]
    fn missing_or_empty_fields_are_rejected() {
        let bodies: [&[u8]; 5] = [
            br#"{}"#,
            br#"{"email":"a@b.c","phone":"1"}"#,
            br#"{"fullName":"","email":"a@b.c","phone":"1"}"#,
            br#"{"fullName":"Ana","email":null,"phone":"1"}"#,
            br#"{"fullName":"Ana","email":"a@b.c","phone":""}"#,
        ];

        for body in bodies {
            let form = SubmitLeadForm::from_json(body).unwrap();
            let err = FormSubmission::try_from(form).unwrap_err();
            assert!(matches!(err, FormError::MissingFields));
            assert_eq!(
                err.to_string(),
                "Missing required fields: fullName, email, phone."
            );
        }
    }

    #[test]
    fn non_object_json_carries_no_fields() {
        let bodies: [&[u8]; 5] = [
            br#"["Ana Silva","ana@example.com","+5511999999999"]"#,
            br#"[]"#,
            br#""Ana Silva""#,
            br#"42"#,
            br#"true"#,
        ];

        for body in bodies {
            let form = SubmitLeadForm::from_json(body).unwrap();
            let err = FormSubmission::try_from(form).unwrap_err();
            assert!(matches!(err, FormError::MissingFields));
        }
    }

    #[test]
    fn null_body_is_a_processing_fault() {
        let err = SubmitLeadForm::from_json(b"null").unwrap_err();
        assert!(matches!(err, FormError::NullBody));
    }

    #[test]
    fn unparseable_json_is_not_a_missing_field_error() {
        let err = SubmitLeadForm::from_json(b"{not json").unwrap_err();
        assert!(matches!(err, FormError::InvalidJson(_)));

        let err = SubmitLeadForm::from_json(br#"{"fullName":42}"#).unwrap_err();
        assert!(matches!(err, FormError::InvalidJson(_)));
    }
}
