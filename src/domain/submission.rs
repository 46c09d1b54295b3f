use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::types::{LeadEmail, LeadName, LeadPhone};

/// Validated lead captured by the public form.
///
/// Lives only for the duration of one relay request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSubmission {
    pub full_name: LeadName,
    pub email: LeadEmail,
    pub phone: LeadPhone,
}

impl FormSubmission {
    pub fn new(full_name: LeadName, email: LeadEmail, phone: LeadPhone) -> Self {
        Self {
            full_name,
            email,
            phone,
        }
    }
}

/// Progress of a submission as tracked by the browser client.
///
/// The relay never enforces transitions between these states.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl From<SubmissionStatus> for &'static str {
    fn from(value: SubmissionStatus) -> Self {
        match value {
            SubmissionStatus::Idle => "IDLE",
            SubmissionStatus::Submitting => "SUBMITTING",
            SubmissionStatus::Success => "SUCCESS",
            SubmissionStatus::Error => "ERROR",
        }
    }
}

impl Display for SubmissionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value: &'static str = (*self).into();
        write!(f, "{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_in_upper_case() {
        assert_eq!(
            serde_json::to_string(&SubmissionStatus::Submitting).unwrap(),
            "\"SUBMITTING\""
        );
        let parsed: SubmissionStatus = serde_json::from_str("\"ERROR\"").unwrap();
        assert_eq!(parsed, SubmissionStatus::Error);
        assert_eq!(SubmissionStatus::default().to_string(), "IDLE");
    }
}
