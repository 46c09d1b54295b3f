//! Relays validated leads to the upstream CRM.

use crate::domain::submission::{FormSubmission, SubmissionStatus};
use crate::dto::api::SubmitSuccessResponse;
use crate::dto::upstream::failure_message;
use crate::forms::submission::SubmitLeadForm;
use crate::services::upstream::UpstreamClient;
use crate::services::{ServiceError, ServiceResult};

/// Validates the form, forwards it upstream and shapes the reply.
///
/// The upstream is contacted only after validation succeeds, and at most once.
pub async fn relay_submission(
    client: &UpstreamClient,
    form: SubmitLeadForm,
) -> ServiceResult<SubmitSuccessResponse> {
    let submission = FormSubmission::try_from(form)?;

    let response = client.submit(&submission).await?;
    let success = response.is_success();
    let status = response.status;
    let body = response.body.into_value();

    if !success {
        log::error!("GHL API error ({status}): {body}");
        return Err(ServiceError::Upstream {
            status,
            message: failure_message(&body),
        });
    }

    log::info!("Relayed lead to GHL ({status})");
    Ok(SubmitSuccessResponse::new(body))
}

/// Projects a relay result onto the status a client would record.
pub fn submission_status<T>(result: &ServiceResult<T>) -> SubmissionStatus {
    match result {
        Ok(_) => SubmissionStatus::Success,
        Err(_) => SubmissionStatus::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_project_onto_terminal_statuses() {
        let ok: ServiceResult<()> = Ok(());
        let err: ServiceResult<()> = Err(ServiceError::MissingFields);

        assert_eq!(submission_status(&ok), SubmissionStatus::Success);
        assert_eq!(submission_status(&err), SubmissionStatus::Error);
    }
}
