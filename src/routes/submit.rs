use actix_web::http::{StatusCode, header};
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};

use crate::dto::api::{InternalErrorResponse, MessageResponse};
use crate::forms::submission::SubmitLeadForm;
use crate::routes::ALLOWED_METHODS;
use crate::services::submission::{relay_submission, submission_status};
use crate::services::upstream::UpstreamClient;
use crate::services::{ServiceError, ServiceResult};

/// Answers the browser's CORS preflight. Headers come from the middleware.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, ALLOWED_METHODS))
        .body("Method Not Allowed")
}

pub async fn submit_lead(
    req: HttpRequest,
    body: web::Bytes,
    client: web::Data<UpstreamClient>,
) -> HttpResponse {
    let result = match parse_form(&req, &body) {
        Ok(form) => relay_submission(&client, form).await,
        Err(err) => Err(err),
    };

    log::debug!("Lead submission finished as {}", submission_status(&result));

    match result {
        Ok(success) => HttpResponse::Ok().json(success),
        Err(err) => error_response(err),
    }
}

fn parse_form(req: &HttpRequest, body: &[u8]) -> ServiceResult<SubmitLeadForm> {
    let form = if req
        .content_type()
        .eq_ignore_ascii_case("application/x-www-form-urlencoded")
    {
        SubmitLeadForm::from_urlencoded(body)?
    } else {
        SubmitLeadForm::from_json(body)?
    };
    Ok(form)
}

fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::MissingFields => HttpResponse::BadRequest().json(MessageResponse {
            message: ServiceError::MissingFields.to_string().into(),
        }),
        ServiceError::Upstream { status, message } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            HttpResponse::build(status).json(MessageResponse { message })
        }
        ServiceError::Internal(error) => {
            log::error!("Internal server error: {error}");
            HttpResponse::InternalServerError().json(InternalErrorResponse::new(error))
        }
    }
}
