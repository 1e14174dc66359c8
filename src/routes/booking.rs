use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::booking::{parse_form_date, BookingDraft, BookingSnapshot, SubmissionInput};
use crate::routes::ErrorResponse;
use crate::services::confirmation_service::SubmissionError;
use crate::services::summary_service;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DateBoundsQuery {
    #[serde(rename = "checkIn")]
    pub check_in: Option<String>,
}

pub async fn summarize(
    state: web::Data<AppState>,
    input: web::Json<BookingDraft>,
) -> impl Responder {
    HttpResponse::Ok().json(state.calculator.summarize_draft(&input))
}

pub async fn validate(
    state: web::Data<AppState>,
    input: web::Json<BookingDraft>,
) -> impl Responder {
    HttpResponse::Ok().json(state.validator.validate(&input))
}

pub async fn date_bounds(query: web::Query<DateBoundsQuery>) -> impl Responder {
    let check_in = query.check_in.as_deref().and_then(parse_form_date);
    HttpResponse::Ok().json(summary_service::date_bounds(
        Utc::now().date_naive(),
        check_in,
    ))
}

// POST /api/booking/submissions
pub async fn submit(
    state: web::Data<AppState>,
    input: web::Json<SubmissionInput>,
) -> impl Responder {
    let SubmissionInput { session_id, draft } = input.into_inner();

    if session_id.trim().is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "missing_session",
            "A session ID is required",
        ));
    }

    let result = state.validator.validate(&draft);
    if !result.valid {
        log::debug!(
            "Rejected booking for session {}: {} field error(s)",
            session_id,
            result.field_errors.len()
        );
        return HttpResponse::UnprocessableEntity().json(result);
    }

    // Freeze the draft now; later edits to the form must not leak into the confirmation
    let summary = state.calculator.summarize_draft(&draft);
    let snapshot = BookingSnapshot { draft, summary };

    match state.confirmations.submit(&session_id, snapshot) {
        Ok(submission) => HttpResponse::Accepted().json(submission),
        Err(err @ SubmissionError::AlreadyProcessing(_)) => {
            HttpResponse::Conflict().json(ErrorResponse::new(err.code(), err.to_string()))
        }
        Err(err) => {
            log::error!("Unexpected submission failure: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse::new(err.code(), err.to_string()))
        }
    }
}

pub async fn get_submission(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return invalid_id(),
    };

    match state.confirmations.status(id) {
        Some(submission) => HttpResponse::Ok().json(submission),
        None => {
            let err = SubmissionError::NotFound(id);
            HttpResponse::NotFound().json(ErrorResponse::new(err.code(), err.to_string()))
        }
    }
}

pub async fn cancel_submission(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return invalid_id(),
    };

    match state.confirmations.cancel(id) {
        Ok(submission) => HttpResponse::Ok().json(submission),
        Err(err @ SubmissionError::NotFound(_)) => {
            HttpResponse::NotFound().json(ErrorResponse::new(err.code(), err.to_string()))
        }
        Err(err) => HttpResponse::Conflict().json(ErrorResponse::new(err.code(), err.to_string())),
    }
}

fn invalid_id() -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(
        "invalid_id",
        "Invalid submission ID format",
    ))
}
