//! `POST /api/submissions`: server-side re-validation of form submissions.
//!
//! The browser already validated; the same `site` rules run again here so a
//! hand-crafted request cannot bypass them.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use site::form::{self, FieldError, Submission};

#[derive(Debug, Serialize)]
pub struct Rejection {
    pub errors: Vec<FieldError>,
}

pub async fn create(Json(submission): Json<Submission>) -> Response {
    match form::validate(submission.kind, &submission.fields) {
        Ok(accepted) => {
            tracing::info!(form = %accepted.kind, fields = accepted.fields.len(), "submission accepted");
            StatusCode::ACCEPTED.into_response()
        }
        Err(errors) => {
            tracing::info!(form = %submission.kind, errors = errors.len(), "submission rejected");
            (StatusCode::UNPROCESSABLE_ENTITY, Json(Rejection { errors })).into_response()
        }
    }
}
