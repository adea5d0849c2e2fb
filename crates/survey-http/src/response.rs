//! Wire responses.
//!
//! [`ApiError`] is the only place a [`SubmitError`] becomes an HTTP response.
//! The cause is logged; the caller always gets the same 500 body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use survey_core::SubmitError;

pub const SUCCESS_MESSAGE: &str = "Survey submitted successfully";
pub const FAILURE_MESSAGE: &str = "Failed to save survey data";

/// `200` body for an accepted submission.
#[derive(Debug, Serialize)]
pub struct SubmitAccepted {
    pub message: &'static str,
}

impl SubmitAccepted {
    pub fn new() -> Self {
        Self {
            message: SUCCESS_MESSAGE,
        }
    }
}

impl Default for SubmitAccepted {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct SubmitFailed {
    error: &'static str,
}

/// `/healthz` body.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

/// A submit failure on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub SubmitError);

impl From<SubmitError> for ApiError {
    fn from(err: SubmitError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "error saving survey");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SubmitFailed {
                error: FAILURE_MESSAGE,
            }),
        )
            .into_response()
    }
}
