//! Route handlers.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use survey_core::submission::submit;
use survey_core::SubmitError;

use crate::response::{ApiError, Health, SubmitAccepted};
use crate::AppState;

/// `POST /submit-survey`
///
/// The body is taken as raw bytes so that a missing content type or bad JSON
/// surfaces as a [`SubmitError`] (and so as the generic 500), never as one of
/// axum's own 4xx rejections. A non-JSON content type is only logged.
pub async fn submit_survey(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SubmitAccepted>, ApiError> {
    if !is_json(&headers) {
        tracing::debug!(
            content_type = ?headers.get(header::CONTENT_TYPE),
            "submission without a JSON content type; parsing as JSON anyway"
        );
    }
    let body = body.map_err(|rejection| SubmitError::Body(rejection.body_text()))?;
    let submitted = submit(state.store.as_ref(), &body).await?;

    tracing::info!(
        inserted_id = %submitted.inserted_id,
        user_id = %submitted.document.user_id,
        "survey stored"
    );
    Ok(Json(SubmitAccepted::new()))
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    mime == "application/json" || mime.ends_with("+json")
}

/// `GET /healthz`
pub async fn healthz(State(state): State<AppState>) -> (StatusCode, Json<Health>) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(Health { status: "ok" })),
        Err(err) => {
            tracing::warn!(error = %err, "health check: store ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Health {
                    status: "unavailable",
                }),
            )
        }
    }
}
