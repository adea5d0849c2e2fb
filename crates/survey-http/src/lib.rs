//! survey-http — axum surface for survey-intake.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `POST /submit-survey` | [`handlers::submit_survey`] |
//! | `GET /healthz` | [`handlers::healthz`] |
//!
//! Cross-origin requests are allowed from any origin.

pub mod handlers;
pub mod response;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use survey_core::SurveyStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use response::{ApiError, FAILURE_MESSAGE, SUCCESS_MESSAGE};

pub const SUBMIT_PATH: &str = "/submit-survey";
pub const HEALTH_PATH: &str = "/healthz";

/// State shared by every handler. The store handle is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SurveyStore>,
}

/// Build the service router around a store.
pub fn router(store: Arc<dyn SurveyStore>) -> Router {
    Router::new()
        .route(SUBMIT_PATH, post(handlers::submit_survey))
        .route(HEALTH_PATH, get(handlers::healthz))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { store })
}
