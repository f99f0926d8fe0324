use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use thiserror::Error;

pub mod score;
pub mod score_batch;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/priority/score", post(score::score_issue))
        .route("/priority/score-batch", post(score_batch::score_issue_batch))
}

/// Boundary errors. Everything else (bad coordinates, unknown types) is
/// repaired inside the engine and never surfaces here.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    BadRequest(String),
    #[allow(dead_code)]
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match self {
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(json!({ "success": false, "message": self.to_string() })),
        )
            .into_response()
    }
}
