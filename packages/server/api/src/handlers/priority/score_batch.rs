use axum::extract::{rejection::JsonRejection, State};
use axum::Json;
use shared::dto::{BatchScoreRequest, BatchScoreResponse, BatchScoreResult};

use super::ServiceError;
use crate::state::AppState;

/// POST /priority/score-batch
///
/// Scores `issues` sequentially so earlier elements feed the density
/// signal of later ones, and returns one result per input in input order.
/// A non-array `issues` field fails deserialization and gets a 400 before
/// the engine is touched.
pub async fn score_issue_batch(
    State(state): State<AppState>,
    payload: Result<Json<BatchScoreRequest>, JsonRejection>,
) -> Result<Json<BatchScoreResponse>, ServiceError> {
    let Json(request) = payload
        .map_err(|e| ServiceError::BadRequest(format!("Issues array is required: {}", e.body_text())))?;

    let scored = state.engine.score_many(&request.issues);
    tracing::info!(count = scored.len(), "batch priorities calculated");

    let results = scored
        .into_iter()
        .map(|s| BatchScoreResult {
            id: s.id,
            priority_score: format!("{:.3}", s.score),
            priority: s.priority,
        })
        .collect();

    Ok(Json(BatchScoreResponse {
        success: true,
        results,
    }))
}
