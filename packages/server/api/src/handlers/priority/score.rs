use axum::extract::{rejection::JsonRejection, State};
use axum::Json;
use shared::dto::{IssueInput, ScoreResponse};

use super::ServiceError;
use crate::state::AppState;

/// POST /priority/score
///
/// Scores one issue. `type` is required; coordinates are optional and
/// repaired to the region centroid. Never fails for odd field values,
/// only for an unusable body.
pub async fn score_issue(
    State(state): State<AppState>,
    payload: Result<Json<IssueInput>, JsonRejection>,
) -> Result<Json<ScoreResponse>, ServiceError> {
    let Json(issue) = payload
        .map_err(|e| ServiceError::BadRequest(format!("Invalid request body: {}", e.body_text())))?;

    if issue.issue_type.as_deref().map_or(true, str::is_empty) {
        return Err(ServiceError::BadRequest(
            "Issue type is required".to_string(),
        ));
    }

    let scored = state.engine.score_one(&issue);

    Ok(Json(ScoreResponse {
        success: true,
        priority_score: format!("{:.3}", scored.score),
        priority: scored.priority,
    }))
}
