use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(status))
        .merge(handlers::priority::router())
}

/// Health/status document, kept stable for uptime probes and for the web
/// client's startup check.
async fn status() -> Json<serde_json::Value> {
    Json(json!({
        "status": "running",
        "service": "Civic Issue Priority Scoring Service",
        "endpoints": [
            "POST /priority/score - Calculate priority for single issue",
            "POST /priority/score-batch - Calculate priorities for multiple issues"
        ],
        "modelStatus": "ready"
    }))
}
