use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use priority_api::services::scoring::engine::{HourSource, PriorityEngine};
use priority_api::services::scoring::features::FixedProbe;
use priority_api::services::scoring::model::LookupModel;
use priority_api::state::AppState;

/// Deterministic app: fixed probe, fixed quiet hour (no boosts).
fn test_state() -> AppState {
    AppState {
        engine: Arc::new(PriorityEngine::with_hour_source(
            Box::new(LookupModel),
            Box::new(FixedProbe(0.4)),
            HourSource::Fixed(12),
        )),
    }
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn single_score_happy_path() {
    let app = priority_api::app(test_state());

    let response = app
        .oneshot(post_json(
            "/priority/score",
            json!({"id": 1, "type": "Pothole", "latitude": 11.9416, "longitude": 79.8083}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    // Quiet hour: base 0.7, no boosts, and 0.7 exactly is Medium.
    assert_eq!(body["priorityScore"], json!("0.700"));
    assert_eq!(body["priority"], json!("Medium"));
}

#[tokio::test]
async fn single_score_rejects_missing_type() {
    let app = priority_api::app(test_state());

    let response = app
        .oneshot(post_json(
            "/priority/score",
            json!({"id": 7, "latitude": 11.9, "longitude": 79.8}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Issue type is required"));
}

#[tokio::test]
async fn single_score_tolerates_missing_coordinates() {
    let app = priority_api::app(test_state());

    let response = app
        .oneshot(post_json("/priority/score", json!({"type": "Garbage"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["priorityScore"], json!("0.400"));
    assert_eq!(body["priority"], json!("Low"));
}

#[tokio::test]
async fn unknown_type_is_scored_not_rejected() {
    let app = priority_api::app(test_state());

    let response = app
        .oneshot(post_json(
            "/priority/score",
            json!({"type": "FallenTree", "latitude": 11.9, "longitude": 79.8}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["priorityScore"], json!("0.500"));
    assert_eq!(body["priority"], json!("Medium"));
}

#[tokio::test]
async fn batch_returns_results_in_input_order() {
    let app = priority_api::app(test_state());

    let response = app
        .oneshot(post_json(
            "/priority/score-batch",
            json!({"issues": [
                {"id": "a", "type": "Pothole", "latitude": 11.9416, "longitude": 79.8083},
                {"id": "b", "type": "Garbage", "latitude": 11.9416, "longitude": 79.8083},
                {"id": "c", "type": "Streetlight", "latitude": 11.9416, "longitude": 79.8083}
            ]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["id"], json!("a"));
    assert_eq!(results[1]["id"], json!("b"));
    assert_eq!(results[2]["id"], json!("c"));
    assert_eq!(results[0]["priority"], json!("Medium"));
    assert_eq!(results[1]["priority"], json!("Low"));
    assert_eq!(results[2]["priority"], json!("Low"));
}

#[tokio::test]
async fn empty_batch_returns_empty_results() {
    let app = priority_api::app(test_state());

    let response = app
        .oneshot(post_json("/priority/score-batch", json!({"issues": []})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["results"], json!([]));
}

#[tokio::test]
async fn batch_rejects_non_array_issues_before_scoring() {
    let state = test_state();
    let engine = state.engine.clone();
    let app = priority_api::app(state);

    let response = app
        .oneshot(post_json(
            "/priority/score-batch",
            json!({"issues": "not-an-array"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    // Nothing was scored: the roster never saw an append.
    assert!(engine.roster().is_empty());
}

#[tokio::test]
async fn status_route_names_the_endpoints() {
    let app = priority_api::app(test_state());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], json!("running"));
    assert_eq!(body["modelStatus"], json!("ready"));
}
