use axum::http;
use dotenv::dotenv;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

use priority_api::{app, default_state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load Config
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5001);
    let cors_origin =
        std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

    // Setup CORS for the web client
    let cors = tower_http::cors::CorsLayer::new()
        .allow_origin(cors_origin.parse::<http::HeaderValue>()?)
        .allow_methods([http::Method::GET, http::Method::POST])
        .allow_headers([
            http::header::CONTENT_TYPE,
            http::header::AUTHORIZATION,
            http::header::ACCEPT,
        ]);

    let state = default_state();
    let router = app(state).layer(TraceLayer::new_for_http()).layer(cors);

    // Start Server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Priority API listening on {}", addr);
    tracing::info!("CORS enabled for {}", cors_origin);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
