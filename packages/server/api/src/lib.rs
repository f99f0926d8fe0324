use std::sync::Arc;

use axum::Router;

pub mod handlers;
pub mod router;
pub mod services;
pub mod state;

use services::scoring::engine::PriorityEngine;
use services::scoring::features::RandomProbe;
use services::scoring::model::LookupModel;
use state::AppState;

/// Default state for production: reference lookup model, placeholder
/// image-quality probe, wall-clock hour.
pub fn default_state() -> AppState {
    AppState {
        engine: Arc::new(PriorityEngine::new(
            Box::new(LookupModel),
            Box::new(RandomProbe),
        )),
    }
}

/// Assemble the application router over the given state.
pub fn app(state: AppState) -> Router {
    router::routes().with_state(state)
}
