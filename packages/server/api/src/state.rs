use std::sync::Arc;

use crate::services::scoring::engine::PriorityEngine;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<PriorityEngine>,
}
