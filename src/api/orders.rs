//! Current order endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::{ApiError, ApiState};
use crate::order::Order;

/// Most recently saved order
async fn current_order(State(state): State<Arc<ApiState>>) -> Result<Json<Order>, ApiError> {
    state
        .agent
        .store()
        .load()
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("no order has been saved".to_string()))
}

/// Build orders router
#[must_use]
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/orders/current", get(current_order))
        .with_state(state)
}
