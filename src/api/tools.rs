//! Tool listing and invocation endpoints
//!
//! The request body of `POST /tools/{name}` is the JSON arguments object,
//! exactly as the host runtime received it from the model.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::{ApiError, ApiState, ROOM_HEADER, SESSION_HEADER};
use crate::tools::{ToolContext, ToolDefinition};

/// Registered tools
#[derive(Serialize)]
pub struct ToolListResponse {
    pub tools: Vec<ToolDefinition>,
}

/// Text the agent should speak after a tool call
#[derive(Serialize)]
pub struct ToolCallResponse {
    pub output: String,
}

async fn list_tools(State(state): State<Arc<ApiState>>) -> Json<ToolListResponse> {
    Json(ToolListResponse {
        tools: state.agent.executor().list_tools(),
    })
}

async fn call_tool(
    State(state): State<Arc<ApiState>>,
    Path(name): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<ToolCallResponse>, ApiError> {
    let executor = state.agent.executor();
    if !executor.has(&name) {
        tracing::warn!(tool = %name, "unknown tool requested");
        return Err(ApiError::NotFound(format!("unknown tool: {name}")));
    }

    let ctx = tool_context(&headers);
    let arguments = if body.trim().is_empty() { "{}" } else { body.as_str() };
    let output = executor.execute(&name, arguments, &ctx).await?;

    Ok(Json(ToolCallResponse { output }))
}

fn tool_context(headers: &HeaderMap) -> ToolContext {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };

    ToolContext {
        session_id: header(SESSION_HEADER),
        room: header(ROOM_HEADER),
    }
}

/// Build tools router
#[must_use]
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/tools", get(list_tools))
        .route("/tools/{name}", post(call_tool))
        .with_state(state)
}
