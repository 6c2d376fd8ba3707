//! Menu, prompt and manifest endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::ApiState;
use crate::agent::AgentManifest;
use crate::menu::{MENU, Menu};

/// Menu announcement plus the full table, categories in table order
#[derive(Serialize)]
pub struct MenuResponse {
    pub text: String,
    pub categories: &'static Menu,
}

/// Plain text payload
#[derive(Serialize)]
pub struct TextResponse {
    pub text: String,
}

async fn get_menu() -> Json<MenuResponse> {
    Json(MenuResponse {
        text: MENU.format_menu_text(),
        categories: &MENU,
    })
}

async fn get_instructions(State(state): State<Arc<ApiState>>) -> Json<TextResponse> {
    Json(TextResponse {
        text: state.agent.system_prompt(),
    })
}

async fn get_manifest(State(state): State<Arc<ApiState>>) -> Json<AgentManifest> {
    Json(state.agent.manifest())
}

/// Build menu router
#[must_use]
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/menu", get(get_menu))
        .route("/instructions", get(get_instructions))
        .route("/manifest", get(get_manifest))
        .with_state(state)
}
