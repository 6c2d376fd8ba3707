//! HTTP API server for the barista agent
//!
//! Exposes the tool surface to a host voice runtime: tool definitions,
//! tool invocation, the menu and prompt, and the last saved order.

pub mod error;
pub mod health;
pub mod menu;
pub mod orders;
pub mod tools;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

use crate::agent::BaristaAgent;
use crate::Result;

/// Header carrying the host's conversation session id
pub const SESSION_HEADER: &str = "x-session-id";

/// Header carrying the host's room name
pub const ROOM_HEADER: &str = "x-room";

/// Shared state for API handlers
pub struct ApiState {
    pub agent: BaristaAgent,
}

/// API server
pub struct ApiServer {
    state: Arc<ApiState>,
    port: u16,
}

impl ApiServer {
    /// Create a server for an assembled agent
    #[must_use]
    pub fn new(agent: BaristaAgent, port: u16) -> Self {
        Self {
            state: Arc::new(ApiState { agent }),
            port,
        }
    }

    /// Build the router
    #[must_use]
    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    /// Run the API server
    ///
    /// # Errors
    ///
    /// Returns error if server fails to bind or run
    pub async fn run(self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| crate::Error::Config(format!("failed to bind API server: {e}")))?;

        tracing::info!(
            port = self.port,
            store = %self.state.agent.store().describe(),
            "API server listening"
        );

        axum::serve(listener, self.router())
            .await
            .map_err(|e| crate::Error::Config(format!("API server error: {e}")))?;

        Ok(())
    }
}

/// Build the full API router over shared state
#[must_use]
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .merge(health::router())
        .merge(menu::router(state.clone()))
        .merge(tools::router(state.clone()))
        .merge(orders::router(state))
        .layer(TraceLayer::new_for_http())
}
