//! Tool executor: dispatches host tool calls to registered handlers

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::Instrument;

use super::ToolDefinition;
use crate::{Error, Result};

/// Per-call context supplied by the host runtime
///
/// Only used for log fields; handlers must not depend on it.
#[derive(Debug, Clone, Default)]
pub struct ToolContext {
    /// Conversation session identifier
    pub session_id: Option<String>,

    /// Room or call the session belongs to
    pub room: Option<String>,
}

impl ToolContext {
    /// Context for a named session
    pub fn session(session_id: impl Into<String>) -> Self {
        Self {
            session_id: Some(session_id.into()),
            room: None,
        }
    }

    /// Attach a room name
    #[must_use]
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }
}

/// A callable the host runtime can invoke by name
///
/// Arguments arrive as a JSON object string; the returned text is what the
/// agent speaks back. Errors are reserved for broken calls (undecodable
/// arguments), not for domain failures.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Definition published to the host
    fn definition(&self) -> ToolDefinition;

    /// Run the tool
    async fn execute(&self, arguments: &str, ctx: &ToolContext) -> Result<String>;
}

/// Registry of tool handlers keyed by name
#[derive(Default, Clone)]
pub struct ToolExecutor {
    handlers: BTreeMap<String, Arc<dyn ToolHandler>>,
}

impl ToolExecutor {
    /// Create an empty executor
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its definition name, replacing any previous one
    #[must_use]
    pub fn with_handler(mut self, handler: Arc<dyn ToolHandler>) -> Self {
        self.register(handler);
        self
    }

    /// Register a handler under its definition name, replacing any previous one
    pub fn register(&mut self, handler: Arc<dyn ToolHandler>) {
        let name = handler.definition().function.name;
        tracing::debug!(tool = %name, "registered tool");
        self.handlers.insert(name, handler);
    }

    /// Check if a tool is registered
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Definitions for all registered tools, sorted by name
    #[must_use]
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        self.handlers.values().map(|h| h.definition()).collect()
    }

    /// Execute a tool call
    ///
    /// # Errors
    ///
    /// Returns `Error::Tool` if the tool is unknown or rejects its arguments
    pub async fn execute(&self, name: &str, arguments: &str, ctx: &ToolContext) -> Result<String> {
        let handler = self
            .handlers
            .get(name)
            .ok_or_else(|| Error::Tool(format!("unknown tool: {name}")))?;

        let span = tracing::info_span!(
            "tool_call",
            tool = %name,
            session = ctx.session_id.as_deref().unwrap_or("-"),
            room = ctx.room.as_deref().unwrap_or("-"),
        );

        handler.execute(arguments, ctx).instrument(span).await
    }
}
