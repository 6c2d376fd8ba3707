//! Java Gen barista - tool backend for a voice ordering agent
//!
//! This library provides what a voice agent runtime needs to take coffee
//! orders at the Java Gen shop:
//! - The static menu and its spoken announcement
//! - The barista persona and the instructions built from it
//! - The `submit_order` tool, which persists the order and returns the
//!   text to speak back
//! - An HTTP surface exposing the tools to the host runtime
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │          Host voice runtime (STT / LLM / TTS)        │
//! └────────────────────┬────────────────────────────────┘
//!                      │ tool calls
//! ┌────────────────────▼────────────────────────────────┐
//! │                  Barista agent                       │
//! │   Persona  │  Menu  │  ToolExecutor  │  Validator   │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │                  Order store                         │
//! │   order.json  │  SQLite  │  memory                  │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod agent;
pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod menu;
pub mod order;
pub mod persona;
pub mod prompt;
pub mod store;
pub mod tools;

pub use agent::{AgentManifest, BaristaAgent};
pub use config::Config;
pub use db::{DbConn, DbPool};
pub use error::{Error, Result};
pub use menu::{Category, MENU, Menu, format_menu_text};
pub use order::{Order, OrderValidator, ValidationMode};
pub use persona::Persona;
pub use store::{
    JsonFileStore, MemoryOrderStore, OrderStore, SharedOrderStore, SqliteOrderStore, StoreBackend,
};
pub use tools::{
    ORDER_SAVE_FAILED_MESSAGE, SubmitOrderTool, ToolContext, ToolDefinition, ToolExecutor,
    ToolHandler,
};
