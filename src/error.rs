//! Error types for the barista agent

use thiserror::Error;

/// Result type alias for barista operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the barista agent
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Persona file could not be loaded
    #[error("persona error: {0}")]
    Persona(String),

    /// Order store error
    #[error("order store error: {0}")]
    Store(String),

    /// Tool dispatch error (unknown tool, undecodable arguments)
    #[error("tool error: {0}")]
    Tool(String),

    /// Order rejected by the validation stage
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Database error
    #[error("database error: {0}")]
    Database(String),

    /// `SQLite` error
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
